//! Execution dispatcher tests.
