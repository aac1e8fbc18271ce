//! Hex Program Loader.
//!
//! This module reads program files into simulated memory. A program is a text
//! file of 8-hex-digit instruction words, one per line; word *k* is placed
//! little-endian at address 4*k. Blank lines are ignored. The register file
//! and the rest of memory stay zeroed; the initial PC comes from the
//! configuration.

use std::fs;
use std::path::Path;

use crate::common::data::AccessWidth;
use crate::common::error::SimError;
use crate::memory::Memory;

/// Parses a program file into its instruction words.
///
/// # Arguments
///
/// * `path` - Path to the program file.
///
/// # Errors
///
/// [`SimError::ProgramRead`] if the file cannot be read, or
/// [`SimError::ProgramParse`] (with path and line number) for any line that
/// is not an 8-hex-digit word.
pub fn parse_hex_program(path: &Path) -> Result<Vec<u32>, SimError> {
    let text = fs::read_to_string(path).map_err(|source| SimError::ProgramRead {
        path: path.display().to_string(),
        source,
    })?;

    let mut words = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let word = (line.len() == 8)
            .then(|| u32::from_str_radix(line, 16).ok())
            .flatten()
            .ok_or_else(|| SimError::ProgramParse {
                path: path.display().to_string(),
                line: idx + 1,
                text: line.to_owned(),
            })?;
        words.push(word);
    }
    Ok(words)
}

/// Loads a program image into memory at address 0.
///
/// # Arguments
///
/// * `words` - Instruction words; word *k* lands at address 4*k.
/// * `memory` - Destination memory, assumed freshly zeroed.
///
/// # Errors
///
/// [`SimError::ProgramTooLarge`] if the image exceeds the memory size.
pub fn load_program(words: &[u32], memory: &mut Memory) -> Result<(), SimError> {
    let image_bytes = words.len() * AccessWidth::Word.bytes();
    if image_bytes > memory.len() {
        return Err(SimError::ProgramTooLarge {
            program: image_bytes,
            memory: memory.len(),
        });
    }

    for (k, word) in words.iter().enumerate() {
        memory.store((k * 4) as u32, AccessWidth::Word, *word)?;
    }

    tracing::debug!(words = words.len(), "program loaded");
    Ok(())
}
