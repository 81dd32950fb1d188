//! Program image loading.
//!
//! Parses the textual machine-code format into instruction and data maps:
//! one entry per line, `0xADDR 0xVALUE[, assembly]`. A line carrying a comma
//! (an assembly comment follows the value) is a 32-bit instruction word; a
//! line without one is a single initialized data byte. The entry point is
//! the lowest instruction address. Malformed lines are skipped with a
//! diagnostic; only file-level problems are errors.

use std::collections::BTreeMap;
use std::fs;

use crate::common::error::LoaderError;

/// A parsed program image, ready to be loaded into a CPU.
#[derive(Debug, Clone, Default)]
pub struct Program {
    /// Word-aligned instruction words.
    pub text: BTreeMap<u32, u32>,
    /// Initialized data bytes.
    pub data: BTreeMap<u32, u8>,
    /// Starting program counter: the lowest instruction address.
    pub entry: u32,
}

/// Reads and parses a program image from disk.
pub fn load_file(path: &str) -> Result<Program, LoaderError> {
    let contents = fs::read_to_string(path).map_err(|source| LoaderError::Io {
        path: path.to_string(),
        source,
    })?;
    let program = parse(&contents);
    if program.text.is_empty() {
        return Err(LoaderError::EmptyImage {
            path: path.to_string(),
        });
    }
    Ok(program)
}

/// Parses image text. Never fails: malformed lines are skipped with a
/// diagnostic, matching the recoverable-by-design error policy.
pub fn parse(image: &str) -> Program {
    let mut text = BTreeMap::new();
    let mut data = BTreeMap::new();

    for (idx, raw_line) in image.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        // An assembly comment after the value marks an instruction line.
        let is_instruction = line.contains(',');

        let mut fields = line.split_whitespace();
        let parsed = match (fields.next(), fields.next()) {
            (Some(addr_tok), Some(val_tok)) => {
                let val_tok = val_tok.trim_end_matches(',');
                parse_hex(addr_tok).zip(parse_hex(val_tok))
            }
            _ => None,
        };

        match parsed {
            Some((addr, value)) if is_instruction => {
                let _ = text.insert(addr, value);
            }
            Some((addr, value)) => {
                let _ = data.insert(addr, value as u8);
            }
            None => {
                eprintln!(
                    "[Loader] line {}: malformed entry '{line}', skipping",
                    idx + 1
                );
            }
        }
    }

    let entry = text.keys().next().copied().unwrap_or(0);
    Program { text, data, entry }
}

fn parse_hex(token: &str) -> Option<u32> {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);
    u32::from_str_radix(digits, 16).ok()
}
