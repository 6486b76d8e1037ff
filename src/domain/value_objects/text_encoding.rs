//! TextEncoding value object - single-byte encodings for input and reports
//!
//! Input files are read as raw bytes and decoded one byte per character.
//! Anything the encoding cannot represent becomes `?`.

use serde::{Deserialize, Serialize};

const REPLACEMENT: char = '?';

/// Single-byte text encoding used for input files and reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TextEncoding {
    /// 7-bit ASCII; bytes >= 0x80 decode to `?`
    #[default]
    Ascii,
    /// ISO-8859-1; every byte maps to the code point of the same value
    Latin1,
}

impl TextEncoding {
    /// Parse a config/env value (`ascii`, `us-ascii`, `latin1`, `iso-8859-1`)
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "ascii" | "us-ascii" => Some(TextEncoding::Ascii),
            "latin1" | "latin-1" | "iso-8859-1" => Some(TextEncoding::Latin1),
            _ => None,
        }
    }

    pub fn decode(&self, bytes: &[u8]) -> String {
        match self {
            TextEncoding::Ascii => bytes
                .iter()
                .map(|&b| if b.is_ascii() { b as char } else { REPLACEMENT })
                .collect(),
            TextEncoding::Latin1 => bytes.iter().map(|&b| b as char).collect(),
        }
    }

    pub fn encode(&self, text: &str) -> Vec<u8> {
        let limit = match self {
            TextEncoding::Ascii => 0x7F,
            TextEncoding::Latin1 => 0xFF,
        };
        text.chars()
            .map(|c| {
                let code = c as u32;
                if code <= limit {
                    code as u8
                } else {
                    REPLACEMENT as u8
                }
            })
            .collect()
    }
}

impl std::fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TextEncoding::Ascii => write!(f, "ascii"),
            TextEncoding::Latin1 => write!(f, "latin1"),
        }
    }
}
