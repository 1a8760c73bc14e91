//! Palette file parsing.
//!
//! A palette file is parsed in two sequential passes: pass 1 collects every
//! directly defined color (`#` lines), pass 2 resolves aliases (`$` lines)
//! against the completed pass-1 output. Each pass sorts its entries by name,
//! so the merged list keeps all defined colors ahead of all aliases — an
//! ordering the builders rely on.
//!
//! Per-line problems never abort a parse: malformed lines are logged and
//! dropped, and an alias whose reference cannot be found is skipped silently.
//! Files that intentionally reference colors filtered out upstream stay
//! valid that way.

use thiserror::Error;
use tracing::{debug, warn};

use crate::color::ColorEntry;

/// Which entries [`PaletteParser::parse`] returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseMode {
    /// Defined colors first, then every alias not shadowed by a defined name.
    All,
    /// Only the resolved alias entries.
    AliasesOnly,
}

/// Why a single line was rejected. The line itself is carried for diagnostics.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LineError {
    #[error("could not parse a hex value from line: {0}")]
    NoHexValue(String),
    #[error("no color name found in line: {0}")]
    NoColorName(String),
    #[error("malformed alias line (expected $<ReferenceName> <NewName>): {0}")]
    InvalidAliasFormat(String),
}

/// Turns palette text into an ordered list of [`ColorEntry`] values.
pub struct PaletteParser {
    mode: ParseMode,
}

impl PaletteParser {
    pub fn new(mode: ParseMode) -> Self {
        Self { mode }
    }

    /// Parses the full contents of a palette file.
    ///
    /// Never fails: malformed lines are logged via `tracing` and omitted.
    /// Only reading the file in the first place can fail, and that is the
    /// caller's concern.
    pub fn parse(&self, contents: &str) -> Vec<ColorEntry> {
        let lines: Vec<&str> = contents.lines().collect();

        let mut defined: Vec<ColorEntry> = lines
            .iter()
            .filter_map(|line| match parse_definition(line) {
                Ok(entry) => entry,
                Err(err) => {
                    warn!("{err}");
                    None
                }
            })
            .collect();
        defined.sort_by(|a, b| a.name.cmp(&b.name));

        let mut aliases: Vec<ColorEntry> = lines
            .iter()
            .filter_map(|line| match parse_alias(line, &defined) {
                Ok(entry) => entry,
                Err(err) => {
                    warn!("{err}");
                    None
                }
            })
            .collect();
        aliases.sort_by(|a, b| a.name.cmp(&b.name));

        match self.mode {
            ParseMode::AliasesOnly => aliases,
            ParseMode::All => {
                let mut output = defined;
                for alias in aliases {
                    // Name-based equality: a defined color shadows a
                    // same-named alias.
                    if !output.contains(&alias) {
                        output.push(alias);
                    }
                }
                output
            }
        }
    }
}

/// Byte ranges of hex color tokens in a line, scanned left to right.
///
/// A token is `#` followed by 3 or 6 hex digits plus an optional 2-digit
/// alpha pair. At each `#` the longest shape that fits the following digit
/// run wins: 8, 6, 5, or 3 digits. Runs shorter than 3 are not tokens.
fn scan_hex_tokens(line: &str) -> Vec<(usize, usize)> {
    let bytes = line.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'#' {
            let mut run = 0;
            while i + 1 + run < bytes.len() && bytes[i + 1 + run].is_ascii_hexdigit() {
                run += 1;
            }
            let taken = match run {
                8.. => 8,
                6 | 7 => 6,
                5 => 5,
                3 | 4 => 3,
                _ => 0,
            };
            if taken > 0 {
                tokens.push((i, i + 1 + taken));
                i += 1 + taken;
                continue;
            }
        }
        i += 1;
    }

    tokens
}

/// Pass 1: parses one line as a color definition.
///
/// Returns `Ok(None)` for lines that are simply not definitions (blank,
/// `//` comments, alias lines) and `Err` for `#` lines that are broken.
fn parse_definition(line: &str) -> Result<Option<ColorEntry>, LineError> {
    if line.is_empty() || line.starts_with("//") || !line.starts_with('#') {
        return Ok(None);
    }

    let tokens = scan_hex_tokens(line);
    let Some(&(first_start, first_end)) = tokens.first() else {
        return Err(LineError::NoHexValue(line.to_string()));
    };

    let value = &line[first_start..first_end];
    // With more than one token the last one is the alternate (dark-mode)
    // value; everything after it is metadata.
    let (alternate_value, metadata_start) = match tokens[..] {
        [_] => (None, first_end),
        [.., (last_start, last_end)] => (Some(line[last_start..last_end].to_string()), last_end),
        [] => return Err(LineError::NoHexValue(line.to_string())),
    };

    let metadata = line[metadata_start..].trim();
    let Some(name) = metadata.split_whitespace().next() else {
        return Err(LineError::NoColorName(line.to_string()));
    };

    let mut rest = &metadata[name.len()..];
    if let Some(first) = rest.chars().next() {
        // One separating space between name and comment.
        if first.is_whitespace() {
            rest = &rest[first.len_utf8()..];
        }
    }
    let comments = (!rest.is_empty()).then(|| rest.to_string());

    debug!(name, value, "parsed color");
    Ok(Some(ColorEntry::defined(
        name,
        value,
        alternate_value,
        comments,
    )))
}

/// Pass 2: parses one line as an alias, resolving it against the defined
/// colors from pass 1.
///
/// An alias whose reference is not found yields `Ok(None)`: best effort by
/// design, since the reference may name a color excluded upstream.
fn parse_alias(line: &str, defined: &[ColorEntry]) -> Result<Option<ColorEntry>, LineError> {
    if !line.starts_with('$') {
        return Ok(None);
    }

    let elements: Vec<&str> = line[1..].split_whitespace().collect();
    if elements.len() < 2 {
        return Err(LineError::InvalidAliasFormat(line.to_string()));
    }

    let reference_name = elements[0];
    let alias_name = elements[1];
    let comments = (elements.len() > 2).then(|| elements[2..].join(" "));

    match defined.iter().find(|c| c.name == reference_name) {
        Some(referent) => {
            debug!(alias_name, reference_name, "parsed alias color");
            Ok(Some(ColorEntry::alias_of(referent, alias_name, comments)))
        }
        None => {
            debug!(
                alias_name,
                reference_name, "reference color not found, skipping alias"
            );
            Ok(None)
        }
    }
}
