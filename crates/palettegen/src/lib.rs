//! # Palettegen - Palette File to Color Asset Generator
//!
//! `palettegen` turns a human-readable `.palette` text file into the color
//! artifacts a platform project actually consumes: an asset catalog with one
//! color set per entry, and a generated source file exposing named color
//! constants.
//!
//! The pipeline is strictly one-directional:
//!
//! ```text
//! palette text → ordered [ColorEntry] → filesystem artifacts
//! ```
//!
//! ## Input format
//!
//! The palette file is line-oriented UTF-8:
//!
//! - `// comment` — ignored
//! - `#RRGGBB [#RRGGBBAA] <Name> [comment text]` — a defined color; hex tokens
//!   may be 3, 6, or 8 digits, and the optional second token is the dark-mode
//!   variant
//! - `$<ReferenceName> <AliasName> [comment text]` — an alias copying its
//!   value(s) from an already-defined color
//! - blank lines — ignored
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use palettegen::{AppleBuilder, ArtifactBuilder, PaletteParser, ParseMode};
//!
//! let contents = "#A0B1C2 BlueGrey Our standard background tint\n\
//!                 $BlueGrey StandardBackground\n";
//!
//! let colors = PaletteParser::new(ParseMode::All).parse(contents);
//! let builder = AppleBuilder::new("./Generated", "main", false);
//! builder.build(&colors, "AppColors").unwrap();
//! ```
//!
//! Malformed lines never abort a parse; they are logged and skipped. Builder
//! failures (I/O, template errors) abort the whole build.

pub mod build;
pub mod color;
pub mod hex;
pub mod parse;
pub mod util;

mod templates;

pub use build::{AppleBuilder, ArtifactBuilder, BuildError};
pub use color::ColorEntry;
pub use hex::{HexComponents, HexError};
pub use parse::{LineError, PaletteParser, ParseMode};
