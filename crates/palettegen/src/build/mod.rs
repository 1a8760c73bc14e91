//! Artifact emission.
//!
//! A builder consumes the final ordered color list plus a namespace name and
//! writes platform artifacts to disk. Alternative target platforms are
//! alternative implementations of [`ArtifactBuilder`]; [`AppleBuilder`] is
//! the reference one, emitting an `.xcassets` catalog and a Swift source
//! file.

use thiserror::Error;

use crate::color::ColorEntry;
use crate::hex::HexError;

mod apple;

pub use apple::AppleBuilder;

/// Error type for artifact emission.
///
/// Any of these aborts the whole build. Artifacts already written are left in
/// place; a rerun with the same inputs overwrites them deterministically.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Hex(#[from] HexError),
}

/// Renders an ordered color list into filesystem artifacts.
///
/// Implementations only read the entries; re-running `build` with the same
/// inputs replaces prior output.
pub trait ArtifactBuilder {
    fn build(&self, colors: &[ColorEntry], namespace: &str) -> Result<(), BuildError>;
}
