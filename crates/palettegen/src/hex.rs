//! Hex color decomposition helpers.
//!
//! These are the leaf utilities of the pipeline: a two-digit alpha
//! normalizer and a splitter that turns an `#RRGGBB[AA]` token into the
//! channel strings the asset descriptor format wants.

use thiserror::Error;

/// The hex token handed to [`decompose`] was too short to carry RGB channels.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("hex value {0:?} is too short to decompose (expected at least RRGGBB)")]
pub struct HexError(pub String);

/// An `#RRGGBB[AA]` token split into per-channel strings.
///
/// Channels are uppercase two-character hex pairs; alpha is a decimal string
/// (`"1.0"` when the token carried no alpha pair).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexComponents {
    pub red: String,
    pub green: String,
    pub blue: String,
    pub alpha: String,
}

/// Interprets a two-character hex byte as a normalized alpha in `[0, 1]`.
///
/// Anything that is not exactly two parsable hex digits yields 1.0 (fully
/// opaque). Lenient by contract: callers hand this whatever trailed the RGB
/// channels and rely on the opaque default instead of an error.
pub fn normalized_alpha(two_hex: &str) -> f32 {
    if two_hex.len() != 2 {
        return 1.0;
    }
    match u8::from_str_radix(two_hex, 16) {
        Ok(byte) => f32::from(byte) / 255.0,
        Err(_) => 1.0,
    }
}

/// Splits a hex token into red/green/blue pairs and a decimal alpha string.
///
/// The token is trimmed, stripped of a leading `#`, and uppercased. At least
/// six hex characters are required; characters 7-8, when present, are the
/// alpha pair and are rendered with six decimal places (`"0.501961"` for
/// `80`). Without an alpha pair the literal `"1.0"` is used.
pub fn decompose(token: &str) -> Result<HexComponents, HexError> {
    let cleaned = token.trim().trim_start_matches('#').to_uppercase();
    if !cleaned.is_ascii() || cleaned.len() < 6 {
        return Err(HexError(token.to_string()));
    }

    let alpha = if cleaned.len() >= 8 {
        format!("{:.6}", normalized_alpha(&cleaned[6..8]))
    } else {
        "1.0".to_string()
    };

    Ok(HexComponents {
        red: cleaned[0..2].to_string(),
        green: cleaned[2..4].to_string(),
        blue: cleaned[4..6].to_string(),
        alpha,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_alpha_bounds() {
        assert_eq!(normalized_alpha("00"), 0.0);
        assert_eq!(normalized_alpha("FF"), 1.0);
    }

    #[test]
    fn test_normalized_alpha_midpoint() {
        assert!((normalized_alpha("80") - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_normalized_alpha_wrong_length_is_opaque() {
        assert_eq!(normalized_alpha(""), 1.0);
        assert_eq!(normalized_alpha("F"), 1.0);
        assert_eq!(normalized_alpha("FFF"), 1.0);
    }

    #[test]
    fn test_normalized_alpha_bad_digits_is_opaque() {
        assert_eq!(normalized_alpha("ZZ"), 1.0);
    }

    #[test]
    fn test_decompose_six_digits() {
        let c = decompose("#A0B1C2").unwrap();
        assert_eq!(c.red, "A0");
        assert_eq!(c.green, "B1");
        assert_eq!(c.blue, "C2");
        assert_eq!(c.alpha, "1.0");
    }

    #[test]
    fn test_decompose_uppercases_and_strips_hash() {
        let c = decompose("  #a0b1c2 ").unwrap();
        assert_eq!(c.red, "A0");
        assert_eq!(c.green, "B1");
        assert_eq!(c.blue, "C2");
    }

    #[test]
    fn test_decompose_with_alpha_pair() {
        let c = decompose("#A0B1C2FF").unwrap();
        assert_eq!(c.alpha, "1.000000");

        let c = decompose("#A0B1C280").unwrap();
        assert_eq!(c.alpha, "0.501961");

        let c = decompose("#A0B1C200").unwrap();
        assert_eq!(c.alpha, "0.000000");
    }

    #[test]
    fn test_decompose_too_short() {
        assert!(decompose("#FFF").is_err());
        assert!(decompose("#A0B1").is_err());
        assert!(decompose("").is_err());
    }
}
