//! Small string casing helpers used during code generation.

/// Lowercases the first character, leaving the rest untouched.
///
/// `"BlueGrey"` becomes `"blueGrey"` — the shape used for generated constant
/// names.
pub fn lowercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Uppercases the first character, leaving the rest untouched.
///
/// Applied to the caller-supplied namespace so the generated type name is
/// well-formed.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_first() {
        assert_eq!(lowercase_first("BlueGrey"), "blueGrey");
        assert_eq!(lowercase_first("blueGrey"), "blueGrey");
        assert_eq!(lowercase_first("X"), "x");
        assert_eq!(lowercase_first(""), "");
    }

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("appColors"), "AppColors");
        assert_eq!(capitalize_first("AppColors"), "AppColors");
        assert_eq!(capitalize_first(""), "");
    }
}
