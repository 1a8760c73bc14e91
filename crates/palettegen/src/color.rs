//! The domain entity produced by parsing: a single named color.

/// One parsed palette entry.
///
/// Entries are constructed during parsing and treated as immutable value
/// objects afterwards; builders only read them.
#[derive(Debug, Clone)]
pub struct ColorEntry {
    /// Identifier, unique within the final list. Doubles as the source-code
    /// constant name and the asset folder name component.
    pub name: String,
    /// Primary value, e.g. `#AAFF22` or `#AAFF2211`. Includes the `#`.
    pub value: String,
    /// Optional dark-mode / alternate representation, same shape as `value`.
    pub alternate_value: Option<String>,
    /// True when the values were copied from another entry via a `$` line.
    pub is_alias: bool,
    /// Free-text trailing annotation from the source line.
    pub comments: Option<String>,
}

impl ColorEntry {
    /// An entry declared directly via a `#` line.
    pub fn defined(
        name: impl Into<String>,
        value: impl Into<String>,
        alternate_value: Option<String>,
        comments: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            alternate_value,
            is_alias: false,
            comments,
        }
    }

    /// An alias entry copying `referent`'s values under a new name.
    pub fn alias_of(
        referent: &ColorEntry,
        name: impl Into<String>,
        comments: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            value: referent.value.clone(),
            alternate_value: referent.alternate_value.clone(),
            is_alias: true,
            comments,
        }
    }
}

/// Equality is name-based only. This governs de-duplication when alias
/// entries are merged into the defined list.
impl PartialEq for ColorEntry {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for ColorEntry {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_ignores_values() {
        let a = ColorEntry::defined("BlueGrey", "#A0B1C2", None, None);
        let b = ColorEntry::defined("BlueGrey", "#FFFFFF", Some("#000000".into()), None);
        assert_eq!(a, b);
    }

    #[test]
    fn test_equality_distinguishes_names() {
        let a = ColorEntry::defined("BlueGrey", "#A0B1C2", None, None);
        let b = ColorEntry::defined("BlueGray", "#A0B1C2", None, None);
        assert_ne!(a, b);
    }

    #[test]
    fn test_alias_copies_values() {
        let referent = ColorEntry::defined(
            "BlueGrey",
            "#A0B1C2",
            Some("#D1E2F3".into()),
            Some("base tint".into()),
        );
        let alias = ColorEntry::alias_of(&referent, "StandardBackground", None);

        assert_eq!(alias.name, "StandardBackground");
        assert_eq!(alias.value, "#A0B1C2");
        assert_eq!(alias.alternate_value.as_deref(), Some("#D1E2F3"));
        assert!(alias.is_alias);
        assert!(alias.comments.is_none());
    }
}
