use serde::{Deserialize, Serialize};

/// Selectable key/name pair sourced from a host reference list
///
/// Used for both the "Company" and the "Category" pickers. Once selected the
/// full pair is stored in the form record, so the submitted payload carries
/// both the identifier and the display label.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReferenceOption {
    pub key: String,
    pub name: String,
}

impl ReferenceOption {
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
        }
    }

    /// Blank `{ "", "" }` pair used before anything is selected
    pub fn empty() -> Self {
        Self::default()
    }

    /// True once an option has been picked
    pub fn is_selected(&self) -> bool {
        !self.key.is_empty()
    }

    /// Find the option with the given key in a loaded list
    pub fn find<'a>(options: &'a [ReferenceOption], key: &str) -> Option<&'a ReferenceOption> {
        options.iter().find(|o| o.key == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_by_key() {
        let options = vec![
            ReferenceOption::new("acme", "Acme Ltd"),
            ReferenceOption::new("globex", "Globex plc"),
        ];
        assert_eq!(
            ReferenceOption::find(&options, "globex"),
            Some(&ReferenceOption::new("globex", "Globex plc"))
        );
        assert_eq!(ReferenceOption::find(&options, "initech"), None);
    }

    #[test]
    fn test_empty_is_not_selected() {
        assert!(!ReferenceOption::empty().is_selected());
        assert!(ReferenceOption::new("k", "n").is_selected());
    }
}
