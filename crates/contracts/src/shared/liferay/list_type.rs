use serde::Deserialize;

use crate::domain::common::ReferenceOption;

/// Response of `list-type-definitions/{id}`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTypeDefinition {
    #[serde(default)]
    pub list_type_entries: Option<Vec<ListTypeEntry>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListTypeEntry {
    pub key: String,
    pub name: String,
}

impl ListTypeDefinition {
    /// Map entries to picker options; a definition without entries yields none
    pub fn into_options(self) -> Vec<ReferenceOption> {
        self.list_type_entries
            .unwrap_or_default()
            .into_iter()
            .map(|entry| ReferenceOption::new(entry.key, entry.name))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_map_to_options() {
        let json = r#"{
            "id": 334341,
            "name": "Companies",
            "listTypeEntries": [
                {"id": 1, "key": "acme", "name": "Acme Ltd", "name_i18n": {"en-US": "Acme Ltd"}},
                {"id": 2, "key": "globex", "name": "Globex plc"}
            ]
        }"#;
        let definition: ListTypeDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(
            definition.into_options(),
            vec![
                ReferenceOption::new("acme", "Acme Ltd"),
                ReferenceOption::new("globex", "Globex plc"),
            ]
        );
    }

    #[test]
    fn test_missing_entries_yield_empty_list() {
        let definition: ListTypeDefinition = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        assert!(definition.into_options().is_empty());
    }
}
