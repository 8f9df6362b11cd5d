use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default discount percentage when a record does not specify one.
fn default_discount() -> f64 {
    10.0
}

/// Default code validity window in days.
fn default_valid_days() -> i64 {
    7
}

/// A single scent entry in the promotion catalog.
///
/// Records are authored by the marketing team in `data/catalog.json`;
/// only `aroma` is mandatory, everything else falls back to the
/// campaign-wide defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogRecord {
    /// Canonical target phrase the customer has to guess.
    pub aroma: String,
    /// Alternate accepted phrases (e.g. regional names for the scent).
    #[serde(default)]
    pub synonyms: Vec<String>,
    /// Discount percentage granted on a correct guess.
    #[serde(default = "default_discount")]
    pub discount: f64,
    /// How many days the issued code remains valid.
    #[serde(default = "default_valid_days")]
    pub valid_days: i64,
}

impl CatalogRecord {
    /// All phrases a guess may match: the canonical aroma first,
    /// then any synonyms, in catalog order.
    pub fn accepted_phrases(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.aroma.as_str()).chain(self.synonyms.iter().map(String::as_str))
    }
}

/// The promotion catalog: id → scent record.
///
/// Read-only after load; shared by every request in a process instance.
pub type Catalog = HashMap<String, CatalogRecord>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_applied_when_fields_absent() {
        let record: CatalogRecord = serde_json::from_str(r#"{"aroma": "Sándalo"}"#)
            .expect("minimal record should deserialize");
        assert_eq!(record.aroma, "Sándalo");
        assert!(record.synonyms.is_empty());
        assert_eq!(record.discount, 10.0);
        assert_eq!(record.valid_days, 7);
    }

    #[test]
    fn test_explicit_fields_override_defaults() {
        let raw = r#"{
            "aroma": "Vainilla",
            "synonyms": ["vainilla de madagascar"],
            "discount": 15,
            "validDays": 3
        }"#;
        let record: CatalogRecord = serde_json::from_str(raw).expect("full record should deserialize");
        assert_eq!(record.discount, 15.0);
        assert_eq!(record.valid_days, 3);
        assert_eq!(record.synonyms, vec!["vainilla de madagascar"]);
    }

    #[test]
    fn test_accepted_phrases_starts_with_aroma() {
        let record = CatalogRecord {
            aroma: "Lavanda".to_string(),
            synonyms: vec!["espliego".to_string()],
            discount: 10.0,
            valid_days: 7,
        };
        let phrases: Vec<&str> = record.accepted_phrases().collect();
        assert_eq!(phrases, vec!["Lavanda", "espliego"]);
    }

    #[test]
    fn test_catalog_is_keyed_by_id() {
        let raw = r#"{
            "vanilla": {"aroma": "Vainilla"},
            "lavender": {"aroma": "Lavanda"}
        }"#;
        let catalog: Catalog = serde_json::from_str(raw).expect("catalog should deserialize");
        assert_eq!(catalog.len(), 2);
        assert!(catalog.contains_key("vanilla"));
        assert_eq!(catalog["lavender"].aroma, "Lavanda");
    }
}
