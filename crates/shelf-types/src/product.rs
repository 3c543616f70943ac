use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::categories::Categories;
use crate::error::{Error, Result};

/// A single inventory record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub fields: ProductFields,
}

/// Record fields, keyed the way the inventory backend names them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductFields {
    #[serde(
        rename = "Product Name",
        alias = "name",
        default,
        deserialize_with = "null_as_default"
    )]
    pub name: String,

    #[serde(
        rename = "Product Image",
        alias = "image",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub image: Option<String>,

    #[serde(
        rename = "Product Categories",
        alias = "categories",
        default,
        deserialize_with = "null_as_default"
    )]
    pub categories: Categories,

    /// Left empty when the record has no date; the row shows a placeholder.
    #[serde(
        rename = "Posted",
        alias = "postedAt",
        default,
        deserialize_with = "null_as_default"
    )]
    pub posted_at: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        posted_at: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            fields: ProductFields {
                name: name.into(),
                image: None,
                categories: Categories::default(),
                posted_at: posted_at.into(),
            },
        }
    }

    pub fn with_image(mut self, uri: impl Into<String>) -> Self {
        self.fields.image = Some(uri.into());
        self
    }

    pub fn with_categories(mut self, categories: Categories) -> Self {
        self.fields.categories = categories;
        self
    }
}

impl ProductFields {
    /// Image URI, or `None` when the record has no usable image.
    pub fn image_uri(&self) -> Option<&str> {
        self.image
            .as_deref()
            .map(str::trim)
            .filter(|uri| !uri.is_empty())
    }
}

#[derive(Deserialize)]
struct Envelope {
    records: Vec<Product>,
}

/// Parse an inventory document.
///
/// Accepts the `{"records": [...]}` envelope as well as a bare array. The
/// shape is detected first so record errors keep their line and column.
pub fn parse_inventory(json: &str) -> Result<Vec<Product>> {
    match serde_json::from_str::<Value>(json)? {
        Value::Array(_) => Ok(serde_json::from_str(json)?),
        Value::Object(map) if map.contains_key("records") => {
            let envelope: Envelope = serde_json::from_str(json)?;
            Ok(envelope.records)
        }
        _ => Err(Error::InvalidDocument(
            "expected an array of records or an object with \"records\"".to_string(),
        )),
    }
}

pub fn read_inventory_file(path: &Path) -> Result<Vec<Product>> {
    let content = std::fs::read_to_string(path)?;
    parse_inventory(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_envelope_with_backend_keys() {
        let json = r#"{
            "records": [
                {
                    "id": "rec1",
                    "fields": {
                        "Product Name": "Cordless Drill",
                        "Product Image": "https://img.example/drill.png",
                        "Product Categories": "Tools, Power",
                        "Posted": "2024-01-05"
                    }
                }
            ]
        }"#;

        let products = parse_inventory(json).unwrap();
        assert_eq!(products.len(), 1);
        let fields = &products[0].fields;
        assert_eq!(fields.name, "Cordless Drill");
        assert_eq!(fields.image_uri(), Some("https://img.example/drill.png"));
        assert_eq!(fields.categories.normalized(), vec!["Tools", "Power"]);
        assert_eq!(fields.posted_at, "2024-01-05");
    }

    #[test]
    fn test_parse_bare_array_with_short_keys() {
        let json = r#"[
            {"id": "a", "fields": {"name": "Hammer", "categories": ["Tools"], "postedAt": "2024-01-01"}}
        ]"#;

        let products = parse_inventory(json).unwrap();
        assert_eq!(products[0].fields.name, "Hammer");
        assert_eq!(products[0].fields.image_uri(), None);
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let json = r#"[{"id": "a", "fields": {"Posted": "2024-01-01"}}]"#;

        let products = parse_inventory(json).unwrap();
        let fields = &products[0].fields;
        assert_eq!(fields.name, "");
        assert!(fields.image.is_none());
        assert!(fields.categories.is_empty());
    }

    #[test]
    fn test_blank_image_is_treated_as_missing() {
        let product = Product::new("a", "Saw", "2024-01-01").with_image("   ");
        assert_eq!(product.fields.image_uri(), None);
    }

    #[test]
    fn test_null_categories_degrade_to_empty() {
        let json = r#"[
            {"id": "a", "fields": {"Product Name": "Saw", "Product Categories": null, "Posted": "2024-01-01"}},
            {"id": "b", "fields": {"Product Name": "Rasp", "Product Categories": "Files", "Posted": "2024-01-02"}}
        ]"#;

        let products = parse_inventory(json).unwrap();
        assert_eq!(products.len(), 2);
        assert!(products[0].fields.categories.is_empty());
        assert_eq!(products[1].fields.categories.normalized(), vec!["Files"]);
    }

    #[test]
    fn test_missing_posted_keeps_the_record() {
        let json = r#"[
            {"id": "a", "fields": {"Product Name": "Saw"}},
            {"id": "b", "fields": {"Product Name": "Rasp", "Posted": null}},
            {"id": "c", "fields": {"Product Name": "File", "Posted": "2024-01-02"}}
        ]"#;

        let products = parse_inventory(json).unwrap();
        assert_eq!(products.len(), 3);
        assert_eq!(products[0].fields.posted_at, "");
        assert_eq!(products[1].fields.posted_at, "");
        assert_eq!(products[2].fields.posted_at, "2024-01-02");
    }

    #[test]
    fn test_record_errors_name_the_problem() {
        let json = "{\"records\": [\n  {\"id\": \"a\", \"fields\": {\"Posted\": 42}}\n]}";

        let message = parse_inventory(json).unwrap_err().to_string();
        assert!(message.contains("invalid type"), "{}", message);
        assert!(message.contains("line 2"), "{}", message);
        assert!(!message.contains("untagged"), "{}", message);
    }

    #[test]
    fn test_unexpected_document_shape() {
        assert!(matches!(
            parse_inventory(r#"{"items": []}"#),
            Err(Error::InvalidDocument(_))
        ));
        assert!(matches!(parse_inventory("{ not json"), Err(Error::Json(_))));
    }

    #[test]
    fn test_read_inventory_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("inventory.json");
        std::fs::write(&path, r#"{"records": []}"#).unwrap();

        assert!(read_inventory_file(&path).unwrap().is_empty());
        assert!(matches!(
            read_inventory_file(&dir.path().join("missing.json")),
            Err(Error::Io(_))
        ));
    }
}
