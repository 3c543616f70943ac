//! Sample inventory records.
//!
//! Posting dates are computed from the current time so the NEW badge holds
//! regardless of when the suite runs.

use chrono::{DateTime, Duration, Utc};
use serde_json::{Value, json};

/// A product record plus the facts a test may assert about it.
#[derive(Debug, Clone)]
pub struct SampleProduct {
    pub id: String,
    pub name: String,
    pub posted_at: DateTime<Utc>,
    pub image: Option<String>,
    pub categories: Vec<String>,
}

impl SampleProduct {
    pub fn new(id: &str, name: &str, posted_at: DateTime<Utc>) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            posted_at,
            image: None,
            categories: Vec::new(),
        }
    }

    pub fn with_image(mut self, uri: &str) -> Self {
        self.image = Some(uri.to_string());
        self
    }

    pub fn with_categories(mut self, categories: &[&str]) -> Self {
        self.categories = categories.iter().map(|c| c.to_string()).collect();
        self
    }

    /// Date as the list shows it with `--utc`.
    pub fn display_date(&self) -> String {
        self.posted_at.format("%d.%m.%Y").to_string()
    }

    /// Record in the backend's field naming.
    pub fn to_record(&self) -> Value {
        let mut fields = json!({
            "Product Name": self.name,
            "Posted": self.posted_at.to_rfc3339(),
            "Product Categories": self.categories,
        });
        if let Some(image) = &self.image {
            fields["Product Image"] = json!(image);
        }
        json!({ "id": self.id, "fields": fields })
    }
}

/// One product from two days ago and one from a month ago.
pub fn sample_products(now: DateTime<Utc>) -> Vec<SampleProduct> {
    vec![
        SampleProduct::new("rec-drill", "Cordless Drill", now - Duration::days(2))
            .with_image("https://images.example.com/drill.png")
            .with_categories(&["Tools", "Power Tools"]),
        SampleProduct::new("rec-anvil", "Anvil", now - Duration::days(30))
            .with_categories(&["Smithing"]),
    ]
}

/// Wrap records in the `{"records": [...]}` envelope.
pub fn inventory_document(products: &[SampleProduct]) -> Value {
    let records: Vec<Value> = products.iter().map(SampleProduct::to_record).collect();
    json!({ "records": records })
}
