use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// A catalog entry as stored by the server.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Product {
    pub id: i64,
    pub product_code: String,
    #[serde(default)]
    pub barcode: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Partial product record sent on create and update.
///
/// Unset fields are left out of the JSON body entirely.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ProductDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl ProductDraft {
    /// Draft for a new product: the code doubles as the barcode value and
    /// both timestamps are set to now.
    pub fn for_code(code: &str) -> Self {
        let now = iso_timestamp_now();
        Self {
            product_code: Some(code.to_string()),
            barcode: Some(code.to_string()),
            created_at: Some(now.clone()),
            updated_at: Some(now),
        }
    }
}

/// Current UTC time as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
pub fn iso_timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
