use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// One QR code record. The store hands out clones of these, never
// references into its map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QrCode {
    pub id: String,
    pub label: String,
    pub url: String,
    pub active: bool,
    #[serde(rename = "createdAtIso")]
    pub created_at: DateTime<Utc>,
}

// Create request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateQrCode {
    #[serde(default)]
    pub label: String,
    pub url: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

// Partial update - only the fields present in the body are applied
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateQrCode {
    pub label: Option<String>,
    pub url: Option<String>,
    pub active: Option<bool>,
}

// One click event, append-only
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClickEvent {
    #[serde(rename = "qrCodeId")]
    pub qr_code_id: String,
    pub at: DateTime<Utc>,
    pub country: String,
}

// Rolling per-QR-code stats, updated on every recorded click
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClickStats {
    pub total: u64,
    #[serde(rename = "lastCountry")]
    pub last_country: String,
    #[serde(rename = "lastAtIso")]
    pub last_at: DateTime<Utc>,
}
