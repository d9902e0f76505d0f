use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StickerStatus {
    #[default]
    Pending,
    Active,
    Expired,
    Revoked,
}

impl StickerStatus {
    pub const ALL: [StickerStatus; 4] = [
        StickerStatus::Pending,
        StickerStatus::Active,
        StickerStatus::Expired,
        StickerStatus::Revoked,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Active => "active",
            Self::Expired => "expired",
            Self::Revoked => "revoked",
        }
    }
}

impl FromStr for StickerStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown sticker status {:?}", s))
    }
}

/// A vehicle sticker granting access to the society's roads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarSticker {
    pub id: String,
    #[serde(default)]
    pub sticker_number: Option<String>,
    pub owner_name: String,
    pub vehicle_number: String,
    #[serde(default)]
    pub vehicle_type: Option<String>,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub membership_number: Option<String>,
    #[serde(default)]
    pub issue_date: Option<NaiveDate>,
    #[serde(default)]
    pub expiry_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: StickerStatus,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CarStickerForm {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub sticker_number: String,
    pub owner_name: String,
    pub vehicle_number: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub vehicle_type: String,
    pub phone: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub email: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub address: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub membership_number: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub issue_date: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub expiry_date: String,
    pub status: StickerStatus,
}
