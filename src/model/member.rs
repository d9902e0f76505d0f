use std::{collections::BTreeMap, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::membership::MembershipType;

/// Zones an approved member can be assigned to
pub const ZONES: [&str; 6] = ["Zone 1", "Zone 2", "Zone 3", "Zone 4", "Zone 5", "Zone 6"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    #[default]
    Active,
    Inactive,
    Suspended,
}

impl MemberStatus {
    pub const ALL: [MemberStatus; 3] = [
        MemberStatus::Active,
        MemberStatus::Inactive,
        MemberStatus::Suspended,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Suspended => "suspended",
        }
    }
}

impl FromStr for MemberStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown member status {:?}", s))
    }
}

/// An approved member of the society
///
/// Fields the portal does not know about are kept in `extra` rather than being dropped,
/// so an update never loses data written by other tools.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: String,
    #[serde(default)]
    pub membership_number: Option<String>,
    #[serde(default)]
    pub zone: Option<String>,
    pub name: String,
    #[serde(default)]
    pub name_local: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub mobile: Option<String>,
    #[serde(default)]
    pub membership_type: Option<MembershipType>,
    #[serde(default)]
    pub status: MemberStatus,
    #[serde(default)]
    pub membership_date: Option<NaiveDate>,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Editable member fields as sent to the API
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct MemberForm {
    pub membership_number: String,
    pub zone: String,
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name_local: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub email: String,
    pub mobile: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub membership_type: Option<MembershipType>,
    pub status: MemberStatus,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub membership_date: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_fields_land_in_extra() {
        let member: Member = serde_json::from_value(serde_json::json!({
            "id": "m-1",
            "name": "Karim",
            "status": "suspended",
            "blood_group": "O+",
            "children": []
        }))
        .unwrap();

        assert_eq!(member.status, MemberStatus::Suspended);
        assert_eq!(member.extra.get("blood_group"), Some(&serde_json::json!("O+")));
        assert!(member.extra.contains_key("children"));
        assert!(!member.extra.contains_key("name"));
    }
}
