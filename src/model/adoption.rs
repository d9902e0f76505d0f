use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AdopterType {
    #[default]
    #[serde(alias = "Person")]
    Personal,
    #[serde(alias = "Commercial")]
    Corporate,
    Family,
}

impl AdopterType {
    pub const ALL: [AdopterType; 3] = [AdopterType::Personal, AdopterType::Corporate, AdopterType::Family];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Personal => "Personal",
            Self::Corporate => "Corporate",
            Self::Family => "Family",
        }
    }
}

impl FromStr for AdopterType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "personal" | "person" => Ok(Self::Personal),
            "corporate" | "commercial" => Ok(Self::Corporate),
            "family" => Ok(Self::Family),
            other => Err(format!("unknown adopter type {:?}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ResidentType {
    #[default]
    Permanent,
    Tenant,
}

impl ResidentType {
    pub const ALL: [ResidentType; 2] = [ResidentType::Permanent, ResidentType::Tenant];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Permanent => "Permanent",
            Self::Tenant => "Tenant",
        }
    }
}

impl FromStr for ResidentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown resident type {:?}", s))
    }
}

/// Lifecycle of an adoption registration
///
/// `pending → {approved, rejected}`, `approved → {active, expired}`, `active → expired`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdoptionStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Active,
    Expired,
}

impl AdoptionStatus {
    pub const ALL: [AdoptionStatus; 5] = [
        AdoptionStatus::Pending,
        AdoptionStatus::Approved,
        AdoptionStatus::Rejected,
        AdoptionStatus::Active,
        AdoptionStatus::Expired,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Active => "active",
            Self::Expired => "expired",
        }
    }

    /// Whether an admin may move a registration from `self` to `next`
    pub fn can_transition_to(&self, next: AdoptionStatus) -> bool {
        use AdoptionStatus::*;

        *self == next
            || matches!(
                (self, next),
                (Pending, Approved)
                    | (Pending, Rejected)
                    | (Approved | Rejected, Active | Expired)
                    | (Active, Expired)
            )
    }
}

impl FromStr for AdoptionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown adoption status {:?}", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Paid,
    Overdue,
}

impl PaymentStatus {
    pub const ALL: [PaymentStatus; 3] = [PaymentStatus::Pending, PaymentStatus::Paid, PaymentStatus::Overdue];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::Overdue => "overdue",
        }
    }
}

impl FromStr for PaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown payment status {:?}", s))
    }
}

/// Who is adopting and how to reach them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdopterDetails {
    #[serde(default)]
    pub adopter_type: AdopterType,
    pub adopter_name: String,
    #[serde(default)]
    pub resident_type: ResidentType,
    #[serde(default)]
    pub membership_number: Option<String>,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

/// Sponsorship period together with its approval and payment state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdoptionTerm {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub status: AdoptionStatus,
    #[serde(default)]
    pub payment_status: PaymentStatus,
    #[serde(default)]
    pub payment_amount: Option<f64>,
    #[serde(default)]
    pub payment_date: Option<NaiveDate>,
    #[serde(default)]
    pub receipt_number: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateAdoption {
    pub id: String,
    #[serde(flatten)]
    pub adopter: AdopterDetails,
    pub gate_road_number: String,
    #[serde(flatten)]
    pub term: AdoptionTerm,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadAdoption {
    pub id: String,
    #[serde(flatten)]
    pub adopter: AdopterDetails,
    pub road_number: String,
    pub area: String,
    #[serde(flatten)]
    pub term: AdoptionTerm,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct AdopterForm {
    pub adopter_type: AdopterType,
    pub adopter_name: String,
    pub resident_type: ResidentType,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub membership_number: String,
    pub phone: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub email: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TermForm {
    pub start_date: String,
    pub end_date: String,
    pub status: AdoptionStatus,
    pub payment_status: PaymentStatus,
    #[serde(
        skip_serializing_if = "String::is_empty",
        serialize_with = "serialize_amount"
    )]
    pub payment_amount: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub payment_date: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub receipt_number: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct GateAdoptionForm {
    #[serde(flatten)]
    pub adopter: AdopterForm,
    pub gate_road_number: String,
    #[serde(flatten)]
    pub term: TermForm,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct RoadAdoptionForm {
    #[serde(flatten)]
    pub adopter: AdopterForm,
    pub road_number: String,
    pub area: String,
    #[serde(flatten)]
    pub term: TermForm,
}

/// Sends the amount as a JSON number; the form keeps the raw input text
fn serialize_amount<S: Serializer>(amount: &str, serializer: S) -> Result<S::Ok, S::Error> {
    match amount.trim().parse::<f64>() {
        Ok(value) => serializer.serialize_f64(value),
        Err(_) => serializer.serialize_str(amount),
    }
}
