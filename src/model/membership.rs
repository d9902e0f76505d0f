use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Membership category chosen by an applicant; gates the required documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MembershipType {
    Life,
    Affiliate,
    Associate,
    Corporate,
}

impl MembershipType {
    pub const ALL: [MembershipType; 4] = [
        MembershipType::Life,
        MembershipType::Affiliate,
        MembershipType::Associate,
        MembershipType::Corporate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Life => "Life",
            Self::Affiliate => "Affiliate",
            Self::Associate => "Associate",
            Self::Corporate => "Corporate",
        }
    }
}

impl fmt::Display for MembershipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MembershipType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown membership type {:?}", s))
    }
}

/// Applicant gender, persisted by the API as the single-letter code `M`/`F`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "M", alias = "Male")]
    Male,
    #[serde(rename = "F", alias = "Female")]
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    /// Label used by the form controls
    pub fn label(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }

    /// Code stored by the API
    pub fn code(&self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
        }
    }
}

impl FromStr for Gender {
    type Err = String;

    /// Accepts both the stored code and the form label
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            v if v.eq_ignore_ascii_case("m") || v.eq_ignore_ascii_case("male") => Ok(Self::Male),
            v if v.eq_ignore_ascii_case("f") || v.eq_ignore_ascii_case("female") => {
                Ok(Self::Female)
            }
            other => Err(format!("unknown gender {:?}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChildGender {
    #[default]
    Male,
    Female,
    Other,
}

impl ChildGender {
    pub const ALL: [ChildGender; 3] = [ChildGender::Male, ChildGender::Female, ChildGender::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }
}

impl FromStr for ChildGender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|g| g.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown gender {:?}", s))
    }
}

/// How the applicant relates to the registered property owner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyRelationship {
    #[serde(rename = "Self")]
    Owner,
    Father,
    Mother,
    Spouse,
    Son,
    Daughter,
    Other,
}

impl PropertyRelationship {
    pub const ALL: [PropertyRelationship; 7] = [
        PropertyRelationship::Owner,
        PropertyRelationship::Father,
        PropertyRelationship::Mother,
        PropertyRelationship::Spouse,
        PropertyRelationship::Son,
        PropertyRelationship::Daughter,
        PropertyRelationship::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Owner => "Self",
            Self::Father => "Father",
            Self::Mother => "Mother",
            Self::Spouse => "Spouse",
            Self::Son => "Son",
            Self::Daughter => "Daughter",
            Self::Other => "Other",
        }
    }
}

impl FromStr for PropertyRelationship {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown relationship {:?}", s))
    }
}

/// Review status of a membership application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    UnderReview,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::UnderReview => "under_review",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Child {
    pub name: String,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub gender: ChildGender,
}

/// Scalar applicant fields shared by public submissions, stored applications, and approvals
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ApplicantProfile {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_local: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub father_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mother_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spouse_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blood_group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profession: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub office_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub residence_phone: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub children: Vec<Child>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub designation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_owner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_schedule: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship_to_property: Option<PropertyRelationship>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub membership_type: Option<MembershipType>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub declaration_accepted: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proposer_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proposer_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seconder_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seconder_number: Option<String>,
}

/// URLs of uploaded supporting documents
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DocumentUrls {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nid_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_receipt_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lease_agreement_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trade_license_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tin_bin_certificate_url: Option<String>,
}

/// A membership application as stored by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MembershipApplication {
    pub id: String,
    #[serde(flatten)]
    pub profile: ApplicantProfile,
    #[serde(flatten)]
    pub documents: DocumentUrls,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: ApplicationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub membership_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Body of the approval PATCH and of the admin-create POST
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApprovalPayload {
    #[serde(flatten)]
    pub profile: ApplicantProfile,
    #[serde(flatten)]
    pub documents: DocumentUrls,
    pub membership_number: String,
    pub zone: String,
    pub status: ApplicationStatus,
}

/// Body of the rejection PATCH
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusUpdate {
    pub status: ApplicationStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gender_uses_codes_on_the_wire() {
        assert_eq!(serde_json::to_string(&Gender::Female).unwrap(), r#""F""#);
        let male: Gender = serde_json::from_str(r#""Male""#).unwrap();
        assert_eq!(male, Gender::Male);
        assert_eq!("m".parse::<Gender>(), Ok(Gender::Male));
    }

    #[test]
    fn relationship_self_is_renamed() {
        let owner: PropertyRelationship = serde_json::from_str(r#""Self""#).unwrap();
        assert_eq!(owner, PropertyRelationship::Owner);
        assert_eq!("self".parse::<PropertyRelationship>(), Ok(PropertyRelationship::Owner));
    }

    #[test]
    fn application_flattens_profile_and_documents() {
        let application: MembershipApplication = serde_json::from_value(serde_json::json!({
            "id": "app-1",
            "name": "Rahim Uddin",
            "gender": "M",
            "membership_type": "Life",
            "photo_url": "https://cdn.example.com/photo.jpg",
            "status": "pending",
            "children": [{ "name": "Ayesha", "age": 7, "gender": "Female" }]
        }))
        .unwrap();

        assert_eq!(application.profile.name, "Rahim Uddin");
        assert_eq!(application.profile.gender, Some(Gender::Male));
        assert_eq!(application.profile.children.len(), 1);
        assert_eq!(
            application.documents.photo_url.as_deref(),
            Some("https://cdn.example.com/photo.jpg")
        );
        assert_eq!(application.status, ApplicationStatus::Pending);
    }

    #[test]
    fn null_collections_and_flags_read_as_defaults() {
        let application: MembershipApplication = serde_json::from_value(serde_json::json!({
            "id": "a",
            "name": "X",
            "children": null,
            "declaration_accepted": null,
            "status": null
        }))
        .unwrap();

        assert!(application.profile.children.is_empty());
        assert!(!application.profile.declaration_accepted);
        assert_eq!(application.status, ApplicationStatus::default());
    }
}
