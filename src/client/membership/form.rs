//! Editable membership application.
//!
//! Text inputs are kept as entered and only parsed when the application is submitted or
//! approved. Children are addressed by a [`ChildKey`] handed out when the row is added,
//! so removing one row never redirects an edit to its neighbour.

use std::collections::HashMap;

use crate::{
    client::{
        error::ValidationError,
        membership::{
            documents::{DocumentKind, DocumentSlot},
            workflow::WorkflowMode,
        },
        resource::parse_date,
        util::upload::{validate_upload, FileUpload},
    },
    model::membership::{
        ApplicantProfile, Child, ChildGender, DocumentUrls, Gender, MembershipApplication,
        MembershipType, PropertyRelationship,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChildKey(u64);

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChildEntry {
    pub name: String,
    pub age: String,
    pub gender: ChildGender,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChildList {
    next_key: u64,
    entries: Vec<(ChildKey, ChildEntry)>,
}

impl ChildList {
    pub fn from_children(children: &[Child]) -> Self {
        let mut list = Self::default();

        for child in children {
            let key = list.add();
            list.update(key, |entry| {
                entry.name = child.name.clone();
                entry.age = child.age.map(|age| age.to_string()).unwrap_or_default();
                entry.gender = child.gender;
            });
        }

        list
    }

    /// Appends an empty row and returns its key
    pub fn add(&mut self) -> ChildKey {
        let key = ChildKey(self.next_key);
        self.next_key += 1;
        self.entries.push((key, ChildEntry::default()));

        key
    }

    /// Edits the row with `key`; returns `false` when it no longer exists
    pub fn update(&mut self, key: ChildKey, edit: impl FnOnce(&mut ChildEntry)) -> bool {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, entry)) => {
                edit(entry);
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, key: ChildKey) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(k, _)| *k != key);

        self.entries.len() != before
    }

    pub fn get(&self, key: ChildKey) -> Option<&ChildEntry> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, entry)| entry)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ChildKey, &ChildEntry)> {
        self.entries.iter().map(|(key, entry)| (*key, entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rows left completely blank are dropped; a filled age must be a whole number.
    pub fn to_children(&self) -> Result<Vec<Child>, ValidationError> {
        self.entries
            .iter()
            .filter(|(_, entry)| !(entry.name.trim().is_empty() && entry.age.trim().is_empty()))
            .map(|(_, entry)| {
                let age = match entry.age.trim() {
                    "" => None,
                    age => Some(
                        age.parse::<u32>()
                            .map_err(|_| ValidationError::InvalidNumber("Child age"))?,
                    ),
                };

                Ok(Child {
                    name: entry.name.trim().to_string(),
                    age,
                    gender: entry.gender,
                })
            })
            .collect()
    }
}

/// Identity assigned by an administrator when approving
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AdminFields {
    pub membership_number: String,
    pub zone: String,
}

impl AdminFields {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.membership_number.trim().is_empty() {
            return Err(ValidationError::MissingAdminField("Membership number"));
        }
        if self.zone.trim().is_empty() {
            return Err(ValidationError::MissingAdminField("Zone"));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MembershipForm {
    pub name: String,
    pub name_local: String,
    pub father_name: String,
    pub mother_name: String,
    pub spouse_name: String,
    pub date_of_birth: String,
    pub gender: Option<Gender>,
    pub blood_group: String,
    pub profession: String,

    pub email: String,
    pub mobile: String,
    pub office_phone: String,
    pub residence_phone: String,

    pub children: ChildList,

    pub designation: String,
    pub organization: String,

    pub property_owner: String,
    pub property_schedule: String,
    pub relationship_to_property: Option<PropertyRelationship>,

    pub membership_type: Option<MembershipType>,
    pub declaration_accepted: bool,

    pub proposer_name: String,
    pub proposer_number: String,
    pub seconder_name: String,
    pub seconder_number: String,

    documents: HashMap<DocumentKind, DocumentSlot>,
}

impl MembershipForm {
    /// Fills the form from a stored application; files already on record become the
    /// existing URL of their slot.
    pub fn from_application(application: &MembershipApplication) -> Self {
        let profile = &application.profile;

        let mut form = Self {
            name: profile.name.clone(),
            name_local: text(&profile.name_local),
            father_name: text(&profile.father_name),
            mother_name: text(&profile.mother_name),
            spouse_name: text(&profile.spouse_name),
            date_of_birth: profile
                .date_of_birth
                .map(|date| date.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            gender: profile.gender,
            blood_group: text(&profile.blood_group),
            profession: text(&profile.profession),
            email: text(&profile.email),
            mobile: text(&profile.mobile),
            office_phone: text(&profile.office_phone),
            residence_phone: text(&profile.residence_phone),
            children: ChildList::from_children(&profile.children),
            designation: text(&profile.designation),
            organization: text(&profile.organization),
            property_owner: text(&profile.property_owner),
            property_schedule: text(&profile.property_schedule),
            relationship_to_property: profile.relationship_to_property,
            membership_type: profile.membership_type,
            declaration_accepted: profile.declaration_accepted,
            proposer_name: text(&profile.proposer_name),
            proposer_number: text(&profile.proposer_number),
            seconder_name: text(&profile.seconder_name),
            seconder_number: text(&profile.seconder_number),
            documents: HashMap::new(),
        };

        for kind in DocumentKind::ALL {
            if let Some(url) = kind.url(&application.documents) {
                form.slot_mut(kind).existing_url = Some(url.to_string());
            }
        }

        form
    }

    pub fn document(&self, kind: DocumentKind) -> Option<&DocumentSlot> {
        self.documents.get(&kind)
    }

    /// Checks type and size before keeping the file; a rejected file leaves the slot's
    /// previous selection in place.
    pub fn stage_document(
        &mut self,
        kind: DocumentKind,
        file: FileUpload,
        max_bytes: u64,
    ) -> Result<(), ValidationError> {
        validate_upload(&file, kind.upload_kind(), max_bytes)?;
        self.slot_mut(kind).staged = Some(file);

        Ok(())
    }

    pub fn clear_document(&mut self, kind: DocumentKind) {
        if let Some(slot) = self.documents.get_mut(&kind) {
            slot.staged = None;
        }
    }

    /// Newly picked files, in [`DocumentKind::ALL`] order
    pub fn staged_documents(&self) -> Vec<(DocumentKind, FileUpload)> {
        DocumentKind::ALL
            .into_iter()
            .filter_map(|kind| {
                self.document(kind)
                    .and_then(|slot| slot.staged.clone())
                    .map(|file| (kind, file))
            })
            .collect()
    }

    /// URLs already on record
    pub fn existing_urls(&self) -> DocumentUrls {
        let mut urls = DocumentUrls::default();

        for kind in DocumentKind::ALL {
            if let Some(url) = self.document(kind).and_then(|slot| slot.existing_url.clone()) {
                kind.set_url(&mut urls, url);
            }
        }

        urls
    }

    /// Documents the current membership type needs but which have neither a file nor a
    /// URL on record
    pub fn missing_documents(&self) -> Vec<DocumentKind> {
        DocumentKind::required_for(self.membership_type)
            .into_iter()
            .filter(|kind| !self.document(*kind).is_some_and(DocumentSlot::is_filled))
            .collect()
    }

    pub fn validate(&self, mode: WorkflowMode) -> Result<(), ValidationError> {
        let required = [
            (&self.name, "Name"),
            (&self.father_name, "Father's name"),
            (&self.mobile, "Mobile"),
        ];
        for (value, label) in required {
            if value.trim().is_empty() {
                return Err(ValidationError::MissingField(label));
            }
        }

        if self.membership_type.is_none() {
            return Err(ValidationError::MissingField("Membership type"));
        }

        if !self.date_of_birth.trim().is_empty() {
            parse_date(&self.date_of_birth, "Date of birth")?;
        }

        self.children.to_children()?;

        if let Some(kind) = self.missing_documents().into_iter().next() {
            return Err(ValidationError::MissingDocument(kind));
        }

        if mode == WorkflowMode::Public && !self.declaration_accepted {
            return Err(ValidationError::DeclarationNotAccepted);
        }

        Ok(())
    }

    /// Profile sent to the API
    pub fn to_profile(&self) -> Result<ApplicantProfile, ValidationError> {
        let date_of_birth = match self.date_of_birth.trim() {
            "" => None,
            date => Some(parse_date(date, "Date of birth")?),
        };

        Ok(ApplicantProfile {
            name: self.name.trim().to_string(),
            name_local: optional(&self.name_local),
            father_name: optional(&self.father_name),
            mother_name: optional(&self.mother_name),
            spouse_name: optional(&self.spouse_name),
            date_of_birth,
            gender: self.gender,
            blood_group: optional(&self.blood_group),
            profession: optional(&self.profession),
            email: optional(&self.email),
            mobile: optional(&self.mobile),
            office_phone: optional(&self.office_phone),
            residence_phone: optional(&self.residence_phone),
            children: self.children.to_children()?,
            designation: optional(&self.designation),
            organization: optional(&self.organization),
            property_owner: optional(&self.property_owner),
            property_schedule: optional(&self.property_schedule),
            relationship_to_property: self.relationship_to_property,
            membership_type: self.membership_type,
            declaration_accepted: self.declaration_accepted,
            proposer_name: optional(&self.proposer_name),
            proposer_number: optional(&self.proposer_number),
            seconder_name: optional(&self.seconder_name),
            seconder_number: optional(&self.seconder_number),
        })
    }

    fn slot_mut(&mut self, kind: DocumentKind) -> &mut DocumentSlot {
        self.documents.entry(kind).or_default()
    }
}

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();

    (!value.is_empty()).then(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX: u64 = 5 * 1024 * 1024;

    fn pdf(name: &str) -> FileUpload {
        FileUpload::new(name, Some("application/pdf".to_string()), vec![1; 128])
    }

    fn photo() -> FileUpload {
        FileUpload::new("photo.jpg", Some("image/jpeg".to_string()), vec![1; 128])
    }

    fn life_form() -> MembershipForm {
        let mut form = MembershipForm {
            name: "Rahim Uddin".to_string(),
            father_name: "Karim Uddin".to_string(),
            mobile: "01711000000".to_string(),
            membership_type: Some(MembershipType::Life),
            declaration_accepted: true,
            ..Default::default()
        };

        form.stage_document(DocumentKind::Photo, photo(), MAX).unwrap();
        form.stage_document(DocumentKind::Nid, pdf("nid.pdf"), MAX).unwrap();
        form.stage_document(DocumentKind::TaxReceipt, pdf("tax.pdf"), MAX).unwrap();

        form
    }

    #[test]
    fn removing_a_child_keeps_other_keys_stable() {
        let mut children = ChildList::default();
        let first = children.add();
        let second = children.add();
        let third = children.add();

        assert!(children.remove(second));
        assert!(children.update(third, |c| c.name = "Tahsin".to_string()));
        assert!(!children.update(second, |c| c.name = "ghost".to_string()));

        assert_eq!(children.len(), 2);
        assert_eq!(children.get(first).map(|c| c.name.as_str()), Some(""));
        assert_eq!(children.get(third).map(|c| c.name.as_str()), Some("Tahsin"));

        let fourth = children.add();
        assert_ne!(fourth, second);
    }

    #[test]
    fn blank_children_are_dropped_and_ages_parsed() {
        let mut children = ChildList::default();
        let key = children.add();
        children.add();
        children.update(key, |c| {
            c.name = "Ayesha".to_string();
            c.age = "7".to_string();
            c.gender = ChildGender::Female;
        });

        assert_eq!(
            children.to_children().unwrap(),
            vec![Child {
                name: "Ayesha".to_string(),
                age: Some(7),
                gender: ChildGender::Female,
            }]
        );

        children.update(key, |c| c.age = "seven".to_string());
        assert_eq!(
            children.to_children(),
            Err(ValidationError::InvalidNumber("Child age"))
        );
    }

    #[test]
    fn life_application_with_base_documents_is_valid() {
        assert_eq!(life_form().validate(WorkflowMode::Public), Ok(()));
    }

    #[test]
    fn switching_to_corporate_requires_more_documents() {
        let mut form = life_form();
        form.membership_type = Some(MembershipType::Corporate);

        assert_eq!(
            form.validate(WorkflowMode::Public),
            Err(ValidationError::MissingDocument(DocumentKind::LeaseAgreement))
        );

        form.stage_document(DocumentKind::LeaseAgreement, pdf("lease.pdf"), MAX)
            .unwrap();
        form.stage_document(DocumentKind::TinBinCertificate, pdf("tin.pdf"), MAX)
            .unwrap();

        let err = form.validate(WorkflowMode::Public).unwrap_err();
        assert_eq!(err, ValidationError::MissingDocument(DocumentKind::TradeLicense));
        assert_eq!(err.to_string(), "Trade license is required");

        form.membership_type = Some(MembershipType::Associate);
        assert_eq!(form.validate(WorkflowMode::Public), Ok(()));
    }

    #[test]
    fn declaration_is_only_required_from_the_public() {
        let mut form = life_form();
        form.declaration_accepted = false;

        assert_eq!(
            form.validate(WorkflowMode::Public),
            Err(ValidationError::DeclarationNotAccepted)
        );
        assert_eq!(form.validate(WorkflowMode::Admin), Ok(()));
    }

    #[test]
    fn rejected_file_keeps_previous_selection() {
        let mut form = life_form();
        let huge = FileUpload::new("nid.pdf", None, vec![0; 6 * 1024 * 1024]);

        assert_eq!(
            form.stage_document(DocumentKind::Nid, huge, MAX),
            Err(ValidationError::FileTooLarge { max_mb: 5 })
        );
        assert_eq!(
            form.document(DocumentKind::Nid)
                .and_then(|slot| slot.staged.as_ref())
                .map(|file| file.name.as_str()),
            Some("nid.pdf")
        );
        assert_eq!(form.document(DocumentKind::Nid).unwrap().staged.as_ref().unwrap().size(), 128);
    }

    #[test]
    fn profile_trims_and_omits_blank_values() {
        let mut form = life_form();
        form.date_of_birth = "1980-05-17".to_string();
        form.email = "   ".to_string();
        form.gender = Some(Gender::Male);

        let profile = form.to_profile().unwrap();

        assert_eq!(profile.email, None);
        assert_eq!(profile.date_of_birth.map(|d| d.to_string()).as_deref(), Some("1980-05-17"));

        let body = serde_json::to_value(&profile).unwrap();
        assert_eq!(body["gender"], "M");
        assert!(body.get("email").is_none());
    }
}
