use crate::{
    client::resource::{format_date, FieldKind, FieldSpec, Resource, ResourceForm},
    model::member::{Member, MemberForm, ZONES},
};

const TYPE_OPTIONS: &[&str] = &["Life", "Affiliate", "Associate", "Corporate"];
const STATUS_OPTIONS: &[&str] = &["active", "inactive", "suspended"];

const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("membership_number", "Membership number", FieldKind::Text).required(),
    FieldSpec::new("zone", "Zone", FieldKind::Select(&ZONES)).required(),
    FieldSpec::new("name", "Name", FieldKind::Text).required(),
    FieldSpec::new("name_local", "Name (local script)", FieldKind::Text),
    FieldSpec::new("email", "Email", FieldKind::Email),
    FieldSpec::new("mobile", "Mobile", FieldKind::Tel).required(),
    FieldSpec::new("membership_type", "Membership type", FieldKind::Select(TYPE_OPTIONS)),
    FieldSpec::new("status", "Status", FieldKind::Select(STATUS_OPTIONS)).required(),
    FieldSpec::new("membership_date", "Member since", FieldKind::Date),
];

impl Resource for Member {
    type Form = MemberForm;

    const PATH: &'static str = "members";
    const LIST_PATH: &'static str = "members/list";
    const LABEL: &'static str = "Member";

    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.membership_number.as_deref().unwrap_or_default(),
            self.mobile.as_deref().unwrap_or_default(),
            self.email.as_deref().unwrap_or_default(),
        ]
    }

    fn to_form(&self) -> MemberForm {
        MemberForm {
            membership_number: self.membership_number.clone().unwrap_or_default(),
            zone: self.zone.clone().unwrap_or_default(),
            name: self.name.clone(),
            name_local: self.name_local.clone().unwrap_or_default(),
            email: self.email.clone().unwrap_or_default(),
            mobile: self.mobile.clone().unwrap_or_default(),
            membership_type: self.membership_type,
            status: self.status,
            membership_date: format_date(self.membership_date),
        }
    }

    fn columns() -> &'static [&'static str] {
        &["No.", "Name", "Zone", "Mobile", "Type", "Status"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.membership_number.clone().unwrap_or_default(),
            self.name.clone(),
            self.zone.clone().unwrap_or_default(),
            self.mobile.clone().unwrap_or_default(),
            self.membership_type
                .map(|t| t.as_str().to_string())
                .unwrap_or_default(),
            self.status.as_str().to_string(),
        ]
    }
}

impl ResourceForm for MemberForm {
    fn fields() -> &'static [FieldSpec] {
        FIELDS
    }

    fn value(&self, key: &str) -> String {
        match key {
            "membership_number" => self.membership_number.clone(),
            "zone" => self.zone.clone(),
            "name" => self.name.clone(),
            "name_local" => self.name_local.clone(),
            "email" => self.email.clone(),
            "mobile" => self.mobile.clone(),
            "membership_type" => self
                .membership_type
                .map(|t| t.as_str().to_string())
                .unwrap_or_default(),
            "status" => self.status.as_str().to_string(),
            "membership_date" => self.membership_date.clone(),
            _ => String::new(),
        }
    }

    fn set_value(&mut self, key: &str, value: String) {
        match key {
            "membership_number" => self.membership_number = value,
            "zone" => self.zone = value,
            "name" => self.name = value,
            "name_local" => self.name_local = value,
            "email" => self.email = value,
            "mobile" => self.mobile = value,
            "membership_type" => self.membership_type = value.parse().ok(),
            "status" => {
                if let Ok(status) = value.parse() {
                    self.status = status;
                }
            }
            "membership_date" => self.membership_date = value,
            _ => {}
        }
    }
}
