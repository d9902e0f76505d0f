//! Gate and road adoption registrations.
//!
//! Both registrations share the adopter and term fields; they differ only in what is
//! adopted. The date range and the status lifecycle are checked before any request.

use crate::{
    client::{
        error::ValidationError,
        resource::{format_date, parse_date, validate_fields, FieldKind, FieldSpec, Resource, ResourceForm},
    },
    model::adoption::{
        AdopterDetails, AdopterForm, AdoptionTerm, GateAdoption, GateAdoptionForm, RoadAdoption,
        RoadAdoptionForm, TermForm,
    },
};

const ADOPTER_TYPE_OPTIONS: &[&str] = &["Personal", "Corporate", "Family"];
const RESIDENT_TYPE_OPTIONS: &[&str] = &["Permanent", "Tenant"];
const STATUS_OPTIONS: &[&str] = &["pending", "approved", "rejected", "active", "expired"];
const PAYMENT_OPTIONS: &[&str] = &["pending", "paid", "overdue"];

const ADOPTER_FIELDS: [FieldSpec; 7] = [
    FieldSpec::new("adopter_type", "Adopter type", FieldKind::Select(ADOPTER_TYPE_OPTIONS)).required(),
    FieldSpec::new("adopter_name", "Adopter name", FieldKind::Text).required(),
    FieldSpec::new("resident_type", "Resident type", FieldKind::Select(RESIDENT_TYPE_OPTIONS)).required(),
    FieldSpec::new("membership_number", "Membership number", FieldKind::Text),
    FieldSpec::new("phone", "Phone", FieldKind::Tel).required(),
    FieldSpec::new("email", "Email", FieldKind::Email),
    FieldSpec::new("address", "Address", FieldKind::TextArea),
];

const TERM_FIELDS: [FieldSpec; 8] = [
    FieldSpec::new("start_date", "Start date", FieldKind::Date).required(),
    FieldSpec::new("end_date", "End date", FieldKind::Date).required(),
    FieldSpec::new("status", "Status", FieldKind::Select(STATUS_OPTIONS)).required(),
    FieldSpec::new("payment_status", "Payment status", FieldKind::Select(PAYMENT_OPTIONS)).required(),
    FieldSpec::new("payment_amount", "Payment amount", FieldKind::Number),
    FieldSpec::new("payment_date", "Payment date", FieldKind::Date),
    FieldSpec::new("receipt_number", "Receipt number", FieldKind::Text),
    FieldSpec::new("notes", "Notes", FieldKind::TextArea),
];

const GATE_FIELDS: &[FieldSpec] = &[
    ADOPTER_FIELDS[0],
    ADOPTER_FIELDS[1],
    ADOPTER_FIELDS[2],
    ADOPTER_FIELDS[3],
    ADOPTER_FIELDS[4],
    ADOPTER_FIELDS[5],
    ADOPTER_FIELDS[6],
    FieldSpec::new("gate_road_number", "Gate road number", FieldKind::Text).required(),
    TERM_FIELDS[0],
    TERM_FIELDS[1],
    TERM_FIELDS[2],
    TERM_FIELDS[3],
    TERM_FIELDS[4],
    TERM_FIELDS[5],
    TERM_FIELDS[6],
    TERM_FIELDS[7],
];

const ROAD_FIELDS: &[FieldSpec] = &[
    ADOPTER_FIELDS[0],
    ADOPTER_FIELDS[1],
    ADOPTER_FIELDS[2],
    ADOPTER_FIELDS[3],
    ADOPTER_FIELDS[4],
    ADOPTER_FIELDS[5],
    ADOPTER_FIELDS[6],
    FieldSpec::new("road_number", "Road number", FieldKind::Text).required(),
    FieldSpec::new("area", "Area", FieldKind::Text).required(),
    TERM_FIELDS[0],
    TERM_FIELDS[1],
    TERM_FIELDS[2],
    TERM_FIELDS[3],
    TERM_FIELDS[4],
    TERM_FIELDS[5],
    TERM_FIELDS[6],
    TERM_FIELDS[7],
];

impl AdopterForm {
    fn from_details(details: &AdopterDetails) -> Self {
        Self {
            adopter_type: details.adopter_type,
            adopter_name: details.adopter_name.clone(),
            resident_type: details.resident_type,
            membership_number: details.membership_number.clone().unwrap_or_default(),
            phone: details.phone.clone(),
            email: details.email.clone().unwrap_or_default(),
            address: details.address.clone().unwrap_or_default(),
        }
    }

    fn value(&self, key: &str) -> Option<String> {
        let value = match key {
            "adopter_type" => self.adopter_type.as_str().to_string(),
            "adopter_name" => self.adopter_name.clone(),
            "resident_type" => self.resident_type.as_str().to_string(),
            "membership_number" => self.membership_number.clone(),
            "phone" => self.phone.clone(),
            "email" => self.email.clone(),
            "address" => self.address.clone(),
            _ => return None,
        };

        Some(value)
    }

    fn set_value(&mut self, key: &str, value: String) {
        match key {
            "adopter_type" => {
                if let Ok(adopter_type) = value.parse() {
                    self.adopter_type = adopter_type;
                }
            }
            "adopter_name" => self.adopter_name = value,
            "resident_type" => {
                if let Ok(resident_type) = value.parse() {
                    self.resident_type = resident_type;
                }
            }
            "membership_number" => self.membership_number = value,
            "phone" => self.phone = value,
            "email" => self.email = value,
            "address" => self.address = value,
            _ => {}
        }
    }
}

impl TermForm {
    fn from_term(term: &AdoptionTerm) -> Self {
        Self {
            start_date: term.start_date.format("%Y-%m-%d").to_string(),
            end_date: term.end_date.format("%Y-%m-%d").to_string(),
            status: term.status,
            payment_status: term.payment_status,
            payment_amount: term
                .payment_amount
                .map(|amount| amount.to_string())
                .unwrap_or_default(),
            payment_date: format_date(term.payment_date),
            receipt_number: term.receipt_number.clone().unwrap_or_default(),
            notes: term.notes.clone().unwrap_or_default(),
        }
    }

    fn value(&self, key: &str) -> Option<String> {
        let value = match key {
            "start_date" => self.start_date.clone(),
            "end_date" => self.end_date.clone(),
            "status" => self.status.as_str().to_string(),
            "payment_status" => self.payment_status.as_str().to_string(),
            "payment_amount" => self.payment_amount.clone(),
            "payment_date" => self.payment_date.clone(),
            "receipt_number" => self.receipt_number.clone(),
            "notes" => self.notes.clone(),
            _ => return None,
        };

        Some(value)
    }

    fn set_value(&mut self, key: &str, value: String) {
        match key {
            "start_date" => self.start_date = value,
            "end_date" => self.end_date = value,
            "status" => {
                if let Ok(status) = value.parse() {
                    self.status = status;
                }
            }
            "payment_status" => {
                if let Ok(status) = value.parse() {
                    self.payment_status = status;
                }
            }
            "payment_amount" => self.payment_amount = value,
            "payment_date" => self.payment_date = value,
            "receipt_number" => self.receipt_number = value,
            "notes" => self.notes = value,
            _ => {}
        }
    }

    /// The sponsorship period must not end before it starts.
    pub fn validate_range(&self) -> Result<(), ValidationError> {
        let start = parse_date(&self.start_date, "Start date")?;
        let end = parse_date(&self.end_date, "End date")?;

        if end < start {
            return Err(ValidationError::InvalidDateRange);
        }

        Ok(())
    }
}

fn validate_transition(current: &AdoptionTerm, form: &TermForm) -> Result<(), ValidationError> {
    if current.status.can_transition_to(form.status) {
        Ok(())
    } else {
        Err(ValidationError::InvalidStatusTransition {
            from: current.status.as_str(),
            to: form.status.as_str(),
        })
    }
}

impl Resource for GateAdoption {
    type Form = GateAdoptionForm;

    const PATH: &'static str = "adopt-a-gate";
    const LABEL: &'static str = "Gate adoption";

    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.adopter.adopter_name.as_str(),
            self.gate_road_number.as_str(),
            self.adopter.phone.as_str(),
            self.adopter.email.as_deref().unwrap_or_default(),
        ]
    }

    fn to_form(&self) -> GateAdoptionForm {
        GateAdoptionForm {
            adopter: AdopterForm::from_details(&self.adopter),
            gate_road_number: self.gate_road_number.clone(),
            term: TermForm::from_term(&self.term),
        }
    }

    fn columns() -> &'static [&'static str] {
        &["Adopter", "Gate road", "Period", "Status", "Payment"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.adopter.adopter_name.clone(),
            self.gate_road_number.clone(),
            format!("{} – {}", self.term.start_date, self.term.end_date),
            self.term.status.as_str().to_string(),
            self.term.payment_status.as_str().to_string(),
        ]
    }

    fn validate_update(&self, form: &GateAdoptionForm) -> Result<(), ValidationError> {
        validate_transition(&self.term, &form.term)
    }
}

impl ResourceForm for GateAdoptionForm {
    fn fields() -> &'static [FieldSpec] {
        GATE_FIELDS
    }

    fn value(&self, key: &str) -> String {
        if key == "gate_road_number" {
            return self.gate_road_number.clone();
        }

        self.adopter
            .value(key)
            .or_else(|| self.term.value(key))
            .unwrap_or_default()
    }

    fn set_value(&mut self, key: &str, value: String) {
        if key == "gate_road_number" {
            self.gate_road_number = value;
        } else if self.adopter.value(key).is_some() {
            self.adopter.set_value(key, value);
        } else {
            self.term.set_value(key, value);
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        validate_fields(self)?;
        self.term.validate_range()
    }
}

impl Resource for RoadAdoption {
    type Form = RoadAdoptionForm;

    const PATH: &'static str = "adopt-a-road";
    const LABEL: &'static str = "Road adoption";

    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.adopter.adopter_name.as_str(),
            self.road_number.as_str(),
            self.area.as_str(),
            self.adopter.phone.as_str(),
        ]
    }

    fn to_form(&self) -> RoadAdoptionForm {
        RoadAdoptionForm {
            adopter: AdopterForm::from_details(&self.adopter),
            road_number: self.road_number.clone(),
            area: self.area.clone(),
            term: TermForm::from_term(&self.term),
        }
    }

    fn columns() -> &'static [&'static str] {
        &["Adopter", "Road", "Area", "Period", "Status", "Payment"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.adopter.adopter_name.clone(),
            self.road_number.clone(),
            self.area.clone(),
            format!("{} – {}", self.term.start_date, self.term.end_date),
            self.term.status.as_str().to_string(),
            self.term.payment_status.as_str().to_string(),
        ]
    }

    fn validate_update(&self, form: &RoadAdoptionForm) -> Result<(), ValidationError> {
        validate_transition(&self.term, &form.term)
    }
}

impl ResourceForm for RoadAdoptionForm {
    fn fields() -> &'static [FieldSpec] {
        ROAD_FIELDS
    }

    fn value(&self, key: &str) -> String {
        match key {
            "road_number" => self.road_number.clone(),
            "area" => self.area.clone(),
            key => self
                .adopter
                .value(key)
                .or_else(|| self.term.value(key))
                .unwrap_or_default(),
        }
    }

    fn set_value(&mut self, key: &str, value: String) {
        match key {
            "road_number" => self.road_number = value,
            "area" => self.area = value,
            key if self.adopter.value(key).is_some() => self.adopter.set_value(key, value),
            key => self.term.set_value(key, value),
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        validate_fields(self)?;
        self.term.validate_range()
    }
}
