use crate::{
    client::resource::{format_date, FieldKind, FieldSpec, Resource, ResourceForm},
    model::car_sticker::{CarSticker, CarStickerForm},
};

const STATUS_OPTIONS: &[&str] = &["pending", "active", "expired", "revoked"];

const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("sticker_number", "Sticker number", FieldKind::Text),
    FieldSpec::new("owner_name", "Owner name", FieldKind::Text).required(),
    FieldSpec::new("vehicle_number", "Vehicle number", FieldKind::Text).required(),
    FieldSpec::new("vehicle_type", "Vehicle type", FieldKind::Text),
    FieldSpec::new("phone", "Phone", FieldKind::Tel).required(),
    FieldSpec::new("email", "Email", FieldKind::Email),
    FieldSpec::new("address", "Address", FieldKind::TextArea),
    FieldSpec::new("membership_number", "Membership number", FieldKind::Text),
    FieldSpec::new("issue_date", "Issue date", FieldKind::Date),
    FieldSpec::new("expiry_date", "Expiry date", FieldKind::Date),
    FieldSpec::new("status", "Status", FieldKind::Select(STATUS_OPTIONS)).required(),
];

impl Resource for CarSticker {
    type Form = CarStickerForm;

    const PATH: &'static str = "car-stickers";
    const LABEL: &'static str = "Car sticker";

    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.sticker_number.as_deref().unwrap_or_default(),
            self.owner_name.as_str(),
            self.vehicle_number.as_str(),
            self.phone.as_str(),
        ]
    }

    fn to_form(&self) -> CarStickerForm {
        CarStickerForm {
            sticker_number: self.sticker_number.clone().unwrap_or_default(),
            owner_name: self.owner_name.clone(),
            vehicle_number: self.vehicle_number.clone(),
            vehicle_type: self.vehicle_type.clone().unwrap_or_default(),
            phone: self.phone.clone(),
            email: self.email.clone().unwrap_or_default(),
            address: self.address.clone().unwrap_or_default(),
            membership_number: self.membership_number.clone().unwrap_or_default(),
            issue_date: format_date(self.issue_date),
            expiry_date: format_date(self.expiry_date),
            status: self.status,
        }
    }

    fn columns() -> &'static [&'static str] {
        &["Sticker", "Owner", "Vehicle", "Phone", "Status"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.sticker_number.clone().unwrap_or_default(),
            self.owner_name.clone(),
            self.vehicle_number.clone(),
            self.phone.clone(),
            self.status.as_str().to_string(),
        ]
    }
}

impl ResourceForm for CarStickerForm {
    fn fields() -> &'static [FieldSpec] {
        FIELDS
    }

    fn value(&self, key: &str) -> String {
        match key {
            "sticker_number" => self.sticker_number.clone(),
            "owner_name" => self.owner_name.clone(),
            "vehicle_number" => self.vehicle_number.clone(),
            "vehicle_type" => self.vehicle_type.clone(),
            "phone" => self.phone.clone(),
            "email" => self.email.clone(),
            "address" => self.address.clone(),
            "membership_number" => self.membership_number.clone(),
            "issue_date" => self.issue_date.clone(),
            "expiry_date" => self.expiry_date.clone(),
            "status" => self.status.as_str().to_string(),
            _ => String::new(),
        }
    }

    fn set_value(&mut self, key: &str, value: String) {
        match key {
            "sticker_number" => self.sticker_number = value,
            "owner_name" => self.owner_name = value,
            "vehicle_number" => self.vehicle_number = value,
            "vehicle_type" => self.vehicle_type = value,
            "phone" => self.phone = value,
            "email" => self.email = value,
            "address" => self.address = value,
            "membership_number" => self.membership_number = value,
            "issue_date" => self.issue_date = value,
            "expiry_date" => self.expiry_date = value,
            "status" => {
                if let Ok(status) = value.parse() {
                    self.status = status;
                }
            }
            _ => {}
        }
    }
}
