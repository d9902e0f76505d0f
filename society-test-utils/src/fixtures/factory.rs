//! JSON records with default test values.
//!
//! Each factory returns the record as the API would send it inside `data`; tests adjust
//! individual fields with `record["field"] = json!(...)` when they need to.

use chrono::{Days, Utc};
use serde_json::{json, Value};

use crate::constant::TEST_STORAGE_URL;

/// Date `days` from today, formatted `YYYY-MM-DD`
pub fn days_from_today(days: u64) -> String {
    let today = Utc::now().date_naive();

    today
        .checked_add_days(Days::new(days))
        .unwrap_or(today)
        .format("%Y-%m-%d")
        .to_string()
}

/// URL a mock upload endpoint reports for a stored file
pub fn stored_file_url(folder: &str, name: &str) -> String {
    format!("{}/{}/{}", TEST_STORAGE_URL, folder, name)
}

pub fn member(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "membership_number": format!("M-{}", id),
        "zone": "Zone 1",
        "name": name,
        "mobile": "01700000000",
        "membership_type": "Life",
        "status": "active",
        "membership_date": "2024-01-15"
    })
}

pub fn event(id: &str, title: &str, event_date: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "description": "Annual gathering of residents",
        "event_date": event_date,
        "event_time": "17:00",
        "location": "Community hall",
        "status": "upcoming"
    })
}

pub fn news_article(id: &str, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "content": "The water supply will be interrupted on Sunday morning.",
        "summary": "Water supply interruption",
        "author": "Secretary",
        "published_date": "2024-03-01",
        "status": "published"
    })
}

pub fn gallery_item(id: &str, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "category": "events",
        "type": "image",
        "image": stored_file_url("gallery", "photo.jpg")
    })
}

pub fn car_sticker(id: &str, owner_name: &str, vehicle_number: &str) -> Value {
    json!({
        "id": id,
        "sticker_number": format!("CS-{}", id),
        "owner_name": owner_name,
        "vehicle_number": vehicle_number,
        "vehicle_type": "Car",
        "phone": "01800000000",
        "status": "active"
    })
}

pub fn gate_adoption(id: &str, adopter_name: &str, gate_road_number: &str) -> Value {
    json!({
        "id": id,
        "adopter_type": "Personal",
        "adopter_name": adopter_name,
        "resident_type": "Permanent",
        "phone": "01900000000",
        "gate_road_number": gate_road_number,
        "start_date": "2024-01-01",
        "end_date": "2024-12-31",
        "status": "pending",
        "payment_status": "pending"
    })
}

/// A pending application with every document a Life membership needs already on record
pub fn membership_application(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "father_name": "Abdul Karim",
        "mobile": "01711111111",
        "email": "applicant@example.com",
        "date_of_birth": "1985-06-01",
        "gender": "M",
        "membership_type": "Life",
        "children": [
            { "name": "Ayesha", "age": 8, "gender": "Female" }
        ],
        "photo_url": stored_file_url("membership/photos", "photo.jpg"),
        "nid_url": stored_file_url("membership/nid", "nid.pdf"),
        "tax_receipt_url": stored_file_url("membership/tax-receipts", "tax.pdf"),
        "status": "pending",
        "created_at": "2024-05-01T10:00:00Z"
    })
}

/// Application saved by an older form that stored nulls for empty fields
pub fn sparse_membership_application(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "mobile": "01722222222",
        "membership_type": "Affiliate",
        "children": null,
        "declaration_accepted": null,
        "photo_url": null,
        "status": "pending"
    })
}
