use dioxus::prelude::*;

use crate::{
    client::components::registration_page,
    model::{
        adoption::{GateAdoptionForm, RoadAdoptionForm},
        car_sticker::CarStickerForm,
    },
};

const ADOPTION_ADMIN_FIELDS: &[&str] = &[
    "status",
    "payment_status",
    "payment_amount",
    "payment_date",
    "receipt_number",
    "notes",
];

const STICKER_ADMIN_FIELDS: &[&str] = &["sticker_number", "issue_date", "expiry_date", "status"];

#[component]
pub fn AdoptGate() -> Element {
    registration_page::<GateAdoptionForm>(
        "Adopt a gate",
        "Sponsor the upkeep of one of the society's gates for a period of your choice.",
        ADOPTION_ADMIN_FIELDS,
    )
}

#[component]
pub fn AdoptRoad() -> Element {
    registration_page::<RoadAdoptionForm>(
        "Adopt a road",
        "Sponsor the maintenance of a road in your area for a period of your choice.",
        ADOPTION_ADMIN_FIELDS,
    )
}

#[component]
pub fn ApplyCarSticker() -> Element {
    registration_page::<CarStickerForm>(
        "Car sticker",
        "Register your vehicle to receive a society car sticker. The sticker number is issued by the office.",
        STICKER_ADMIN_FIELDS,
    )
}
