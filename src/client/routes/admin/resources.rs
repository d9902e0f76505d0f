use dioxus::prelude::*;

use crate::{
    client::components::admin::resource_page,
    model::{
        adoption::{GateAdoption, RoadAdoption},
        car_sticker::CarSticker,
        event::Event,
        gallery::GalleryItem,
        member::Member,
        news::NewsArticle,
    },
};

#[component]
pub fn AdminMembers() -> Element {
    resource_page::<Member>("Members")
}

#[component]
pub fn AdminEvents() -> Element {
    resource_page::<Event>("Events")
}

#[component]
pub fn AdminGallery() -> Element {
    resource_page::<GalleryItem>("Gallery")
}

#[component]
pub fn AdminNews() -> Element {
    resource_page::<NewsArticle>("News")
}

#[component]
pub fn AdminCarStickers() -> Element {
    resource_page::<CarSticker>("Car Stickers")
}

#[component]
pub fn AdminGateAdoptions() -> Element {
    resource_page::<GateAdoption>("Gate Adoptions")
}

#[component]
pub fn AdminRoadAdoptions() -> Element {
    resource_page::<RoadAdoption>("Road Adoptions")
}
