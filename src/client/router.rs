use dioxus::prelude::*;

use crate::client::{
    components::{admin::AdminLayout, Navbar},
    routes::{
        admin::{
            AdminCarStickers, AdminDashboard, AdminEvents, AdminGallery, AdminGateAdoptions,
            AdminMembers, AdminNews, AdminRoadAdoptions, Applications, CreateMember,
            ReviewApplication,
        },
        AdoptGate, AdoptRoad, ApplyCarSticker, ApplyMembership, Contact, Home,
        NotFound,
    },
};

use crate::client::routes::NotFound as AdminNotFound;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Home {},

    #[route("/membership")]
    ApplyMembership {},

    #[route("/car-sticker")]
    ApplyCarSticker {},

    #[route("/adopt-a-gate")]
    AdoptGate {},

    #[route("/adopt-a-road")]
    AdoptRoad {},

    #[route("/contact")]
    Contact {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },

    #[end_layout]

    #[nest("/admin")]

        #[layout(AdminLayout)]

        #[route("/")]
        AdminDashboard {},

        #[route("/members")]
        AdminMembers {},

        #[route("/members/new")]
        CreateMember {},

        #[route("/applications")]
        Applications {},

        #[route("/applications/:id")]
        ReviewApplication { id: String },

        #[route("/events")]
        AdminEvents {},

        #[route("/gallery")]
        AdminGallery {},

        #[route("/news")]
        AdminNews {},

        #[route("/car-stickers")]
        AdminCarStickers {},

        #[route("/adopt-a-gate")]
        AdminGateAdoptions {},

        #[route("/adopt-a-road")]
        AdminRoadAdoptions {},

        #[route("/:..segments")]
        AdminNotFound { segments: Vec<String> },
}
