pub mod admin;
pub mod contact;
pub mod home;
pub mod membership;
pub mod not_found;
pub mod registrations;

pub use contact::Contact;
pub use home::Home;
pub use membership::ApplyMembership;
pub use not_found::NotFound;
pub use registrations::{AdoptGate, AdoptRoad, ApplyCarSticker};
