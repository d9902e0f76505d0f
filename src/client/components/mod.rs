pub mod admin;
pub mod field;
pub mod membership_form;
pub mod navbar;
pub mod notice;
pub mod page;
pub mod registration_form;
pub mod theme_toggle;

pub use field::FieldInput;
pub use membership_form::MembershipFormSections;
pub use navbar::Navbar;
pub use notice::NoticeBanner;
pub use page::{FormCard, Page};
pub use registration_form::registration_page;
pub use theme_toggle::ThemeToggle;
