pub mod layout;
pub mod navbar;
pub mod resource_panel;

pub use layout::AdminLayout;
pub use navbar::AdminNavbar;
pub use resource_panel::resource_page;
