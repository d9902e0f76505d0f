pub mod manager;
pub mod notice;
pub mod registration;
pub mod resource;
pub mod theme;

pub use manager::ResourceManager;
pub use notice::{Notice, NoticeKind};
pub use registration::{Registration, RegistrationState};
pub use resource::{Modal, ResourceState};
pub use theme::ThemeContext;
