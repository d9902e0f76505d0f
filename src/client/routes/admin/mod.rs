mod applications;
mod dashboard;
mod resources;

pub use applications::{Applications, CreateMember, ReviewApplication};
pub use dashboard::AdminDashboard;
pub use resources::{
    AdminCarStickers, AdminEvents, AdminGallery, AdminGateAdoptions, AdminMembers, AdminNews,
    AdminRoadAdoptions,
};
