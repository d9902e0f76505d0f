pub mod file;
pub mod timer;
pub mod upload;
pub mod youtube;
