mod app;
pub mod default_route;
pub mod profile_route;

pub use app::*;
