pub mod handlers;
pub mod models;
pub mod params;
pub mod repository;
pub mod resolver;
pub mod service;

pub use handlers::*;
pub use models::*;
pub use params::*;
pub use repository::*;
pub use service::*;
