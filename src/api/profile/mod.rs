pub mod handler;
pub mod routes;

pub use routes::profile_routes;
