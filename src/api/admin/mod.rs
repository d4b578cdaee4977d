pub mod handler;
pub mod routes;

pub use routes::admin_routes;
