pub mod handler;
pub mod routes;

pub use routes::post_routes;
