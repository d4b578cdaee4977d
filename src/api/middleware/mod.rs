pub mod session;

pub use session::{require_admin, session_middleware, Session};
