// Start of file: /src/utils/mod.rs

/*
    * Error pages, the response wrapper middleware and time formatting.
*/

pub mod error_handler;
pub mod response_handler;
pub mod time;

pub use error_handler::{find_cause, handle_global_error, ErrorMessage, PageError};
pub use response_handler::error_page_wrapper;

// End of file: /src/utils/mod.rs
