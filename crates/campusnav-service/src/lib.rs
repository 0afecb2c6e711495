//! Campus navigation HTTP service.
//!
//! Thin axum glue over `campusnav-lib`: handlers parse the request, call the
//! library, and format the response. All business logic lives in the library
//! crate.

#![deny(warnings)]

pub mod error;
pub mod logging;
pub mod routes;
pub mod state;

pub use error::{ApiError, DATASET_UNAVAILABLE};
pub use logging::{init_logging, LogFormat, LoggingConfig};
pub use routes::create_router;
pub use state::AppState;
