//! Response formatting for the patients API.
//!
//! - [`envelope`] - The uniform `statusCode` / `httpStatus` / `message` /
//!   `timestamp` / `data` wrapper

pub mod envelope;

pub use envelope::{Envelope, HttpStatus, TIMESTAMP_FORMAT};
