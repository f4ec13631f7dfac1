//! HTTP request handlers for the patients API.
//!
//! - [`list`] - List every patient
//! - [`read`] - Read a patient by id
//! - [`create`] - Create a patient
//! - [`update`] - Replace a patient's fields
//! - [`delete`] - Delete a patient
//! - [`root`] - Welcome message and the catch-all fallback

pub mod create;
pub mod delete;
pub mod list;
pub mod read;
pub mod root;
pub mod update;

// Re-export handlers for convenience
pub use create::create_handler;
pub use delete::delete_handler;
pub use list::list_handler;
pub use read::read_handler;
pub use root::{fallback_handler, root_handler};
pub use update::update_handler;
