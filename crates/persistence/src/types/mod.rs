//! Core types for the persistence layer.
//!
//! - [`PatientInput`] - Client-supplied patient fields
//! - [`Patient`] - A stored patient row with its assigned id

mod patient;

pub use patient::{PATIENT_COLUMNS, Patient, PatientInput};
