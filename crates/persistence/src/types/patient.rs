//! Patient record types.
//!
//! [`PatientInput`] is the client-supplied shape accepted by create and
//! update. [`Patient`] is a stored row: the storage-assigned id plus the
//! input fields.

use serde::{Deserialize, Serialize};

/// Client-supplied patient fields.
///
/// Every field is free-form text and optional. Absent fields are stored as
/// `NULL` and left out of JSON output. Unknown JSON keys are ignored.
///
/// # Examples
///
/// ```
/// use patients_persistence::types::PatientInput;
///
/// let input: PatientInput = serde_json::from_str(
///     r#"{"first_name": "Ada", "last_name": "Lovelace", "status": "admitted"}"#,
/// )
/// .unwrap();
///
/// assert_eq!(input.first_name.as_deref(), Some("Ada"));
/// assert!(input.email.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientInput {
    /// Given name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// Family name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// Contact email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Postal address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Current diagnosis.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagnosis: Option<String>,

    /// Contact phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Care status, e.g. "admitted".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Link to a photo of the patient.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl PatientInput {
    /// Column values in [`PATIENT_COLUMNS`] order, ready to bind as
    /// statement parameters.
    pub fn values(&self) -> [Option<&str>; 8] {
        [
            self.first_name.as_deref(),
            self.last_name.as_deref(),
            self.email.as_deref(),
            self.address.as_deref(),
            self.diagnosis.as_deref(),
            self.phone.as_deref(),
            self.status.as_deref(),
            self.image_url.as_deref(),
        ]
    }

    /// Attaches a storage id, producing a full record.
    pub fn with_id(self, id: i64) -> Patient {
        Patient { id, fields: self }
    }
}

/// Non-id columns of the `patients` table, in binding order.
pub const PATIENT_COLUMNS: [&str; 8] = [
    "first_name",
    "last_name",
    "email",
    "address",
    "diagnosis",
    "phone",
    "status",
    "image_url",
];

/// A stored patient record.
///
/// Serializes as a flat JSON object: `id` followed by the input fields.
///
/// ```
/// use patients_persistence::types::PatientInput;
///
/// let patient = PatientInput {
///     first_name: Some("Ada".to_string()),
///     ..Default::default()
/// }
/// .with_id(7);
///
/// let json = serde_json::to_value(&patient).unwrap();
/// assert_eq!(json, serde_json::json!({"id": 7, "first_name": "Ada"}));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    /// Storage-assigned identifier. Never changes after creation.
    pub id: i64,

    /// Client-supplied fields.
    #[serde(flatten)]
    pub fields: PatientInput,
}

impl Patient {
    /// Returns the patient id.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Returns the client-supplied fields.
    pub fn fields(&self) -> &PatientInput {
        &self.fields
    }

    /// Consumes the record and returns the client-supplied fields.
    pub fn into_fields(self) -> PatientInput {
        self.fields
    }
}
