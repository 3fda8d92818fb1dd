//! Typed data model for the per-contact metadata rows of the contact store.
//!
//! Each row is a mimetype-tagged list of string columns ([`MetadataRecord`]);
//! the kind modules wrap a record in an accessor that translates between the
//! stringified integer codes the store persists and the enum constants the
//! rest of the application works with.

pub mod email;
pub mod im;
pub mod nickname;
pub mod phone;
pub mod record;

use thiserror::Error;

pub use record::{FIELD_COUNT, MetadataKind, MetadataRecord};

#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("expected mimetype {expected}, got {actual}")]
    MimetypeMismatch {
        expected: &'static str,
        actual: String,
    },
    #[error("field index {0} out of range")]
    FieldIndex(usize),
    #[error("field {index} holds no value")]
    FieldMissing { index: usize },
    #[error("field {index} is not a numeric code: {value}")]
    FieldNotNumeric { index: usize, value: String },
}

/// Typed view over a [`MetadataRecord`] of one fixed mimetype.
///
/// The mimetype is set when the record is created and has no mutator; a
/// record can only enter a typed view through [`TypedMetadata::from_record`],
/// which rejects rows of any other kind.
pub trait TypedMetadata: Sized {
    /// The mimetype identifying this row kind in the contact store.
    fn mimetype() -> &'static str;

    /// Wrap a raw record, rejecting records of a different kind with
    /// [`MetadataError::MimetypeMismatch`].
    fn from_record(record: MetadataRecord) -> Result<Self, MetadataError>;

    fn as_record(&self) -> &MetadataRecord;

    fn into_record(self) -> MetadataRecord;
}
