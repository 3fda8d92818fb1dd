use serde::{Deserialize, Serialize};

use crate::email::EmailMetadata;
use crate::im::ImMetadata;
use crate::nickname::NicknameMetadata;
use crate::phone::PhoneMetadata;
use crate::MetadataError;

/// Number of generic data columns in a row, mirroring the contact store's
/// data1..data15 layout.
pub const FIELD_COUNT: usize = 15;

/// One raw metadata row: a mimetype plus an ordered list of optional string
/// columns addressed by zero-based index.
///
/// The mimetype is fixed at construction. How the columns are interpreted is
/// up to the typed views; the record itself only moves strings in and out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataRecord {
    mimetype: String,
    fields: [Option<String>; FIELD_COUNT],
}

impl MetadataRecord {
    pub fn new(mimetype: impl Into<String>) -> Self {
        Self {
            mimetype: mimetype.into(),
            fields: Default::default(),
        }
    }

    pub fn mimetype(&self) -> &str {
        &self.mimetype
    }

    pub fn kind(&self) -> MetadataKind {
        MetadataKind::from(self.mimetype.as_str())
    }

    /// Read a column. Unset and out-of-range both read as absent.
    pub fn data(&self, index: usize) -> Option<&str> {
        self.fields.get(index).and_then(|field| field.as_deref())
    }

    pub fn set_data(&mut self, index: usize, value: impl Into<String>) -> Result<(), MetadataError> {
        let field = self
            .fields
            .get_mut(index)
            .ok_or(MetadataError::FieldIndex(index))?;
        *field = Some(value.into());
        Ok(())
    }

    pub fn clear_data(&mut self, index: usize) -> Result<(), MetadataError> {
        let field = self
            .fields
            .get_mut(index)
            .ok_or(MetadataError::FieldIndex(index))?;
        *field = None;
        Ok(())
    }

    /// Parse a column holding a stringified integer code. Callers decide what
    /// a failure maps to; the typed views map it to their documented default.
    pub fn code_at(&self, index: usize) -> Result<i32, MetadataError> {
        let raw = self
            .data(index)
            .ok_or(MetadataError::FieldMissing { index })?;
        raw.trim()
            .parse()
            .map_err(|_| MetadataError::FieldNotNumeric {
                index,
                value: raw.to_string(),
            })
    }

    pub fn set_code(&mut self, index: usize, code: i32) -> Result<(), MetadataError> {
        self.set_data(index, code.to_string())
    }

    // Typed views write through their fixed column indices, which are always
    // below FIELD_COUNT.
    pub(crate) fn put(&mut self, index: usize, value: impl Into<String>) {
        debug_assert!(index < FIELD_COUNT);
        self.fields[index] = Some(value.into());
    }

    pub(crate) fn put_code(&mut self, index: usize, code: i32) {
        self.put(index, code.to_string());
    }
}

/// Row kinds known to the model.
#[repr(i32)]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MetadataKind {
    Unknown = 0,
    Im = 1,
    Email = 2,
    Phone = 3,
    Nickname = 4,
}

impl MetadataKind {
    pub fn all() -> Vec<MetadataKind> {
        vec![
            MetadataKind::Unknown,
            MetadataKind::Im,
            MetadataKind::Email,
            MetadataKind::Phone,
            MetadataKind::Nickname,
        ]
    }
}

impl std::fmt::Display for MetadataKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_string = match self {
            Self::Unknown => "unknown",
            Self::Im => ImMetadata::MIMETYPE,
            Self::Email => EmailMetadata::MIMETYPE,
            Self::Phone => PhoneMetadata::MIMETYPE,
            Self::Nickname => NicknameMetadata::MIMETYPE,
        };

        write!(f, "{}", as_string)
    }
}

impl From<&str> for MetadataKind {
    fn from(mimetype: &str) -> Self {
        match mimetype {
            ImMetadata::MIMETYPE => Self::Im,
            EmailMetadata::MIMETYPE => Self::Email,
            PhoneMetadata::MIMETYPE => Self::Phone,
            NicknameMetadata::MIMETYPE => Self::Nickname,
            _ => Self::Unknown,
        }
    }
}

impl From<String> for MetadataKind {
    fn from(mimetype: String) -> Self {
        Self::from(mimetype.as_str())
    }
}
