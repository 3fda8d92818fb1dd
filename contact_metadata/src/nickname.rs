use serde::{Deserialize, Serialize};

use crate::record::MetadataRecord;
use crate::{MetadataError, TypedMetadata};

/// Typed view over a nickname row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NicknameMetadata {
    record: MetadataRecord,
}

impl NicknameMetadata {
    pub const MIMETYPE: &'static str = "vnd.android.cursor.item/nickname";

    const NAME_FIELD: usize = 0;
    const TYPE_FIELD: usize = 1;
    const TYPE_LABEL_FIELD: usize = 2;

    pub fn new() -> Self {
        Self {
            record: MetadataRecord::new(Self::MIMETYPE),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.record.data(Self::NAME_FIELD)
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.record.put(Self::NAME_FIELD, name);
    }

    /// Missing or unrecognized type columns read as
    /// [`NicknameType::Default`].
    pub fn nickname_type(&self) -> NicknameType {
        self.record
            .code_at(Self::TYPE_FIELD)
            .ok()
            .and_then(NicknameType::from_code)
            .unwrap_or(NicknameType::Default)
    }

    pub fn set_nickname_type(&mut self, nickname_type: NicknameType) {
        self.record.put_code(Self::TYPE_FIELD, nickname_type.code());
    }

    pub fn custom_type_label(&self) -> Option<&str> {
        self.record.data(Self::TYPE_LABEL_FIELD)
    }

    pub fn set_custom_type_label(&mut self, label: impl Into<String>) {
        self.record.put(Self::TYPE_LABEL_FIELD, label);
    }
}

impl Default for NicknameMetadata {
    fn default() -> Self {
        Self::new()
    }
}

impl TypedMetadata for NicknameMetadata {
    fn mimetype() -> &'static str {
        Self::MIMETYPE
    }

    fn from_record(record: MetadataRecord) -> Result<Self, MetadataError> {
        if record.mimetype() != Self::MIMETYPE {
            return Err(MetadataError::MimetypeMismatch {
                expected: Self::MIMETYPE,
                actual: record.mimetype().to_string(),
            });
        }
        Ok(Self { record })
    }

    fn as_record(&self) -> &MetadataRecord {
        &self.record
    }

    fn into_record(self) -> MetadataRecord {
        self.record
    }
}

/// Nickname type class.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NicknameType {
    Custom = 0,
    Default = 1,
    OtherName = 2,
    MaidenName = 3,
    ShortName = 4,
    Initials = 5,
}

impl NicknameType {
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Custom),
            1 => Some(Self::Default),
            2 => Some(Self::OtherName),
            3 => Some(Self::MaidenName),
            4 => Some(Self::ShortName),
            5 => Some(Self::Initials),
            _ => None,
        }
    }

    pub fn all() -> Vec<NicknameType> {
        vec![
            Self::Custom,
            Self::Default,
            Self::OtherName,
            Self::MaidenName,
            Self::ShortName,
            Self::Initials,
        ]
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    #[test]
    fn every_nickname_type_round_trips() {
        for nickname_type in NicknameType::all() {
            let mut nick = NicknameMetadata::new();
            nick.set_nickname_type(nickname_type);
            assert_eq!(nick.nickname_type(), nickname_type);
        }
    }

    #[test]
    fn unset_type_reads_as_default() {
        let nick = NicknameMetadata::new();
        assert_eq!(nick.nickname_type(), NicknameType::Default);
    }

    #[test]
    fn name_passes_through() {
        let mut nick = NicknameMetadata::new();
        nick.set_name("Ada");
        assert_eq!(nick.name(), Some("Ada"));
    }
}
