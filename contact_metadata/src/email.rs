use serde::{Deserialize, Serialize};

use crate::record::MetadataRecord;
use crate::{MetadataError, TypedMetadata};

/// Typed view over an email row: address, home/work classification and the
/// free-text label for custom types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailMetadata {
    record: MetadataRecord,
}

impl EmailMetadata {
    pub const MIMETYPE: &'static str = "vnd.android.cursor.item/email_v2";

    const ADDRESS_FIELD: usize = 0;
    const TYPE_FIELD: usize = 1;
    const TYPE_LABEL_FIELD: usize = 2;

    pub fn new() -> Self {
        Self {
            record: MetadataRecord::new(Self::MIMETYPE),
        }
    }

    pub fn address(&self) -> Option<&str> {
        self.record.data(Self::ADDRESS_FIELD)
    }

    pub fn set_address(&mut self, address: impl Into<String>) {
        self.record.put(Self::ADDRESS_FIELD, address);
    }

    /// Missing or unrecognized type columns read as [`EmailType::Other`].
    pub fn email_type(&self) -> EmailType {
        self.record
            .code_at(Self::TYPE_FIELD)
            .ok()
            .and_then(EmailType::from_code)
            .unwrap_or(EmailType::Other)
    }

    pub fn set_email_type(&mut self, email_type: EmailType) {
        self.record.put_code(Self::TYPE_FIELD, email_type.code());
    }

    pub fn custom_type_label(&self) -> Option<&str> {
        self.record.data(Self::TYPE_LABEL_FIELD)
    }

    pub fn set_custom_type_label(&mut self, label: impl Into<String>) {
        self.record.put(Self::TYPE_LABEL_FIELD, label);
    }
}

impl Default for EmailMetadata {
    fn default() -> Self {
        Self::new()
    }
}

impl TypedMetadata for EmailMetadata {
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

/// Contact type class for email rows.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmailType {
    Custom = 0,
    Home = 1,
    Work = 2,
    Other = 3,
    Mobile = 4,
}

impl EmailType {
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Custom),
            1 => Some(Self::Home),
            2 => Some(Self::Work),
            3 => Some(Self::Other),
            4 => Some(Self::Mobile),
            _ => None,
        }
    }

    pub fn all() -> Vec<EmailType> {
        vec![
            Self::Custom,
            Self::Home,
            Self::Work,
            Self::Other,
            Self::Mobile,
        ]
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(EmailType::Custom)]
    #[case(EmailType::Home)]
    #[case(EmailType::Work)]
    #[case(EmailType::Other)]
    #[case(EmailType::Mobile)]
    fn email_type_round_trips(#[case] email_type: EmailType) {
        let mut email = EmailMetadata::new();
        email.set_email_type(email_type);
        assert_eq!(email.email_type(), email_type);
    }

    #[test]
    fn unset_or_bad_type_reads_as_other() {
        let mut email = EmailMetadata::new();
        assert_eq!(email.email_type(), EmailType::Other);
        email.record.set_data(1, "999").unwrap();
        assert_eq!(email.email_type(), EmailType::Other);
    }

    #[test]
    fn address_and_label_pass_through() {
        let mut email = EmailMetadata::new();
        email.set_address("bob@example.org");
        email.set_custom_type_label("band");
        assert_eq!(email.address(), Some("bob@example.org"));
        assert_eq!(email.custom_type_label(), Some("band"));
    }

    #[test]
    fn rejects_records_of_a_foreign_kind() {
        let record = MetadataRecord::new("vnd.android.cursor.item/im");
        assert!(EmailMetadata::from_record(record).is_err());
    }
}
