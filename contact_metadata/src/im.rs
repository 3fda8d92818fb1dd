use serde::{Deserialize, Serialize};

use crate::record::MetadataRecord;
use crate::{MetadataError, TypedMetadata};

/// Typed view over an instant-messaging row. Holds the IM handle, a
/// home/work classification of the contact and the network protocol the
/// handle belongs to, with free-text labels for the custom variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImMetadata {
    record: MetadataRecord,
}

impl ImMetadata {
    pub const MIMETYPE: &'static str = "vnd.android.cursor.item/im";

    const HANDLE_FIELD: usize = 0;
    const TYPE_FIELD: usize = 1;
    const TYPE_LABEL_FIELD: usize = 2;
    const PROTOCOL_FIELD: usize = 4;
    const PROTOCOL_LABEL_FIELD: usize = 5;

    pub fn new() -> Self {
        Self {
            record: MetadataRecord::new(Self::MIMETYPE),
        }
    }

    /// The IM handle itself, e.g. a Jabber JID.
    pub fn handle(&self) -> Option<&str> {
        self.record.data(Self::HANDLE_FIELD)
    }

    pub fn set_handle(&mut self, handle: impl Into<String>) {
        self.record.put(Self::HANDLE_FIELD, handle);
    }

    /// The contact type of this row. A missing, non-numeric or unrecognized
    /// type column reads as [`ImType::Other`]; this never errors.
    pub fn im_type(&self) -> ImType {
        match self.record.code_at(Self::TYPE_FIELD) {
            Ok(code) => ImType::from_code(code).unwrap_or_else(|| {
                tracing::debug!(code, "unrecognized im contact type code, reading as other");
                ImType::Other
            }),
            Err(_) => ImType::Other,
        }
    }

    pub fn set_im_type(&mut self, im_type: ImType) {
        self.record.put_code(Self::TYPE_FIELD, im_type.code());
    }

    /// Free-text label, meaningful when the type is [`ImType::Custom`].
    /// Stored and returned verbatim.
    pub fn custom_type_label(&self) -> Option<&str> {
        self.record.data(Self::TYPE_LABEL_FIELD)
    }

    pub fn set_custom_type_label(&mut self, label: impl Into<String>) {
        self.record.put(Self::TYPE_LABEL_FIELD, label);
    }

    /// The IM network protocol. A missing, non-numeric or unrecognized
    /// protocol column reads as [`ImProtocol::Custom`]; this never errors.
    pub fn protocol(&self) -> ImProtocol {
        match self.record.code_at(Self::PROTOCOL_FIELD) {
            Ok(code) => ImProtocol::from_code(code).unwrap_or_else(|| {
                tracing::debug!(code, "unrecognized im protocol code, reading as custom");
                ImProtocol::Custom
            }),
            Err(_) => ImProtocol::Custom,
        }
    }

    pub fn set_protocol(&mut self, protocol: ImProtocol) {
        self.record.put_code(Self::PROTOCOL_FIELD, protocol.code());
    }

    /// Free-text label, meaningful when the protocol is
    /// [`ImProtocol::Custom`]. Stored and returned verbatim.
    pub fn custom_protocol_label(&self) -> Option<&str> {
        self.record.data(Self::PROTOCOL_LABEL_FIELD)
    }

    pub fn set_custom_protocol_label(&mut self, label: impl Into<String>) {
        self.record.put(Self::PROTOCOL_LABEL_FIELD, label);
    }
}

impl Default for ImMetadata {
    fn default() -> Self {
        Self::new()
    }
}

impl TypedMetadata for ImMetadata {
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

/// Contact type class for instant-messaging rows. Discriminants are the
/// codes the contact store persists in the type column.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImType {
    Custom = 0,
    Home = 1,
    Work = 2,
    Other = 3,
}

impl ImType {
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Look up a variant by its stored code. Unknown codes are absent, not
    /// an error; callers pick their own fallback.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Custom),
            1 => Some(Self::Home),
            2 => Some(Self::Work),
            3 => Some(Self::Other),
            _ => None,
        }
    }

    pub fn all() -> Vec<ImType> {
        vec![Self::Custom, Self::Home, Self::Work, Self::Other]
    }
}

/// IM network protocol. Discriminants are the codes the contact store
/// persists in the protocol column; custom protocols use -1 plus a label.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImProtocol {
    Custom = -1,
    Aim = 0,
    Msn = 1,
    Yahoo = 2,
    Skype = 3,
    Qq = 4,
    GoogleTalk = 5,
    Icq = 6,
    Jabber = 7,
    Netmeeting = 8,
}

impl ImProtocol {
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Look up a variant by its stored code. Unknown codes are absent, not
    /// an error; callers pick their own fallback.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            -1 => Some(Self::Custom),
            0 => Some(Self::Aim),
            1 => Some(Self::Msn),
            2 => Some(Self::Yahoo),
            3 => Some(Self::Skype),
            4 => Some(Self::Qq),
            5 => Some(Self::GoogleTalk),
            6 => Some(Self::Icq),
            7 => Some(Self::Jabber),
            8 => Some(Self::Netmeeting),
            _ => None,
        }
    }

    pub fn all() -> Vec<ImProtocol> {
        vec![
            Self::Custom,
            Self::Aim,
            Self::Msn,
            Self::Yahoo,
            Self::Skype,
            Self::Qq,
            Self::GoogleTalk,
            Self::Icq,
            Self::Jabber,
            Self::Netmeeting,
        ]
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn new_row_carries_the_im_mimetype() {
        let im = ImMetadata::new();
        assert_eq!(im.as_record().mimetype(), ImMetadata::MIMETYPE);
        assert_eq!(ImMetadata::mimetype(), ImMetadata::MIMETYPE);
    }

    #[rstest]
    #[case(ImType::Custom)]
    #[case(ImType::Home)]
    #[case(ImType::Work)]
    #[case(ImType::Other)]
    fn im_type_round_trips(#[case] im_type: ImType) {
        let mut im = ImMetadata::new();
        im.set_im_type(im_type);
        assert_eq!(im.im_type(), im_type);
        assert_eq!(
            im.as_record().data(1),
            Some(im_type.code().to_string().as_str())
        );
    }

    #[rstest]
    #[case(ImProtocol::Custom)]
    #[case(ImProtocol::Aim)]
    #[case(ImProtocol::Msn)]
    #[case(ImProtocol::Yahoo)]
    #[case(ImProtocol::Skype)]
    #[case(ImProtocol::Qq)]
    #[case(ImProtocol::GoogleTalk)]
    #[case(ImProtocol::Icq)]
    #[case(ImProtocol::Jabber)]
    #[case(ImProtocol::Netmeeting)]
    fn protocol_round_trips(#[case] protocol: ImProtocol) {
        let mut im = ImMetadata::new();
        im.set_protocol(protocol);
        assert_eq!(im.protocol(), protocol);
    }

    #[test]
    fn unset_columns_read_as_defaults() {
        let im = ImMetadata::new();
        assert_eq!(im.im_type(), ImType::Other);
        assert_eq!(im.protocol(), ImProtocol::Custom);
    }

    #[rstest]
    #[case("abc")]
    #[case("")]
    #[case("999")]
    fn bad_type_column_reads_as_other(#[case] raw: &str) {
        let mut im = ImMetadata::new();
        im.record.set_data(1, raw).unwrap();
        assert_eq!(im.im_type(), ImType::Other);
    }

    #[rstest]
    #[case("abc")]
    #[case("")]
    #[case("999")]
    fn bad_protocol_column_reads_as_custom(#[case] raw: &str) {
        let mut im = ImMetadata::new();
        im.record.set_data(4, raw).unwrap();
        assert_eq!(im.protocol(), ImProtocol::Custom);
    }

    #[test]
    fn labels_pass_through_verbatim() {
        let mut im = ImMetadata::new();
        im.set_custom_type_label("x");
        im.set_custom_protocol_label("  spaced  ");
        assert_eq!(im.custom_type_label(), Some("x"));
        assert_eq!(im.custom_protocol_label(), Some("  spaced  "));
    }

    #[test]
    fn jabber_uses_the_platform_code() {
        let mut im = ImMetadata::new();
        im.set_protocol(ImProtocol::Jabber);
        assert_eq!(im.protocol(), ImProtocol::Jabber);
        assert_eq!(im.protocol().code(), 7);
    }

    #[test]
    fn rejects_records_of_a_foreign_kind() {
        let record = MetadataRecord::new("vnd.android.cursor.item/email_v2");
        let err = ImMetadata::from_record(record).unwrap_err();
        assert!(matches!(err, MetadataError::MimetypeMismatch { .. }));
    }

    #[test]
    fn from_record_accepts_a_stored_im_row() {
        let mut record = MetadataRecord::new(ImMetadata::MIMETYPE);
        record.set_data(0, "alice@jabber.example").unwrap();
        record.set_code(4, ImProtocol::Jabber.code()).unwrap();

        let im = ImMetadata::from_record(record).unwrap();
        assert_eq!(im.handle(), Some("alice@jabber.example"));
        assert_eq!(im.protocol(), ImProtocol::Jabber);
    }
}
