use serde::{Deserialize, Serialize};

use crate::record::MetadataRecord;
use crate::{MetadataError, TypedMetadata};

/// Typed view over a phone-number row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneMetadata {
    record: MetadataRecord,
}

impl PhoneMetadata {
    pub const MIMETYPE: &'static str = "vnd.android.cursor.item/phone_v2";

    const NUMBER_FIELD: usize = 0;
    const TYPE_FIELD: usize = 1;
    const TYPE_LABEL_FIELD: usize = 2;

    pub fn new() -> Self {
        Self {
            record: MetadataRecord::new(Self::MIMETYPE),
        }
    }

    pub fn number(&self) -> Option<&str> {
        self.record.data(Self::NUMBER_FIELD)
    }

    pub fn set_number(&mut self, number: impl Into<String>) {
        self.record.put(Self::NUMBER_FIELD, number);
    }

    /// Missing or unrecognized type columns read as [`PhoneType::Other`].
    pub fn phone_type(&self) -> PhoneType {
        self.record
            .code_at(Self::TYPE_FIELD)
            .ok()
            .and_then(PhoneType::from_code)
            .unwrap_or(PhoneType::Other)
    }

    pub fn set_phone_type(&mut self, phone_type: PhoneType) {
        self.record.put_code(Self::TYPE_FIELD, phone_type.code());
    }

    pub fn custom_type_label(&self) -> Option<&str> {
        self.record.data(Self::TYPE_LABEL_FIELD)
    }

    pub fn set_custom_type_label(&mut self, label: impl Into<String>) {
        self.record.put(Self::TYPE_LABEL_FIELD, label);
    }
}

impl Default for PhoneMetadata {
    fn default() -> Self {
        Self::new()
    }
}

impl TypedMetadata for PhoneMetadata {
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

/// Contact type class for phone rows. The platform's table is by far the
/// widest of the four kinds.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhoneType {
    Custom = 0,
    Home = 1,
    Mobile = 2,
    Work = 3,
    FaxWork = 4,
    FaxHome = 5,
    Pager = 6,
    Other = 7,
    Callback = 8,
    Car = 9,
    CompanyMain = 10,
    Isdn = 11,
    Main = 12,
    OtherFax = 13,
    Radio = 14,
    Telex = 15,
    TtyTdd = 16,
    WorkMobile = 17,
    WorkPager = 18,
    Assistant = 19,
    Mms = 20,
}

impl PhoneType {
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Custom),
            1 => Some(Self::Home),
            2 => Some(Self::Mobile),
            3 => Some(Self::Work),
            4 => Some(Self::FaxWork),
            5 => Some(Self::FaxHome),
            6 => Some(Self::Pager),
            7 => Some(Self::Other),
            8 => Some(Self::Callback),
            9 => Some(Self::Car),
            10 => Some(Self::CompanyMain),
            11 => Some(Self::Isdn),
            12 => Some(Self::Main),
            13 => Some(Self::OtherFax),
            14 => Some(Self::Radio),
            15 => Some(Self::Telex),
            16 => Some(Self::TtyTdd),
            17 => Some(Self::WorkMobile),
            18 => Some(Self::WorkPager),
            19 => Some(Self::Assistant),
            20 => Some(Self::Mms),
            _ => None,
        }
    }

    pub fn all() -> Vec<PhoneType> {
        vec![
            Self::Custom,
            Self::Home,
            Self::Mobile,
            Self::Work,
            Self::FaxWork,
            Self::FaxHome,
            Self::Pager,
            Self::Other,
            Self::Callback,
            Self::Car,
            Self::CompanyMain,
            Self::Isdn,
            Self::Main,
            Self::OtherFax,
            Self::Radio,
            Self::Telex,
            Self::TtyTdd,
            Self::WorkMobile,
            Self::WorkPager,
            Self::Assistant,
            Self::Mms,
        ]
    }
}
