//! Core types used throughout dpxtools

use std::fmt;

/// Header section identifier
///
/// `SectionId::ALL` lists sections in canonical header order; iteration
/// over the registry follows this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SectionId {
    /// Generic file information (offsets 0–767)
    FileInfo,
    /// Generic image information (768–1407)
    ImageInfo,
    /// Image origination / orientation (1408–1663)
    OrientInfo,
    /// Motion-picture film industry information (1664–1919)
    FilmInfo,
    /// Television industry information (1920–2047)
    TvInfo,
    /// User-defined data (2048–)
    UserInfo,
    /// First image element descriptor (780–851, inside the image
    /// information area)
    ImageElement,
}

impl SectionId {
    /// All sections in canonical header order
    pub const ALL: [SectionId; 7] = [
        SectionId::FileInfo,
        SectionId::ImageInfo,
        SectionId::OrientInfo,
        SectionId::FilmInfo,
        SectionId::TvInfo,
        SectionId::UserInfo,
        SectionId::ImageElement,
    ];

    /// Get the section name (e.g., "file_info")
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::FileInfo => "file_info",
            SectionId::ImageInfo => "image_info",
            SectionId::OrientInfo => "orient_info",
            SectionId::FilmInfo => "film_info",
            SectionId::TvInfo => "tv_info",
            SectionId::UserInfo => "user_info",
            SectionId::ImageElement => "image_element",
        }
    }

    /// Parse a section from its name (e.g., "tv_info")
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "file_info" => Some(SectionId::FileInfo),
            "image_info" => Some(SectionId::ImageInfo),
            "orient_info" => Some(SectionId::OrientInfo),
            "film_info" => Some(SectionId::FilmInfo),
            "tv_info" => Some(SectionId::TvInfo),
            "user_info" => Some(SectionId::UserInfo),
            "image_element" => Some(SectionId::ImageElement),
            _ => None,
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// On-disk type of a header field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// 8-bit signed integer
    Int8,

    /// 16-bit signed integer, big-endian
    Int16,

    /// 32-bit signed integer, big-endian
    Int32,

    /// 32-bit IEEE-754 float, big-endian
    Float,

    /// Fixed-length NUL-padded ASCII text
    Text(usize),
}

impl FieldKind {
    /// Byte width of the field on disk
    pub fn width(&self) -> usize {
        match self {
            FieldKind::Int8 => 1,
            FieldKind::Int16 => 2,
            FieldKind::Int32 => 4,
            FieldKind::Float => 4,
            FieldKind::Text(len) => *len,
        }
    }
}

/// A typed header field value.
///
/// Raw reads produce the variant matching the field's [`FieldKind`];
/// transcoded reads of `transfer`, `colorimetric` and `time_code`
/// produce `Text`.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Float(f32),
    Text(String),
}

impl FieldValue {
    /// Integer content, if this is an integer variant
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FieldValue::Int8(v) => Some(i64::from(*v)),
            FieldValue::Int16(v) => Some(i64::from(*v)),
            FieldValue::Int32(v) => Some(i64::from(*v)),
            _ => None,
        }
    }

    /// Text content, if this is the `Text` variant
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Int8(v) => write!(f, "{v}"),
            FieldValue::Int16(v) => write!(f, "{v}"),
            FieldValue::Int32(v) => write!(f, "{v}"),
            FieldValue::Float(v) => write!(f, "{v}"),
            FieldValue::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<i8> for FieldValue {
    fn from(v: i8) -> Self {
        FieldValue::Int8(v)
    }
}

impl From<i16> for FieldValue {
    fn from(v: i16) -> Self {
        FieldValue::Int16(v)
    }
}

impl From<i32> for FieldValue {
    fn from(v: i32) -> Self {
        FieldValue::Int32(v)
    }
}

impl From<f32> for FieldValue {
    fn from(v: f32) -> Self {
        FieldValue::Float(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Text(v.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::Text(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_string() {
        assert_eq!(SectionId::TvInfo.as_str(), "tv_info");
        assert_eq!(SectionId::ImageElement.to_string(), "image_element");
    }

    #[test]
    fn test_section_parse() {
        assert_eq!(SectionId::parse("film_info"), Some(SectionId::FilmInfo));
        assert_eq!(SectionId::parse("pixel_info"), None);
    }

    #[test]
    fn test_kind_width() {
        assert_eq!(FieldKind::Int16.width(), 2);
        assert_eq!(FieldKind::Float.width(), 4);
        assert_eq!(FieldKind::Text(100).width(), 100);
    }

    #[test]
    fn test_value_accessors() {
        assert_eq!(FieldValue::Int16(-3).as_i64(), Some(-3));
        assert_eq!(FieldValue::Float(1.5).as_i64(), None);
        assert_eq!(FieldValue::from("slate").as_text(), Some("slate"));
    }
}
