//! DICOM tag type

use crate::error::{DicomError, DicomResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A (group, element) pair identifying a DICOM data element
///
/// Tags are the keys of the data element space: `(0010,0010)` is the patient
/// name, `(7fe0,0010)` the pixel data, and so on. Equality is exact pair
/// match; group ranges are not modeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Tag {
    pub group: u16,
    pub element: u16,
}

/// Group number of the file meta information header elements
pub const METADATA_GROUP: u16 = 0x0002;

impl Tag {
    /// Create a new tag from group and element numbers
    pub const fn new(group: u16, element: u16) -> Self {
        Self { group, element }
    }

    /// Start of a sequence item
    pub const ITEM: Tag = Tag::new(0xFFFE, 0xE000);
    /// End of an undefined-length sequence item
    pub const ITEM_DELIMITER: Tag = Tag::new(0xFFFE, 0xE00D);
    /// End of an undefined-length sequence
    pub const SEQUENCE_DELIMITER: Tag = Tag::new(0xFFFE, 0xE0DD);
    /// Image pixel data
    pub const PIXEL_DATA: Tag = Tag::new(0x7FE0, 0x0010);
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:04x},{:04x})", self.group, self.element)
    }
}

impl FromStr for Tag {
    type Err = DicomError;

    /// Parse a tag from its display form, e.g. `"(0008,1234)"` or `"0008,1234"`
    fn from_str(s: &str) -> DicomResult<Self> {
        let trimmed = s.trim().trim_start_matches('(').trim_end_matches(')');
        let parts: Vec<&str> = trimmed.split(',').collect();
        if parts.len() != 2 {
            return Err(DicomError::InvalidData(format!(
                "Expected 2 comma-separated hex values in tag: {}",
                s
            )));
        }

        let group = u16::from_str_radix(parts[0].trim(), 16)
            .map_err(|_| DicomError::InvalidData(format!("Invalid tag group: {}", parts[0])))?;
        let element = u16::from_str_radix(parts[1].trim(), 16)
            .map_err(|_| DicomError::InvalidData(format!("Invalid tag element: {}", parts[1])))?;

        Ok(Tag::new(group, element))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_display() {
        assert_eq!(format!("{}", Tag::new(0x0008, 0x1234)), "(0008,1234)");
        assert_eq!(format!("{}", Tag::PIXEL_DATA), "(7fe0,0010)");
    }

    #[test]
    fn test_tag_from_str() {
        let tag: Tag = "(0008,1234)".parse().unwrap();
        assert_eq!(tag, Tag::new(0x0008, 0x1234));

        let tag: Tag = "7FE0,0010".parse().unwrap();
        assert_eq!(tag, Tag::PIXEL_DATA);
    }

    #[test]
    fn test_tag_from_str_invalid() {
        assert!("(0008)".parse::<Tag>().is_err());
        assert!("(zzzz,0010)".parse::<Tag>().is_err());
    }

    #[test]
    fn test_tag_roundtrip() {
        let tag = Tag::new(0x0010, 0x0020);
        let parsed: Tag = format!("{}", tag).parse().unwrap();
        assert_eq!(parsed, tag);
    }
}
