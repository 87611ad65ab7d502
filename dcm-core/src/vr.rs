//! Value representation modes and decode strategies

use crate::tag::Tag;
use serde::{Deserialize, Serialize};

/// VR disclosure mode of a transfer syntax
///
/// Explicit transfer syntaxes carry the two-character VR code on the wire
/// next to each tag; implicit ones rely on the dictionary. The cursor layer
/// only carries this value — the dataset parser consults it to pick its
/// framing, the primitive reads and writes never look at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VRMode {
    Implicit,
    Explicit,
    /// Not yet negotiated, e.g. while reading the file meta header
    Unknown,
}

/// Decode strategy implied by a VR code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VRKind {
    String,
    Bytes,
    UInt16,
    UInt32,
    Int16,
    Int32,
    Float32,
    Float64,
    Sequence,
    Item,
    Tag,
    PixelData,
}

impl VRKind {
    /// Map a two-character VR code to its decode strategy
    ///
    /// Unrecognized codes fall back to `VRKind::String`; most textual VRs
    /// ("CS", "LO", "PN", ...) decode that way and an unknown code is safer
    /// read as text than rejected.
    pub fn from_code(vr: &str) -> VRKind {
        match vr {
            "AT" => VRKind::Tag,
            "OW" | "OB" => VRKind::Bytes,
            "UL" => VRKind::UInt32,
            "SL" => VRKind::Int32,
            "US" => VRKind::UInt16,
            "SS" => VRKind::Int16,
            "FL" => VRKind::Float32,
            "FD" => VRKind::Float64,
            "SQ" => VRKind::Sequence,
            _ => VRKind::String,
        }
    }

    /// Resolve the decode strategy for a concrete element
    ///
    /// The structural tags override the code: an `(fffe,e000)` item header
    /// and the `(7fe0,0010)` pixel data element are framed by tag, not VR.
    pub fn of(tag: Tag, vr: &str) -> VRKind {
        if tag == Tag::ITEM {
            VRKind::Item
        } else if tag == Tag::PIXEL_DATA {
            VRKind::PixelData
        } else {
            VRKind::from_code(vr)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(VRKind::from_code("UL"), VRKind::UInt32);
        assert_eq!(VRKind::from_code("US"), VRKind::UInt16);
        assert_eq!(VRKind::from_code("SS"), VRKind::Int16);
        assert_eq!(VRKind::from_code("SL"), VRKind::Int32);
        assert_eq!(VRKind::from_code("FL"), VRKind::Float32);
        assert_eq!(VRKind::from_code("FD"), VRKind::Float64);
        assert_eq!(VRKind::from_code("OB"), VRKind::Bytes);
        assert_eq!(VRKind::from_code("OW"), VRKind::Bytes);
        assert_eq!(VRKind::from_code("AT"), VRKind::Tag);
        assert_eq!(VRKind::from_code("SQ"), VRKind::Sequence);
    }

    #[test]
    fn test_unknown_code_defaults_to_string() {
        assert_eq!(VRKind::from_code("PN"), VRKind::String);
        assert_eq!(VRKind::from_code("XX"), VRKind::String);
        assert_eq!(VRKind::from_code(""), VRKind::String);
    }

    #[test]
    fn test_structural_overrides() {
        assert_eq!(VRKind::of(Tag::ITEM, "NA"), VRKind::Item);
        assert_eq!(VRKind::of(Tag::PIXEL_DATA, "OW"), VRKind::PixelData);
        assert_eq!(VRKind::of(Tag::new(0x0028, 0x0010), "US"), VRKind::UInt16);
    }
}
