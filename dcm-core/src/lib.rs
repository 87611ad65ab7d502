//! Core types for DICOM binary streams
//!
//! This crate provides the fundamental value types, error handling, and tag
//! dictionary used throughout the DICOM stream implementation.

pub mod byte_order;
pub mod dictionary;
pub mod error;
pub mod tag;
pub mod vr;

pub use byte_order::ByteOrder;
pub use dictionary::{TagInfo, lookup_tag, lookup_tag_by_name, must_lookup_tag, tag_string};
pub use error::{DicomError, DicomResult};
pub use tag::{METADATA_GROUP, Tag};
pub use vr::{VRKind, VRMode};
