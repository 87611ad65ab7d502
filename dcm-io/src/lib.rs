//! Bounded binary cursors for DICOM streams
//!
//! This crate provides the paired [`Encoder`] and [`Decoder`] that the
//! dataset layer drives to produce and parse DICOM-style length-prefixed
//! binary structures. The decoder bounds each nested sub-structure with a
//! limit stack and degrades into a no-op machine on the first failure, so
//! callers check for errors once per logical boundary instead of after
//! every primitive read.

pub mod decoder;
pub mod encoder;

pub use decoder::{BytesDecoder, Decoder};
pub use encoder::Encoder;
