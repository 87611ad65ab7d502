//! Byte order selection and primitive integer codecs

use serde::{Deserialize, Serialize};

/// Byte order of multi-byte integers in a DICOM transfer syntax
///
/// DICOM streams negotiate their endianness per transfer syntax, so every
/// fixed-width primitive is encoded and decoded through this selector rather
/// than a hard-wired order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ByteOrder {
    BigEndian,
    LittleEndian,
}

impl ByteOrder {
    /// Encode a u16 in this byte order
    pub fn encode_u16(self, value: u16) -> [u8; 2] {
        match self {
            ByteOrder::BigEndian => value.to_be_bytes(),
            ByteOrder::LittleEndian => value.to_le_bytes(),
        }
    }

    /// Encode a u32 in this byte order
    pub fn encode_u32(self, value: u32) -> [u8; 4] {
        match self {
            ByteOrder::BigEndian => value.to_be_bytes(),
            ByteOrder::LittleEndian => value.to_le_bytes(),
        }
    }

    /// Encode an i16 in this byte order
    pub fn encode_i16(self, value: i16) -> [u8; 2] {
        match self {
            ByteOrder::BigEndian => value.to_be_bytes(),
            ByteOrder::LittleEndian => value.to_le_bytes(),
        }
    }

    /// Encode an i32 in this byte order
    pub fn encode_i32(self, value: i32) -> [u8; 4] {
        match self {
            ByteOrder::BigEndian => value.to_be_bytes(),
            ByteOrder::LittleEndian => value.to_le_bytes(),
        }
    }

    /// Encode an f32 (IEEE 754 bit pattern) in this byte order
    pub fn encode_f32(self, value: f32) -> [u8; 4] {
        self.encode_u32(value.to_bits())
    }

    /// Encode an f64 (IEEE 754 bit pattern) in this byte order
    pub fn encode_f64(self, value: f64) -> [u8; 8] {
        match self {
            ByteOrder::BigEndian => value.to_bits().to_be_bytes(),
            ByteOrder::LittleEndian => value.to_bits().to_le_bytes(),
        }
    }

    /// Decode a u16 from this byte order
    pub fn decode_u16(self, bytes: [u8; 2]) -> u16 {
        match self {
            ByteOrder::BigEndian => u16::from_be_bytes(bytes),
            ByteOrder::LittleEndian => u16::from_le_bytes(bytes),
        }
    }

    /// Decode a u32 from this byte order
    pub fn decode_u32(self, bytes: [u8; 4]) -> u32 {
        match self {
            ByteOrder::BigEndian => u32::from_be_bytes(bytes),
            ByteOrder::LittleEndian => u32::from_le_bytes(bytes),
        }
    }

    /// Decode an i16 from this byte order
    pub fn decode_i16(self, bytes: [u8; 2]) -> i16 {
        match self {
            ByteOrder::BigEndian => i16::from_be_bytes(bytes),
            ByteOrder::LittleEndian => i16::from_le_bytes(bytes),
        }
    }

    /// Decode an i32 from this byte order
    pub fn decode_i32(self, bytes: [u8; 4]) -> i32 {
        match self {
            ByteOrder::BigEndian => i32::from_be_bytes(bytes),
            ByteOrder::LittleEndian => i32::from_le_bytes(bytes),
        }
    }

    /// Decode an f32 (IEEE 754 bit pattern) from this byte order
    pub fn decode_f32(self, bytes: [u8; 4]) -> f32 {
        f32::from_bits(self.decode_u32(bytes))
    }

    /// Decode an f64 (IEEE 754 bit pattern) from this byte order
    pub fn decode_f64(self, bytes: [u8; 8]) -> f64 {
        let bits = match self {
            ByteOrder::BigEndian => u64::from_be_bytes(bytes),
            ByteOrder::LittleEndian => u64::from_le_bytes(bytes),
        };
        f64::from_bits(bits)
    }
}
