//! Sequential encoder for DICOM binary streams

use dcm_core::{ByteOrder, DicomError, DicomResult, VRMode};

/// Sequential byte-buffer builder with byte-order-aware primitive writers
///
/// The encoder accumulates bytes in the order operations are invoked and
/// imposes no framing validation; writing fields in the structurally correct
/// order is the dataset layer's job. Output is exactly the concatenation of
/// the requested writes, with no preamble or magic number.
pub struct Encoder {
    buffer: Vec<u8>,
    byte_order: ByteOrder,
    vr_mode: VRMode,
    err: Option<DicomError>,
}

impl Encoder {
    /// Create a new encoder
    pub fn new(byte_order: ByteOrder, vr_mode: VRMode) -> Self {
        Self {
            buffer: Vec::new(),
            byte_order,
            vr_mode,
            err: None,
        }
    }

    /// Create a new encoder with initial buffer capacity
    pub fn with_capacity(capacity: usize, byte_order: ByteOrder, vr_mode: VRMode) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
            byte_order,
            vr_mode,
            err: None,
        }
    }

    /// The configured byte order
    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    /// The configured VR disclosure mode
    pub fn vr_mode(&self) -> VRMode {
        self.vr_mode
    }

    /// Number of bytes accumulated so far
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Whether no bytes have been written yet
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Record a terminal error; the first recorded error wins.
    ///
    /// Buffer growth itself cannot fail, so this is the channel through
    /// which the dataset layer reports its own encode failures. The error
    /// is surfaced by [`Encoder::finish`].
    pub fn set_error(&mut self, err: DicomError) {
        if self.err.is_none() {
            self.err = Some(err);
        }
    }

    /// The recorded terminal error, if any
    pub fn error(&self) -> Option<&DicomError> {
        self.err.as_ref()
    }

    /// Append a single byte
    pub fn write_byte(&mut self, value: u8) {
        self.buffer.push(value);
    }

    /// Append a u16 in the configured byte order
    pub fn write_u16(&mut self, value: u16) {
        self.buffer.extend_from_slice(&self.byte_order.encode_u16(value));
    }

    /// Append a u32 in the configured byte order
    pub fn write_u32(&mut self, value: u32) {
        self.buffer.extend_from_slice(&self.byte_order.encode_u32(value));
    }

    /// Append an i16 in the configured byte order
    pub fn write_i16(&mut self, value: i16) {
        self.buffer.extend_from_slice(&self.byte_order.encode_i16(value));
    }

    /// Append an i32 in the configured byte order
    pub fn write_i32(&mut self, value: i32) {
        self.buffer.extend_from_slice(&self.byte_order.encode_i32(value));
    }

    /// Append an f32 in the configured byte order
    pub fn write_f32(&mut self, value: f32) {
        self.buffer.extend_from_slice(&self.byte_order.encode_f32(value));
    }

    /// Append an f64 in the configured byte order
    pub fn write_f64(&mut self, value: f64) {
        self.buffer.extend_from_slice(&self.byte_order.encode_f64(value));
    }

    /// Append `count` zero bytes of padding
    pub fn write_zeros(&mut self, count: usize) {
        self.buffer.resize(self.buffer.len() + count, 0);
    }

    /// Append the raw bytes of a string, with no length prefix or terminator
    pub fn write_string(&mut self, value: &str) {
        self.buffer.extend_from_slice(value.as_bytes());
    }

    /// Append raw bytes
    pub fn write_bytes(&mut self, value: &[u8]) {
        self.buffer.extend_from_slice(value);
    }

    /// Finalize and return the accumulated bytes, or the recorded error
    pub fn finish(self) -> DicomResult<Vec<u8>> {
        match self.err {
            Some(err) => Err(err),
            None => Ok(self.buffer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_primitives_big_endian() {
        let mut encoder = Encoder::new(ByteOrder::BigEndian, VRMode::Unknown);
        encoder.write_byte(0xAB);
        encoder.write_u16(0x0123);
        encoder.write_u32(0x01234567);
        let encoded = encoder.finish().unwrap();
        assert_eq!(encoded, [0xAB, 0x01, 0x23, 0x01, 0x23, 0x45, 0x67]);
    }

    #[test]
    fn test_write_primitives_little_endian() {
        let mut encoder = Encoder::new(ByteOrder::LittleEndian, VRMode::Unknown);
        encoder.write_u16(0x0123);
        encoder.write_u32(0x01234567);
        let encoded = encoder.finish().unwrap();
        assert_eq!(encoded, [0x23, 0x01, 0x67, 0x45, 0x23, 0x01]);
    }

    #[test]
    fn test_write_zeros_and_string() {
        let mut encoder = Encoder::new(ByteOrder::BigEndian, VRMode::Unknown);
        encoder.write_string("ab");
        encoder.write_zeros(3);
        encoder.write_bytes(&[0xFF]);
        assert_eq!(encoder.len(), 6);
        let encoded = encoder.finish().unwrap();
        assert_eq!(encoded, [b'a', b'b', 0, 0, 0, 0xFF]);
    }

    #[test]
    fn test_output_is_plain_concatenation() {
        let mut encoder = Encoder::new(ByteOrder::LittleEndian, VRMode::Explicit);
        encoder.write_string("DICM");
        let encoded = encoder.finish().unwrap();
        assert_eq!(encoded, b"DICM");
    }

    #[test]
    fn test_set_error_surfaces_at_finish() {
        let mut encoder = Encoder::new(ByteOrder::BigEndian, VRMode::Implicit);
        encoder.write_u16(7);
        encoder.set_error(DicomError::InvalidData("bad element".to_string()));
        // First error wins
        encoder.set_error(DicomError::InvalidData("later".to_string()));
        assert!(encoder.error().is_some());
        let err = encoder.finish().unwrap_err();
        assert!(matches!(err, DicomError::InvalidData(msg) if msg == "bad element"));
    }
}
