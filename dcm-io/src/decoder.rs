//! Bounded cursor decoder for DICOM binary streams

use bytes::{Buf, Bytes};
use dcm_core::{ByteOrder, DicomError, DicomResult, VRMode};
use std::io::Read;

/// Decoder over an in-memory byte sequence
pub type BytesDecoder = Decoder<bytes::buf::Reader<Bytes>>;

/// Sequential cursor over a bounded byte source
///
/// The decoder tracks a stack of nested byte-count limits so that each
/// length-prefixed sub-structure (sequence item, element value) is bounded
/// independently of how many bytes the enclosing structure still holds: a
/// corrupted length field can exhaust its own bound but never run into
/// sibling data.
///
/// Errors are sticky. Once any operation fails, the decoder stops consuming
/// bytes, every read returns the type's zero value, and [`Decoder::error`]
/// reports the first failure; callers check it once per logical boundary
/// rather than after every primitive read.
pub struct Decoder<R> {
    source: R,
    byte_order: ByteOrder,
    vr_mode: VRMode,
    /// Bytes consumed so far
    pos: u64,
    /// Bytes left in the source under its declared total length
    source_remaining: u64,
    /// Remaining-byte ceilings of the active nested bounds, innermost last
    limits: Vec<u64>,
    err: Option<DicomError>,
}

impl Decoder<bytes::buf::Reader<Bytes>> {
    /// Create a decoder over an in-memory byte sequence
    pub fn from_bytes(data: impl Into<Bytes>, byte_order: ByteOrder, vr_mode: VRMode) -> Self {
        let data = data.into();
        let len = data.len() as u64;
        Decoder::new(data.reader(), len, byte_order, vr_mode)
    }
}

impl<R: Read> Decoder<R> {
    /// Create a decoder over a readable source of known total length
    pub fn new(source: R, len: u64, byte_order: ByteOrder, vr_mode: VRMode) -> Self {
        Self {
            source,
            byte_order,
            vr_mode,
            pos: 0,
            source_remaining: len,
            limits: Vec::new(),
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

    /// Bytes consumed so far
    pub fn position(&self) -> u64 {
        self.pos
    }

    /// The sticky error, if any operation has failed
    pub fn error(&self) -> Option<&DicomError> {
        self.err.as_ref()
    }

    /// Bytes still readable under the innermost active limit
    pub fn remaining(&self) -> u64 {
        self.limits
            .iter()
            .copied()
            .fold(self.source_remaining, u64::min)
    }

    /// Establish a new bound of `count` bytes nested inside the current one.
    ///
    /// Requires `count <= remaining()`; a larger value sets the sticky error
    /// without consuming anything, since a length field pointing past the
    /// enclosing bound is already malformed.
    pub fn push_limit(&mut self, count: u64) {
        if self.err.is_some() {
            return;
        }
        let remaining = self.remaining();
        if count > remaining {
            self.set_error(DicomError::LimitOverrun {
                requested: count,
                remaining,
            });
            return;
        }
        self.limits.push(count);
    }

    /// Discard the innermost limit.
    ///
    /// Bytes consumed while the limit was active have already been charged
    /// to every enclosing bound, so the outer remaining count is correct as
    /// soon as the entry is dropped.
    pub fn pop_limit(&mut self) {
        let popped = self.limits.pop();
        debug_assert!(popped.is_some(), "pop_limit with no active limit");
    }

    /// Read a single byte
    pub fn read_byte(&mut self) -> u8 {
        let mut buf = [0u8; 1];
        if self.consume(&mut buf) { buf[0] } else { 0 }
    }

    /// Read a u16 in the configured byte order
    pub fn read_u16(&mut self) -> u16 {
        let mut buf = [0u8; 2];
        if self.consume(&mut buf) {
            self.byte_order.decode_u16(buf)
        } else {
            0
        }
    }

    /// Read a u32 in the configured byte order
    pub fn read_u32(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        if self.consume(&mut buf) {
            self.byte_order.decode_u32(buf)
        } else {
            0
        }
    }

    /// Read an i16 in the configured byte order
    pub fn read_i16(&mut self) -> i16 {
        let mut buf = [0u8; 2];
        if self.consume(&mut buf) {
            self.byte_order.decode_i16(buf)
        } else {
            0
        }
    }

    /// Read an i32 in the configured byte order
    pub fn read_i32(&mut self) -> i32 {
        let mut buf = [0u8; 4];
        if self.consume(&mut buf) {
            self.byte_order.decode_i32(buf)
        } else {
            0
        }
    }

    /// Read an f32 in the configured byte order
    pub fn read_f32(&mut self) -> f32 {
        let mut buf = [0u8; 4];
        if self.consume(&mut buf) {
            self.byte_order.decode_f32(buf)
        } else {
            0.0
        }
    }

    /// Read an f64 in the configured byte order
    pub fn read_f64(&mut self) -> f64 {
        let mut buf = [0u8; 8];
        if self.consume(&mut buf) {
            self.byte_order.decode_f64(buf)
        } else {
            0.0
        }
    }

    /// Read `count` raw bytes.
    ///
    /// The bound is checked before the buffer is allocated, so a malformed
    /// length field cannot drive a huge allocation.
    pub fn read_bytes(&mut self, count: usize) -> Vec<u8> {
        if !self.check(count as u64) {
            return Vec::new();
        }
        let mut buf = vec![0u8; count];
        if self.fill(&mut buf) { buf } else { Vec::new() }
    }

    /// Read `count` raw bytes as text; invalid UTF-8 sequences are replaced
    pub fn read_string(&mut self, count: usize) -> String {
        let bytes = self.read_bytes(count);
        String::from_utf8_lossy(&bytes).into_owned()
    }

    /// Advance the cursor by `count` bytes without producing a value
    pub fn skip(&mut self, count: usize) {
        if !self.check(count as u64) {
            return;
        }
        let count = count as u64;
        match std::io::copy(&mut self.source.by_ref().take(count), &mut std::io::sink()) {
            Ok(copied) if copied == count => self.advance(count),
            Ok(_) => self.set_error(DicomError::Io(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "source ended during skip",
            ))),
            Err(err) => self.set_error(DicomError::Io(err)),
        }
    }

    /// Consume the decoder, failing on a sticky error or unconsumed bytes
    pub fn finish(self) -> DicomResult<()> {
        if let Some(err) = self.err {
            return Err(err);
        }
        let remaining = self.remaining();
        if remaining != 0 {
            return Err(DicomError::InvalidData(format!(
                "{} bytes of trailing data",
                remaining
            )));
        }
        Ok(())
    }

    fn set_error(&mut self, err: DicomError) {
        if self.err.is_none() {
            log::debug!("decoder entering error state at offset {}: {}", self.pos, err);
            self.err = Some(err);
        }
    }

    /// Steps 1 and 2 of every read: sticky guard, then bounds guard.
    /// Returns false (with the sticky error set on a bounds failure) when
    /// nothing may be consumed.
    fn check(&mut self, needed: u64) -> bool {
        if self.err.is_some() {
            return false;
        }
        let remaining = self.remaining();
        if needed > remaining {
            self.set_error(DicomError::EndOfData { needed, remaining });
            return false;
        }
        true
    }

    /// Read exactly `buf.len()` bytes from the source; `check` must have
    /// passed for that size already.
    fn fill(&mut self, buf: &mut [u8]) -> bool {
        match self.source.read_exact(buf) {
            Ok(()) => {
                self.advance(buf.len() as u64);
                true
            }
            Err(err) => {
                self.set_error(DicomError::Io(err));
                false
            }
        }
    }

    fn consume(&mut self, buf: &mut [u8]) -> bool {
        self.check(buf.len() as u64) && self.fill(buf)
    }

    /// Charge `count` consumed bytes to the source and every active limit
    fn advance(&mut self, count: u64) {
        self.pos += count;
        self.source_remaining -= count;
        for limit in &mut self.limits {
            *limit -= count;
        }
    }
}
