//! # Packet Writer
//!
//! Append-only byte buffer with the primitive encoders of the wire format.
//!
//! ## Encodings
//! ```text
//! integers        fixed width, big-endian
//! bool            0x01 | 0x00
//! long string     u32(len + 4) ++ utf8       (length counts itself)
//! short bytes     u16(len) ++ payload        (length does not count itself)
//! nested packet   u32(len(inner) + offset) ++ inner
//! ```
//!
//! Two operations lose data on purpose: a malformed hex literal appends nothing, and
//! [`Writer::write_tlv_limited`] cuts payloads down to its limit. Neither fails. Each
//! occurrence is recorded as a [`Diagnostic`] on the writer so callers and tests can
//! tell a lossy build from a clean one.

use std::fmt;
use std::mem;

use tracing::warn;

use crate::error::Result;
use crate::utils::buffer_pool::BufferPool;
use crate::utils::crypto::Cipher;

/// A silent-loss event observed while building
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A hex literal could not be decoded; nothing was appended
    HexDecodeFailed { input_len: usize },
    /// A short-length-prefixed payload was cut down to `limit` bytes
    Truncated { original_len: usize, limit: usize },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::HexDecodeFailed { input_len } => {
                write!(f, "hex literal of {input_len} chars could not be decoded")
            }
            Diagnostic::Truncated {
                original_len,
                limit,
            } => write!(f, "payload of {original_len} bytes truncated to {limit}"),
        }
    }
}

/// Append-only packet buffer
///
/// A writer has exactly one owner. Writers from [`BufferPool::acquire`] give their
/// buffer back to the pool when dropped, released, or finished.
pub struct Writer {
    buf: Vec<u8>,
    pool: Option<BufferPool>,
    diagnostics: Vec<Diagnostic>,
}

impl Writer {
    /// Standalone writer that is not attached to any pool
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Standalone writer with pre-reserved capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
            pool: None,
            diagnostics: Vec::new(),
        }
    }

    pub(crate) fn pooled(buf: Vec<u8>, pool: BufferPool) -> Self {
        Self {
            buf,
            pool: Some(pool),
            diagnostics: Vec::new(),
        }
    }

    /// Appends raw bytes
    #[inline]
    pub fn write_bytes(&mut self, data: &[u8]) {
        self.buf.extend_from_slice(data);
    }

    #[inline]
    pub fn write_byte(&mut self, b: u8) {
        self.buf.push(b);
    }

    #[inline]
    pub fn write_u16(&mut self, v: u16) {
        self.buf.extend_from_slice(&v.to_be_bytes());
    }

    #[inline]
    pub fn write_u32(&mut self, v: u32) {
        self.buf.extend_from_slice(&v.to_be_bytes());
    }

    #[inline]
    pub fn write_u64(&mut self, v: u64) {
        self.buf.extend_from_slice(&v.to_be_bytes());
    }

    #[inline]
    pub fn write_bool(&mut self, b: bool) {
        self.buf.push(u8::from(b));
    }

    /// Decodes a hex literal and appends the bytes
    ///
    /// A malformed literal appends nothing and records
    /// [`Diagnostic::HexDecodeFailed`].
    pub fn write_hex(&mut self, h: &str) {
        match hex::decode(h) {
            Ok(bytes) => self.write_bytes(&bytes),
            Err(e) => {
                warn!(error = %e, input_len = h.len(), "Dropping malformed hex literal");
                self.record(Diagnostic::HexDecodeFailed { input_len: h.len() });
            }
        }
    }

    /// Writes `u32(len + 4)` followed by the UTF-8 bytes of `v`
    pub fn write_string(&mut self, v: &str) {
        let payload = v.as_bytes();
        self.write_u32((payload.len() as u32).wrapping_add(4));
        self.write_bytes(payload);
    }

    /// Writes `u16(len)` followed by the UTF-8 bytes of `v`
    pub fn write_string_short(&mut self, v: &str) {
        self.write_bytes_short(v.as_bytes());
    }

    /// Writes `u16(len)` followed by `data`
    pub fn write_bytes_short(&mut self, data: &[u8]) {
        self.write_u16(data.len() as u16);
        self.write_bytes(data);
    }

    /// Short-length-prefixed write that keeps at most `limit` bytes of `data`
    ///
    /// Longer payloads are truncated without error; a [`Diagnostic::Truncated`] is
    /// recorded.
    pub fn write_tlv_limited(&mut self, data: &[u8], limit: usize) {
        if data.len() <= limit {
            self.write_bytes_short(data);
            return;
        }

        warn!(
            original_len = data.len(),
            limit, "Truncating short-length-prefixed payload"
        );
        self.record(Diagnostic::Truncated {
            original_len: data.len(),
            limit,
        });
        self.write_bytes_short(&data[..limit]);
    }

    /// Encrypts `data` with `key` and appends the ciphertext verbatim (unframed)
    pub fn encrypt_and_write<C>(&mut self, cipher: &C, key: &[u8], data: &[u8]) -> Result<()>
    where
        C: Cipher + ?Sized,
    {
        let encrypted = cipher.encrypt(key, data)?;
        self.write_bytes(&encrypted);
        Ok(())
    }

    /// Builds a sub-packet in a child writer and appends `u32(len + offset) ++ inner`
    ///
    /// `offset` is supplied by the protocol layer: some length fields count bytes
    /// that sit outside their immediate child (the request envelope passes 4 so the
    /// field counts itself).
    pub fn write_int_lv_packet<F>(&mut self, offset: u32, f: F)
    where
        F: FnOnce(&mut Writer),
    {
        let mut child = self.child();
        f(&mut child);
        self.append_child(offset, child);
    }

    /// Fallible variant of [`Writer::write_int_lv_packet`]
    ///
    /// Nothing is appended when the builder fails.
    pub fn try_write_int_lv_packet<F>(&mut self, offset: u32, f: F) -> Result<()>
    where
        F: FnOnce(&mut Writer) -> Result<()>,
    {
        let mut child = self.child();
        f(&mut child)?;
        self.append_child(offset, child);
        Ok(())
    }

    /// Current content
    pub fn bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Silent-loss events recorded so far
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// True when no data has been dropped or truncated
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Consumes the writer and returns an owned copy of its content
    ///
    /// A pooled buffer goes back to its pool after the copy is taken.
    pub fn finish(self) -> Vec<u8> {
        self.finish_with_diagnostics().0
    }

    /// Like [`Writer::finish`], also handing back the recorded diagnostics
    pub fn finish_with_diagnostics(mut self) -> (Vec<u8>, Vec<Diagnostic>) {
        let diagnostics = mem::take(&mut self.diagnostics);
        let bytes = match &self.pool {
            Some(pool) => {
                pool.metrics().bytes_finished(self.buf.len() as u64);
                self.buf.to_vec()
            }
            None => mem::take(&mut self.buf),
        };
        (bytes, diagnostics)
    }

    fn child(&self) -> Writer {
        match &self.pool {
            Some(pool) => pool.acquire(),
            None => Writer::new(),
        }
    }

    fn append_child(&mut self, offset: u32, mut child: Writer) {
        self.write_u32((child.len() as u32).wrapping_add(offset));
        self.write_bytes(child.bytes());
        self.diagnostics.append(&mut child.diagnostics);
    }

    fn record(&mut self, diagnostic: Diagnostic) {
        if let Some(pool) = &self.pool {
            pool.metrics().silent_loss();
        }
        self.diagnostics.push(diagnostic);
    }
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Writer {
    fn drop(&mut self) {
        if let Some(pool) = self.pool.take() {
            pool.recycle(mem::take(&mut self.buf));
        }
    }
}

impl fmt::Debug for Writer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Writer")
            .field("len", &self.buf.len())
            .field("capacity", &self.buf.capacity())
            .field("pooled", &self.pool.is_some())
            .field("diagnostics", &self.diagnostics)
            .finish()
    }
}
