//! Low-level, bounds-checked reading over a borrowed container buffer.

use byteorder::{ByteOrder, LittleEndian};

use super::types::error::{Result, SdtsError};

/// A cursor over an in-memory container.
///
/// Every read is checked against the end of the buffer. Running past the end
/// is reported as [`SdtsError::CorruptOffsetTable`], since it can only happen
/// when an offset or length field points outside the file.
#[derive(Debug, Clone)]
pub struct SliceReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> SliceReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Creates a reader positioned at `pos`.
    pub fn at(buf: &'a [u8], pos: usize) -> Result<Self> {
        let mut reader = Self::new(buf);
        reader.seek(pos)?;
        Ok(reader)
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Moves to an absolute position. Seeking to the very end is allowed.
    pub fn seek(&mut self, pos: usize) -> Result<()> {
        if pos > self.buf.len() {
            return Err(SdtsError::CorruptOffsetTable(format!(
                "seek to {} past end of buffer ({} bytes)",
                pos,
                self.buf.len()
            )));
        }
        self.pos = pos;
        Ok(())
    }

    /// Borrows the next `len` bytes and advances past them.
    pub fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        let end = self
            .pos
            .checked_add(len)
            .filter(|&end| end <= self.buf.len())
            .ok_or_else(|| {
                SdtsError::CorruptOffsetTable(format!(
                    "read of {} bytes at {} runs past end of buffer ({} bytes)",
                    len,
                    self.pos,
                    self.buf.len()
                ))
            })?;
        let bytes = &self.buf[self.pos..end];
        self.pos = end;
        Ok(bytes)
    }

    pub fn skip(&mut self, len: usize) -> Result<()> {
        self.take(len).map(|_| ())
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        Ok(LittleEndian::read_u32(self.take(4)?))
    }

    /// Reads `count` little-endian u32 values.
    ///
    /// The byte size is checked before allocating, so a garbage count cannot
    /// trigger a huge allocation.
    pub fn read_u32_table(&mut self, count: usize) -> Result<Vec<u32>> {
        let size = count.checked_mul(4).ok_or_else(|| {
            SdtsError::CorruptOffsetTable(format!("table of {} values overflows", count))
        })?;
        let bytes = self.take(size)?;
        Ok(bytes.chunks_exact(4).map(LittleEndian::read_u32).collect())
    }
}
