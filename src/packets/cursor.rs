//! Bounds-checked little-endian cursor over a packet buffer.

use crate::{Result, TelemetryError};

/// Sequential reader over a byte slice.
///
/// Every read is bounds-checked; a read past the end yields
/// [`TelemetryError::Truncated`] with the offset baked into the context so the
/// failing field can be identified from the error alone.
pub struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
    context: &'static str,
}

impl<'a> Cursor<'a> {
    pub fn new(data: &'a [u8], context: &'static str) -> Self {
        Self { data, pos: 0, context }
    }

    /// Start reading at `offset`, e.g. at a per-car entry inside a packet.
    pub fn at(data: &'a [u8], offset: usize, context: &'static str) -> Self {
        Self { data, pos: offset, context }
    }

    /// Current read position.
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn u8(&mut self) -> Result<u8> {
        let [b] = self.take::<1>()?;
        Ok(b)
    }

    #[inline]
    pub fn i8(&mut self) -> Result<i8> {
        self.u8().map(|v| v as i8)
    }

    #[inline]
    pub fn u16_le(&mut self) -> Result<u16> {
        self.take::<2>().map(u16::from_le_bytes)
    }

    #[inline]
    pub fn u32_le(&mut self) -> Result<u32> {
        self.take::<4>().map(u32::from_le_bytes)
    }

    #[inline]
    pub fn u64_le(&mut self) -> Result<u64> {
        self.take::<8>().map(u64::from_le_bytes)
    }

    /// Little-endian f32. Non-finite values decode to `0.0` so downstream
    /// arithmetic never propagates NaN from a corrupted datagram.
    #[inline]
    pub fn f32_le(&mut self) -> Result<f32> {
        self.take::<4>()
            .map(f32::from_le_bytes)
            .map(|v| if v.is_finite() { v } else { 0.0 })
    }

    #[inline]
    pub fn f64_le(&mut self) -> Result<f64> {
        self.take::<8>()
            .map(f64::from_le_bytes)
            .map(|v| if v.is_finite() { v } else { 0.0 })
    }

    pub fn skip(&mut self, n: usize) -> Result<()> {
        let end = self.pos + n;
        if end > self.data.len() {
            return Err(TelemetryError::truncated(self.context, end, self.data.len()));
        }
        self.pos = end;
        Ok(())
    }

    pub fn u8_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        self.take::<N>()
    }

    pub fn u16_le_array<const N: usize>(&mut self) -> Result<[u16; N]> {
        let mut arr = [0u16; N];
        for slot in &mut arr {
            *slot = self.u16_le()?;
        }
        Ok(arr)
    }

    pub fn f32_le_array<const N: usize>(&mut self) -> Result<[f32; N]> {
        let mut arr = [0.0f32; N];
        for slot in &mut arr {
            *slot = self.f32_le()?;
        }
        Ok(arr)
    }

    #[inline]
    fn take<const N: usize>(&mut self) -> Result<[u8; N]> {
        let end = self.pos + N;
        if end > self.data.len() {
            return Err(TelemetryError::truncated(self.context, end, self.data.len()));
        }
        let mut bytes = [0u8; N];
        bytes.copy_from_slice(&self.data[self.pos..end]);
        self.pos = end;
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_little_endian_scalars() {
        let data = [0x01, 0x34, 0x12, 0x00, 0x00, 0x80, 0x3f];
        let mut c = Cursor::new(&data, "test");
        assert_eq!(c.u8().unwrap(), 1);
        assert_eq!(c.u16_le().unwrap(), 0x1234);
        assert!((c.f32_le().unwrap() - 1.0).abs() < f32::EPSILON);
        assert_eq!(c.position(), 7);
    }

    #[test]
    fn rejects_read_past_end() {
        let data = [0u8; 3];
        let mut c = Cursor::new(&data, "test");
        assert!(c.u32_le().is_err());
    }

    #[test]
    fn non_finite_floats_decode_to_zero() {
        let data = f32::NAN.to_le_bytes();
        let mut c = Cursor::new(&data, "test");
        assert_eq!(c.f32_le().unwrap(), 0.0);
    }

    #[test]
    fn at_offset_reads_entry_in_place() {
        let mut data = vec![0u8; 10];
        data[6] = 0xAB;
        let mut c = Cursor::at(&data, 6, "test");
        assert_eq!(c.u8().unwrap(), 0xAB);
    }
}
