//! MSB-first bit stream operations.
//!
//! The container format packs both the serialized code tree and the encoded
//! payload MSB-first (most significant bit first) within each byte, so both
//! halves of the codec share these two cursor types. Each half is zero-padded
//! to a byte boundary independently.

use crate::error::{HuffmanError, Result};

/// MSB-first bit reader over a borrowed byte slice.
#[derive(Debug)]
pub(crate) struct MsbBitReader<'a> {
    /// Input data.
    data: &'a [u8],
    /// Current byte position.
    byte_pos: usize,
    /// Bit buffer (MSB-first).
    buffer: u32,
    /// Number of valid bits in buffer.
    bits_in_buffer: u8,
    /// Total bits read (for error reporting).
    total_bits_read: u64,
}

impl<'a> MsbBitReader<'a> {
    /// Create a new MSB bit reader.
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            byte_pos: 0,
            buffer: 0,
            bits_in_buffer: 0,
            total_bits_read: 0,
        }
    }

    /// Fill buffer with at least `count` bits.
    #[inline]
    fn fill_buffer(&mut self, count: u8) -> Result<()> {
        while self.bits_in_buffer < count && self.byte_pos < self.data.len() {
            let byte = self.data[self.byte_pos];
            self.byte_pos += 1;
            self.buffer = (self.buffer << 8) | (byte as u32);
            self.bits_in_buffer += 8;
        }

        if self.bits_in_buffer < count {
            return Err(HuffmanError::UnexpectedEof {
                position: self.total_bits_read,
            });
        }

        Ok(())
    }

    /// Read up to 16 bits from the stream (MSB-first).
    pub(crate) fn read_bits(&mut self, count: u8) -> Result<u16> {
        debug_assert!((1..=16).contains(&count), "invalid bit count {count}");

        self.fill_buffer(count)?;

        // Extract bits from the MSB side of the buffer.
        let shift = self.bits_in_buffer - count;
        let mask = (1u32 << count) - 1;
        let value = (self.buffer >> shift) & mask;

        self.bits_in_buffer -= count;
        self.total_bits_read += count as u64;

        Ok(value as u16)
    }

    /// Read a single bit.
    #[inline]
    pub(crate) fn read_bit(&mut self) -> Result<bool> {
        Ok(self.read_bits(1)? != 0)
    }

    /// Get total bits read.
    pub(crate) fn bits_read(&self) -> u64 {
        self.total_bits_read
    }
}

/// MSB-first bit writer backed by a growable byte vector.
///
/// Callers pre-size the vector with [`MsbBitWriter::with_capacity`]; running
/// past that capacity grows the vector rather than dropping bits.
#[derive(Debug, Default)]
pub(crate) struct MsbBitWriter {
    /// Output buffer.
    output: Vec<u8>,
    /// Bit buffer (MSB-first).
    buffer: u32,
    /// Number of bits in buffer.
    bits_in_buffer: u8,
}

impl MsbBitWriter {
    /// Create a new MSB bit writer.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Create a writer whose output vector is pre-sized to `bytes`.
    pub(crate) fn with_capacity(bytes: usize) -> Self {
        Self {
            output: Vec::with_capacity(bytes),
            buffer: 0,
            bits_in_buffer: 0,
        }
    }

    /// Write up to 16 bits to the stream (MSB-first).
    pub(crate) fn write_bits(&mut self, value: u16, count: u8) {
        debug_assert!(count <= 16, "invalid bit count {count}");
        if count == 0 {
            return;
        }

        // Shift left to make room, then flush complete bytes from the MSB side.
        self.buffer = (self.buffer << count) | (value as u32 & ((1u32 << count) - 1));
        self.bits_in_buffer += count;

        while self.bits_in_buffer >= 8 {
            let byte = (self.buffer >> (self.bits_in_buffer - 8)) as u8;
            self.output.push(byte);
            self.bits_in_buffer -= 8;
        }
    }

    /// Write a single bit.
    #[inline]
    pub(crate) fn write_bit(&mut self, bit: bool) {
        self.write_bits(bit as u16, 1);
    }

    /// Write the low `count` bits of `value`, most significant bit first.
    ///
    /// Codewords can reach 64 bits on pathologically skewed inputs, so this
    /// chunks the value through [`MsbBitWriter::write_bits`].
    pub(crate) fn write_code(&mut self, value: u64, count: u8) {
        debug_assert!(count <= 64, "invalid code length {count}");

        let mut remaining = count;
        while remaining > 16 {
            remaining -= 16;
            self.write_bits((value >> remaining) as u16, 16);
        }
        if remaining > 0 {
            self.write_bits(value as u16, remaining);
        }
    }

    /// Flush remaining bits, padding the final byte with zeros, and return
    /// the output data.
    pub(crate) fn into_vec(mut self) -> Vec<u8> {
        if self.bits_in_buffer > 0 {
            let padding = 8 - self.bits_in_buffer;
            self.buffer <<= padding;
            self.output.push((self.buffer & 0xFF) as u8);
        }
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_msb_roundtrip() {
        let mut writer = MsbBitWriter::new();
        writer.write_bits(0b101, 3);
        writer.write_bits(0b1100, 4);
        writer.write_bits(0b11111111, 8);

        let data = writer.into_vec();

        let mut reader = MsbBitReader::new(&data);
        assert_eq!(reader.read_bits(3).unwrap(), 0b101);
        assert_eq!(reader.read_bits(4).unwrap(), 0b1100);
        assert_eq!(reader.read_bits(8).unwrap(), 0b11111111);
    }

    #[test]
    fn test_single_bits_pack_msb_first() {
        let mut writer = MsbBitWriter::new();
        for bit in [true, false, true, true, false, true, false, true] {
            writer.write_bit(bit);
        }
        assert_eq!(writer.into_vec(), vec![0xB5]);
    }

    #[test]
    fn test_partial_byte_is_zero_padded() {
        let mut writer = MsbBitWriter::new();
        writer.write_bits(0b101, 3);
        assert_eq!(writer.into_vec(), vec![0b1010_0000]);
    }

    #[test]
    fn test_write_code_over_16_bits() {
        let mut writer = MsbBitWriter::new();
        writer.write_code(0xABCDE, 20);

        let data = writer.into_vec();
        let mut reader = MsbBitReader::new(&data);
        assert_eq!(reader.read_bits(16).unwrap(), 0xABCD);
        assert_eq!(reader.read_bits(4).unwrap(), 0xE);
    }

    #[test]
    fn test_reader_eof() {
        let mut reader = MsbBitReader::new(&[0xFF]);
        assert_eq!(reader.read_bits(4).unwrap(), 0xF);

        let err = reader.read_bits(8).unwrap_err();
        assert!(matches!(
            err,
            crate::error::HuffmanError::UnexpectedEof { position: 4 }
        ));
    }

    #[test]
    fn test_reader_empty_input() {
        let mut reader = MsbBitReader::new(&[]);
        assert!(reader.read_bit().is_err());
    }

    #[test]
    fn test_bits_read_tracking() {
        let mut reader = MsbBitReader::new(&[0x00, 0x00]);
        reader.read_bits(3).unwrap();
        reader.read_bits(5).unwrap();
        assert_eq!(reader.bits_read(), 8);
    }
}
