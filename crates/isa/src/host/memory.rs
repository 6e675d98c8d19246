//! Reference Flat Memory.
//!
//! One contiguous little-endian range `[base, base + size)`. Word accesses must be
//! 4-byte aligned and lie entirely inside the range.

use crate::common::constants::WORD_BYTES;
use crate::common::error::AddressError;
use crate::config::MemoryConfig;
use crate::host::Memory;

/// Flat byte-addressable memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlatMemory {
    base: u32,
    data: Vec<u8>,
}

impl FlatMemory {
    /// Creates a zero-filled memory mapping `size` bytes at `base`.
    pub fn new(base: u32, size: u32) -> Self {
        Self {
            base,
            data: vec![0; size as usize],
        }
    }

    /// Creates a memory from the configured map.
    pub fn from_config(config: &MemoryConfig) -> Self {
        Self::new(config.base, config.size)
    }

    /// Returns the first mapped address.
    pub const fn base(&self) -> u32 {
        self.base
    }

    /// Returns the number of mapped bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if nothing is mapped.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Validates `addr` and returns the byte offset of the word.
    fn offset(&self, addr: u32) -> Result<usize, AddressError> {
        if addr % WORD_BYTES != 0 {
            return Err(AddressError::Misaligned(addr));
        }
        let offset = addr
            .checked_sub(self.base)
            .ok_or(AddressError::OutOfRange(addr))? as usize;
        if offset + WORD_BYTES as usize > self.data.len() {
            return Err(AddressError::OutOfRange(addr));
        }
        Ok(offset)
    }
}

impl Memory for FlatMemory {
    fn load_word(&mut self, addr: u32) -> Result<i32, AddressError> {
        let offset = self.offset(addr)?;
        let mut bytes = [0u8; WORD_BYTES as usize];
        bytes.copy_from_slice(&self.data[offset..offset + WORD_BYTES as usize]);
        Ok(i32::from_le_bytes(bytes))
    }

    fn store_word(&mut self, addr: u32, val: i32) -> Result<(), AddressError> {
        let offset = self.offset(addr)?;
        self.data[offset..offset + WORD_BYTES as usize].copy_from_slice(&val.to_le_bytes());
        Ok(())
    }
}
