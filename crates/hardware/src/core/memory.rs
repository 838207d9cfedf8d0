//! Flat Memory Image.
//!
//! This module provides the word-addressed memory backing both the text and
//! data segments. It provides:
//! 1. **Storage:** A fixed-length vector of 32-bit words, sized at load time
//!    and never resized.
//! 2. **Address Mapping:** Byte addresses map to word indices as
//!    `(address - base) / 4`; unaligned or out-of-image addresses map nowhere.
//! 3. **Load Enforcement:** Program images larger than the text segment are
//!    rejected before any cycle executes.

use crate::common::Fault;
use crate::common::constants::WORD_BYTES;
use crate::config::Config;

/// The flat memory image: text segment followed by the data segment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Memory {
    base: u32,
    window_start: u32,
    window_end: u32,
    words: Vec<u32>,
}

impl Memory {
    /// Creates a zero-filled memory image with the geometry of `config`.
    pub fn new(config: &Config) -> Self {
        Self {
            base: config.text_base,
            window_start: config.data_window_start,
            window_end: config.data_window_end,
            words: vec![0; config.image_words()],
        }
    }

    /// Creates a memory image holding `program` at the start of the text
    /// segment, with the rest of the image zero-filled.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::ProgramTooLarge`] when the program does not fit the
    /// text segment.
    pub fn with_program(config: &Config, program: &[u32]) -> Result<Self, Fault> {
        if program.len() > config.text_words {
            return Err(Fault::ProgramTooLarge {
                words: program.len(),
                capacity: config.text_words,
            });
        }
        let mut mem = Self::new(config);
        mem.words[..program.len()].copy_from_slice(program);
        Ok(mem)
    }

    /// Reads the word at a byte address.
    ///
    /// Returns `None` when the address is unaligned or outside the image.
    #[inline]
    pub fn read(&self, addr: u32) -> Option<u32> {
        self.index(addr).map(|i| self.words[i])
    }

    /// Writes the word at a byte address.
    ///
    /// Returns `false` (and writes nothing) when the address is unaligned or
    /// outside the image.
    #[inline]
    pub fn write(&mut self, addr: u32, val: u32) -> bool {
        match self.index(addr) {
            Some(i) => {
                self.words[i] = val;
                true
            }
            None => false,
        }
    }

    /// Returns true when `addr` lies inside the legal load/store window.
    ///
    /// The window is a fixed sub-range of the data segment; the text segment
    /// is never legal for loads and stores.
    #[inline]
    pub fn in_data_window(&self, addr: u32) -> bool {
        (self.window_start..self.window_end).contains(&addr)
    }

    /// Base byte address of the image (start of the text segment).
    pub fn base(&self) -> u32 {
        self.base
    }

    /// The legal load/store window as a half-open byte-address range.
    pub fn data_window(&self) -> std::ops::Range<u32> {
        self.window_start..self.window_end
    }

    /// Maps a byte address to a word index.
    fn index(&self, addr: u32) -> Option<usize> {
        if addr < self.base || addr % WORD_BYTES != 0 {
            return None;
        }
        let idx = ((addr - self.base) / WORD_BYTES) as usize;
        (idx < self.words.len()).then_some(idx)
    }
}
