//! Configuration system for the simulator.
//!
//! This module defines the memory geometry the machine is built from. It
//! provides:
//! 1. **Defaults:** The classic layout (text at 0x0040_0000, 4 KiB of text,
//!    12 KiB of data, loads/stores legal in the upper 12 KiB).
//! 2. **Overrides:** Deserialization from JSON for the CLI's `--config` flag.
//! 3. **Derived values:** Image size, image end, and the initial stack pointer.

use serde::Deserialize;

use crate::common::constants::WORD_BYTES;

/// Default configuration constants for the simulator.
mod defaults {
    /// Base address of the text segment; the reset program counter.
    pub const TEXT_BASE: u32 = 0x0040_0000;

    /// Text-segment capacity in 32-bit words (4 KiB).
    pub const TEXT_WORDS: usize = 1024;

    /// Data-segment capacity in 32-bit words (12 KiB).
    pub const DATA_WORDS: usize = 3072;

    /// First byte address where loads and stores are legal.
    pub const DATA_WINDOW_START: u32 = 0x0040_1000;

    /// One past the last byte address where loads and stores are legal.
    pub const DATA_WINDOW_END: u32 = 0x0040_4000;
}

/// Memory geometry of the simulated machine.
///
/// The defaults reproduce the classic teaching layout; deserialize from JSON
/// to override. The data window is specified independently of the segment
/// capacities: it is a fixed policy range, not derived from the image size.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Base address of the text segment; also the reset pc.
    pub text_base: u32,
    /// Text-segment capacity in words.
    pub text_words: usize,
    /// Data-segment capacity in words.
    pub data_words: usize,
    /// Inclusive lower bound of the legal load/store window.
    pub data_window_start: u32,
    /// Exclusive upper bound of the legal load/store window.
    pub data_window_end: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            text_base: defaults::TEXT_BASE,
            text_words: defaults::TEXT_WORDS,
            data_words: defaults::DATA_WORDS,
            data_window_start: defaults::DATA_WINDOW_START,
            data_window_end: defaults::DATA_WINDOW_END,
        }
    }
}

impl Config {
    /// Total image size in words (text + data).
    pub fn image_words(&self) -> usize {
        self.text_words + self.data_words
    }

    /// One past the last byte address of the image.
    pub fn image_end(&self) -> u32 {
        self.text_base + (self.image_words() as u32) * WORD_BYTES
    }

    /// Initial stack pointer: the top of the data segment.
    pub fn initial_sp(&self) -> u32 {
        self.image_end()
    }

    /// First byte address of the data segment.
    pub fn data_base(&self) -> u32 {
        self.text_base + (self.text_words as u32) * WORD_BYTES
    }
}
