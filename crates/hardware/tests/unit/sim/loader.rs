//! Binary image loading.
//!
//! Images are flat big-endian words; oversized programs are rejected before
//! any cycle executes.

use std::io::Write;

use mipsim_core::common::Fault;
use mipsim_core::sim::loader::load_image;
use mipsim_core::{Config, Machine};

#[test]
fn words_are_read_big_endian() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&[0x24, 0x01, 0x00, 0x05, 0x08, 0x10, 0x00, 0x00])
        .unwrap();

    let words = load_image(file.path()).unwrap();
    assert_eq!(words, vec![0x2401_0005, 0x0810_0000]);
}

#[test]
fn trailing_partial_word_is_ignored() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&[0x24, 0x01, 0x00, 0x05, 0xAA, 0xBB]).unwrap();

    let words = load_image(file.path()).unwrap();
    assert_eq!(words, vec![0x2401_0005]);
}

#[test]
fn empty_image_loads_no_words() {
    let file = tempfile::NamedTempFile::new().unwrap();
    assert_eq!(load_image(file.path()).unwrap(), Vec::<u32>::new());
}

#[test]
fn missing_file_is_an_io_error() {
    assert!(load_image(std::path::Path::new("/nonexistent/image.dump")).is_err());
}

#[test]
fn oversized_program_is_rejected_at_load() {
    let config = Config::default();
    let program = vec![0u32; config.text_words + 1];
    let err = Machine::with_program(&config, &program).unwrap_err();
    assert_eq!(
        err,
        Fault::ProgramTooLarge {
            words: config.text_words + 1,
            capacity: config.text_words,
        }
    );
}

#[test]
fn program_filling_the_text_segment_exactly_loads() {
    let config = Config::default();
    let program = vec![0u32; config.text_words];
    assert!(Machine::with_program(&config, &program).is_ok());
}
