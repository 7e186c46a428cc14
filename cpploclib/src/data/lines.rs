//! Decode-tolerant line counting.
//!
//! File contents are decoded as UTF-8 with every invalid byte sequence
//! dropped (not replaced), and the decoded text is split into lines using
//! universal newlines: `\n`, `\r\n` and a lone `\r` each end one line. A
//! final segment without a terminator still counts as a line when anything
//! decodable remains in it.
//!
//! Undecodable bytes can neither add nor hide a terminator, since line
//! breaks are ASCII. They only matter when they are all that follows the
//! last terminator, in which case that trailing segment is empty and does
//! not count.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use crate::error::CpplocError;
use crate::Result;

/// Line-splitting state carried across decoded chunks.
#[derive(Debug, Default)]
struct LineSplitter {
    lines: u64,
    /// Decoded content seen since the last terminator
    open_segment: bool,
    /// Last decoded byte was `\r`, so a following `\n` belongs to it
    after_cr: bool,
}

impl LineSplitter {
    fn feed(&mut self, text: &str) {
        for &byte in text.as_bytes() {
            match byte {
                b'\n' if self.after_cr => {
                    self.after_cr = false;
                }
                b'\n' => {
                    self.lines += 1;
                    self.open_segment = false;
                }
                b'\r' => {
                    self.lines += 1;
                    self.open_segment = false;
                    self.after_cr = true;
                }
                _ => {
                    self.open_segment = true;
                    self.after_cr = false;
                }
            }
        }
    }

    /// Feed raw bytes, dropping invalid sequences.
    ///
    /// Returns the length of a trailing sequence that was cut short by the
    /// end of `bytes` and may still complete in the next block.
    fn feed_bytes(&mut self, bytes: &[u8]) -> usize {
        let mut incomplete = 0;
        for chunk in bytes.utf8_chunks() {
            self.feed(chunk.valid());
            let invalid = chunk.invalid();
            incomplete = match std::str::from_utf8(invalid) {
                Err(err) if err.error_len().is_none() => invalid.len(),
                _ => 0,
            };
        }
        incomplete
    }

    fn finish(self) -> u64 {
        self.lines + u64::from(self.open_segment)
    }
}

/// Count the lines in a byte buffer, skipping bytes that are not valid UTF-8.
///
/// # Example
///
/// ```rust
/// use cpploclib::count_lines;
///
/// assert_eq!(count_lines(b"int a;\nint b;\n"), 2);
/// assert_eq!(count_lines(b"int a;\nint b;"), 2);
/// assert_eq!(count_lines(b"a\r\nb\rc"), 3);
/// assert_eq!(count_lines(b"a\n\xff\xfe"), 1);
/// ```
pub fn count_lines(bytes: &[u8]) -> u64 {
    let mut splitter = LineSplitter::default();
    splitter.feed_bytes(bytes);
    splitter.finish()
}

/// Read a source to the end block by block and count its lines.
///
/// A multi-byte sequence split across two blocks is carried over and
/// decoded whole. One still incomplete at end of input is dropped.
pub fn count_lines_in_reader(reader: impl Read) -> io::Result<u64> {
    let mut reader = BufReader::new(reader);
    let mut splitter = LineSplitter::default();
    let mut carry: Vec<u8> = Vec::new();

    loop {
        let block = match reader.fill_buf() {
            Ok(block) => block,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        };
        if block.is_empty() {
            break;
        }
        let read = block.len();

        if carry.is_empty() {
            let keep = splitter.feed_bytes(block);
            carry.extend_from_slice(&block[read - keep..]);
        } else {
            carry.extend_from_slice(block);
            let keep = splitter.feed_bytes(&carry);
            carry.drain(..carry.len() - keep);
        }

        reader.consume(read);
    }

    Ok(splitter.finish())
}

/// Count the lines of the file at `path`.
///
/// The file is opened, read to the end and closed before returning, on
/// success and on failure alike.
pub fn count_file_lines(path: impl AsRef<Path>) -> Result<u64> {
    let path = path.as_ref();
    let to_error = |source: io::Error| CpplocError::FileRead {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(to_error)?;
    count_lines_in_reader(file).map_err(to_error)
}
