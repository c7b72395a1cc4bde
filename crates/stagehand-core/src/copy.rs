//! Entry copy with a reusable buffer.
//!
//! Materialization needs to tell a failing archive read apart from a failing
//! destination write, which `std::io::copy` does not do. [`copy_with_buffer`]
//! reports the side that failed through [`CopyError`].

use std::io;
use std::io::Read;
use std::io::Write;

/// Buffer size for entry copies (64KB).
const COPY_BUFFER_SIZE: usize = 64 * 1024;

/// Reusable copy buffer.
///
/// One buffer is allocated per materialization and reused for every entry.
///
/// # Examples
///
/// ```
/// use stagehand_core::copy::CopyBuffer;
/// use stagehand_core::copy::copy_with_buffer;
///
/// let mut buffer = CopyBuffer::new();
/// let mut output = Vec::new();
/// let copied = copy_with_buffer(&mut &b"HELLO"[..], &mut output, &mut buffer).unwrap();
/// assert_eq!(copied, 5);
/// assert_eq!(output, b"HELLO");
/// ```
#[derive(Debug)]
pub struct CopyBuffer {
    buf: Box<[u8]>,
}

impl CopyBuffer {
    /// Creates a new zeroed copy buffer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buf: vec![0u8; COPY_BUFFER_SIZE].into_boxed_slice(),
        }
    }

    /// Returns the buffer size in bytes.
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.buf.len()
    }
}

impl Default for CopyBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Side of a copy that failed.
#[derive(Debug)]
pub enum CopyError {
    /// Reading the source failed.
    Read(io::Error),
    /// Writing the destination failed.
    Write(io::Error),
}

/// Copies `reader` into `writer` and returns the number of bytes copied.
///
/// Interrupted reads are retried.
///
/// # Errors
///
/// Returns [`CopyError::Read`] or [`CopyError::Write`] depending on which
/// side failed.
#[inline]
pub fn copy_with_buffer<R: Read + ?Sized, W: Write + ?Sized>(
    reader: &mut R,
    writer: &mut W,
    buffer: &mut CopyBuffer,
) -> Result<u64, CopyError> {
    let mut total: u64 = 0;

    loop {
        let bytes_read = match reader.read(&mut buffer.buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(CopyError::Read(e)),
        };

        writer
            .write_all(&buffer.buf[..bytes_read])
            .map_err(CopyError::Write)?;

        total = total.saturating_add(bytes_read as u64);
    }

    Ok(total)
}
