/*
    FluxFox
    https://github.com/dbalsom/fluxfox

    Copyright 2024 Daniel Balsom

    Permission is hereby granted, free of charge, to any person obtaining a
    copy of this software and associated documentation files (the “Software”),
    to deal in the Software without restriction, including without limitation
    the rights to use, copy, modify, merge, publish, distribute, sublicense,
    and/or sell copies of the Software, and to permit persons to whom the
    Software is furnished to do so, subject to the following conditions:

    The above copyright notice and this permission notice shall be included in
    all copies or substantial portions of the Software.

    THE SOFTWARE IS PROVIDED “AS IS”, WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
    IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
    FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
    AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
    LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
    FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER
    DEALINGS IN THE SOFTWARE.

    --------------------------------------------------------------------------

    src/io.rs

    I/O traits used by the ATX reader. The reader never holds a file handle
    of its own; every structured read goes through a ByteSource by absolute
    offset.
*/

pub use std::io::{Cursor, Error, ErrorKind, Read, Result, Seek, SeekFrom};

pub trait ReadSeek: Read + Seek {}
impl<T: Read + Seek> ReadSeek for T {}

/// A random-access byte reader.
///
/// `read_at` fills as much of `buf` as it can starting at `offset` and returns the number of bytes
/// obtained. A short count (including zero) covers end of file and read failure alike; callers
/// cannot and do not need to tell them apart.
pub trait ByteSource {
    fn read_at(&mut self, offset: u64, buf: &mut [u8]) -> usize;

    /// Return true if `buf` was filled completely.
    fn read_exact_at(&mut self, offset: u64, buf: &mut [u8]) -> bool {
        self.read_at(offset, buf) == buf.len()
    }
}

impl<T: ReadSeek> ByteSource for T {
    fn read_at(&mut self, offset: u64, buf: &mut [u8]) -> usize {
        if self.seek(SeekFrom::Start(offset)).is_err() {
            return 0;
        }

        let mut total = 0;
        while total < buf.len() {
            match self.read(&mut buf[total..]) {
                Ok(0) => break,
                Ok(n) => total += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    log::trace!("read_at(): read failed at offset {}: {}", offset, e);
                    break;
                }
            }
        }
        total
    }
}
