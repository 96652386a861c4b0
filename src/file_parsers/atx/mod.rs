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

    src/file_parsers/atx/mod.rs

    A parser for the ATX disk image format.

    ATX images were devised to preserve copy-protected Atari 8-bit disks.
    Each track record carries its own list of sector headers, and each
    sector header a forged FDC status byte, so that bad, missing, weak and
    duplicate sectors can be reproduced by an emulated drive.
*/

pub mod phantom;
pub mod records;
pub(crate) mod resolve;
pub(crate) mod sector_scan;
pub mod track_index;

use crate::{
    file_parsers::atx::records::{decode_record, AtxFileHeader, AtxRecord},
    io::ByteSource,
    AtxError,
};

pub const ATX_SIGNATURE: &[u8; 4] = b"AT8X";
pub const ATX_VERSION: u16 = 1;
/// The status reported for a sector number that no sector header in its track carries.
pub const SECTOR_NOT_FOUND_STATUS: u8 = 0xF7;

pub struct AtxFormat;

impl AtxFormat {
    pub(crate) fn extensions() -> Vec<&'static str> {
        vec!["atx"]
    }

    /// Return true if the source begins with an ATX signature. The version is not checked.
    pub fn detect<S: ByteSource + ?Sized>(source: &mut S) -> bool {
        let mut signature = [0u8; 4];
        source.read_exact_at(0, &mut signature) && &signature == ATX_SIGNATURE
    }

    /// Read and validate the file header.
    pub(crate) fn read_header<S: ByteSource + ?Sized>(source: &mut S) -> Result<AtxFileHeader, AtxError> {
        let mut buf = [0u8; AtxFileHeader::SIZE];
        let read = source.read_at(0, &mut buf);
        if read < AtxFileHeader::SIZE {
            log::debug!("AtxFormat::read_header(): Short header read ({} bytes)", read);
            return Err(AtxError::UnknownFormat);
        }

        let file_header: AtxFileHeader = decode_record(&buf)?;
        if &file_header.signature != ATX_SIGNATURE {
            log::debug!(
                "AtxFormat::read_header(): Bad signature: {:02X?}",
                file_header.signature
            );
            return Err(AtxError::UnknownFormat);
        }

        if file_header.version != ATX_VERSION || file_header.min_version != ATX_VERSION {
            log::error!(
                "AtxFormat::read_header(): Unsupported version {} (min version {})",
                file_header.version,
                file_header.min_version
            );
            return Err(AtxError::UnsupportedVersion {
                version: file_header.version,
                min_version: file_header.min_version,
            });
        }

        log::trace!(
            "AtxFormat::read_header(): Creator: {:04X} v{:04X} density: {} data: {:08X}-{:08X}",
            file_header.creator,
            file_header.creator_version,
            file_header.density,
            file_header.start_data,
            file_header.end_data
        );
        Ok(file_header)
    }
}
