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
*/

//! fluxfox_atx reads ATX disk images, the container format used to preserve
//! copy-protected Atari 8-bit floppy disks.
//!
//! An ATX image stores a variable-length record per track, each carrying a
//! list of sector headers with their own FDC status byte. Copy protection
//! schemes rely on sectors with forced error status and on duplicate
//! ("phantom") sectors sharing the same sector number. [AtxImage] indexes
//! the tracks of an image once when it is opened, and then resolves logical
//! sector numbers to a status code and data payload the way a drive
//! emulator expects them.

mod atx_image;
pub mod file_parsers;
pub mod io;
pub mod types;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AtxError {
    #[error("An IO error occurred reading the disk image: {0}")]
    IoError(String),
    #[error("Unknown disk image format")]
    UnknownFormat,
    #[error("Unsupported ATX version {version} (minimum version {min_version})")]
    UnsupportedVersion { version: u16, min_version: u16 },
    #[error("The disk image format parser encountered an error")]
    FormatParseError,
    #[error("Physical track {0} has no entry in the track index")]
    TrackNotIndexed(u16),
    #[error("Invalid parameters were specified to a library function")]
    ParameterError,
}

impl From<std::io::Error> for AtxError {
    fn from(err: std::io::Error) -> Self {
        AtxError::IoError(err.to_string())
    }
}

impl From<binrw::Error> for AtxError {
    fn from(err: binrw::Error) -> Self {
        match err {
            binrw::Error::Io(e) => AtxError::IoError(e.to_string()),
            _ => AtxError::FormatParseError,
        }
    }
}

pub use crate::{
    atx_image::{AtxImage, AtxSectorRead, AtxTrackInfo},
    file_parsers::{
        atx::{
            records::{AtxFileHeader, AtxSectorHeader, AtxSectorListHeader, AtxTrackHeader},
            track_index::{TrackIndex, MAX_TRACKS},
            AtxFormat,
            ATX_SIGNATURE,
            ATX_VERSION,
            SECTOR_NOT_FOUND_STATUS,
        },
        supported_extensions,
        AtxReadOptions,
    },
    types::{AtxDensity, AtxGeometry, AtxTrackFlags, PhantomPreference, SectorAddress, SectorStatus},
};

pub mod prelude {
    pub use crate::{
        io::ByteSource,
        AtxDensity,
        AtxError,
        AtxGeometry,
        AtxImage,
        AtxReadOptions,
        AtxSectorRead,
        AtxTrackInfo,
        PhantomPreference,
        SectorAddress,
        SectorStatus,
        SECTOR_NOT_FOUND_STATUS,
    };
}
