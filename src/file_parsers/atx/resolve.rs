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

    src/file_parsers/atx/resolve.rs

    Turn the outcome of a sector header scan into the status byte a drive
    reports, and decide whether sector data should be transferred.
*/

use crate::file_parsers::atx::{sector_scan::SectorCandidate, SECTOR_NOT_FOUND_STATUS};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SectorResolution {
    /// No sector header matched.
    NotFound,
    /// A sector header matched but its stored status reports an error. No data is transferred.
    Invalid { stored_status: u8 },
    /// A sector header matched with a clean status. Data is read from `data_offset`, relative to
    /// the start of the track record.
    Valid { data_offset: u32 },
}

impl From<Option<SectorCandidate>> for SectorResolution {
    fn from(candidate: Option<SectorCandidate>) -> Self {
        match candidate {
            None => SectorResolution::NotFound,
            Some(c) if c.header.status == 0 => SectorResolution::Valid {
                data_offset: c.header.data,
            },
            Some(c) => SectorResolution::Invalid {
                stored_status: c.header.status,
            },
        }
    }
}

impl SectorResolution {
    /// The status byte reported to the caller: the complement of the stored status, or the
    /// not-found sentinel, which is already in reported form.
    pub fn status(&self) -> u8 {
        match self {
            SectorResolution::NotFound => SECTOR_NOT_FOUND_STATUS,
            SectorResolution::Invalid { stored_status } => !stored_status,
            SectorResolution::Valid { .. } => !0u8,
        }
    }

    /// True if a sector header matched, whatever its status.
    pub fn is_found(&self) -> bool {
        !matches!(self, SectorResolution::NotFound)
    }

    pub fn data_offset(&self) -> Option<u32> {
        match self {
            SectorResolution::Valid { data_offset } => Some(*data_offset),
            _ => None,
        }
    }
}
