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

    src/types/geometry.rs

    Per-image sector geometry and logical sector addressing.
*/

use crate::types::AtxDensity;
use std::fmt::{self, Display, Formatter};

/// A resolved sector address. Both fields are 1-based; `track` is a logical track number, one
/// greater than the physical track number stored in the image.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SectorAddress {
    pub track:  u16,
    pub sector: u8,
}

impl SectorAddress {
    pub fn new(track: u16, sector: u8) -> Self {
        Self { track, sector }
    }

    /// The 0-based physical track number used as the key of the track index.
    pub fn physical_track(&self) -> u16 {
        self.track.saturating_sub(1)
    }
}

impl Display for SectorAddress {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "[t:{:2} s:{:2}]", self.track, self.sector)
    }
}

/// The sector layout an ATX image is read with, derived from the density byte of its header.
///
/// Enhanced density gives 26 sectors of 256 bytes. Every other density byte, including values
/// we don't recognize, gives 18 sectors of 128 bytes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AtxGeometry {
    pub(crate) sectors_per_track: u8,
    pub(crate) bytes_per_sector:  u16,
}

impl Default for AtxGeometry {
    fn default() -> Self {
        AtxGeometry::from_density_byte(AtxDensity::Single.raw())
    }
}

impl From<AtxDensity> for AtxGeometry {
    fn from(density: AtxDensity) -> Self {
        AtxGeometry::from_density_byte(density.raw())
    }
}

impl Display for AtxGeometry {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "[spt:{} size:{}]", self.sectors_per_track, self.bytes_per_sector)
    }
}

impl AtxGeometry {
    pub fn from_density_byte(density: u8) -> Self {
        if density == AtxDensity::Enhanced.raw() {
            AtxGeometry {
                sectors_per_track: 26,
                bytes_per_sector:  256,
            }
        }
        else {
            AtxGeometry {
                sectors_per_track: 18,
                bytes_per_sector:  128,
            }
        }
    }

    pub fn sectors_per_track(&self) -> u8 {
        self.sectors_per_track
    }

    pub fn bytes_per_sector(&self) -> u16 {
        self.bytes_per_sector
    }

    /// Map a 1-based logical sector number to its track and in-track sector number.
    /// There is no upper bound; sector numbers past the end of the disk simply resolve to tracks
    /// that the image does not contain. Sector 0 does not exist and is treated as sector 1.
    pub fn locate(&self, num: u16) -> SectorAddress {
        let spt = self.sectors_per_track as u16;
        let index = num.saturating_sub(1);
        SectorAddress {
            track:  index / spt + 1,
            sector: (index % spt + 1) as u8,
        }
    }
}
