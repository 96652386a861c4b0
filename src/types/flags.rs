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

    src/types/flags.rs

    Defines common bitflags
*/

use bitflags::bitflags;
use std::fmt::{self, Display, Formatter};

bitflags! {
    /// Bit flags of the FDC status byte stored in an ATX sector header.
    ///
    /// The drive reports the complement of this byte to the computer, so a stored status of 0
    /// reads back as 0xFF, meaning "no error".
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[rustfmt::skip]
    pub struct SectorStatus: u8 {
        #[doc = "Data was lost during transfer, typically a long sector"]
        const LOST_DATA         = 0b0000_0100;
        #[doc = "The sector data failed its CRC check"]
        const CRC_ERROR         = 0b0000_1000;
        #[doc = "The sector ID or its data mark could not be found"]
        const RECORD_NOT_FOUND  = 0b0001_0000;
        #[doc = "The sector carries a deleted data address mark"]
        const DELETED           = 0b0010_0000;
        #[doc = "An extended data record (such as a weak bit offset) is attached to the sector"]
        const EXTENDED          = 0b0100_0000;
    }
}

impl SectorStatus {
    /// Decode a stored status byte, keeping bits we have no name for.
    pub fn from_stored(status: u8) -> SectorStatus {
        SectorStatus::from_bits_retain(status)
    }

    /// The status byte a drive reports for this stored status.
    pub fn reported(&self) -> u8 {
        !self.bits()
    }

    pub fn is_valid(&self) -> bool {
        self.is_empty()
    }
}

impl Display for SectorStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "OK");
        }
        let mut first = true;
        for (name, _) in self.iter_names() {
            if !first {
                write!(f, "|")?;
            }
            write!(f, "{}", name)?;
            first = false;
        }
        let unknown = self.bits() & !SectorStatus::all().bits();
        if unknown != 0 {
            if !first {
                write!(f, "|")?;
            }
            write!(f, "{:02X}", unknown)?;
        }
        Ok(())
    }
}

bitflags! {
    /// Bit flags of the flags field in an ATX track header.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[rustfmt::skip]
    pub struct AtxTrackFlags: u32 {
        #[doc = "Track is MFM encoded"]
        const MFM       = 0x0000_0002;
        #[doc = "Sector timing should not be skewed when the track is read"]
        const NO_SKEW   = 0x0000_0100;
    }
}
