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

    src/file_parsers/atx/sector_scan.rs

    Locate the sector header array of a track record and scan it for a
    sector number.
*/

use crate::{
    file_parsers::atx::records::{read_record, AtxRecord, AtxSectorHeader, AtxSectorListHeader, AtxTrackHeader},
    io::ByteSource,
    types::PhantomPreference,
};

const SECTOR_HEADER_SIZE: u64 = AtxSectorHeader::SIZE as u64;

/// A sector header that matched a requested sector number, and its position in the track's list.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SectorCandidate {
    pub slot:   u16,
    pub header: AtxSectorHeader,
}

/// Where the parts of one track record live in the image.
#[derive(Clone, Debug)]
pub struct TrackLayout {
    pub offset: u64,
    pub header: AtxTrackHeader,
    pub list_header: AtxSectorListHeader,
    pub array_offset: u64,
}

impl TrackLayout {
    /// Read the track record at `offset` and its sector list header.
    ///
    /// The sector list header may be followed by extension bytes before the sector header array.
    /// Its `next` field spans both, so the array starts `next` minus the size of the array past the
    /// list header.
    pub fn read<S: ByteSource + ?Sized>(source: &mut S, offset: u64) -> Option<TrackLayout> {
        let header = read_record::<AtxTrackHeader, _>(source, offset)?;
        let list_offset = offset + header.header_size as u64;
        let list_header = read_record::<AtxSectorListHeader, _>(source, list_offset)?;

        let array_size = header.sector_count as u64 * SECTOR_HEADER_SIZE;
        let Some(extension) = (list_header.next as u64).checked_sub(array_size)
        else {
            log::warn!(
                "TrackLayout::read(): Sector list of track {} is shorter ({}) than its {} sector headers.",
                header.track_number,
                list_header.next,
                header.sector_count
            );
            return None;
        };

        Some(TrackLayout {
            offset,
            array_offset: list_offset + extension,
            header,
            list_header,
        })
    }

    pub fn sector_count(&self) -> u16 {
        self.header.sector_count
    }

    /// The absolute offset of a sector header slot.
    pub fn slot_offset(&self, slot: u16) -> u64 {
        self.array_offset + slot as u64 * SECTOR_HEADER_SIZE
    }

    /// Read every sector header of the track in list order. Slots that fail to read are left out.
    pub fn sector_headers<S: ByteSource + ?Sized>(&self, source: &mut S) -> Vec<(u16, AtxSectorHeader)> {
        (0..self.sector_count())
            .filter_map(|slot| read_record::<AtxSectorHeader, _>(source, self.slot_offset(slot)).map(|h| (slot, h)))
            .collect()
    }

    /// Scan the sector header list for `sector`.
    ///
    /// With [PhantomPreference::First] the scan stops at the first match. With
    /// [PhantomPreference::Last] it runs to the end of the list and each later match replaces the
    /// earlier one. A slot that cannot be read is skipped and the scan moves on to the next slot.
    pub fn find_sector<S: ByteSource + ?Sized>(
        &self,
        source: &mut S,
        sector: u8,
        preference: PhantomPreference,
    ) -> Option<SectorCandidate> {
        let mut candidate = None;

        for slot in 0..self.sector_count() {
            let Some(sector_header) = read_record::<AtxSectorHeader, _>(source, self.slot_offset(slot))
            else {
                log::trace!(
                    "find_sector(): Failed to read sector header slot {} of track {}",
                    slot,
                    self.header.track_number
                );
                continue;
            };

            if sector_header.number == sector {
                if let Some(SectorCandidate { slot: prev_slot, .. }) = candidate {
                    log::trace!(
                        "find_sector(): Duplicate sector {} in slots {} and {} of track {}",
                        sector,
                        prev_slot,
                        slot,
                        self.header.track_number
                    );
                }
                candidate = Some(SectorCandidate {
                    slot,
                    header: sector_header,
                });
                if preference == PhantomPreference::First {
                    break;
                }
            }
        }

        candidate
    }
}
