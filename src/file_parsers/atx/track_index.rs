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

    src/file_parsers/atx/track_index.rs

    A bounded table from physical track number to the absolute offset of
    the track record, built by walking the track records of an image once.
*/

use crate::{
    file_parsers::atx::records::{read_record, AtxTrackHeader},
    io::ByteSource,
};

/// The number of physical tracks on a standard Atari 8-bit disk.
pub const MAX_TRACKS: usize = 40;

#[derive(Clone, Debug)]
pub struct TrackIndex {
    offsets: Vec<Option<u64>>,
}

impl Default for TrackIndex {
    fn default() -> Self {
        TrackIndex::new(MAX_TRACKS)
    }
}

impl TrackIndex {
    pub fn new(capacity: usize) -> Self {
        TrackIndex {
            offsets: vec![None; capacity],
        }
    }

    /// Walk the track records of an image starting at `start_data`.
    ///
    /// Each record is indexed at its offset, and the cursor advances by the record's `size` field,
    /// which covers the whole variable-length record. The first short read ends the walk; this is
    /// the normal end of the track list and not an error. A record extending past `end_data` is
    /// still indexed.
    pub fn build<S: ByteSource + ?Sized>(
        source: &mut S,
        start_data: u64,
        end_data: u64,
        capacity: usize,
    ) -> TrackIndex {
        let mut index = TrackIndex::new(capacity);
        let mut offset = start_data;

        while let Some(track_header) = read_record::<AtxTrackHeader, _>(source, offset) {
            log::trace!(
                "TrackIndex::build(): Track record {} at offset {:08X}, size: {} sectors: {}",
                track_header.track_number,
                offset,
                track_header.size,
                track_header.sector_count
            );

            index.insert(track_header.track_number, offset);

            let record_end = offset + track_header.size as u64;
            if record_end > end_data {
                log::warn!(
                    "TrackIndex::build(): Track record {} at offset {:08X} ends at {:08X}, past end of data {:08X}",
                    track_header.track_number,
                    offset,
                    record_end,
                    end_data
                );
            }

            if track_header.size == 0 {
                log::warn!(
                    "TrackIndex::build(): Zero-length track record at offset {:08X}, stopping.",
                    offset
                );
                break;
            }
            offset += track_header.size as u64;
        }

        log::debug!(
            "TrackIndex::build(): Indexed {} tracks, walk ended at offset {:08X}",
            index.len(),
            offset
        );
        index
    }

    /// Record the offset of a physical track. A track number beyond the capacity of the index is
    /// skipped and false is returned. A later record for the same track replaces the earlier one.
    pub fn insert(&mut self, track: u8, offset: u64) -> bool {
        match self.offsets.get_mut(track as usize) {
            Some(entry) => {
                if let Some(old_offset) = entry.replace(offset) {
                    log::warn!(
                        "TrackIndex::insert(): Track {} appears twice ({:08X}, {:08X}), using the latter.",
                        track,
                        old_offset,
                        offset
                    );
                }
                true
            }
            None => {
                log::warn!(
                    "TrackIndex::insert(): Track number {} out of range (capacity {}), skipping.",
                    track,
                    self.offsets.len()
                );
                false
            }
        }
    }

    /// The absolute offset of the record for a physical track, if one was indexed.
    pub fn offset(&self, track: u16) -> Option<u64> {
        self.offsets.get(track as usize).copied().flatten()
    }

    pub fn capacity(&self) -> usize {
        self.offsets.len()
    }

    /// The number of indexed tracks.
    pub fn len(&self) -> usize {
        self.offsets.iter().filter(|o| o.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over (physical track, offset) pairs in track order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.offsets
            .iter()
            .enumerate()
            .filter_map(|(track, offset)| offset.map(|o| (track as u8, o)))
    }
}
