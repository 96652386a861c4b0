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

    src/atx_image.rs

    The AtxImage handle. Owns the byte source of an opened ATX image
    together with everything derived from it: the validated file header,
    the sector geometry, the track index and the duplicate sector policy.
*/

use crate::{
    file_parsers::{
        atx::{
            phantom::PhantomSectorPolicy,
            records::{AtxFileHeader, AtxSectorHeader, AtxTrackHeader},
            resolve::SectorResolution,
            sector_scan::TrackLayout,
            track_index::TrackIndex,
            AtxFormat,
        },
        AtxReadOptions,
    },
    io::ByteSource,
    types::{AtxDensity, AtxGeometry, AtxTrackFlags, PhantomPreference, SectorAddress, SectorStatus},
    AtxError,
};
use std::collections::BTreeMap;

/// The result of a sector read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AtxSectorRead {
    #[doc = "The sector address the logical sector number resolved to."]
    pub address: SectorAddress,
    #[doc = "True if a sector header in the track carried the requested sector number."]
    pub found: bool,
    #[doc = "The status byte as reported by the drive (the complement of the stored status)."]
    pub status: u8,
    #[doc = "The number of payload bytes read. Zero if the sector was missing or had an error status."]
    pub bytes_read: usize,
    #[doc = "The payload, `bytes_read` bytes long."]
    pub data: Vec<u8>,
}

impl AtxSectorRead {
    /// True if no sector header in the track carried the requested sector number.
    /// Neither `status` nor `bytes_read` can tell this apart from an error sector: a stored
    /// CRC error reports 0xF7 just as a missing sector does.
    pub fn not_found(&self) -> bool {
        !self.found
    }

    /// The stored status bits behind the reported status. A missing sector reports
    /// [SectorStatus::RECORD_NOT_FOUND].
    pub fn status_flags(&self) -> SectorStatus {
        if self.found {
            SectorStatus::from_stored(!self.status)
        }
        else {
            SectorStatus::RECORD_NOT_FOUND
        }
    }
}

/// The sector headers of one track, in the order they appear in the track record.
#[derive(Clone, Debug)]
pub struct AtxTrackInfo {
    pub offset:  u64,
    pub header:  AtxTrackHeader,
    pub sectors: Vec<AtxSectorHeader>,
}

impl AtxTrackInfo {
    pub fn track_number(&self) -> u8 {
        self.header.track_number
    }

    pub fn flags(&self) -> AtxTrackFlags {
        AtxTrackFlags::from_bits_retain(self.header.flags)
    }

    /// Sector numbers that more than one sector header in this track carries, in ascending order.
    pub fn duplicate_sectors(&self) -> Vec<u8> {
        let mut counts: BTreeMap<u8, usize> = BTreeMap::new();
        for sector in &self.sectors {
            *counts.entry(sector.number).or_default() += 1;
        }
        counts
            .into_iter()
            .filter_map(|(number, ct)| (ct > 1).then_some(number))
            .collect()
    }
}

pub struct AtxImage<S: ByteSource> {
    source: S,
    header: AtxFileHeader,
    geometry: AtxGeometry,
    index: TrackIndex,
    phantom: PhantomSectorPolicy,
}

impl<S: ByteSource> AtxImage<S> {
    /// Return true if the source looks like an ATX image.
    pub fn detect(source: &mut S) -> bool {
        AtxFormat::detect(source)
    }

    /// Open an ATX image with default options.
    pub fn open(source: S) -> Result<Self, AtxError> {
        AtxImage::open_with_options(source, AtxReadOptions::default())
    }

    /// Validate the file header and index the track records of an image.
    /// An image that fails validation is not indexed.
    pub fn open_with_options(mut source: S, opts: AtxReadOptions) -> Result<Self, AtxError> {
        let header = AtxFormat::read_header(&mut source)?;
        let geometry = AtxGeometry::from_density_byte(header.density);
        let index = TrackIndex::build(
            &mut source,
            header.start_data as u64,
            header.end_data as u64,
            opts.max_tracks,
        );

        log::debug!(
            "AtxImage::open(): Density: {} geometry: {} tracks: {}",
            AtxDensity::from_raw(header.density)
                .map(|d| d.to_string())
                .unwrap_or_else(|| format!("Unknown({})", header.density)),
            geometry,
            index.len()
        );

        Ok(AtxImage {
            source,
            header,
            geometry,
            index,
            phantom: PhantomSectorPolicy::new(opts.phantom_start),
        })
    }

    /// Close the image, returning the byte source.
    pub fn into_inner(self) -> S {
        self.source
    }

    pub fn header(&self) -> &AtxFileHeader {
        &self.header
    }

    pub fn density(&self) -> Option<AtxDensity> {
        AtxDensity::from_raw(self.header.density)
    }

    pub fn geometry(&self) -> AtxGeometry {
        self.geometry
    }

    pub fn bytes_per_sector(&self) -> u16 {
        self.geometry.bytes_per_sector()
    }

    pub fn sectors_per_track(&self) -> u8 {
        self.geometry.sectors_per_track()
    }

    pub fn creator(&self) -> (u16, u16) {
        (self.header.creator, self.header.creator_version)
    }

    pub fn track_index(&self) -> &TrackIndex {
        &self.index
    }

    pub fn track_count(&self) -> usize {
        self.index.len()
    }

    /// The duplicate sector preference the next sector read will use.
    pub fn phantom_policy(&self) -> PhantomPreference {
        self.phantom.preference()
    }

    pub fn reset_phantom_policy(&mut self) {
        self.phantom.reset();
    }

    /// Read a sector by its 1-based logical sector number.
    ///
    /// A missing sector, or a sector whose stored status is not clean, is not an error: the
    /// returned status says what happened and no data is read. Each call flips the duplicate
    /// sector preference, so consecutive reads of a duplicated sector alternate between its first
    /// and last copies.
    ///
    /// Sector 0 is a [AtxError::ParameterError]. A sector on a track that has no entry in the
    /// track index is a [AtxError::TrackNotIndexed], and leaves the duplicate sector preference
    /// unchanged.
    pub fn read_sector(&mut self, num: u16) -> Result<AtxSectorRead, AtxError> {
        if num == 0 {
            log::error!("read_sector(): Sector numbers start at 1");
            return Err(AtxError::ParameterError);
        }

        let address = self.geometry.locate(num);
        let track = address.physical_track();
        let track_offset = self.index.offset(track).ok_or(AtxError::TrackNotIndexed(track))?;

        let candidate = match TrackLayout::read(&mut self.source, track_offset) {
            Some(layout) => layout.find_sector(&mut self.source, address.sector, self.phantom.preference()),
            None => {
                log::warn!(
                    "read_sector(): Couldn't read track record {} at offset {:08X}",
                    track,
                    track_offset
                );
                None
            }
        };
        self.phantom.advance();

        let resolution = SectorResolution::from(candidate);
        let mut data = Vec::new();
        if let Some(data_offset) = resolution.data_offset() {
            data.resize(self.geometry.bytes_per_sector() as usize, 0);
            let read = self.source.read_at(track_offset + data_offset as u64, &mut data);
            data.truncate(read);
        }

        log::trace!(
            "read_sector(): Sector {} {} status: {:02X} read: {}",
            num,
            address,
            resolution.status(),
            data.len()
        );

        Ok(AtxSectorRead {
            address,
            found: resolution.is_found(),
            status: resolution.status(),
            bytes_read: data.len(),
            data,
        })
    }

    /// Read a sector into `buf`, storing the reported status in `status`. Returns the number of
    /// payload bytes copied. `buf` must hold at least [Self::bytes_per_sector] bytes.
    ///
    /// The status is written for every sector that could be looked up, including missing and
    /// error sectors.
    pub fn read_sector_into(&mut self, num: u16, buf: &mut [u8], status: &mut u8) -> Result<usize, AtxError> {
        if buf.len() < self.geometry.bytes_per_sector() as usize {
            log::error!(
                "read_sector_into(): Buffer of {} bytes is smaller than a sector ({})",
                buf.len(),
                self.geometry.bytes_per_sector()
            );
            return Err(AtxError::ParameterError);
        }

        let result = self.read_sector(num)?;
        *status = result.status;
        buf[..result.bytes_read].copy_from_slice(&result.data);
        Ok(result.bytes_read)
    }

    /// Read the track header and every readable sector header of a physical track.
    pub fn read_track_info(&mut self, track: u8) -> Result<AtxTrackInfo, AtxError> {
        let offset = self
            .index
            .offset(track as u16)
            .ok_or(AtxError::TrackNotIndexed(track as u16))?;
        let layout = TrackLayout::read(&mut self.source, offset).ok_or(AtxError::FormatParseError)?;
        let sectors = layout
            .sector_headers(&mut self.source)
            .into_iter()
            .map(|(_, header)| header)
            .collect();

        Ok(AtxTrackInfo {
            offset,
            header: layout.header,
            sectors,
        })
    }
}
