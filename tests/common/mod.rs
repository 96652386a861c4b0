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

    tests/common/mod.rs

    Common support routines for tests.

    We have no way to ship reference ATX images with the tests, so
    AtxTestImage assembles images in memory. Sector payloads follow the
    "sector test" convention: every byte of a sector holds the logical
    sector index (0-based) as a u8, wrapping.
*/
#![allow(dead_code)]

use fluxfox_atx::prelude::*;
use hex::encode;
use sha1::{Digest, Sha1};
use std::io::Cursor;

pub const FILE_HEADER_SIZE: usize = 48;
pub const TRACK_HEADER_SIZE: usize = 32;

pub fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn compute_slice_hash(slice: &[u8]) -> String {
    let mut hasher = Sha1::new();
    hasher.update(slice);
    let result = hasher.finalize();

    encode(result)
}

#[derive(Clone, Debug)]
pub struct TestSector {
    pub number: u8,
    pub status: u8,
    pub fill: u8,
}

impl TestSector {
    pub fn new(number: u8, status: u8, fill: u8) -> Self {
        Self { number, status, fill }
    }
}

#[derive(Clone, Debug)]
pub struct TestTrack {
    pub track_number: u8,
    pub sectors: Vec<TestSector>,
    pub extension: usize,
}

impl TestTrack {
    /// A clean track holding sectors 1..=spt, filled in the sector test pattern.
    pub fn standard(track_number: u8, spt: u8) -> Self {
        let sectors = (1..=spt)
            .map(|s| {
                let fill = (track_number as usize * spt as usize + s as usize - 1) as u8;
                TestSector::new(s, 0, fill)
            })
            .collect();
        Self {
            track_number,
            sectors,
            extension: 0,
        }
    }
}

pub struct AtxTestImage {
    pub signature: [u8; 4],
    pub version: u16,
    pub min_version: u16,
    pub density: u8,
    pub tracks: Vec<TestTrack>,
}

/// An assembled image and the absolute offset of each of its track records, in build order.
pub struct BuiltImage {
    pub bytes: Vec<u8>,
    pub track_offsets: Vec<u64>,
    /// Absolute payload offsets per track, in sector list order.
    pub payload_offsets: Vec<Vec<u64>>,
}

impl BuiltImage {
    pub fn cursor(&self) -> Cursor<Vec<u8>> {
        Cursor::new(self.bytes.clone())
    }
}

impl AtxTestImage {
    pub fn new(density: u8) -> Self {
        Self {
            signature: *b"AT8X",
            version: 1,
            min_version: 1,
            density,
            tracks: Vec::new(),
        }
    }

    /// A full 40 track disk in the sector test pattern.
    pub fn standard_disk(density: u8) -> Self {
        let spt = if density == 1 { 26 } else { 18 };
        let mut image = Self::new(density);
        image.tracks = (0..40).map(|t| TestTrack::standard(t, spt)).collect();
        image
    }

    pub fn with_track(mut self, track: TestTrack) -> Self {
        self.tracks.push(track);
        self
    }

    pub fn bytes_per_sector(&self) -> usize {
        if self.density == 1 {
            256
        }
        else {
            128
        }
    }

    pub fn build(&self) -> BuiltImage {
        let mut bytes = vec![0u8; FILE_HEADER_SIZE];
        let mut track_offsets = Vec::new();
        let mut payload_offsets = Vec::new();

        for track in &self.tracks {
            let track_offset = bytes.len();
            let (record, payloads) = self.build_track(track);
            track_offsets.push(track_offset as u64);
            payload_offsets.push(payloads.iter().map(|p| (track_offset + p) as u64).collect());
            bytes.extend(record);
        }

        let end_data = bytes.len() as u32;
        bytes[0..4].copy_from_slice(&self.signature);
        bytes[4..6].copy_from_slice(&self.version.to_le_bytes());
        bytes[6..8].copy_from_slice(&self.min_version.to_le_bytes());
        bytes[18] = self.density;
        bytes[28..32].copy_from_slice(&(FILE_HEADER_SIZE as u32).to_le_bytes());
        bytes[32..36].copy_from_slice(&end_data.to_le_bytes());

        BuiltImage {
            bytes,
            track_offsets,
            payload_offsets,
        }
    }

    /// Returns the track record and the payload offset of each sector relative to the record.
    fn build_track(&self, track: &TestTrack) -> (Vec<u8>, Vec<usize>) {
        let sector_ct = track.sectors.len();
        let mut rec = vec![0u8; TRACK_HEADER_SIZE];
        rec[8] = track.track_number;
        rec[10..12].copy_from_slice(&(sector_ct as u16).to_le_bytes());
        rec[20..24].copy_from_slice(&(TRACK_HEADER_SIZE as u32).to_le_bytes());

        let next = 8 + track.extension + sector_ct * 8;
        rec.extend((next as u32).to_le_bytes());
        rec.extend([1u8, 0, 0, 0]);
        rec.extend(vec![0u8; track.extension]);

        let header_array = rec.len();
        let data_start = header_array + sector_ct * 8;
        let payloads: Vec<usize> = (0..sector_ct)
            .map(|i| data_start + i * self.bytes_per_sector())
            .collect();

        for (sector, payload) in track.sectors.iter().zip(&payloads) {
            rec.push(sector.number);
            rec.push(sector.status);
            rec.extend(0u16.to_le_bytes());
            rec.extend((*payload as u32).to_le_bytes());
        }
        for sector in &track.sectors {
            rec.extend(vec![sector.fill; self.bytes_per_sector()]);
        }

        let size = rec.len() as u32;
        rec[0..4].copy_from_slice(&size.to_le_bytes());
        (rec, payloads)
    }
}

/// Read every logical sector of a disk built by [AtxTestImage::standard_disk] and verify the
/// sector test pattern.
pub fn verify_sector_test_sectors<S: ByteSource>(image: &mut AtxImage<S>, total_sectors: u16) {
    let bps = image.bytes_per_sector() as usize;
    for num in 1..=total_sectors {
        let result = image
            .read_sector(num)
            .unwrap_or_else(|e| panic!("Failed to read sector {}: {}", num, e));

        assert_eq!(result.status, 0xFF, "sector {}", num);
        assert_eq!(result.bytes_read, bps, "sector {}", num);

        let expected = (num - 1) as u8;
        for (bi, byte) in result.data.iter().enumerate() {
            if *byte != expected {
                eprintln!(
                    "Sector byte mismatch at sector {} {}, byte [{}]: expected {}, got {}.",
                    num, result.address, bi, expected, byte
                );
                assert_eq!(*byte, expected);
            }
        }
    }
}
