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

    src/file_parsers/atx/records.rs

    On-disk record definitions for the ATX disk image format.

    All records are little-endian. Each record is decoded from a byte span
    of at least its fixed size; nothing is reinterpreted in place.

    File header (48 bytes, offset 0)
      signature "AT8X", version, min_version, creator, creator_version,
      flags, image_type, density, image_id, image_version, start_data,
      end_data.
    Track record (32 byte header, `size` bytes in total)
      size, record_type, track_number, sector_count, rate, flags,
      header_size. The sector list follows at `header_size`.
    Sector list header (8 bytes)
      next: offset from the list header to the end of the sector array.
    Sector header (8 bytes)
      number, status, timev, data (offset from the track record start).
*/

use crate::{
    io::{ByteSource, Cursor},
    AtxError,
};
use binrw::{binrw, BinRead};

/// Implemented by every fixed-size ATX record.
pub trait AtxRecord: Sized {
    /// The size of the record on disk, in bytes.
    const SIZE: usize;
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[binrw]
#[brw(little)]
pub struct AtxFileHeader {
    pub signature: [u8; 4],
    pub version: u16,
    pub min_version: u16,
    pub creator: u16,
    pub creator_version: u16,
    pub flags: u32,
    pub image_type: u16,
    pub density: u8,
    pub reserved0: u8,
    pub image_id: u32,
    pub image_version: u16,
    pub reserved1: u16,
    pub start_data: u32,
    pub end_data: u32,
    pub reserved2: [u8; 12],
}

impl AtxRecord for AtxFileHeader {
    const SIZE: usize = 48;
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[binrw]
#[brw(little)]
pub struct AtxTrackHeader {
    pub size: u32,
    pub record_type: u16,
    pub reserved0: u16,
    pub track_number: u8,
    pub reserved1: u8,
    pub sector_count: u16,
    pub rate: u16,
    pub reserved2: u16,
    pub flags: u32,
    pub header_size: u32,
    pub reserved3: [u8; 8],
}

impl AtxRecord for AtxTrackHeader {
    const SIZE: usize = 32;
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[binrw]
#[brw(little)]
pub struct AtxSectorListHeader {
    pub next: u32,
    pub record_type: u16,
    pub reserved0: u16,
}

impl AtxRecord for AtxSectorListHeader {
    const SIZE: usize = 8;
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[binrw]
#[brw(little)]
pub struct AtxSectorHeader {
    pub number: u8,
    pub status: u8,
    pub timev: u16,
    pub data: u32,
}

impl AtxRecord for AtxSectorHeader {
    const SIZE: usize = 8;
}

/// Decode a record from the start of `span`. The span must hold at least `T::SIZE` bytes; any
/// bytes beyond that are ignored.
pub fn decode_record<T>(span: &[u8]) -> Result<T, AtxError>
where
    T: AtxRecord + for<'a> BinRead<Args<'a> = ()>,
{
    if span.len() < T::SIZE {
        return Err(AtxError::FormatParseError);
    }
    let mut cursor = Cursor::new(&span[..T::SIZE]);
    Ok(T::read_le(&mut cursor)?)
}

/// Read and decode a record at an absolute offset. A short read yields None.
pub(crate) fn read_record<T, S>(source: &mut S, offset: u64) -> Option<T>
where
    T: AtxRecord + for<'a> BinRead<Args<'a> = ()>,
    S: ByteSource + ?Sized,
{
    let mut buf = [0u8; 48];
    let span = &mut buf[..T::SIZE];
    let read = source.read_at(offset, span);
    if read < T::SIZE {
        return None;
    }
    decode_record::<T>(span).ok()
}
