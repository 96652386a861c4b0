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

    src/file_parsers/mod.rs

    Disk image file format parsers and the options that control them.
*/

use crate::types::PhantomPreference;

pub mod atx;

/// Options controlling how an ATX image is opened.
#[derive(Copy, Clone, Debug)]
pub struct AtxReadOptions {
    #[doc = "The duplicate sector preference the first sector read starts with."]
    pub phantom_start: PhantomPreference,
    #[doc = "The number of physical tracks the track index can hold."]
    pub max_tracks: usize,
}

impl Default for AtxReadOptions {
    fn default() -> Self {
        AtxReadOptions {
            phantom_start: PhantomPreference::First,
            max_tracks: atx::track_index::MAX_TRACKS,
        }
    }
}

impl AtxReadOptions {
    pub fn new() -> AtxReadOptions {
        Default::default()
    }

    /// Set the duplicate sector preference used by the first sector read after opening.
    pub fn with_phantom_start(mut self, preference: PhantomPreference) -> AtxReadOptions {
        self.phantom_start = preference;
        self
    }

    /// Set the capacity of the track index. Track records with a physical track number at or
    /// beyond this value are skipped while indexing. Clamped to 1..=256, as track numbers are
    /// stored in a single byte.
    pub fn with_max_tracks(mut self, max_tracks: usize) -> AtxReadOptions {
        self.max_tracks = max_tracks.clamp(1, 256);
        self
    }
}

/// Returns a list of advertised file extensions supported by available image format parsers.
pub fn supported_extensions() -> Vec<&'static str> {
    atx::AtxFormat::extensions()
}
