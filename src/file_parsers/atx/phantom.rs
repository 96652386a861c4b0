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

    src/file_parsers/atx/phantom.rs

    Duplicate ("phantom") sector selection.

    Real hardware returns whichever copy of a duplicated sector reaches the
    head first, which depends on rotational position. We do not model disk
    rotation. Instead, successive sector reads alternate between the first
    and the last matching sector header of a track. The alternation is
    shared by all reads of an image, not kept per track or per sector.
*/

use crate::types::PhantomPreference;

#[derive(Copy, Clone, Debug, Default)]
pub struct PhantomSectorPolicy {
    start: PhantomPreference,
    current: PhantomPreference,
}

impl PhantomSectorPolicy {
    pub fn new(start: PhantomPreference) -> Self {
        PhantomSectorPolicy { start, current: start }
    }

    /// The preference the next sector read will use.
    pub fn preference(&self) -> PhantomPreference {
        self.current
    }

    /// Flip the preference. Called once per sector read, whether or not the sector was found.
    pub fn advance(&mut self) {
        self.current = self.current.flipped();
    }

    /// Return to the preference the policy was created with.
    pub fn reset(&mut self) {
        self.current = self.start;
    }
}
