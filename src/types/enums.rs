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

    src/types/enums.rs

    Defines common enum types
*/

/// The recording density declared in an ATX file header.
///
/// * `Single` density: FM encoding, 18 sectors of 128 bytes per track (810 drive).
/// * `Enhanced` density: MFM encoding, 26 sectors per track (1050 drive).
/// * `Double` density: MFM encoding, 18 sectors of 256 bytes per track.
///
/// Only `Enhanced` changes the geometry an ATX image is read with. See [crate::AtxGeometry].
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, strum::EnumIter, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AtxDensity {
    #[strum(to_string = "Single")]
    Single = 0,
    #[strum(to_string = "Enhanced")]
    Enhanced = 1,
    #[strum(to_string = "Double")]
    Double = 2,
}

impl AtxDensity {
    /// Decode the density byte of an ATX file header. Unknown values return None.
    pub fn from_raw(density: u8) -> Option<AtxDensity> {
        match density {
            0 => Some(AtxDensity::Single),
            1 => Some(AtxDensity::Enhanced),
            2 => Some(AtxDensity::Double),
            _ => None,
        }
    }

    pub fn raw(&self) -> u8 {
        *self as u8
    }
}

/// Which of several sector headers sharing one sector number the next read will resolve to.
///
/// ATX images emulate weak and duplicate sectors by listing the same sector number more than once
/// in a track. A real drive would return whichever copy passes under the head first; we
/// approximate this by alternating between the first and the last matching header on every read.
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PhantomPreference {
    #[default]
    #[doc = "Resolve to the first matching sector header in track order."]
    First,
    #[doc = "Resolve to the last matching sector header in track order."]
    Last,
}

impl PhantomPreference {
    pub fn flipped(&self) -> PhantomPreference {
        match self {
            PhantomPreference::First => PhantomPreference::Last,
            PhantomPreference::Last => PhantomPreference::First,
        }
    }
}
