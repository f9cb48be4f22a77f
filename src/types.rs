//! Core types for chromaviz
//!
//! Configuration enums for the visualization pipeline, plus parsing for the
//! string values a host control surface produces.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Color mode of a pixel buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// RGB (raster input and final display)
    #[default]
    Rgb,
    /// YCbCr (native JPEG working color space)
    Ycc,
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorMode::Rgb => write!(f, "RGB"),
            ColorMode::Ycc => write!(f, "YCC"),
        }
    }
}

/// A single color or luma/chroma component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    R,
    G,
    B,
    Y,
    Cb,
    Cr,
}

impl Channel {
    /// The color mode whose component set contains this channel
    #[must_use]
    pub const fn mode(self) -> ColorMode {
        match self {
            Channel::R | Channel::G | Channel::B => ColorMode::Rgb,
            Channel::Y | Channel::Cb | Channel::Cr => ColorMode::Ycc,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Channel::R => "r",
            Channel::G => "g",
            Channel::B => "b",
            Channel::Y => "y",
            Channel::Cb => "cb",
            Channel::Cr => "cr",
        };
        write!(f, "{}", name)
    }
}

/// Transformation target for a visualization view
///
/// `Original` displays the image unchanged; any other value isolates the
/// named channel for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transformation {
    /// Display the image without channel isolation
    #[default]
    Original,
    R,
    G,
    B,
    Y,
    Cb,
    Cr,
}

impl Transformation {
    /// The channel to isolate, or `None` for `Original`
    #[must_use]
    pub const fn channel(self) -> Option<Channel> {
        match self {
            Transformation::Original => None,
            Transformation::R => Some(Channel::R),
            Transformation::G => Some(Channel::G),
            Transformation::B => Some(Channel::B),
            Transformation::Y => Some(Channel::Y),
            Transformation::Cb => Some(Channel::Cb),
            Transformation::Cr => Some(Channel::Cr),
        }
    }
}

impl fmt::Display for Transformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.channel() {
            None => write!(f, "original"),
            Some(channel) => write!(f, "{}", channel),
        }
    }
}

impl FromStr for Transformation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "original" => Ok(Transformation::Original),
            "r" => Ok(Transformation::R),
            "g" => Ok(Transformation::G),
            "b" => Ok(Transformation::B),
            "y" => Ok(Transformation::Y),
            "cb" => Ok(Transformation::Cb),
            "cr" => Ok(Transformation::Cr),
            _ => Err(Error::UnknownSetting {
                setting: "transformation",
                value: s.to_string(),
            }),
        }
    }
}

/// Chroma subsampling scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Subsampling {
    /// No subsampling (4:4:4) - singleton blocks, chroma unchanged
    #[default]
    S444,
    /// Horizontal subsampling only (4:2:2) - blocks of 2 consecutive pixels
    S422,
    /// Both horizontal and vertical (4:2:0) - 2x2 blocks
    S420,
}

impl Subsampling {
    /// Horizontal sampling factor for chroma components
    #[must_use]
    pub const fn h_factor(self) -> usize {
        match self {
            Subsampling::S444 => 1,
            Subsampling::S422 | Subsampling::S420 => 2,
        }
    }

    /// Vertical sampling factor for chroma components
    #[must_use]
    pub const fn v_factor(self) -> usize {
        match self {
            Subsampling::S444 | Subsampling::S422 => 1,
            Subsampling::S420 => 2,
        }
    }
}

impl fmt::Display for Subsampling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Subsampling::S444 => "4:4:4",
            Subsampling::S422 => "4:2:2",
            Subsampling::S420 => "4:2:0",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Subsampling {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "4:4:4" => Ok(Subsampling::S444),
            "4:2:2" => Ok(Subsampling::S422),
            "4:2:0" => Ok(Subsampling::S420),
            _ => Err(Error::UnknownSetting {
                setting: "subsampling scheme",
                value: s.to_string(),
            }),
        }
    }
}
