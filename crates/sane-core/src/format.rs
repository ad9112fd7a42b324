/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Pixel layout of a scanned frame.

/// The layout of the samples inside a frame.
///
/// Acquisition backends identify the layout with a small integer,
/// the raw value is kept for layouts we do not understand so that
/// errors can report exactly what the backend sent.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum FrameFormat {
    /// Single channel grayscale samples
    Gray,
    /// Red, Green, Blue samples interleaved per pixel
    Rgb,
    /// The red plane of a three pass colour scan
    Red,
    /// The green plane of a three pass colour scan
    Green,
    /// The blue plane of a three pass colour scan
    Blue,
    /// A layout not known to this library, carrying the raw code
    Unknown(u32)
}

impl FrameFormat {
    /// Map a raw backend frame code to a format
    ///
    /// # Example
    /// ```
    /// use sane_core::format::FrameFormat;
    /// assert_eq!(FrameFormat::from_raw(1), FrameFormat::Rgb);
    /// assert_eq!(FrameFormat::from_raw(42), FrameFormat::Unknown(42));
    /// ```
    pub const fn from_raw(code: u32) -> FrameFormat {
        match code {
            0 => Self::Gray,
            1 => Self::Rgb,
            2 => Self::Red,
            3 => Self::Green,
            4 => Self::Blue,
            n => Self::Unknown(n)
        }
    }

    /// Return the raw backend code for this format
    pub const fn to_raw(self) -> u32 {
        match self {
            Self::Gray => 0,
            Self::Rgb => 1,
            Self::Red => 2,
            Self::Green => 3,
            Self::Blue => 4,
            Self::Unknown(n) => n
        }
    }

    /// Number of samples stored for each pixel of a frame in this format
    ///
    /// Component frames (red, green, blue) carry a single sample per pixel,
    /// the other two components arrive in their own frames.
    pub const fn samples_per_pixel(self) -> usize {
        match self {
            Self::Rgb => 3,
            Self::Gray | Self::Red | Self::Green | Self::Blue => 1,
            Self::Unknown(_) => 0
        }
    }

    /// Whether this frame is one plane of a colour image split
    /// across several frames
    pub const fn is_component(self) -> bool {
        matches!(self, Self::Red | Self::Green | Self::Blue)
    }

    pub const fn is_known(self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}
