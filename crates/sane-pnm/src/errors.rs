/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};
use std::io;

use sane_core::format::FrameFormat;

/// Errors possible during encoding
pub enum PnmEncodeErrors {
    /// The frame's layout has no PNM representation.
    ///
    /// Carries the offending format, one bit frames never raise this
    UnsupportedFormat(FrameFormat),
    /// The image contains no frames
    EmptyImage,
    /// The image spans several frames and the options ask
    /// for such images to be refused, carries the frame count
    MultipleFrames(usize),
    /// Frame data length does not match its geometry,
    /// only raised with strict length checks enabled.
    ///
    /// (expected, found)
    LengthMismatch(usize, usize),
    /// Frame dimensions overflow when computing its size
    TooLargeDimensions(usize, usize),
    /// Error writing to the sink
    IoErrors(io::Error)
}

impl Debug for PnmEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PnmEncodeErrors::UnsupportedFormat(format) => {
                write!(f, "Unsupported frame format {format:?}")
            }
            PnmEncodeErrors::EmptyImage => {
                write!(f, "Image contains no frames")
            }
            PnmEncodeErrors::MultipleFrames(count) => {
                write!(
                    f,
                    "Image spans {count} frames, only single frame images can be encoded"
                )
            }
            PnmEncodeErrors::LengthMismatch(expected, found) => {
                write!(
                    f,
                    "Frame data length mismatch, expected {expected} bytes but found {found}"
                )
            }
            PnmEncodeErrors::TooLargeDimensions(width, height) => {
                write!(f, "Too large dimensions {width}x{height}")
            }
            PnmEncodeErrors::IoErrors(err) => {
                write!(f, "I/O error {err}")
            }
        }
    }
}

impl Display for PnmEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for PnmEncodeErrors {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PnmEncodeErrors::IoErrors(err) => Some(err),
            _ => None
        }
    }
}

impl From<io::Error> for PnmEncodeErrors {
    fn from(err: io::Error) -> Self {
        PnmEncodeErrors::IoErrors(err)
    }
}

/// Errors possible when advancing a [`PnmReader`](crate::PnmReader)
/// to the next frame.
///
/// `E` is the error type of the frame source, it is passed through untouched.
pub enum PnmReaderErrors<E> {
    /// The frame source failed, e.g the scan ended or the device faulted
    Source(E),
    /// The frame was read but cannot be represented as PNM
    Encode(PnmEncodeErrors)
}

impl<E> PnmReaderErrors<E> {
    /// Return the source error if this error came from the frame source
    pub fn source_error(&self) -> Option<&E> {
        match self {
            PnmReaderErrors::Source(err) => Some(err),
            PnmReaderErrors::Encode(_) => None
        }
    }

    /// Return the format of the frame if it was refused for its format
    pub const fn unsupported_format(&self) -> Option<FrameFormat> {
        match self {
            PnmReaderErrors::Encode(PnmEncodeErrors::UnsupportedFormat(format)) => Some(*format),
            _ => None
        }
    }
}

impl<E: Debug> Debug for PnmReaderErrors<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PnmReaderErrors::Source(err) => {
                write!(f, "Frame source error: {err:?}")
            }
            PnmReaderErrors::Encode(err) => {
                write!(f, "{err:?}")
            }
        }
    }
}

impl<E: Display> Display for PnmReaderErrors<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PnmReaderErrors::Source(err) => write!(f, "Frame source error: {err}"),
            PnmReaderErrors::Encode(err) => write!(f, "{err}")
        }
    }
}

impl<E: std::error::Error + 'static> std::error::Error for PnmReaderErrors<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PnmReaderErrors::Source(err) => Some(err),
            PnmReaderErrors::Encode(err) => Some(err)
        }
    }
}

impl<E> From<PnmEncodeErrors> for PnmReaderErrors<E> {
    fn from(err: PnmEncodeErrors) -> Self {
        PnmReaderErrors::Encode(err)
    }
}
