/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! PNM header and whole image encoding
use std::fmt::{Display, Formatter};
use std::io::Write;

use sane_core::format::FrameFormat;
use sane_core::frame::Frame;
use sane_core::image::Image;
use sane_core::log::{trace, warn};

use crate::errors::PnmEncodeErrors;
use crate::options::PnmOptions;

/// Comment line written into every header, downstream tools
/// look for it to identify scanner output
pub const SANE_COMMENT: &str = "# SANE data follows";

/// The binary PNM variants this crate writes
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PnmVersion {
    /// Bitmap, one bit per pixel
    P4,
    /// Gray map
    P5,
    /// Pix map
    P6
}

impl Display for PnmVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::P4 => write!(f, "P4"),
            Self::P5 => write!(f, "P5"),
            Self::P6 => write!(f, "P6")
        }
    }
}

impl PnmVersion {
    /// Select the PNM variant for a frame
    ///
    /// A depth of one always selects [`P4`](PnmVersion::P4), even for
    /// formats that would otherwise be refused. Returns `None` for
    /// unknown formats deeper than one bit.
    ///
    /// # Example
    /// ```
    /// use sane_core::format::FrameFormat;
    /// use sane_pnm::PnmVersion;
    ///
    /// assert_eq!(PnmVersion::for_frame(FrameFormat::Blue, 8), Some(PnmVersion::P6));
    /// assert_eq!(PnmVersion::for_frame(FrameFormat::Unknown(5), 1), Some(PnmVersion::P4));
    /// assert_eq!(PnmVersion::for_frame(FrameFormat::Unknown(5), 8), None);
    /// ```
    pub const fn for_frame(format: FrameFormat, depth: u8) -> Option<PnmVersion> {
        // must run before looking at the format
        if depth == 1 {
            return Some(PnmVersion::P4);
        }
        match format {
            FrameFormat::Rgb | FrameFormat::Red | FrameFormat::Green | FrameFormat::Blue => {
                Some(PnmVersion::P6)
            }
            FrameFormat::Gray => Some(PnmVersion::P5),
            FrameFormat::Unknown(_) => None
        }
    }

    /// Whether the header carries a max value line
    pub const fn has_max_value(self) -> bool {
        !matches!(self, Self::P4)
    }
}

/// Max sample value written for a depth, only two tiers exist
pub const fn max_value_for_depth(depth: u8) -> u16 {
    if depth > 8 {
        u16::MAX
    } else {
        255
    }
}

fn write_header<W: Write>(
    writer: &mut W, version: PnmVersion, width: usize, height: usize, depth: u8
) -> Result<(), PnmEncodeErrors> {
    writeln!(writer, "{version}\n{SANE_COMMENT}\n{width} {height}")?;

    if version.has_max_value() {
        writeln!(writer, "{}", max_value_for_depth(depth))?;
    }
    Ok(())
}

/// Create the PNM header for a frame with the given layout
///
/// # Errors
/// [`UnsupportedFormat`](PnmEncodeErrors::UnsupportedFormat) if the format is unknown
/// and depth is not one.
///
/// # Example
/// ```
/// use sane_core::format::FrameFormat;
/// use sane_pnm::pnm_header;
///
/// let header = pnm_header(FrameFormat::Rgb, 2, 2, 16).unwrap();
/// assert_eq!(header, b"P6\n# SANE data follows\n2 2\n65535\n");
///
/// let header = pnm_header(FrameFormat::Gray, 8, 4, 1).unwrap();
/// assert_eq!(header, b"P4\n# SANE data follows\n8 4\n");
/// ```
pub fn pnm_header(
    format: FrameFormat, width: usize, height: usize, depth: u8
) -> Result<Vec<u8>, PnmEncodeErrors> {
    let version = PnmVersion::for_frame(format, depth)
        .ok_or(PnmEncodeErrors::UnsupportedFormat(format))?;

    trace!("Frame format {:?}, depth {}, writing {} header", format, depth, version);

    let mut header = Vec::with_capacity(40);
    write_header(&mut header, version, width, height, depth)?;

    Ok(header)
}

/// Create the PNM header for `frame`
///
/// See [`pnm_header`]
pub fn frame_header(frame: &Frame) -> Result<Vec<u8>, PnmEncodeErrors> {
    pnm_header(frame.format(), frame.width(), frame.height(), frame.depth())
}

/// Check a frame's data length against its geometry if the options ask for it
pub(crate) fn check_length(frame: &Frame, options: PnmOptions) -> Result<(), PnmEncodeErrors> {
    if !options.strict_length() {
        return Ok(());
    }
    let expected = frame
        .expected_len()
        .ok_or(PnmEncodeErrors::TooLargeDimensions(frame.width(), frame.height()))?;
    let found = frame.data().len();

    if expected != found {
        return Err(PnmEncodeErrors::LengthMismatch(expected, found));
    }
    Ok(())
}

/// Encode a single frame as a complete PNM image, header followed by the frame's bytes
pub fn encode_frame(frame: &Frame) -> Result<Vec<u8>, PnmEncodeErrors> {
    let header = frame_header(frame)?;

    let mut out = Vec::with_capacity(header.len() + frame.data().len());
    out.extend_from_slice(&header);
    out.extend_from_slice(frame.data());

    Ok(out)
}

/// Encode the first frame of `image` as a PNM image with default options
///
/// See [`PnmEncoder`] for how multi frame images are treated.
pub fn encode_image(image: &Image) -> Result<Vec<u8>, PnmEncodeErrors> {
    PnmEncoder::new(image).encode_to_vec()
}

/// A whole image PNM encoder
///
/// # Multi frame images
/// PNM holds a single plane, only the **first** frame of the image is encoded.
/// A three pass colour scan (red, green and blue frames) thus comes out as its
/// red plane alone. Such images should be recombined into one interleaved
/// frame before encoding, or refused with
/// [`set_reject_multi_frame`](PnmOptions::set_reject_multi_frame).
///
/// # Example
/// ```
/// use sane_core::format::FrameFormat;
/// use sane_core::frame::Frame;
/// use sane_core::image::Image;
/// use sane_pnm::PnmEncoder;
///
/// let image = Image::from_frame(Frame::new(FrameFormat::Gray, 2, 1, 8, vec![10, 20]));
///
/// let mut output = vec![];
/// let written = PnmEncoder::new(&image).encode(&mut output).unwrap();
///
/// assert_eq!(written, output.len());
/// assert!(output.ends_with(&[10, 20]));
/// ```
pub struct PnmEncoder<'a> {
    image:   &'a Image,
    options: PnmOptions
}

impl<'a> PnmEncoder<'a> {
    /// Create a new encoder for `image` with default options
    pub fn new(image: &'a Image) -> PnmEncoder<'a> {
        PnmEncoder::new_with_options(image, PnmOptions::default())
    }

    /// Create a new encoder with non default options
    pub fn new_with_options(image: &'a Image, options: PnmOptions) -> PnmEncoder<'a> {
        PnmEncoder { image, options }
    }

    pub const fn options(&self) -> PnmOptions {
        self.options
    }

    fn select_frame(&self) -> Result<&'a Frame, PnmEncodeErrors> {
        let frame = self
            .image
            .first_frame()
            .ok_or(PnmEncodeErrors::EmptyImage)?;

        if self.image.is_multi_frame() {
            let count = self.image.num_frames();

            if self.options.reject_multi_frame() {
                return Err(PnmEncodeErrors::MultipleFrames(count));
            }
            warn!(
                "Image spans {} frames, only the first ({:?}) frame is encoded",
                count,
                frame.format()
            );
        }
        Ok(frame)
    }

    /// Size in bytes of the encoded image
    ///
    /// Fails exactly when [`encode`](Self::encode) would fail before writing.
    pub fn encoded_len(&self) -> Result<usize, PnmEncodeErrors> {
        let frame = self.select_frame()?;
        let header = frame_header(frame)?;

        check_length(frame, self.options)?;

        Ok(header.len() + frame.data().len())
    }

    /// Encode the image into `sink` returning the number of bytes written
    pub fn encode<W: Write>(&self, mut sink: W) -> Result<usize, PnmEncodeErrors> {
        let frame = self.select_frame()?;

        let header = frame_header(frame)?;

        check_length(frame, self.options)?;

        sink.write_all(&header)?;
        sink.write_all(frame.data())?;

        Ok(header.len() + frame.data().len())
    }

    /// Encode the image returning a vector with the encoded contents
    pub fn encode_to_vec(&self) -> Result<Vec<u8>, PnmEncodeErrors> {
        let mut out = Vec::new();
        self.encode(&mut out)?;

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use sane_core::format::FrameFormat;
    use sane_core::frame::Frame;
    use sane_core::image::Image;

    use crate::{
        encode_frame, encode_image, pnm_header, PnmEncodeErrors, PnmEncoder, PnmOptions
    };

    #[test]
    fn bitmap_header_ignores_format() {
        for format in [
            FrameFormat::Gray,
            FrameFormat::Rgb,
            FrameFormat::Red,
            FrameFormat::Unknown(17)
        ] {
            let header = pnm_header(format, 8, 4, 1).unwrap();
            assert_eq!(header, b"P4\n# SANE data follows\n8 4\n");
        }
    }

    #[test]
    fn gray_header() {
        let header = pnm_header(FrameFormat::Gray, 3, 2, 8).unwrap();
        assert_eq!(header, b"P5\n# SANE data follows\n3 2\n255\n");
    }

    #[test]
    fn component_frames_use_p6() {
        for format in [FrameFormat::Red, FrameFormat::Green, FrameFormat::Blue] {
            let header = pnm_header(format, 5, 7, 8).unwrap();
            assert_eq!(header, b"P6\n# SANE data follows\n5 7\n255\n");
        }
    }

    #[test]
    fn deep_frames_use_16_bit_max_value() {
        let header = pnm_header(FrameFormat::Gray, 1, 1, 12).unwrap();
        assert_eq!(header, b"P5\n# SANE data follows\n1 1\n65535\n");
    }

    #[test]
    fn unknown_format_refused() {
        for depth in [0, 2, 8, 16] {
            match pnm_header(FrameFormat::Unknown(9), 3, 3, depth) {
                Err(PnmEncodeErrors::UnsupportedFormat(FrameFormat::Unknown(9))) => {}
                other => panic!("expected unsupported format, got {other:?}")
            }
        }
    }

    #[test]
    fn encode_frame_appends_data() {
        let frame = Frame::new(FrameFormat::Rgb, 1, 1, 8, vec![1, 2, 3]);
        let out = encode_frame(&frame).unwrap();
        assert_eq!(out, b"P6\n# SANE data follows\n1 1\n255\n\x01\x02\x03");
    }

    #[test]
    fn empty_image_refused() {
        assert!(matches!(
            encode_image(&Image::default()),
            Err(PnmEncodeErrors::EmptyImage)
        ));
    }

    #[test]
    fn multi_frame_image_encodes_first_frame() {
        let image = Image::new(vec![
            Frame::new(FrameFormat::Red, 2, 1, 8, vec![1, 2]),
            Frame::new(FrameFormat::Green, 2, 1, 8, vec![3, 4]),
            Frame::new(FrameFormat::Blue, 2, 1, 8, vec![5, 6]),
        ]);
        let out = encode_image(&image).unwrap();
        assert_eq!(out, b"P6\n# SANE data follows\n2 1\n255\n\x01\x02");

        let options = PnmOptions::default().set_reject_multi_frame(true);
        let result = PnmEncoder::new_with_options(&image, options).encode_to_vec();
        assert!(matches!(result, Err(PnmEncodeErrors::MultipleFrames(3))));
    }

    #[test]
    fn strict_length_checks_data() {
        let image = Image::from_frame(Frame::new(FrameFormat::Gray, 4, 4, 8, vec![0; 15]));

        // trusted by default
        assert!(encode_image(&image).is_ok());

        let options = PnmOptions::default().set_strict_length(true);
        let result = PnmEncoder::new_with_options(&image, options).encode_to_vec();
        assert!(matches!(
            result,
            Err(PnmEncodeErrors::LengthMismatch(16, 15))
        ));
    }

    #[test]
    fn unknown_format_reported_before_length() {
        let image = Image::from_frame(Frame::new(FrameFormat::Unknown(9), 2, 2, 8, vec![0; 3]));
        let options = PnmOptions::default().set_strict_length(true);
        let encoder = PnmEncoder::new_with_options(&image, options);

        assert!(matches!(
            encoder.encode_to_vec(),
            Err(PnmEncodeErrors::UnsupportedFormat(FrameFormat::Unknown(9)))
        ));
        assert!(matches!(
            encoder.encoded_len(),
            Err(PnmEncodeErrors::UnsupportedFormat(FrameFormat::Unknown(9)))
        ));
    }

    #[test]
    fn strict_encoded_len_checks_data() {
        let image = Image::from_frame(Frame::new(FrameFormat::Gray, 4, 4, 8, vec![0; 15]));

        assert_eq!(PnmEncoder::new(&image).encoded_len().unwrap(), 15 + 31);

        let options = PnmOptions::default().set_strict_length(true);
        let result = PnmEncoder::new_with_options(&image, options).encoded_len();
        assert!(matches!(
            result,
            Err(PnmEncodeErrors::LengthMismatch(16, 15))
        ));
    }

    #[test]
    fn errors_display_on_one_line() {
        let err = PnmEncodeErrors::LengthMismatch(4, 3);
        assert_eq!(
            err.to_string(),
            "Frame data length mismatch, expected 4 bytes but found 3"
        );
        assert!(!format!("{err:?}").ends_with('\n'));
    }

    #[test]
    fn encoded_len_matches_output() {
        let image = Image::from_frame(Frame::new(FrameFormat::Rgb, 2, 2, 16, vec![0; 24]));
        let encoder = PnmEncoder::new(&image);
        let out = encoder.encode_to_vec().unwrap();
        assert_eq!(encoder.encoded_len().unwrap(), out.len());
    }
}
