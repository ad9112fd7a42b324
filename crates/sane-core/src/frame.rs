/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A single plane of scanned pixels
use alloc::vec::Vec;

use crate::format::FrameFormat;

/// One rectangular plane of pixel data as delivered by an
/// acquisition session.
///
/// The frame does not check that `data` matches its geometry,
/// see [`expected_len`](Frame::expected_len) for callers who want to.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Frame {
    format: FrameFormat,
    width:  usize,
    height: usize,
    depth:  u8,
    data:   Vec<u8>
}

impl Frame {
    /// Create a new frame
    ///
    /// # Arguments
    /// - format: Layout of the samples in `data`
    /// - width, height: Pixel dimensions
    /// - depth: Bits per sample, usually 1, 8 or 16
    /// - data: Raw sample bytes, row major
    pub fn new(
        format: FrameFormat, width: usize, height: usize, depth: u8, data: Vec<u8>
    ) -> Frame {
        Frame {
            format,
            width,
            height,
            depth,
            data
        }
    }

    pub const fn format(&self) -> FrameFormat {
        self.format
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Bits per sample
    pub const fn depth(&self) -> u8 {
        self.depth
    }

    /// Return the width and height of the frame
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Raw sample bytes
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume the frame returning the raw sample bytes
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Number of bytes the frame's geometry implies.
    ///
    /// One bit frames pack eight pixels per byte with every row padded
    /// to a whole byte, frames deeper than eight bits use two bytes per sample.
    ///
    /// Returns `None` if the computation overflows.
    ///
    /// # Example
    /// ```
    /// use sane_core::format::FrameFormat;
    /// use sane_core::frame::Frame;
    ///
    /// let frame = Frame::new(FrameFormat::Gray, 10, 2, 1, vec![0; 4]);
    /// // 10 pixels need two bytes per row
    /// assert_eq!(frame.expected_len(), Some(4));
    /// ```
    pub fn expected_len(&self) -> Option<usize> {
        // unknown layouts are only encodable as bitmaps, one sample per pixel
        let samples = match self.format.samples_per_pixel() {
            0 => 1,
            n => n
        };
        let row_samples = self.width.checked_mul(samples)?;

        let row_bytes = match self.depth {
            1 => row_samples.div_ceil(8),
            0..=8 => row_samples,
            _ => row_samples.checked_mul(2)?
        };
        row_bytes.checked_mul(self.height)
    }
}
