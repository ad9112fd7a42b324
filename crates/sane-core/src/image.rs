/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The result of one scan
use alloc::vec;
use alloc::vec::Vec;

use crate::frame::Frame;

/// An ordered list of frames making up one logical scan.
///
/// Grayscale and interleaved RGB scans produce a single frame,
/// three pass colour scans produce one frame per component.
/// Encoders which only understand single plane images should
/// check [`is_multi_frame`](Image::is_multi_frame).
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Image {
    frames: Vec<Frame>
}

impl Image {
    pub fn new(frames: Vec<Frame>) -> Image {
        Image { frames }
    }

    /// Create an image containing only `frame`
    pub fn from_frame(frame: Frame) -> Image {
        Image {
            frames: vec![frame]
        }
    }

    /// Append a frame to the end of the image
    pub fn push(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// The first frame of the image or `None` if the image is empty
    pub fn first_frame(&self) -> Option<&Frame> {
        self.frames.first()
    }

    pub fn num_frames(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Whether the image spans more than one frame
    pub fn is_multi_frame(&self) -> bool {
        self.frames.len() > 1
    }

    pub fn into_frames(self) -> Vec<Frame> {
        self.frames
    }
}

impl From<Frame> for Image {
    fn from(frame: Frame) -> Self {
        Image::from_frame(frame)
    }
}
