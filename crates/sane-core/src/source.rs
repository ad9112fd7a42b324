/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The seam between encoders and an acquisition session
//!
//! Opening devices, negotiating options and starting scans are
//! all the session's business, encoders only ever ask for the
//! next frame.

use crate::frame::Frame;

/// Anything that can hand out scanned frames one at a time.
///
/// Implementations are free to block, e.g. while a device is
/// scanning a page or a network backend is sending data.
pub trait FrameSource {
    /// The error returned when no frame could be read,
    /// including the end of a scan
    type Error;

    /// Read the next complete frame from the session
    fn read_frame(&mut self) -> Result<Frame, Self::Error>;
}

impl<S: FrameSource + ?Sized> FrameSource for &mut S {
    type Error = S::Error;

    fn read_frame(&mut self) -> Result<Frame, Self::Error> {
        (**self).read_frame()
    }
}
