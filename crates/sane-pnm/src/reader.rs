/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Pull based PNM byte stream over a frame source
use std::io;

use sane_core::frame::Frame;
use sane_core::log::{debug, trace};
use sane_core::source::FrameSource;

use crate::encoder::{check_length, frame_header};
use crate::errors::PnmReaderErrors;
use crate::options::PnmOptions;

/// Result of a single bounded read
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ReadStatus {
    /// This many bytes were copied into the destination
    Read(usize),
    /// The current frame has been fully delivered, or there is no frame.
    ///
    /// Call [`next_frame`](PnmReader::next_frame) to continue
    EndOfData
}

/// Where a reader is in its lifecycle
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ReaderState {
    /// No frame is buffered
    Empty,
    /// A frame is buffered and nothing was read yet
    Ready,
    /// Part of the buffered frame has been read
    Draining,
    /// The buffered frame has been fully read
    Exhausted
}

/// Serves frames from a [`FrameSource`] as PNM images through bounded reads.
///
/// Each call to [`next_frame`](PnmReader::next_frame) pulls one frame from the
/// source and buffers its header and bytes, reads then drain that buffer.
/// When the buffer is drained reads report the end of data until the next
/// frame is requested, the reader never moves to another frame on its own.
///
/// The reader implements [`io::Read`], end of data shows up as `Ok(0)`.
///
/// # Example
/// ```
/// use std::io::Read;
///
/// use sane_core::format::FrameFormat;
/// use sane_core::frame::Frame;
/// use sane_core::source::FrameSource;
/// use sane_pnm::PnmReader;
///
/// struct OnePage(Option<Frame>);
///
/// impl FrameSource for OnePage {
///     type Error = &'static str;
///
///     fn read_frame(&mut self) -> Result<Frame, Self::Error> {
///         self.0.take().ok_or("end of scan")
///     }
/// }
///
/// let page = Frame::new(FrameFormat::Gray, 2, 1, 8, vec![0, 255]);
/// let mut reader = PnmReader::new(OnePage(Some(page)));
///
/// reader.next_frame().unwrap();
/// let mut pnm = vec![];
/// reader.read_to_end(&mut pnm).unwrap();
/// assert_eq!(pnm, b"P5\n# SANE data follows\n2 1\n255\n\x00\xff");
///
/// // the source has no more pages
/// assert!(reader.next_frame().is_err());
/// ```
pub struct PnmReader<S: FrameSource> {
    source:   S,
    buffer:   Option<Vec<u8>>,
    position: usize,
    options:  PnmOptions
}

impl<S: FrameSource> PnmReader<S> {
    /// Create a new reader pulling frames from `source`
    ///
    /// The reader starts out empty, call [`next_frame`](Self::next_frame)
    /// before reading.
    pub fn new(source: S) -> PnmReader<S> {
        PnmReader::new_with_options(source, PnmOptions::default())
    }

    /// Create a new reader with non default options
    pub fn new_with_options(source: S, options: PnmOptions) -> PnmReader<S> {
        PnmReader {
            source,
            buffer: None,
            position: 0,
            options
        }
    }

    /// Pull the next frame from the source and buffer it as a PNM image
    ///
    /// Whatever was left of the previous frame is discarded first, so on error
    /// the reader is empty and reads report end of data.
    ///
    /// # Returns
    /// - `Ok(usize)`: Number of bytes now available for reading
    /// - `Err(PnmReaderErrors::Source)`: The source failed, its error is passed on as is
    /// - `Err(PnmReaderErrors::Encode)`: The frame cannot be written as PNM
    pub fn next_frame(&mut self) -> Result<usize, PnmReaderErrors<S::Error>> {
        self.position = 0;
        self.buffer = None;

        let frame = self.source.read_frame().map_err(|err| {
            debug!("Frame source did not produce a frame");
            PnmReaderErrors::Source(err)
        })?;

        debug!(
            "Read {:?} frame {}x{}, depth {}, {} bytes",
            frame.format(),
            frame.width(),
            frame.height(),
            frame.depth(),
            frame.data().len()
        );
        let buffer = Self::render(frame, self.options)?;
        let length = buffer.len();

        self.buffer = Some(buffer);

        Ok(length)
    }

    fn render(frame: Frame, options: PnmOptions) -> Result<Vec<u8>, PnmReaderErrors<S::Error>> {
        let header = frame_header(&frame)?;

        check_length(&frame, options)?;

        let data = frame.into_data();

        let mut buffer = Vec::with_capacity(header.len() + data.len());
        buffer.extend_from_slice(&header);
        buffer.extend_from_slice(&data);

        Ok(buffer)
    }

    /// Copy as many buffered bytes as fit into `dst`
    ///
    /// Never blocks and never crosses into the next frame.
    pub fn read_into(&mut self, dst: &mut [u8]) -> ReadStatus {
        let remaining = match &self.buffer {
            Some(buffer) if self.position < buffer.len() => &buffer[self.position..],
            _ => return ReadStatus::EndOfData
        };
        let count = dst.len().min(remaining.len());

        dst[..count].copy_from_slice(&remaining[..count]);
        self.position += count;

        if self.remaining() == 0 {
            trace!("Frame fully read, {} bytes", self.position);
        }
        ReadStatus::Read(count)
    }

    pub fn state(&self) -> ReaderState {
        match &self.buffer {
            None => ReaderState::Empty,
            Some(buffer) if self.position >= buffer.len() => ReaderState::Exhausted,
            Some(_) if self.position == 0 => ReaderState::Ready,
            Some(_) => ReaderState::Draining
        }
    }

    /// Bytes of the current frame not yet read
    pub fn remaining(&self) -> usize {
        self.buffered_len().saturating_sub(self.position)
    }

    /// Total length of the buffered frame, header included
    pub fn buffered_len(&self) -> usize {
        self.buffer.as_ref().map_or(0, Vec::len)
    }

    pub const fn options(&self) -> PnmOptions {
        self.options
    }

    /// Borrow the frame source
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Mutably borrow the frame source
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Consume the reader returning the frame source
    pub fn into_inner(self) -> S {
        self.source
    }
}

impl<S: FrameSource> io::Read for PnmReader<S> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.read_into(buf) {
            ReadStatus::Read(count) => Ok(count),
            ReadStatus::EndOfData => Ok(0)
        }
    }
}
