/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Portable Any-Map output for scanned frames
//!
//! This crate turns frames handed out by an acquisition session into
//! binary PNM images. Two ways are provided
//!
//! - [`PnmEncoder`] writes a whole [`Image`](sane_core::image::Image) in one go.
//! - [`PnmReader`] pulls frames from a [`FrameSource`](sane_core::source::FrameSource)
//!   one at a time and serves them through bounded reads, it implements
//!   [`std::io::Read`] so it can be handed to anything expecting a reader.
//!
//! The header written is
//! ```text
//! P<4|5|6>
//! # SANE data follows
//! <width> <height>
//! <max value>        (absent for P4)
//! ```
//! followed directly by the frame's bytes.
//!
//! # Example
//! ```
//! use sane_core::format::FrameFormat;
//! use sane_core::frame::Frame;
//! use sane_pnm::frame_header;
//!
//! let frame = Frame::new(FrameFormat::Gray, 3, 2, 8, vec![0; 6]);
//! let header = frame_header(&frame).unwrap();
//! assert_eq!(header, b"P5\n# SANE data follows\n3 2\n255\n");
//! ```
pub use sane_core;

pub use crate::encoder::*;
pub use crate::errors::*;
pub use crate::options::PnmOptions;
pub use crate::reader::*;

mod encoder;
mod errors;
mod options;
mod reader;
