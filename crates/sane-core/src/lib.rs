/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core types shared by the sane encoders
//!
//! This crate holds the in-memory representation of a scan as produced
//! by an acquisition session, before it is written out in any file format.
//!
//! It currently contains
//!
//! - [`Frame`](frame::Frame), one rectangular plane of pixels plus its geometry
//! - [`Image`](image::Image), the ordered frames making up one scan
//! - [`FrameFormat`](format::FrameFormat), the pixel layout of a frame
//! - [`FrameSource`](source::FrameSource), the seam to the acquisition session
//!
//! This library is `#[no_std]` with `alloc` needed for storing pixel bytes.
//!
//! # Features
//!  - `std`: Enables std only trait implementations.
//!
//!  - `log`: Routes the crate's log macros to the [`log`](https://docs.rs/log) crate,
//!     without it they compile to nothing.
//!
//!  - `serde`: Enables serializing frame metadata
#![cfg_attr(not(feature = "std"), no_std)]
#![macro_use]
extern crate alloc;

pub mod format;
pub mod frame;
pub mod image;
#[cfg(not(feature = "log"))]
pub mod log;
mod serde;
pub mod source;

#[cfg(feature = "log")]
pub use log;
