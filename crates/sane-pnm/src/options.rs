/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Options shared by the encoder and the reader

/// Encoding options
///
/// Both [`PnmEncoder`](crate::PnmEncoder) and [`PnmReader`](crate::PnmReader)
/// respect these.
///
/// # Example
/// ```
/// use sane_pnm::PnmOptions;
///
/// let options = PnmOptions::default().set_strict_length(true);
/// assert!(options.strict_length());
/// assert!(!options.reject_multi_frame());
/// ```
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct PnmOptions {
    strict_length:      bool,
    reject_multi_frame: bool
}

impl PnmOptions {
    /// Whether frames whose byte length disagrees with their
    /// geometry are refused
    ///
    /// - Default value: false, frame data is written as is
    pub const fn strict_length(&self) -> bool {
        self.strict_length
    }

    /// Whether images spanning more than one frame are refused
    /// by the whole image encoder
    ///
    /// - Default value: false, the first frame is encoded and a warning is logged
    pub const fn reject_multi_frame(&self) -> bool {
        self.reject_multi_frame
    }

    /// Set whether frame byte lengths should be checked against
    /// the frame's width, height, depth and format
    pub fn set_strict_length(mut self, yes: bool) -> Self {
        self.strict_length = yes;
        self
    }

    /// Set whether multi frame images should be refused instead
    /// of encoding only their first frame
    pub fn set_reject_multi_frame(mut self, yes: bool) -> Self {
        self.reject_multi_frame = yes;
        self
    }
}
