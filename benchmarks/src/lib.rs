/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use sane_core::format::FrameFormat;
use sane_core::frame::Frame;

/// A letter sized page at 300dpi
pub const PAGE_WIDTH: usize = 2550;
pub const PAGE_HEIGHT: usize = 3300;

/// Create a page sized frame filled with a repeating pattern
pub fn sample_page(format: FrameFormat, depth: u8) -> Frame {
    let size = Frame::new(format, PAGE_WIDTH, PAGE_HEIGHT, depth, vec![])
        .expected_len()
        .unwrap();
    let data = (0..size).map(|x| (x % 256) as u8).collect();

    Frame::new(format, PAGE_WIDTH, PAGE_HEIGHT, depth, data)
}
