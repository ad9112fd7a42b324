/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::read;
use std::path::{Path, PathBuf};

use sane_core::format::FrameFormat;
use serde::Deserialize;

mod pnm;

#[derive(Copy, Clone, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonFrameFormat {
    Gray,
    Rgb,
    Red,
    Green,
    Blue,
    /// Any other backend code
    Raw(u32)
}

impl JsonFrameFormat {
    pub fn to_frame_format(self) -> FrameFormat {
        match self {
            Self::Gray => FrameFormat::Gray,
            Self::Rgb => FrameFormat::Rgb,
            Self::Red => FrameFormat::Red,
            Self::Green => FrameFormat::Green,
            Self::Blue => FrameFormat::Blue,
            Self::Raw(code) => FrameFormat::from_raw(code)
        }
    }
}

#[derive(Clone, Deserialize, Debug)]
pub struct HeaderEntry {
    pub format:  JsonFrameFormat,
    pub width:   usize,
    pub height:  usize,
    pub depth:   u8,
    /// Expected header text, `None` when the frame must be refused
    pub header:  Option<String>,
    pub comment: Option<String>
}

pub fn cases_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests")
}

pub fn load_cases(name: &str) -> Vec<HeaderEntry> {
    let json_file = read(cases_path().join(name)).unwrap();
    serde_json::from_slice(&json_file).unwrap()
}
