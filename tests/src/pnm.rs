/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::Read;

use sane_core::frame::Frame;
use sane_core::image::Image;
use sane_core::source::FrameSource;
use sane_pnm::{encode_image, pnm_header, PnmReader};

use crate::{load_cases, HeaderEntry};

struct Once(Option<Frame>);

impl FrameSource for Once {
    type Error = &'static str;

    fn read_frame(&mut self) -> Result<Frame, Self::Error> {
        self.0.take().ok_or("end of scan")
    }
}

fn check_entry(entry: &HeaderEntry) -> Result<(), String> {
    let format = entry.format.to_frame_format();
    let result = pnm_header(format, entry.width, entry.height, entry.depth);

    match (&entry.header, result) {
        (Some(expected), Ok(found)) if expected.as_bytes() == found.as_slice() => Ok(()),
        (None, Err(_)) => Ok(()),
        (expected, found) => Err(format!(
            "Header mismatch\nExpected {:?} but found {:?}",
            expected,
            found.map(|h| String::from_utf8_lossy(&h).into_owned())
        ))
    }
}

#[test]
#[allow(clippy::uninlined_format_args)]
fn test_pnm_headers() {
    let cases = load_cases("pnm_headers.json");
    assert!(!cases.is_empty());

    let mut error = false;
    let mut failed = Vec::new();
    for entry in &cases {
        if let Err(err) = check_entry(entry) {
            error = true;
            failed.push(entry.to_owned());
            eprintln!("{}\nConfig:{:#?}\n", err, entry);
        }
    }
    if error {
        panic!("Errors found during header tests\n {:#?}", failed);
    }
}

#[test]
fn test_stream_matches_whole_image() {
    for entry in load_cases("pnm_headers.json") {
        let format = entry.format.to_frame_format();
        let data = vec![0xa5; entry.width * entry.height];
        let frame = Frame::new(format, entry.width, entry.height, entry.depth, data);

        let whole = encode_image(&Image::from_frame(frame.clone()));

        let mut reader = PnmReader::new(Once(Some(frame)));
        match (reader.next_frame(), whole) {
            (Ok(_), Ok(whole)) => {
                let mut streamed = vec![];
                reader.read_to_end(&mut streamed).unwrap();
                assert_eq!(streamed, whole, "{:?}", entry);
            }
            (Err(err), Err(_)) => assert!(err.unsupported_format().is_some()),
            (streamed, whole) => panic!(
                "Stream and whole image disagree for {:?}: {:?} vs {:?}",
                entry, streamed, whole
            )
        }
    }
}
