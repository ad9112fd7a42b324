#![no_main]

use libfuzzer_sys::fuzz_target;
use sane_pnm::sane_core::format::FrameFormat;
use sane_pnm::sane_core::frame::Frame;
use sane_pnm::sane_core::source::FrameSource;
use sane_pnm::{encode_frame, PnmReader, ReadStatus};

struct Single(Option<Frame>);

impl FrameSource for Single {
    type Error = ();

    fn read_frame(&mut self) -> Result<Frame, Self::Error> {
        self.0.take().ok_or(())
    }
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }
    // first byte picks the chunk size, second the format and depth
    let chunk = usize::from(data[0]) + 1;
    let format = FrameFormat::from_raw(u32::from(data[1] & 7));
    let depth = if data[1] & 8 == 0 { 8 } else { 1 };
    let pixels = data[2..].to_vec();

    let frame = Frame::new(format, pixels.len(), 1, depth, pixels);
    let expected = encode_frame(&frame);

    let mut reader = PnmReader::new(Single(Some(frame)));

    match (reader.next_frame(), expected) {
        (Ok(length), Ok(expected)) => {
            assert_eq!(length, expected.len());

            let mut out = Vec::with_capacity(length);
            let mut buf = vec![0; chunk];

            while let ReadStatus::Read(count) = reader.read_into(&mut buf) {
                out.extend_from_slice(&buf[..count]);
            }
            assert_eq!(out, expected);
        }
        (Err(_), Err(_)) => {
            assert_eq!(reader.read_into(&mut [0; 4]), ReadStatus::EndOfData);
        }
        _ => panic!("reader and encoder disagree")
    }
});
