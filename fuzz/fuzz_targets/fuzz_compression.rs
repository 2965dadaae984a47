#![no_main]

use im_protocol::utils::compression::{decompress, Compressor, ZlibCompressor};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(compressed) = ZlibCompressor::default().compress(data) {
        let restored = decompress(&compressed).expect("own output must inflate");
        assert_eq!(restored, data);
    }

    // malformed streams must error, never panic
    let _ = decompress(data);
});
