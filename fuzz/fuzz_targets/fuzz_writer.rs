#![no_main]

use im_protocol::utils::buffer_pool::BufferPool;
use im_protocol::{Element, ElementEncoder};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    // First byte picks the truncation limit, the rest is payload
    let limit = data[0] as usize;
    let payload = &data[1..];
    let text = String::from_utf8_lossy(payload);

    let pool = BufferPool::new(2);
    let bytes = pool.build(|w| {
        w.write_hex(&text);
        w.write_tlv_limited(payload, limit);
        w.write_string(&text);
        w.write_int_lv_packet(4, |w| w.write_string_short(&text));
    });
    assert!(bytes.len() >= 2 + 4 + 2 + 4);

    let encoder = ElementEncoder::default();
    let _ = encoder.pack(&Element::at(i64::from(data[0]), text.to_string()));
    let _ = encoder.pack(&Element::face(i32::from(data[0]) + 200, text.to_string()));
});
