//! Property-based tests using proptest
//!
//! These tests check the byte-layout invariants of the writer and the element
//! encoder across randomly generated inputs.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use im_protocol::core::packet::UniPacket;
use im_protocol::message::{Element, ElementEncoder, WireElement};
use im_protocol::utils::buffer_pool::BufferPool;
use im_protocol::Writer;
use proptest::prelude::*;

// Property: fixed-width integers round-trip through their big-endian encoding
proptest! {
    #[test]
    fn prop_u64_roundtrip(bytes in prop::array::uniform8(any::<u8>())) {
        let mut w = Writer::new();
        w.write_u64(u64::from_be_bytes(bytes));
        prop_assert_eq!(w.bytes(), &bytes[..]);
    }

    #[test]
    fn prop_u32_roundtrip(bytes in prop::array::uniform4(any::<u8>())) {
        let mut w = Writer::new();
        w.write_u32(u32::from_be_bytes(bytes));
        prop_assert_eq!(w.bytes(), &bytes[..]);
    }

    #[test]
    fn prop_u16_roundtrip(bytes in prop::array::uniform2(any::<u8>())) {
        let mut w = Writer::new();
        w.write_u16(u16::from_be_bytes(bytes));
        prop_assert_eq!(w.bytes(), &bytes[..]);
    }
}

// Property: the long-string length field is the UTF-8 length plus four
proptest! {
    #[test]
    fn prop_long_string_length(s in ".{0,200}") {
        let mut w = Writer::new();
        w.write_string(&s);
        let out = w.bytes();

        let declared = u32::from_be_bytes([out[0], out[1], out[2], out[3]]) as usize;
        prop_assert_eq!(declared, s.len() + 4);
        prop_assert_eq!(&out[4..], s.as_bytes());
    }
}

// Property: the short-bytes length field is the payload length only
proptest! {
    #[test]
    fn prop_short_bytes_length(data in prop::collection::vec(any::<u8>(), 0..2000)) {
        let mut w = Writer::new();
        w.write_bytes_short(&data);
        let out = w.bytes();

        prop_assert_eq!(u16::from_be_bytes([out[0], out[1]]) as usize, data.len());
        prop_assert_eq!(&out[2..], data.as_slice());
    }
}

// Property: limited writes keep min(len, limit) bytes and only flag real truncation
proptest! {
    #[test]
    fn prop_tlv_limited(data in prop::collection::vec(any::<u8>(), 0..512), limit in 0usize..512) {
        let mut w = Writer::new();
        w.write_tlv_limited(&data, limit);
        let out = w.bytes();

        let kept = data.len().min(limit);
        prop_assert_eq!(u16::from_be_bytes([out[0], out[1]]) as usize, kept);
        prop_assert_eq!(&out[2..], &data[..kept]);
        prop_assert_eq!(w.is_clean(), data.len() <= limit);
    }
}

// Property: a nested packet's length field is inner length plus offset
proptest! {
    #[test]
    fn prop_nested_offset(inner in prop::collection::vec(any::<u8>(), 0..4096), offset in 0u32..64) {
        let pool = BufferPool::new(2);
        let bytes = pool.build(|w| w.write_int_lv_packet(offset, |c| c.write_bytes(&inner)));

        let declared = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        prop_assert_eq!(declared, inner.len() as u32 + offset);
        prop_assert_eq!(&bytes[4..], inner.as_slice());
    }
}

// Property: envelope size is fully determined by its inputs
proptest! {
    #[test]
    fn prop_envelope_layout(
        command in "[a-zA-Z0-9._]{1,40}",
        session in prop::collection::vec(any::<u8>(), 0..16),
        extra in prop::collection::vec(any::<u8>(), 0..64),
        body in prop::collection::vec(any::<u8>(), 0..1024),
    ) {
        let pool = BufferPool::default();
        let packet = UniPacket::new(command.clone(), session.clone(), extra.clone(), body.clone());
        let bytes = packet.to_bytes(&pool);
        prop_assert_eq!(bytes.len(), packet.encoded_len());

        let head_len = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]) as usize;
        let body_len = u32::from_be_bytes([
            bytes[head_len],
            bytes[head_len + 1],
            bytes[head_len + 2],
            bytes[head_len + 3],
        ]) as usize;
        prop_assert_eq!(head_len + body_len, bytes.len());
        prop_assert_eq!(&bytes[head_len + 4..], body.as_slice());
    }
}

// Property: faces switch encodings exactly at index 260
proptest! {
    #[test]
    fn prop_face_encoding_boundary(index in 0i32..1000) {
        let out = ElementEncoder::default().pack(&Element::face(index, "f")).unwrap();
        prop_assert_eq!(out.len(), 1);
        match &out[0] {
            WireElement::Face(face) => {
                prop_assert!(index < 260);
                let old = face.old.clone().unwrap();
                prop_assert_eq!(i16::from_be_bytes([old[0], old[1]]) as i32, 0x1445 - 4 + index);
            }
            WireElement::CommonElem(common) => {
                prop_assert!(index >= 260);
                prop_assert_eq!(common.service_type, Some(33));
            }
            other => prop_assert!(false, "unexpected element {:?}", other),
        }
    }
}

// Property: the at-all flag byte is set exactly when the target is zero
proptest! {
    #[test]
    fn prop_at_flag(target in prop_oneof![Just(0i64), 1i64..=u32::MAX as i64], display in "@[a-z]{0,12}") {
        let out = ElementEncoder::default().pack(&Element::at(target, display.clone())).unwrap();
        prop_assert_eq!(out.len(), 2);

        let attr6 = out[0].as_text().unwrap().attr6_buf.clone().unwrap();
        prop_assert_eq!(attr6.len(), 13);
        prop_assert_eq!(u16::from_be_bytes([attr6[4], attr6[5]]) as usize, display.chars().count());
        prop_assert_eq!(attr6[6], u8::from(target == 0));
        prop_assert_eq!(u32::from_be_bytes([attr6[7], attr6[8], attr6[9], attr6[10]]), target as u32);
    }
}
