//! # Message Elements
//!
//! Domain elements ([`Element`]), the wire elements they pack into
//! ([`WireElement`]), and the encoder between the two ([`ElementEncoder`]).
//!
//! One domain element packs into one or more wire elements; [`pb`] holds the
//! protobuf-style structures the wire elements carry.

pub mod elements;
pub mod pack;
pub mod pb;
pub mod wire;

pub use elements::{
    AtElement, Element, FaceElement, LightAppElement, ServiceElement, ShortVideoElement,
    TextElement,
};
pub use pack::{ElementEncoder, SHORT_VIDEO_FALLBACK};
pub use wire::WireElement;
