//! Domain element → wire element encoding.
//!
//! | element            | wire elements                                   |
//! |--------------------|-------------------------------------------------|
//! | text               | Text                                            |
//! | face, index < 260  | Face (legacy `old` field + fixed trailing buf)  |
//! | face, index >= 260 | CommonElem, service type 33                     |
//! | at, guild          | Text with reserved attribute                    |
//! | at, group          | Text with 6-field attribute, then Text(" ")     |
//! | service            | [Text(res id) when id == 1], RichMsg            |
//! | light app          | LightApp                                        |
//! | short video        | Text (fallback notice), VideoFile               |

use std::sync::Arc;

use prost::Message;
use tracing::trace;

use crate::config::{WireConfig, FACE_LEGACY_BUF, FACE_OLD_BASE, FACE_SERVTYPE33_THRESHOLD};
use crate::error::Result;
use crate::message::elements::{
    AtElement, Element, FaceElement, LightAppElement, ServiceElement, ShortVideoElement,
};
use crate::message::pb;
use crate::message::wire::WireElement;
use crate::utils::buffer_pool::BufferPool;
use crate::utils::compression::{Compressor, ZlibCompressor};

/// Text shown by clients that cannot render the video element
pub const SHORT_VIDEO_FALLBACK: &str = "你的QQ暂不支持查看视频短片，请期待后续版本。";

/// Service id whose card is preceded by its resource id as plain text
const SERVICE_ID_WITH_RES_TEXT: i32 = 1;

/// Marker byte in front of every compressed rich-content payload
const COMPRESSED_PAYLOAD_FLAG: u8 = 1;

const SERVTYPE_FACE: i32 = 33;
const AT_TYPE_GUILD_MEMBER: u32 = 2;

const VIDEO_FILE_FORMAT: i32 = 3;
const VIDEO_FILE_TIME: i32 = 10;
const VIDEO_WIDTH: i32 = 1280;
const VIDEO_HEIGHT: i32 = 720;
const CHAT_TYPE_UNSPECIFIED: i32 = -1;

/// Packs domain elements into wire elements
///
/// Holds the buffer pool used for attached binary attributes and the compressor used
/// for rich-content payloads. Cheap to clone.
#[derive(Clone)]
pub struct ElementEncoder {
    pool: BufferPool,
    compressor: Arc<dyn Compressor>,
}

impl ElementEncoder {
    pub fn new<C>(pool: BufferPool, compressor: C) -> Self
    where
        C: Compressor + 'static,
    {
        Self {
            pool,
            compressor: Arc::new(compressor),
        }
    }

    pub fn from_config(config: &WireConfig) -> Self {
        Self::new(
            BufferPool::with_config(&config.pool),
            ZlibCompressor::from_config(&config.compression),
        )
    }

    pub fn pool(&self) -> &BufferPool {
        &self.pool
    }

    /// Encodes one element; the order of the returned elements is the wire order
    ///
    /// # Errors
    /// Only compressor failures are reported (service and light-app cards).
    pub fn pack(&self, element: &Element) -> Result<Vec<WireElement>> {
        let packed = match element {
            Element::Text(text) => vec![WireElement::plain_text(text.content.as_str())],
            Element::Face(face) => vec![self.pack_face(face)],
            Element::At(at) => self.pack_at(at),
            Element::Service(service) => self.pack_service(service)?,
            Element::LightApp(app) => vec![self.pack_light_app(app)?],
            Element::ShortVideo(video) => pack_short_video(video),
        };
        trace!(kind = element.kind(), count = packed.len(), "Packed element");
        Ok(packed)
    }

    /// Encodes a whole element list, concatenating each element's output in order
    pub fn pack_all(&self, elements: &[Element]) -> Result<Vec<WireElement>> {
        let mut out = Vec::with_capacity(elements.len());
        for element in elements {
            out.extend(self.pack(element)?);
        }
        Ok(out)
    }

    fn pack_face(&self, face: &FaceElement) -> WireElement {
        if face.index >= FACE_SERVTYPE33_THRESHOLD {
            let label = format!("/{}", face.name).into_bytes();
            let info = pb::MsgElemInfoServtype33 {
                index: Some(face.index as u32),
                text: Some(label.clone()),
                compat: Some(label),
                buf: None,
            };
            return WireElement::CommonElem(pb::CommonElem {
                service_type: Some(SERVTYPE_FACE),
                pb_elem: Some(info.encode_to_vec()),
                business_type: Some(1),
            });
        }

        let old = (FACE_OLD_BASE.wrapping_add(face.index) as i16).to_be_bytes();
        WireElement::Face(pb::Face {
            index: Some(face.index),
            old: Some(old.to_vec()),
            buf: Some(FACE_LEGACY_BUF.to_vec()),
        })
    }

    fn pack_at(&self, at: &AtElement) -> Vec<WireElement> {
        if at.guild {
            // Guild mentions carry no trailing " " element, unlike group mentions
            let reserve = pb::TextResvAttr {
                at_type: Some(AT_TYPE_GUILD_MEMBER),
                at_member_tinyid: Some(at.target as u64),
                ..Default::default()
            };
            return vec![WireElement::Text(pb::Text {
                str: Some(at.display.clone()),
                pb_reserve: Some(reserve.encode_to_vec()),
                ..Default::default()
            })];
        }

        let attr6 = self.pool.build(|w| {
            w.write_u16(1);
            w.write_u16(0);
            w.write_u16(at.display.chars().count() as u16);
            w.write_byte(u8::from(at.is_all()));
            w.write_u32(at.target as u32);
            w.write_u16(0);
        });
        vec![
            WireElement::Text(pb::Text {
                str: Some(at.display.clone()),
                attr6_buf: Some(attr6),
                ..Default::default()
            }),
            WireElement::plain_text(" "),
        ]
    }

    fn pack_service(&self, service: &ServiceElement) -> Result<Vec<WireElement>> {
        let mut out = Vec::with_capacity(2);
        if service.id == SERVICE_ID_WITH_RES_TEXT {
            out.push(WireElement::plain_text(service.res_id.as_str()));
        }
        out.push(WireElement::RichMsg(pb::RichMsg {
            template1: Some(self.compressed_payload(&service.content)?),
            service_id: Some(service.id),
            msg_res_id: None,
        }));
        Ok(out)
    }

    fn pack_light_app(&self, app: &LightAppElement) -> Result<WireElement> {
        Ok(WireElement::LightApp(pb::LightAppElem {
            data: Some(self.compressed_payload(&app.content)?),
            msg_resid: None,
        }))
    }

    fn compressed_payload(&self, content: &str) -> Result<Vec<u8>> {
        let compressed = self.compressor.compress(content.as_bytes())?;
        let mut payload = Vec::with_capacity(compressed.len() + 1);
        payload.push(COMPRESSED_PAYLOAD_FLAG);
        payload.extend_from_slice(&compressed);
        Ok(payload)
    }
}

impl Default for ElementEncoder {
    fn default() -> Self {
        Self::new(BufferPool::default(), ZlibCompressor::default())
    }
}

impl std::fmt::Debug for ElementEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElementEncoder")
            .field("pool", &self.pool)
            .finish_non_exhaustive()
    }
}

fn pack_short_video(video: &ShortVideoElement) -> Vec<WireElement> {
    let file_name = format!("{}.mp4", hex::encode(&video.md5));
    vec![
        WireElement::plain_text(SHORT_VIDEO_FALLBACK),
        WireElement::VideoFile(pb::VideoFile {
            file_uuid: Some(video.uuid.clone()),
            file_md5: Some(video.md5.clone()),
            file_name: Some(file_name.into_bytes()),
            file_format: Some(VIDEO_FILE_FORMAT),
            file_time: Some(VIDEO_FILE_TIME),
            file_size: Some(video.size),
            thumb_width: Some(VIDEO_WIDTH),
            thumb_height: Some(VIDEO_HEIGHT),
            thumb_file_md5: Some(video.thumb_md5.clone()),
            source: None,
            thumb_file_size: Some(video.thumb_size),
            busi_type: Some(0),
            from_chat_type: Some(CHAT_TYPE_UNSPECIFIED),
            to_chat_type: Some(CHAT_TYPE_UNSPECIFIED),
            bool_support_progressive: Some(true),
            file_width: Some(VIDEO_WIDTH),
            file_height: Some(VIDEO_HEIGHT),
        }),
    ]
}
