//! Transport-level element values.

use crate::message::pb;

/// One element of the outgoing element list
///
/// Each variant maps onto exactly one field of [`pb::Elem`].
#[derive(Debug, Clone, PartialEq)]
pub enum WireElement {
    Text(pb::Text),
    Face(pb::Face),
    CommonElem(pb::CommonElem),
    RichMsg(pb::RichMsg),
    LightApp(pb::LightAppElem),
    VideoFile(pb::VideoFile),
}

impl WireElement {
    /// Plain text element carrying `s` and nothing else
    pub fn plain_text(s: impl Into<String>) -> Self {
        WireElement::Text(pb::Text {
            str: Some(s.into()),
            ..Default::default()
        })
    }

    pub fn as_text(&self) -> Option<&pb::Text> {
        match self {
            WireElement::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn into_elem(self) -> pb::Elem {
        self.into()
    }
}

impl From<WireElement> for pb::Elem {
    fn from(element: WireElement) -> Self {
        let mut elem = pb::Elem::default();
        match element {
            WireElement::Text(text) => elem.text = Some(text),
            WireElement::Face(face) => elem.face = Some(face),
            WireElement::CommonElem(common) => elem.common_elem = Some(common),
            WireElement::RichMsg(rich) => elem.rich_msg = Some(rich),
            WireElement::LightApp(app) => elem.light_app = Some(app),
            WireElement::VideoFile(video) => elem.video_file = Some(video),
        }
        elem
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;

    #[test]
    fn test_into_elem_sets_single_field() {
        let elem = WireElement::plain_text(" ").into_elem();
        assert!(elem.text.is_some());
        assert!(elem.face.is_none());
        assert_eq!(elem.encode_to_vec(), [0x0A, 0x03, 0x0A, 0x01, b' ']);
    }

    #[test]
    fn test_common_elem_uses_tag_53() {
        let elem = WireElement::CommonElem(pb::CommonElem {
            service_type: Some(33),
            ..Default::default()
        })
        .into_elem();
        // field 53, wire type 2 -> varint 0xAA 0x03
        assert_eq!(elem.encode_to_vec(), [0xAA, 0x03, 0x02, 0x08, 0x21]);
    }
}
