//! Domain-side message elements.
//!
//! Values built by message composition and handed once to the
//! [`ElementEncoder`](crate::message::ElementEncoder).

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextElement {
    pub content: String,
}

/// Built-in sticker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceElement {
    pub index: i32,
    pub name: String,
}

/// Mention of a member; `target == 0` mentions everyone
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtElement {
    pub display: String,
    pub target: i64,
    pub guild: bool,
}

impl AtElement {
    /// Target value meaning "everyone"
    pub const ALL: i64 = 0;

    pub fn is_all(&self) -> bool {
        self.target == Self::ALL
    }
}

/// Rich service card (XML or JSON template)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceElement {
    pub id: i32,
    pub content: String,
    pub res_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightAppElement {
    pub content: String,
}

/// Reference to an already uploaded short video
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortVideoElement {
    pub uuid: Vec<u8>,
    pub md5: Vec<u8>,
    pub size: i32,
    pub thumb_md5: Vec<u8>,
    pub thumb_size: i32,
}

/// Every element kind the encoder knows how to pack
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Text(TextElement),
    Face(FaceElement),
    At(AtElement),
    Service(ServiceElement),
    LightApp(LightAppElement),
    ShortVideo(ShortVideoElement),
}

impl Element {
    pub fn text(content: impl Into<String>) -> Self {
        Element::Text(TextElement {
            content: content.into(),
        })
    }

    pub fn face(index: i32, name: impl Into<String>) -> Self {
        Element::Face(FaceElement {
            index,
            name: name.into(),
        })
    }

    /// Group mention of a single member
    pub fn at(target: i64, display: impl Into<String>) -> Self {
        Element::At(AtElement {
            display: display.into(),
            target,
            guild: false,
        })
    }

    /// Group mention of everyone
    pub fn at_all(display: impl Into<String>) -> Self {
        Self::at(AtElement::ALL, display)
    }

    /// Guild mention addressed by tiny id
    pub fn guild_at(tiny_id: i64, display: impl Into<String>) -> Self {
        Element::At(AtElement {
            display: display.into(),
            target: tiny_id,
            guild: true,
        })
    }

    pub fn service(id: i32, content: impl Into<String>, res_id: impl Into<String>) -> Self {
        Element::Service(ServiceElement {
            id,
            content: content.into(),
            res_id: res_id.into(),
        })
    }

    pub fn light_app(content: impl Into<String>) -> Self {
        Element::LightApp(LightAppElement {
            content: content.into(),
        })
    }

    pub fn short_video(
        uuid: impl Into<Vec<u8>>,
        md5: impl Into<Vec<u8>>,
        size: i32,
        thumb_md5: impl Into<Vec<u8>>,
        thumb_size: i32,
    ) -> Self {
        Element::ShortVideo(ShortVideoElement {
            uuid: uuid.into(),
            md5: md5.into(),
            size,
            thumb_md5: thumb_md5.into(),
            thumb_size,
        })
    }

    /// Short name of the variant, used in log events
    pub fn kind(&self) -> &'static str {
        match self {
            Element::Text(_) => "text",
            Element::Face(_) => "face",
            Element::At(_) => "at",
            Element::Service(_) => "service",
            Element::LightApp(_) => "light_app",
            Element::ShortVideo(_) => "short_video",
        }
    }
}

impl From<TextElement> for Element {
    fn from(e: TextElement) -> Self {
        Element::Text(e)
    }
}

impl From<FaceElement> for Element {
    fn from(e: FaceElement) -> Self {
        Element::Face(e)
    }
}

impl From<AtElement> for Element {
    fn from(e: AtElement) -> Self {
        Element::At(e)
    }
}

impl From<ServiceElement> for Element {
    fn from(e: ServiceElement) -> Self {
        Element::Service(e)
    }
}

impl From<LightAppElement> for Element {
    fn from(e: LightAppElement) -> Self {
        Element::LightApp(e)
    }
}

impl From<ShortVideoElement> for Element {
    fn from(e: ShortVideoElement) -> Self {
        Element::ShortVideo(e)
    }
}
