//! Protobuf-style element structures.
//!
//! Only the fields this crate populates are declared; tags match the remote schema so
//! any downstream serializer produces compatible bytes.

/// One entry of a message's element list
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Elem {
    #[prost(message, optional, tag = "1")]
    pub text: Option<Text>,
    #[prost(message, optional, tag = "2")]
    pub face: Option<Face>,
    #[prost(message, optional, tag = "12")]
    pub rich_msg: Option<RichMsg>,
    #[prost(message, optional, tag = "19")]
    pub video_file: Option<VideoFile>,
    #[prost(message, optional, tag = "51")]
    pub light_app: Option<LightAppElem>,
    #[prost(message, optional, tag = "53")]
    pub common_elem: Option<CommonElem>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Text {
    #[prost(string, optional, tag = "1")]
    pub str: Option<String>,
    #[prost(string, optional, tag = "2")]
    pub link: Option<String>,
    #[prost(bytes = "vec", optional, tag = "3")]
    pub attr6_buf: Option<Vec<u8>>,
    #[prost(bytes = "vec", optional, tag = "4")]
    pub attr7_buf: Option<Vec<u8>>,
    #[prost(bytes = "vec", optional, tag = "11")]
    pub buf: Option<Vec<u8>>,
    #[prost(bytes = "vec", optional, tag = "12")]
    pub pb_reserve: Option<Vec<u8>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Face {
    #[prost(int32, optional, tag = "1")]
    pub index: Option<i32>,
    #[prost(bytes = "vec", optional, tag = "2")]
    pub old: Option<Vec<u8>>,
    #[prost(bytes = "vec", optional, tag = "11")]
    pub buf: Option<Vec<u8>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CommonElem {
    #[prost(int32, optional, tag = "1")]
    pub service_type: Option<i32>,
    #[prost(bytes = "vec", optional, tag = "2")]
    pub pb_elem: Option<Vec<u8>>,
    #[prost(int32, optional, tag = "3")]
    pub business_type: Option<i32>,
}

/// Payload of a service-type 33 common element (new-style faces)
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MsgElemInfoServtype33 {
    #[prost(uint32, optional, tag = "1")]
    pub index: Option<u32>,
    #[prost(bytes = "vec", optional, tag = "2")]
    pub text: Option<Vec<u8>>,
    #[prost(bytes = "vec", optional, tag = "3")]
    pub compat: Option<Vec<u8>>,
    #[prost(bytes = "vec", optional, tag = "4")]
    pub buf: Option<Vec<u8>>,
}

/// Reserved text attribute carried by guild mentions
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TextResvAttr {
    #[prost(bytes = "vec", optional, tag = "1")]
    pub wording: Option<Vec<u8>>,
    #[prost(uint32, optional, tag = "2")]
    pub text_analysis_result: Option<u32>,
    #[prost(uint32, optional, tag = "3")]
    pub at_type: Option<u32>,
    #[prost(uint64, optional, tag = "4")]
    pub at_member_uin: Option<u64>,
    #[prost(uint64, optional, tag = "5")]
    pub at_member_tinyid: Option<u64>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RichMsg {
    #[prost(bytes = "vec", optional, tag = "1")]
    pub template1: Option<Vec<u8>>,
    #[prost(int32, optional, tag = "2")]
    pub service_id: Option<i32>,
    #[prost(bytes = "vec", optional, tag = "3")]
    pub msg_res_id: Option<Vec<u8>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LightAppElem {
    #[prost(bytes = "vec", optional, tag = "1")]
    pub data: Option<Vec<u8>>,
    #[prost(bytes = "vec", optional, tag = "2")]
    pub msg_resid: Option<Vec<u8>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct VideoFile {
    #[prost(bytes = "vec", optional, tag = "1")]
    pub file_uuid: Option<Vec<u8>>,
    #[prost(bytes = "vec", optional, tag = "2")]
    pub file_md5: Option<Vec<u8>>,
    #[prost(bytes = "vec", optional, tag = "3")]
    pub file_name: Option<Vec<u8>>,
    #[prost(int32, optional, tag = "4")]
    pub file_format: Option<i32>,
    #[prost(int32, optional, tag = "5")]
    pub file_time: Option<i32>,
    #[prost(int32, optional, tag = "6")]
    pub file_size: Option<i32>,
    #[prost(int32, optional, tag = "7")]
    pub thumb_width: Option<i32>,
    #[prost(int32, optional, tag = "8")]
    pub thumb_height: Option<i32>,
    #[prost(bytes = "vec", optional, tag = "9")]
    pub thumb_file_md5: Option<Vec<u8>>,
    #[prost(bytes = "vec", optional, tag = "10")]
    pub source: Option<Vec<u8>>,
    #[prost(int32, optional, tag = "11")]
    pub thumb_file_size: Option<i32>,
    #[prost(int32, optional, tag = "12")]
    pub busi_type: Option<i32>,
    #[prost(int32, optional, tag = "13")]
    pub from_chat_type: Option<i32>,
    #[prost(int32, optional, tag = "14")]
    pub to_chat_type: Option<i32>,
    #[prost(bool, optional, tag = "15")]
    pub bool_support_progressive: Option<bool>,
    #[prost(int32, optional, tag = "16")]
    pub file_width: Option<i32>,
    #[prost(int32, optional, tag = "17")]
    pub file_height: Option<i32>,
}
