//! Messages from `opentelemetry.proto.resource.v1`.

use crate::proto::common::KeyValue;

/// Resource information.
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase"))]
pub struct Resource {
    /// Set of labels that describe the resource.
    #[prost(message, repeated, tag = "1")]
    pub attributes: Vec<KeyValue>,
    /// dropped_attributes_count is the number of dropped attributes. If the
    /// value is 0, then no attributes were dropped.
    #[prost(uint32, tag = "2")]
    pub dropped_attributes_count: u32,
}
