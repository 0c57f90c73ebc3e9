//! Messages from `opentelemetry.proto.common.v1`.

/// AnyValue is used to represent any type of attribute value. AnyValue may
/// contain a primitive value such as a string or integer.
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize))]
pub struct AnyValue {
    /// The value is one of the listed fields. It is valid for all values to
    /// be unspecified in which case this AnyValue is considered to be
    /// "empty".
    #[prost(oneof = "any_value::Value", tags = "1, 2, 3, 4")]
    #[cfg_attr(feature = "with-serde", serde(flatten))]
    pub value: Option<any_value::Value>,
}

/// Nested message and enum types in `AnyValue`.
pub mod any_value {
    /// The populated variant of an [`AnyValue`](super::AnyValue).
    ///
    /// The full schema also defines array, key/value-list and bytes
    /// variants; this layer never produces them.
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    #[cfg_attr(feature = "with-serde", derive(serde::Serialize))]
    #[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase"))]
    pub enum Value {
        #[prost(string, tag = "1")]
        StringValue(String),
        #[prost(bool, tag = "2")]
        BoolValue(bool),
        #[prost(int64, tag = "3")]
        IntValue(i64),
        #[prost(double, tag = "4")]
        DoubleValue(f64),
    }
}

/// KeyValue is a key-value pair that is used to store Span attributes, Link
/// attributes, etc.
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase"))]
pub struct KeyValue {
    #[prost(string, tag = "1")]
    pub key: String,
    #[prost(message, optional, tag = "2")]
    pub value: Option<AnyValue>,
}

/// InstrumentationLibrary is a message representing the instrumentation
/// library information such as the fully qualified name and version.
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase"))]
pub struct InstrumentationLibrary {
    /// An empty instrumentation library name means the name is unknown.
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub version: String,
}
