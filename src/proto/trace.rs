//! Messages from `opentelemetry.proto.trace.v1`.

use crate::proto::common::{InstrumentationLibrary, KeyValue};

/// TracesData represents a standalone collection of resource-scoped spans,
/// for embedding OTLP trace data outside the collector protocol.
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase"))]
pub struct TracesData {
    /// An array of ResourceSpans.
    #[prost(message, repeated, tag = "1")]
    pub resource_spans: Vec<ResourceSpans>,
}

/// A collection of InstrumentationLibrarySpans from a Resource.
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase"))]
pub struct ResourceSpans {
    /// The resource for the spans in this message.
    /// If this field is not set then no resource info is known.
    #[prost(message, optional, tag = "1")]
    pub resource: Option<super::resource::Resource>,
    /// A list of InstrumentationLibrarySpans that originate from a resource.
    #[prost(message, repeated, tag = "2")]
    pub instrumentation_library_spans: Vec<InstrumentationLibrarySpans>,
}

/// A collection of Spans produced by an InstrumentationLibrary.
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase"))]
pub struct InstrumentationLibrarySpans {
    /// The instrumentation library information for the spans in this
    /// message. Semantically when InstrumentationLibrary isn't set, it is
    /// equivalent with an empty instrumentation library name (unknown).
    #[prost(message, optional, tag = "1")]
    pub instrumentation_library: Option<InstrumentationLibrary>,
    /// A list of Spans that originate from an instrumentation library.
    #[prost(message, repeated, tag = "2")]
    pub spans: Vec<Span>,
}

/// Span represents a single operation within a trace.
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase"))]
pub struct Span {
    /// A unique identifier for a trace. All spans from the same trace share
    /// the same `trace_id`. The ID is a 16-byte array.
    ///
    /// This field is required.
    #[prost(bytes = "vec", tag = "1")]
    #[cfg_attr(
        feature = "with-serde",
        serde(serialize_with = "crate::proto::serializers::serialize_id_hex")
    )]
    pub trace_id: Vec<u8>,
    /// A unique identifier for a span within a trace, assigned when the span
    /// is created. The ID is an 8-byte array.
    ///
    /// This field is required.
    #[prost(bytes = "vec", tag = "2")]
    #[cfg_attr(
        feature = "with-serde",
        serde(serialize_with = "crate::proto::serializers::serialize_id_hex")
    )]
    pub span_id: Vec<u8>,
    /// The `span_id` of this span's parent span. If this is a root span,
    /// then this field must be empty. The ID is an 8-byte array.
    #[prost(bytes = "vec", tag = "4")]
    #[cfg_attr(
        feature = "with-serde",
        serde(serialize_with = "crate::proto::serializers::serialize_id_hex")
    )]
    pub parent_span_id: Vec<u8>,
    /// A description of the span's operation.
    #[prost(string, tag = "5")]
    pub name: String,
    /// Distinguishes between spans generated in a particular context.
    #[prost(enumeration = "span::SpanKind", tag = "6")]
    pub kind: i32,
    /// Start time of the span, UNIX Epoch time in nanoseconds.
    #[prost(fixed64, tag = "7")]
    pub start_time_unix_nano: u64,
    /// End time of the span, UNIX Epoch time in nanoseconds. It is expected
    /// that end_time >= start_time.
    #[prost(fixed64, tag = "8")]
    pub end_time_unix_nano: u64,
    /// attributes is a collection of key/value pairs.
    #[prost(message, repeated, tag = "9")]
    pub attributes: Vec<KeyValue>,
    /// dropped_attributes_count is the number of attributes that were
    /// discarded. If this value is 0, then no attributes were dropped.
    #[prost(uint32, tag = "10")]
    pub dropped_attributes_count: u32,
    /// events is a collection of Event items.
    #[prost(message, repeated, tag = "11")]
    pub events: Vec<span::Event>,
    /// dropped_events_count is the number of dropped events. If the value is
    /// 0, then no events were dropped.
    #[prost(uint32, tag = "12")]
    pub dropped_events_count: u32,
    /// links is a collection of references from this span to a span in the
    /// same or different trace.
    #[prost(message, repeated, tag = "13")]
    pub links: Vec<span::Link>,
    /// dropped_links_count is the number of dropped links. If this value is
    /// 0, then no links were dropped.
    #[prost(uint32, tag = "14")]
    pub dropped_links_count: u32,
}

/// Nested message and enum types in `Span`.
pub mod span {
    use crate::proto::common::KeyValue;

    /// Event is a time-stamped annotation of the span, consisting of
    /// user-supplied text description and key-value pairs.
    #[derive(Clone, PartialEq, ::prost::Message)]
    #[cfg_attr(feature = "with-serde", derive(serde::Serialize))]
    #[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase"))]
    pub struct Event {
        /// time_unix_nano is the time the event occurred.
        #[prost(fixed64, tag = "1")]
        pub time_unix_nano: u64,
        /// name of the event.
        #[prost(string, tag = "2")]
        pub name: String,
        /// attributes is a collection of attribute key/value pairs on the
        /// event.
        #[prost(message, repeated, tag = "3")]
        pub attributes: Vec<KeyValue>,
        /// dropped_attributes_count is the number of dropped attributes.
        #[prost(uint32, tag = "4")]
        pub dropped_attributes_count: u32,
    }

    /// A pointer from the current span to another span in the same trace or
    /// in a different trace.
    #[derive(Clone, PartialEq, ::prost::Message)]
    #[cfg_attr(feature = "with-serde", derive(serde::Serialize))]
    #[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase"))]
    pub struct Link {
        /// A unique identifier of a trace that this linked span is part of.
        /// The ID is a 16-byte array.
        #[prost(bytes = "vec", tag = "1")]
        #[cfg_attr(
            feature = "with-serde",
            serde(serialize_with = "crate::proto::serializers::serialize_id_hex")
        )]
        pub trace_id: Vec<u8>,
        /// A unique identifier for the linked span. The ID is an 8-byte
        /// array.
        #[prost(bytes = "vec", tag = "2")]
        #[cfg_attr(
            feature = "with-serde",
            serde(serialize_with = "crate::proto::serializers::serialize_id_hex")
        )]
        pub span_id: Vec<u8>,
        /// attributes is a collection of attribute key/value pairs on the
        /// link.
        #[prost(message, repeated, tag = "4")]
        pub attributes: Vec<KeyValue>,
        /// dropped_attributes_count is the number of dropped attributes.
        #[prost(uint32, tag = "5")]
        pub dropped_attributes_count: u32,
    }

    /// SpanKind is the type of span.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum SpanKind {
        /// Unspecified. Implementations MAY assume SpanKind to be INTERNAL
        /// when receiving UNSPECIFIED.
        Unspecified = 0,
        /// Indicates that the span represents an internal operation within
        /// an application.
        Internal = 1,
        /// Indicates that the span covers server-side handling of a remote
        /// request.
        Server = 2,
        /// Indicates that the span describes a request to some remote
        /// service.
        Client = 3,
        /// Indicates that the span describes a producer sending a message to
        /// a broker.
        Producer = 4,
        /// Indicates that the span describes consumer receiving a message
        /// from a broker.
        Consumer = 5,
    }
}
