use std::borrow::Cow;
use std::time::{Duration, SystemTime};

use crate::model::attribute::Attribute;
use crate::model::id::{SpanId, SpanIdentity, TraceId};
use crate::model::resource::{InstrumentationLibrary, Resource};

/// The relationship of a span to the operation it records.
///
/// `Unset` exists only on the recording side; the wire enum has no
/// counterpart for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum SpanKind {
    /// No kind was recorded.
    Unset = -1,
    /// An operation internal to an application. Default value.
    Internal = 0,
    /// Server-side handling of a remote request.
    Server = 1,
    /// A request to some remote service.
    Client = 2,
    /// A producer sending a message to a broker.
    Producer = 3,
    /// A consumer receiving a message from a broker.
    Consumer = 4,
}

/// A timestamped annotation recorded on a span.
#[derive(Clone, Debug, PartialEq)]
pub struct Event {
    /// Event name.
    pub name: Cow<'static, str>,
    /// Absolute wall-clock time the event occurred.
    pub timestamp: SystemTime,
    /// Event attributes.
    pub attributes: Vec<Attribute>,
}

impl Event {
    /// Create a new event.
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        timestamp: SystemTime,
        attributes: Vec<Attribute>,
    ) -> Self {
        Event {
            name: name.into(),
            timestamp,
            attributes,
        }
    }
}

/// A pointer from a span to another span, in the same trace or a different
/// one.
#[derive(Clone, Debug, PartialEq)]
pub struct Link {
    /// Trace id of the linked span.
    pub trace_id: TraceId,
    /// Span id of the linked span.
    pub span_id: SpanId,
    /// Link attributes.
    pub attributes: Vec<Attribute>,
}

impl Link {
    /// Create a new link.
    pub fn new(trace_id: TraceId, span_id: SpanId, attributes: Vec<Attribute>) -> Self {
        Link {
            trace_id,
            span_id,
            attributes,
        }
    }
}

/// A finished span as handed over by the tracing runtime, the standard input
/// of the transformations in this crate.
#[derive(Clone, Debug, PartialEq)]
pub struct SpanData {
    /// Span identifiers in the scheme the runtime recorded them under.
    pub identity: SpanIdentity,
    /// Id of the parent span, `SpanId::INVALID` for a root span.
    pub parent_span_id: SpanId,
    /// Span display name.
    pub name: Cow<'static, str>,
    /// Span kind.
    pub kind: SpanKind,
    /// Absolute wall-clock start time.
    pub start_time: SystemTime,
    /// Time the operation took, non-negative by construction.
    pub duration: Duration,
    /// Span attributes, order preserved, duplicate keys allowed.
    pub attributes: Vec<Attribute>,
    /// Events recorded on the span.
    pub events: Vec<Event>,
    /// Links to other spans.
    pub links: Vec<Link>,
    /// Resource that produced the span, if known.
    pub resource: Option<Resource>,
    /// Library that created the span.
    pub instrumentation_lib: InstrumentationLibrary,
}
