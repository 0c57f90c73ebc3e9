//! Input-side data model: the shapes a tracing runtime hands to this crate.
//!
//! Everything here is transient and value-like; records are created by the
//! runtime, consumed by one transformation call and dropped.

mod attribute;
mod id;
mod resource;
mod span;

pub use attribute::{Attribute, AttributeValue};
pub use id::{SpanId, SpanIdentity, TraceId};
pub use resource::{InstrumentationLibrary, Resource};
pub use span::{Event, Link, SpanData, SpanKind};
