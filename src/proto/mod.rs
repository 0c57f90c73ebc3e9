//! Hand-maintained prost types for the OTLP trace wire schema.
//!
//! This is the subset of `opentelemetry.proto.{common,resource,trace}.v1`
//! that the transformations in this crate can actually produce. Field
//! numbers match the published schema, so messages encode byte-compatibly
//! with receivers expecting the full definitions; fields this layer never
//! emits (for example `Span.trace_state`, tag 3) are left out and their
//! tags skipped.
//!
//! With the `with-serde` feature, messages additionally serialize to JSON
//! with camelCase field names and identifier bytes rendered as lowercase
//! hex. This view is meant for debugging sinks and test snapshots, not for
//! interchange: 64-bit timestamps serialize as JSON numbers.

pub mod common;
pub mod resource;
pub mod trace;

#[cfg(feature = "with-serde")]
pub(crate) mod serializers;
