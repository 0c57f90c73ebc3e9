//! Transformations from finished trace spans to OTLP wire messages.
//!
//! This crate sits between a tracing runtime and an OTLP transport: the
//! runtime hands over finished [`model::SpanData`] records, and this crate
//! converts each into a wire [`proto::trace::Span`] and groups a batch into
//! the protocol's two-level structure (one [`proto::trace::ResourceSpans`]
//! per resource, one [`proto::trace::InstrumentationLibrarySpans`] per
//! library under it). Transport concerns — sockets, retries, flush policy —
//! belong to the sink consuming the grouped output, not here.
//!
//! Malformed input never aborts a batch: spans without trace-context
//! identifiers are dropped, null attribute values are omitted, and any
//! attribute value outside the wire type set is carried as text.
//!
//! ```
//! use otlp_span_transform::group_spans_by_resource_and_library;
//!
//! # fn collect_finished_spans() -> Vec<otlp_span_transform::model::SpanData> { Vec::new() }
//! let batch = collect_finished_spans();
//! let resource_spans = group_spans_by_resource_and_library(batch);
//! // hand resource_spans to the transport sink
//! ```
//!
//! ## Feature flags
//!
//! - `with-serde` (default): `serde::Serialize` on the wire messages, for
//!   JSON snapshots of grouped output.
//! - `internal-logs` (default): `tracing` debug events when spans are
//!   dropped during grouping.
pub mod model;
pub mod proto;
pub mod transform;

pub use transform::trace::{group_spans_by_resource_and_library, to_otlp_span, SpanConversionError};
