//! Transformations from the recorded [`model`](crate::model) shapes into the
//! wire messages in [`proto`](crate::proto).
//!
//! The pipeline is purely computational: no I/O, no shared state, safe to
//! run concurrently on disjoint batches.

pub mod common;
pub mod trace;
