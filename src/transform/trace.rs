use std::borrow::Cow;

use thiserror::Error;

use crate::model::{
    Event, InstrumentationLibrary, Link, Resource, SpanData, SpanId, SpanIdentity, SpanKind,
};
use crate::proto::common;
use crate::proto::resource;
use crate::proto::trace::{span, InstrumentationLibrarySpans, ResourceSpans, Span};
use crate::transform::common::{to_nanos, Attributes};

/// Why a finished span could not be represented in the wire schema.
///
/// Conversion failures never cross the batch boundary; the grouping entry
/// point skips the offending span and keeps going.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpanConversionError {
    /// The span was not recorded under the 16-byte/8-byte trace-context
    /// identifier scheme.
    #[error("span identifiers are not in the w3c trace-context format")]
    UnsupportedIdFormat,
}

impl From<SpanKind> for span::SpanKind {
    fn from(kind: SpanKind) -> Self {
        // The wire enum reserves 0 for Unspecified, so every recorded kind
        // sits one code above its source value. Kept as an explicit table:
        // arithmetic would silently misalign if either enum gained members.
        match kind {
            SpanKind::Unset => span::SpanKind::Unspecified,
            SpanKind::Internal => span::SpanKind::Internal,
            SpanKind::Server => span::SpanKind::Server,
            SpanKind::Client => span::SpanKind::Client,
            SpanKind::Producer => span::SpanKind::Producer,
            SpanKind::Consumer => span::SpanKind::Consumer,
        }
    }
}

impl From<InstrumentationLibrary> for common::InstrumentationLibrary {
    fn from(library: InstrumentationLibrary) -> Self {
        common::InstrumentationLibrary {
            name: library.name.into_owned(),
            version: library.version.unwrap_or(Cow::Borrowed("")).into_owned(),
        }
    }
}

impl From<Event> for span::Event {
    fn from(event: Event) -> Self {
        span::Event {
            time_unix_nano: to_nanos(event.timestamp),
            name: event.name.into_owned(),
            attributes: Attributes::from(event.attributes).0,
            dropped_attributes_count: 0,
        }
    }
}

impl From<Link> for span::Link {
    fn from(link: Link) -> Self {
        span::Link {
            trace_id: link.trace_id.to_bytes().to_vec(),
            span_id: link.span_id.to_bytes().to_vec(),
            attributes: Attributes::from(link.attributes).0,
            dropped_attributes_count: 0,
        }
    }
}

/// Convert one finished span into a wire span message.
///
/// The only rejection is [`SpanConversionError::UnsupportedIdFormat`];
/// everything else degrades in place (null attributes are omitted,
/// uncoercible values fall back to strings).
pub fn to_otlp_span(span: SpanData) -> Result<Span, SpanConversionError> {
    let (trace_id, span_id) = match span.identity {
        SpanIdentity::TraceContext { trace_id, span_id } => (trace_id, span_id),
        SpanIdentity::Opaque(_) => return Err(SpanConversionError::UnsupportedIdFormat),
    };

    let span_kind: span::SpanKind = span.kind.into();
    let start_time_unix_nano = to_nanos(span.start_time);

    Ok(Span {
        trace_id: trace_id.to_bytes().to_vec(),
        span_id: span_id.to_bytes().to_vec(),
        parent_span_id: if span.parent_span_id != SpanId::INVALID {
            span.parent_span_id.to_bytes().to_vec()
        } else {
            // Root spans carry an empty byte string, not eight zero bytes.
            Vec::new()
        },
        name: span.name.into_owned(),
        kind: span_kind as i32,
        start_time_unix_nano,
        // Integer nanosecond arithmetic throughout; float seconds would
        // drift for long-lived or sub-microsecond spans.
        end_time_unix_nano: start_time_unix_nano + span.duration.as_nanos() as u64,
        attributes: Attributes::from(span.attributes).0,
        events: span.events.into_iter().map(Into::into).collect(),
        links: span.links.into_iter().map(Into::into).collect(),
        // Nothing upstream applies count ceilings, so drop counts are
        // always zero.
        dropped_attributes_count: 0,
        dropped_events_count: 0,
        dropped_links_count: 0,
    })
}

/// Group a batch of finished spans into the two-level wire structure:
/// one `ResourceSpans` per distinct resource, containing one
/// `InstrumentationLibrarySpans` per distinct library seen under it.
///
/// Groups come out in first-encounter order at both levels, and spans keep
/// their batch order within each group. Spans whose identifiers cannot be
/// converted are skipped and create no group. An empty batch yields an
/// empty list.
pub fn group_spans_by_resource_and_library(batch: Vec<SpanData>) -> Vec<ResourceSpans> {
    let mut groups: Vec<(Resource, Vec<(InstrumentationLibrary, Vec<Span>)>)> = Vec::new();

    for mut span_data in batch {
        let resource = span_data.resource.take().unwrap_or_else(Resource::empty);
        let library = std::mem::take(&mut span_data.instrumentation_lib);

        let otlp_span = match to_otlp_span(span_data) {
            Ok(otlp_span) => otlp_span,
            Err(SpanConversionError::UnsupportedIdFormat) => {
                #[cfg(feature = "internal-logs")]
                tracing::debug!(
                    library = %library.name,
                    "dropping span with unsupported id format"
                );
                continue;
            }
        };

        // Insertion-ordered lookup; batches see a handful of distinct
        // resources and libraries, so a linear key scan beats hashing and
        // keeps first-encounter order for free.
        let resource_idx = match groups.iter().position(|(key, _)| *key == resource) {
            Some(idx) => idx,
            None => {
                groups.push((resource, Vec::new()));
                groups.len() - 1
            }
        };
        let libraries = &mut groups[resource_idx].1;
        let library_idx = match libraries.iter().position(|(key, _)| *key == library) {
            Some(idx) => idx,
            None => {
                libraries.push((library, Vec::new()));
                libraries.len() - 1
            }
        };
        libraries[library_idx].1.push(otlp_span);
    }

    groups
        .into_iter()
        .map(|(resource, libraries)| ResourceSpans {
            resource: Some(to_otlp_resource(&resource)),
            instrumentation_library_spans: libraries
                .into_iter()
                .map(|(library, spans)| InstrumentationLibrarySpans {
                    instrumentation_library: Some(library.into()),
                    spans,
                })
                .collect(),
        })
        .collect()
}

fn to_otlp_resource(resource: &Resource) -> resource::Resource {
    resource::Resource {
        attributes: Attributes::from(resource.attributes()).0,
        dropped_attributes_count: 0,
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, UNIX_EPOCH};

    use super::*;
    use crate::model::{Attribute, AttributeValue, TraceId};

    const TRACE_ID: u128 = 0x4e44_1824_ec2b_6a44_ffdc_9bb9_a645_3df3;
    const SPAN_ID: u64 = 0xefdc_9cd9_a184_9df3;

    fn span_data(name: &'static str) -> SpanData {
        SpanData {
            identity: SpanIdentity::TraceContext {
                trace_id: TraceId::from(TRACE_ID),
                span_id: SpanId::from(SPAN_ID),
            },
            parent_span_id: SpanId::INVALID,
            name: name.into(),
            kind: SpanKind::Internal,
            start_time: UNIX_EPOCH + Duration::from_secs(1_700_000_000),
            duration: Duration::from_millis(150),
            attributes: Vec::new(),
            events: Vec::new(),
            links: Vec::new(),
            resource: None,
            instrumentation_lib: InstrumentationLibrary::default(),
        }
    }

    #[test]
    fn ids_round_trip_as_raw_bytes() {
        let otlp_span = to_otlp_span(span_data("main")).unwrap();
        assert_eq!(otlp_span.trace_id, TraceId::from(TRACE_ID).to_bytes());
        assert_eq!(otlp_span.span_id, SpanId::from(SPAN_ID).to_bytes());
        assert_eq!(otlp_span.name, "main");
    }

    #[test]
    fn end_time_is_exact_integer_nanos() {
        let mut data = span_data("timed");
        data.start_time = UNIX_EPOCH + Duration::new(1_700_000_000, 123);
        data.duration = Duration::from_nanos(640);

        let otlp_span = to_otlp_span(data).unwrap();
        assert_eq!(otlp_span.start_time_unix_nano, 1_700_000_000_000_000_123);
        assert_eq!(otlp_span.end_time_unix_nano, 1_700_000_000_000_000_763);
    }

    #[test]
    fn root_span_parent_is_empty_bytes() {
        let root = to_otlp_span(span_data("root")).unwrap();
        assert!(root.parent_span_id.is_empty());

        let mut data = span_data("child");
        data.parent_span_id = SpanId::from(0x0102_0304_0506_0708);
        let child = to_otlp_span(data).unwrap();
        assert_eq!(
            child.parent_span_id,
            [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08]
        );
    }

    #[test]
    fn kind_table_is_offset_by_one() {
        let recorded = [
            SpanKind::Internal,
            SpanKind::Server,
            SpanKind::Client,
            SpanKind::Producer,
            SpanKind::Consumer,
        ];
        for kind in recorded {
            assert_eq!(span::SpanKind::from(kind) as i32, kind as i32 + 1);
        }
        assert_eq!(
            span::SpanKind::from(SpanKind::Unset),
            span::SpanKind::Unspecified
        );

        let mut data = span_data("server");
        data.kind = SpanKind::Server;
        assert_eq!(to_otlp_span(data).unwrap().kind, 2);
    }

    #[test]
    fn opaque_identity_is_rejected() {
        let mut data = span_data("legacy");
        data.identity = SpanIdentity::Opaque("|a000.1.".to_owned());
        assert_eq!(
            to_otlp_span(data),
            Err(SpanConversionError::UnsupportedIdFormat)
        );
    }

    #[test]
    fn unconvertible_span_creates_no_group() {
        let mut data = span_data("legacy");
        data.identity = SpanIdentity::Opaque("|a000.1.".to_owned());
        data.resource = Some(Resource::new([Attribute::new(
            "service.name",
            AttributeValue::String("svc".into()),
        )]));

        assert!(group_spans_by_resource_and_library(vec![data]).is_empty());
    }

    #[test]
    fn empty_batch_yields_empty_output() {
        assert!(group_spans_by_resource_and_library(Vec::new()).is_empty());
    }

    #[test]
    fn grouping_follows_first_encounter_order() {
        // Lexically reversed names prove nothing sorts behind our back.
        let zebra = Resource::new([Attribute::new(
            "service.name",
            AttributeValue::String("zebra".into()),
        )]);
        let alpha = Resource::new([Attribute::new(
            "service.name",
            AttributeValue::String("alpha".into()),
        )]);
        let z_lib = InstrumentationLibrary::new("z-lib", Some("1.0".into()));
        let a_lib = InstrumentationLibrary::new("a-lib", None);

        let mut batch = Vec::new();
        for (name, resource, library) in [
            ("s1", &zebra, &z_lib),
            ("s2", &zebra, &a_lib),
            ("s3", &alpha, &z_lib),
            ("s4", &zebra, &z_lib),
        ] {
            let mut data = span_data(name);
            data.resource = Some(resource.clone());
            data.instrumentation_lib = library.clone();
            batch.push(data);
        }

        let grouped = group_spans_by_resource_and_library(batch);
        assert_eq!(grouped.len(), 2);

        let service_name = |group: &ResourceSpans| {
            group.resource.as_ref().unwrap().attributes[0]
                .value
                .clone()
                .unwrap()
                .value
                .unwrap()
        };

        let zebra_group = &grouped[0];
        assert_eq!(
            service_name(zebra_group),
            crate::proto::common::any_value::Value::StringValue("zebra".to_owned()),
            "first-seen resource comes first, regardless of lexical order"
        );
        assert_eq!(zebra_group.instrumentation_library_spans.len(), 2);

        let z_lib_spans = &zebra_group.instrumentation_library_spans[0];
        let z_lib_scope = z_lib_spans.instrumentation_library.as_ref().unwrap();
        assert_eq!(z_lib_scope.name, "z-lib");
        assert_eq!(z_lib_scope.version, "1.0");
        let names: Vec<_> = z_lib_spans.spans.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["s1", "s4"], "span order within a group is batch order");

        let a_lib_spans = &zebra_group.instrumentation_library_spans[1];
        let a_lib_scope = a_lib_spans.instrumentation_library.as_ref().unwrap();
        assert_eq!(a_lib_scope.name, "a-lib");
        assert_eq!(a_lib_scope.version, "", "missing version becomes empty");

        let alpha_group = &grouped[1];
        assert_eq!(
            service_name(alpha_group),
            crate::proto::common::any_value::Value::StringValue("alpha".to_owned())
        );
        assert_eq!(alpha_group.instrumentation_library_spans.len(), 1);
        assert_eq!(alpha_group.instrumentation_library_spans[0].spans[0].name, "s3");
    }

    #[test]
    fn missing_resource_uses_canonical_empty_group() {
        let without_resource = span_data("bare");
        let mut with_empty = span_data("also-bare");
        with_empty.resource = Some(Resource::empty());

        let grouped = group_spans_by_resource_and_library(vec![without_resource, with_empty]);
        assert_eq!(grouped.len(), 1, "both spans share the empty-resource key");
        let resource = grouped[0].resource.as_ref().unwrap();
        assert!(resource.attributes.is_empty());
        assert_eq!(grouped[0].instrumentation_library_spans[0].spans.len(), 2);
    }

    #[test]
    fn events_and_links_are_translated() {
        let mut data = span_data("busy");
        data.events = vec![Event::new(
            "retrying",
            UNIX_EPOCH + Duration::new(1_700_000_001, 42),
            vec![
                Attribute::new("attempt", AttributeValue::Untyped("2".into())),
                Attribute::null("discarded"),
            ],
        )];
        data.links = vec![Link::new(
            TraceId::from(7u128),
            SpanId::from(9u64),
            Vec::new(),
        )];

        let otlp_span = to_otlp_span(data).unwrap();

        let event = &otlp_span.events[0];
        assert_eq!(event.name, "retrying");
        assert_eq!(event.time_unix_nano, 1_700_000_001_000_000_042);
        assert_eq!(event.attributes.len(), 1, "null event attribute is omitted");
        assert_eq!(event.dropped_attributes_count, 0);

        let link = &otlp_span.links[0];
        assert_eq!(link.trace_id, TraceId::from(7u128).to_bytes());
        assert_eq!(link.span_id, SpanId::from(9u64).to_bytes());
    }
}
