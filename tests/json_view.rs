#![cfg(feature = "with-serde")]

use std::time::{Duration, UNIX_EPOCH};

use otlp_span_transform::model::{
    Attribute, AttributeValue, InstrumentationLibrary, Resource, SpanData, SpanId, SpanIdentity,
    SpanKind, TraceId,
};
use otlp_span_transform::proto::trace::TracesData;
use otlp_span_transform::group_spans_by_resource_and_library;
use serde_json::json;

fn finished_span() -> SpanData {
    SpanData {
        identity: SpanIdentity::TraceContext {
            trace_id: TraceId::from_hex("4e441824ec2b6a44ffdc9bb9a6453df3").unwrap(),
            span_id: SpanId::from_hex("efdc9cd9a1849df3").unwrap(),
        },
        parent_span_id: SpanId::INVALID,
        name: "GET /users".into(),
        kind: SpanKind::Server,
        start_time: UNIX_EPOCH + Duration::from_secs(1_700_000_000),
        duration: Duration::from_micros(1500),
        attributes: vec![
            Attribute::new("http.status_code", AttributeValue::Untyped("200".into())),
            Attribute::new("http.route", AttributeValue::String("/users".into())),
        ],
        events: Vec::new(),
        links: Vec::new(),
        resource: Some(Resource::new([Attribute::new(
            "service.name",
            AttributeValue::String("user-service".into()),
        )])),
        instrumentation_lib: InstrumentationLibrary::new("http-server", Some("0.3.1".into())),
    }
}

#[test]
fn grouped_output_serializes_to_camel_case_json() {
    let traces = TracesData {
        resource_spans: group_spans_by_resource_and_library(vec![finished_span()]),
    };
    let value = serde_json::to_value(&traces).unwrap();

    assert_eq!(
        value
            .pointer("/resourceSpans/0/resource/attributes/0")
            .unwrap(),
        &json!({"key": "service.name", "value": {"stringValue": "user-service"}})
    );

    let scope = value
        .pointer("/resourceSpans/0/instrumentationLibrarySpans/0/instrumentationLibrary")
        .unwrap();
    assert_eq!(scope, &json!({"name": "http-server", "version": "0.3.1"}));

    let span = value
        .pointer("/resourceSpans/0/instrumentationLibrarySpans/0/spans/0")
        .unwrap();
    assert_eq!(span["traceId"], "4e441824ec2b6a44ffdc9bb9a6453df3");
    assert_eq!(span["spanId"], "efdc9cd9a1849df3");
    assert_eq!(span["parentSpanId"], "", "root parent renders as empty hex");
    assert_eq!(span["kind"], 3, "server is wire code 3");
    assert_eq!(span["startTimeUnixNano"], 1_700_000_000_000_000_000u64);
    assert_eq!(span["endTimeUnixNano"], 1_700_000_000_001_500_000u64);
    assert_eq!(
        span["attributes"][0],
        json!({"key": "http.status_code", "value": {"intValue": 200}})
    );
    assert_eq!(
        span["attributes"][1],
        json!({"key": "http.route", "value": {"stringValue": "/users"}})
    );
}
