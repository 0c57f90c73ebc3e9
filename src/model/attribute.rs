use std::fmt;

/// A key/value pair attached to a span, event, link or resource.
///
/// A `None` value is an explicit null. Duplicate keys are allowed and entry
/// order is significant; nothing in this crate deduplicates or sorts.
#[derive(Clone, Debug, PartialEq)]
pub struct Attribute {
    /// Attribute key.
    pub key: String,
    /// Attribute value, `None` for an explicit null.
    pub value: Option<AttributeValue>,
}

impl Attribute {
    /// Create an attribute with a value.
    pub fn new(key: impl Into<String>, value: AttributeValue) -> Self {
        Attribute {
            key: key.into(),
            value: Some(value),
        }
    }

    /// Create an attribute carrying an explicit null value.
    pub fn null(key: impl Into<String>) -> Self {
        Attribute {
            key: key.into(),
            value: None,
        }
    }
}

/// An attribute value as recorded by the tracing runtime.
///
/// Values arrive in one of two shapes: untyped text whose wire type is
/// inferred by parsing, or a natively typed value dispatched directly to the
/// matching wire variant.
#[derive(Clone, Debug, PartialEq)]
pub enum AttributeValue {
    /// Untyped text; the wire type is inferred in int → float → bool →
    /// string order.
    Untyped(String),
    /// A string value, emitted verbatim.
    String(String),
    /// A boolean value.
    Bool(bool),
    /// A 32-bit integer, widened to 64 bits on the wire.
    I32(i32),
    /// A 64-bit integer.
    I64(i64),
    /// A 64-bit float.
    F64(f64),
    /// Any other value, rendered to text when the attribute is recorded.
    Other(String),
}

impl AttributeValue {
    /// Capture a value outside the wire type set as its textual rendering.
    pub fn other(value: impl fmt::Display) -> Self {
        AttributeValue::Other(value.to_string())
    }
}
