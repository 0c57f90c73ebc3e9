use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::model::{Attribute, AttributeValue};
use crate::proto::common::{any_value, AnyValue, KeyValue};

pub(crate) fn to_nanos(time: SystemTime) -> u64 {
    time.duration_since(UNIX_EPOCH)
        .unwrap_or_else(|_| Duration::from_secs(0))
        .as_nanos() as u64
}

/// Wrapper type for Vec<[`KeyValue`](crate::proto::common::KeyValue)>
#[derive(Default)]
pub struct Attributes(pub Vec<KeyValue>);

impl From<Vec<Attribute>> for Attributes {
    fn from(attributes: Vec<Attribute>) -> Self {
        Attributes(attributes.iter().filter_map(to_key_value).collect())
    }
}

impl From<&[Attribute]> for Attributes {
    fn from(attributes: &[Attribute]) -> Self {
        Attributes(attributes.iter().filter_map(to_key_value).collect())
    }
}

/// Convert one recorded attribute into a wire key/value record.
///
/// An attribute with a null value yields no record at all; callers omit the
/// entry rather than emitting a placeholder. Duplicate keys pass through and
/// entry order is preserved.
pub fn to_key_value(attribute: &Attribute) -> Option<KeyValue> {
    let value = attribute.value.as_ref()?;
    Some(KeyValue {
        key: attribute.key.clone(),
        value: Some(AnyValue {
            value: Some(coerce(value)),
        }),
    })
}

fn coerce(value: &AttributeValue) -> any_value::Value {
    match value {
        AttributeValue::Untyped(text) => sniff(text),
        AttributeValue::String(value) => any_value::Value::StringValue(value.clone()),
        AttributeValue::Bool(value) => any_value::Value::BoolValue(*value),
        AttributeValue::I32(value) => any_value::Value::IntValue(i64::from(*value)),
        AttributeValue::I64(value) => any_value::Value::IntValue(*value),
        AttributeValue::F64(value) => any_value::Value::DoubleValue(*value),
        AttributeValue::Other(rendered) => any_value::Value::StringValue(rendered.clone()),
    }
}

/// Infer the wire type of untyped text.
///
/// Parse order is integer, then float, then boolean, then string; the first
/// parse that succeeds wins. The order is load-bearing for receivers:
/// `"123"` must become an integer, `"1.5"` a float, `"true"` a boolean.
fn sniff(text: &str) -> any_value::Value {
    if let Ok(int) = text.parse::<i64>() {
        return any_value::Value::IntValue(int);
    }
    if let Ok(float) = text.parse::<f64>() {
        return any_value::Value::DoubleValue(float);
    }
    if let Ok(boolean) = text.parse::<bool>() {
        return any_value::Value::BoolValue(boolean);
    }
    any_value::Value::StringValue(text.to_owned())
}
