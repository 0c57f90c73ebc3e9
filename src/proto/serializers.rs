//! serde helpers for the JSON view of the wire messages.

use serde::Serializer;

/// Render an identifier byte field as lowercase hex. An empty field (a root
/// span's parent id) renders as the empty string.
pub(crate) fn serialize_id_hex<S>(id: &[u8], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&const_hex::encode(id))
}
