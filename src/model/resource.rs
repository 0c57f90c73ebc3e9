use std::borrow::Cow;

use once_cell::sync::Lazy;

use crate::model::attribute::Attribute;

static EMPTY_RESOURCE: Lazy<Resource> = Lazy::new(|| Resource {
    attributes: Vec::new(),
});

/// An immutable representation of the entity producing telemetry as
/// attributes.
///
/// Resources are compared by value: two resources built from the same
/// attributes in the same order are the same grouping key.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Resource {
    attributes: Vec<Attribute>,
}

impl Resource {
    /// Create a new `Resource` from the given attributes.
    pub fn new(attributes: impl IntoIterator<Item = Attribute>) -> Self {
        Resource {
            attributes: attributes.into_iter().collect(),
        }
    }

    /// The canonical resource with no attributes.
    ///
    /// Spans that carry no resource of their own are grouped under this one.
    pub fn empty() -> Self {
        EMPTY_RESOURCE.clone()
    }

    /// The attributes describing this resource.
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Returns `true` if this resource carries no attributes.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

/// Information about the library producing spans, used to group spans below
/// the resource level.
///
/// The name is never null (it may be empty); a missing version becomes the
/// empty string on the wire.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct InstrumentationLibrary {
    /// The library name.
    pub name: Cow<'static, str>,
    /// The library version, if known.
    pub version: Option<Cow<'static, str>>,
}

impl InstrumentationLibrary {
    /// Create a new instrumentation library identity.
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        version: Option<Cow<'static, str>>,
    ) -> Self {
        InstrumentationLibrary {
            name: name.into(),
            version,
        }
    }
}
