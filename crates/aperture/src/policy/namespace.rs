//! Named bundles of bindings.

use std::collections::HashMap;

use crate::value::HostValue;

/// A named, independently identified bundle of bindings exposed as a unit.
///
/// Namespaces let the host group related symbols (a `math` or `io` module,
/// say) and register the whole bundle with a
/// [`PolicyBuilder`](crate::PolicyBuilder) in one step. The builder indexes
/// namespaces by [`Namespace::name`]; the bindings inside are scoped to the
/// namespace and separate from top-level bindings.
#[derive(Clone, Debug)]
pub struct Namespace {
    name: String,
    bindings: HashMap<String, HostValue>,
}

impl Namespace {
    /// Create an empty namespace with the given name.
    ///
    /// Names are not validated; what counts as a well-formed namespace name
    /// is a host/interpreter concern.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bindings: HashMap::new(),
        }
    }

    /// The identifying name.
    ///
    /// Stable for the lifetime of the value; the builder uses it as the
    /// registration key.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register or overwrite a binding scoped to this namespace.
    ///
    /// Re-registering a name silently replaces the prior value; the last
    /// write wins. Returns the namespace so registrations can be chained.
    pub fn add_binding(&mut self, name: impl Into<String>, value: HostValue) -> &mut Self {
        let name = name.into();
        if self.bindings.contains_key(&name) {
            tracing::debug!(
                namespace = %self.name,
                binding = %name,
                "replacing existing namespace binding"
            );
        }
        self.bindings.insert(name, value);
        self
    }

    /// Look up a binding by name.
    pub fn binding(&self, name: &str) -> Option<&HostValue> {
        self.bindings.get(name)
    }

    /// All bindings in this namespace, keyed by name.
    pub fn bindings(&self) -> &HashMap<String, HostValue> {
        &self.bindings
    }

    /// The number of bindings in this namespace.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether this namespace has no bindings.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
