//! Policy accumulation and snapshotting.

use std::collections::HashMap;

use crate::policy::namespace::Namespace;
use crate::value::HostValue;

/// The finalized, read-only policy snapshot consumed by the interpreter.
///
/// A `Policy` is produced by [`PolicyBuilder::build`] and holds exactly four
/// collections: top-level bindings, namespaces, and the allow and deny
/// sequences. It has no mutation methods; the interpreter consults it
/// through the read accessors on every symbol lookup.
///
/// The policy records decisions, it does not make them: precedence between
/// allow and deny entries, and between namespace-scoped and top-level
/// bindings, is the interpreter's responsibility.
#[derive(Clone, Debug, Default)]
pub struct Policy {
    bindings: HashMap<String, HostValue>,
    namespaces: HashMap<String, Namespace>,
    allow: Vec<String>,
    deny: Vec<String>,
}

impl Policy {
    /// Top-level bindings, keyed by name.
    pub fn bindings(&self) -> &HashMap<String, HostValue> {
        &self.bindings
    }

    /// Look up a top-level binding by name.
    pub fn binding(&self, name: &str) -> Option<&HostValue> {
        self.bindings.get(name)
    }

    /// Registered namespaces, keyed by their own names.
    pub fn namespaces(&self) -> &HashMap<String, Namespace> {
        &self.namespaces
    }

    /// Look up a namespace by name.
    pub fn namespace(&self, name: &str) -> Option<&Namespace> {
        self.namespaces.get(name)
    }

    /// Names explicitly permitted, in registration order.
    ///
    /// Duplicates are preserved as supplied.
    pub fn allow(&self) -> &[String] {
        &self.allow
    }

    /// Names explicitly forbidden, in registration order.
    ///
    /// Duplicates are preserved as supplied.
    pub fn deny(&self) -> &[String] {
        &self.deny
    }
}

/// Accumulates policy facts and materializes [`Policy`] snapshots.
///
/// Every configuration method mutates the builder in place and returns
/// `&mut Self`, so registrations chain:
///
/// ```
/// use aperture::{HostValue, PolicyBuilder};
///
/// let mut builder = PolicyBuilder::new();
/// builder
///     .add_binding("version", HostValue::new("1.2.0"))
///     .allow("println")
///     .deny("eval");
///
/// let policy = builder.build();
/// assert!(policy.binding("version").is_some());
/// ```
///
/// The builder is a plain accumulator: no operation validates its input or
/// can fail, and name collisions resolve silently with the last write
/// winning. A single writer owns the builder for the whole configuration
/// phase, then hands the built [`Policy`] to the interpreter.
/// [`build`](PolicyBuilder::build) neither consumes nor freezes the
/// builder, so it can keep accumulating and issue further snapshots.
#[derive(Clone, Debug, Default)]
pub struct PolicyBuilder {
    bindings: HashMap<String, HostValue>,
    namespaces: HashMap<String, Namespace>,
    allow: Vec<String>,
    deny: Vec<String>,
}

impl PolicyBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register or overwrite a top-level binding.
    ///
    /// Re-registering a name silently replaces the prior value; the last
    /// write wins.
    pub fn add_binding(&mut self, name: impl Into<String>, value: HostValue) -> &mut Self {
        let name = name.into();
        if self.bindings.contains_key(&name) {
            tracing::debug!(binding = %name, "replacing existing binding");
        }
        self.bindings.insert(name, value);
        self
    }

    /// Append a name to the allow sequence.
    ///
    /// Entries are kept in call order and never deduplicated; how duplicate
    /// or conflicting entries are interpreted is up to the evaluator.
    pub fn allow(&mut self, name: impl Into<String>) -> &mut Self {
        self.allow.push(name.into());
        self
    }

    /// Append a name to the deny sequence.
    ///
    /// Entries are kept in call order and never deduplicated.
    pub fn deny(&mut self, name: impl Into<String>) -> &mut Self {
        self.deny.push(name.into());
        self
    }

    /// Register or overwrite a namespace, keyed by [`Namespace::name`].
    ///
    /// The key is always the namespace's own name, never a caller-supplied
    /// alias; re-registering under an existing name replaces the prior
    /// entry.
    pub fn add_namespace(&mut self, ns: Namespace) -> &mut Self {
        if self.namespaces.contains_key(ns.name()) {
            tracing::debug!(namespace = %ns.name(), "replacing existing namespace");
        }
        self.namespaces.insert(ns.name().to_owned(), ns);
        self
    }

    /// Materialize a snapshot of the policy as constructed so far.
    ///
    /// The snapshot is independent of the builder: the four collections are
    /// copied (host objects inside [`HostValue`]s are shared, not
    /// duplicated), so mutating the builder afterwards never changes an
    /// already-issued [`Policy`]. Calling `build` again yields a snapshot of
    /// the builder's state at that later point.
    pub fn build(&self) -> Policy {
        Policy {
            bindings: self.bindings.clone(),
            namespaces: self.namespaces.clone(),
            allow: self.allow.clone(),
            deny: self.deny.clone(),
        }
    }
}
