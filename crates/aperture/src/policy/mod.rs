//! Policy model for the interpreter's symbol resolution surface.
//!
//! This module provides the configuration half of the sandbox contract:
//!
//! - [`PolicyBuilder`] - fluent accumulator the host uses to describe what
//!   the interpreter may expose or resolve
//! - [`Policy`] - the immutable snapshot handed to the interpreter
//! - [`Namespace`] - a named bundle of bindings registered as a unit
//!
//! ## Design Philosophy
//!
//! Configuration and enforcement are separate concerns:
//!
//! - **Configuration**: happens before evaluation. The host states facts
//!   (bindings, namespaces, allow/deny entries) through total operations
//!   with no validation and no failure paths. Name collisions resolve
//!   silently with the last write winning.
//! - **Enforcement**: happens during evaluation. The interpreter consults
//!   the snapshot on every symbol lookup and decides precedence between
//!   allow and deny, and between namespace-scoped and top-level bindings.
//!
//! The policy layer records decisions, it does not make them: duplicate
//! allow/deny entries are preserved verbatim and conflicts between the two
//! lists are left to the evaluator.
//!
//! ## Example
//!
//! ```rust
//! use aperture::{HostValue, Namespace, PolicyBuilder};
//!
//! let mut io = Namespace::new("io");
//! io.add_binding("read-line", HostValue::new("host read-line hook"));
//!
//! let mut builder = PolicyBuilder::new();
//! builder
//!     .add_namespace(io)
//!     .allow("println")
//!     .deny("load-file");
//!
//! let policy = builder.build();
//! assert!(policy.namespace("io").is_some());
//! ```

mod builder;
mod namespace;

pub use builder::{Policy, PolicyBuilder};
pub use namespace::Namespace;
