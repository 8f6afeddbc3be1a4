//! Aperture: Evaluation Policy Model for Embedded Script Interpreters
//!
//! Aperture describes which symbols, namespaces, and variable bindings an
//! embedded interpreter is permitted to expose or resolve at evaluation
//! time. A host application composes the restricted execution surface with
//! [`PolicyBuilder`], then hands the finalized [`Policy`] snapshot to the
//! interpreter's resolution logic. Parsing, evaluation, and enforcement at
//! call sites live in the interpreter; this crate only produces the
//! decision data.
//!
//! ```rust
//! use aperture::{HostValue, Namespace, PolicyBuilder};
//!
//! let mut math = Namespace::new("math");
//! math.add_binding("pi", HostValue::new(3.14159_f64));
//!
//! let mut builder = PolicyBuilder::new();
//! builder
//!     .add_binding("version", HostValue::new("1.2.0"))
//!     .add_namespace(math)
//!     .allow("println")
//!     .deny("eval");
//!
//! let policy = builder.build();
//! assert!(policy.binding("version").is_some());
//! let pi = policy
//!     .namespace("math")
//!     .and_then(|ns| ns.binding("pi"))
//!     .and_then(|v| v.downcast_ref::<f64>());
//! assert_eq!(pi, Some(&3.14159));
//! ```

mod policy;
mod value;

pub use policy::{Namespace, Policy, PolicyBuilder};
pub use value::HostValue;
