//! Integration tests for the policy configuration surface.
//!
//! These tests exercise the crate the way its two collaborators do:
//! - a host application composing a policy through the builder
//! - an interpreter consulting the finished snapshot during resolution

use aperture::{HostValue, Namespace, Policy, PolicyBuilder};

/// A stand-in for a host-side native function handed to the interpreter.
struct NativeFn {
    name: &'static str,
    arity: usize,
}

// =============================================================================
// Host Composition Tests
// =============================================================================

mod host_composition {
    use super::*;

    fn sandbox_policy() -> Policy {
        let mut string_ns = Namespace::new("string");
        string_ns
            .add_binding("upper", HostValue::new(NativeFn { name: "upper", arity: 1 }))
            .add_binding("lower", HostValue::new(NativeFn { name: "lower", arity: 1 }));

        let mut math_ns = Namespace::new("math");
        math_ns.add_binding("pi", HostValue::new(std::f64::consts::PI));

        let mut builder = PolicyBuilder::new();
        builder
            .add_binding("*version*", HostValue::new("0.1.0"))
            .add_binding("print", HostValue::new(NativeFn { name: "print", arity: 1 }))
            .add_namespace(string_ns)
            .add_namespace(math_ns)
            .allow("println")
            .allow("str")
            .deny("load-file")
            .deny("slurp");
        builder.build()
    }

    #[test]
    fn test_composed_policy_exposes_all_four_collections() {
        let policy = sandbox_policy();

        assert_eq!(policy.bindings().len(), 2);
        assert_eq!(policy.namespaces().len(), 2);
        assert_eq!(policy.allow(), ["println", "str"]);
        assert_eq!(policy.deny(), ["load-file", "slurp"]);
    }

    #[test]
    fn test_namespaced_bindings_are_scoped() {
        let policy = sandbox_policy();

        // "upper" lives inside the string namespace, not at the top level.
        assert!(policy.binding("upper").is_none());
        let string_ns = policy.namespace("string").expect("string namespace");
        assert_eq!(string_ns.len(), 2);

        let upper = string_ns
            .binding("upper")
            .and_then(|v| v.downcast_ref::<NativeFn>())
            .expect("upper should downcast to NativeFn");
        assert_eq!(upper.name, "upper");
        assert_eq!(upper.arity, 1);
    }

    #[test]
    fn test_host_values_survive_with_their_concrete_types() {
        let policy = sandbox_policy();

        let version = policy
            .binding("*version*")
            .and_then(|v| v.downcast_ref::<&str>());
        assert_eq!(version, Some(&"0.1.0"));

        let pi = policy
            .namespace("math")
            .and_then(|ns| ns.binding("pi"))
            .and_then(|v| v.downcast_ref::<f64>());
        assert_eq!(pi, Some(&std::f64::consts::PI));
    }
}

// =============================================================================
// Interpreter Consumption Tests
// =============================================================================

mod interpreter_view {
    use super::*;

    /// A toy resolver standing in for the evaluator's symbol lookup. The
    /// precedence it applies (deny wins, top-level before namespaces) is the
    /// interpreter's own choice; the policy just supplies the data.
    fn resolve<'a>(policy: &'a Policy, symbol: &str) -> Option<&'a HostValue> {
        if policy.deny().iter().any(|n| n == symbol) {
            return None;
        }
        if let Some(value) = policy.binding(symbol) {
            return Some(value);
        }
        let (ns, rest) = symbol.split_once('/')?;
        policy.namespace(ns)?.binding(rest)
    }

    #[test]
    fn test_resolution_over_a_snapshot() {
        let mut io = Namespace::new("io");
        io.add_binding("read-line", HostValue::new(NativeFn {
            name: "read-line",
            arity: 0,
        }));

        let mut builder = PolicyBuilder::new();
        builder
            .add_binding("print", HostValue::new(NativeFn { name: "print", arity: 1 }))
            .add_namespace(io)
            .deny("io/delete-file");
        let policy = builder.build();

        assert!(resolve(&policy, "print").is_some());
        assert!(resolve(&policy, "io/read-line").is_some());
        assert!(resolve(&policy, "io/delete-file").is_none());
        assert!(resolve(&policy, "missing").is_none());
    }

    #[test]
    fn test_conflicting_entries_reach_the_interpreter_verbatim() {
        let mut builder = PolicyBuilder::new();
        builder.allow("eval").deny("eval").allow("eval");
        let policy = builder.build();

        // The policy does not resolve the conflict; both lists carry the
        // symbol and the evaluator decides.
        assert_eq!(policy.allow(), ["eval", "eval"]);
        assert_eq!(policy.deny(), ["eval"]);
    }
}

// =============================================================================
// Snapshot Lifecycle Tests
// =============================================================================

mod snapshot_lifecycle {
    use super::*;

    #[test]
    fn test_staged_policies_from_one_builder() {
        let mut builder = PolicyBuilder::new();
        builder.allow("println");
        let baseline = builder.build();

        builder
            .allow("spit")
            .add_binding("config", HostValue::new(vec![1_u8, 2, 3]));
        let extended = builder.build();

        // The baseline snapshot predates the extra grants.
        assert_eq!(baseline.allow(), ["println"]);
        assert!(baseline.binding("config").is_none());

        assert_eq!(extended.allow(), ["println", "spit"]);
        assert!(extended.binding("config").is_some());
    }

    #[test]
    fn test_snapshots_are_read_only_copies() {
        let mut builder = PolicyBuilder::new();
        builder.add_binding("x", HostValue::new(1_i32));

        let policy = builder.build();
        let cloned = policy.clone();

        builder.add_binding("x", HostValue::new(2_i32)).deny("x");

        for p in [&policy, &cloned] {
            assert_eq!(p.binding("x").and_then(|v| v.downcast_ref::<i32>()), Some(&1));
            assert!(p.deny().is_empty());
        }
    }
}
