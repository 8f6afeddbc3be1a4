//! Basic policy composition example.
//!
//! A host application composes the execution surface for an embedded
//! interpreter: top-level bindings, namespaces it may open, and explicit
//! allow/deny entries. The finished snapshot is what the interpreter
//! consults on every symbol lookup.
//!
//! Run with: cargo run -p aperture --example basic

use aperture::{HostValue, Namespace, PolicyBuilder};

fn main() {
    // Builder debug logs (binding overwrites etc.) go to stderr.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(std::io::stderr)
        .init();

    // Group the string helpers the interpreter may expose as a unit.
    let mut string_ns = Namespace::new("string");
    string_ns
        .add_binding("upper", HostValue::new("host upper hook"))
        .add_binding("lower", HostValue::new("host lower hook"));

    let mut builder = PolicyBuilder::new();
    builder
        .add_binding("*version*", HostValue::new("0.1.0"))
        .add_binding("max-depth", HostValue::new(32_u32))
        // Re-registering overwrites: the last write wins (watch stderr).
        .add_binding("max-depth", HostValue::new(64_u32))
        .add_namespace(string_ns)
        .allow("println")
        .deny("load-file")
        .deny("slurp");

    let policy = builder.build();

    println!("=== Top-level bindings ===");
    for (name, value) in policy.bindings() {
        println!("{} : {}", name, value.type_name());
    }

    println!("\n=== Namespaces ===");
    for (name, ns) in policy.namespaces() {
        println!("{} ({} bindings)", name, ns.len());
    }

    println!("\n=== Allow / deny ===");
    println!("allow: {:?}", policy.allow());
    println!("deny:  {:?}", policy.deny());

    println!("\n=== Interpreter-side lookup ===");
    let max_depth = policy
        .binding("max-depth")
        .and_then(|v| v.downcast_ref::<u32>());
    println!("max-depth resolves to {:?}", max_depth);
}
