//! Staged policy rollout example.
//!
//! Demonstrates that `build()` issues independent snapshots: a baseline
//! policy handed to one evaluation session is insulated from grants added
//! to the builder afterwards for a more trusted session.
//!
//! Run with: cargo run -p aperture --example snapshots

use aperture::{HostValue, PolicyBuilder};

fn main() {
    let mut builder = PolicyBuilder::new();
    builder
        .add_binding("print", HostValue::new("host print hook"))
        .allow("println");

    // Snapshot for the untrusted session.
    let untrusted = builder.build();

    // The trusted session additionally gets file output.
    builder
        .add_binding("spit", HostValue::new("host spit hook"))
        .allow("spit");
    let trusted = builder.build();

    println!("=== Untrusted session ===");
    println!("allow: {:?}", untrusted.allow());
    println!("spit bound: {}", untrusted.binding("spit").is_some());

    println!("\n=== Trusted session ===");
    println!("allow: {:?}", trusted.allow());
    println!("spit bound: {}", trusted.binding("spit").is_some());
}
