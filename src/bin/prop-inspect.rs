//! # Property Registry Inspector
//!
//! A command-line utility for looking into the compiled-in property registry:
//! which entity types it holds, what their schemas look like, and what a
//! given property path resolves to.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --bin prop-inspect list
//! cargo run --bin prop-inspect show dockerImage
//! cargo run --bin prop-inspect resolve dockerImage exposedPorts 0 protocol
//! cargo run --bin prop-inspect summary
//! ```
//!
//! ## Output Examples
//!
//! ### Resolving a path
//!
//! ```text
//! Resolving: dockerImage/exposedPorts/0/protocol
//! ✓ Resolved to scalar 'protocol'
//! {
//!   "kind": "scalar",
//!   "name": "protocol",
//!   "type": "string"
//! }
//! ```
//!
//! ### Unresolvable path
//!
//! ```text
//! Resolving: dockerImage/missingField
//! ❌ not found
//! ```
//!
//! ## Exit Codes
//!
//! - `0`: Command succeeded
//! - `1`: Bad usage, unknown entity type, unresolvable path or registry failure

use prop_registry::{PropDescriptor, PropKind, PropPath, PropRegistry, RegistryEntry};
use std::collections::BTreeMap;
use std::env;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();
    let program = program_name(&args);

    if args.len() < 2 {
        print_usage(program);
        process::exit(1);
    }

    let registry = match PropRegistry::new() {
        Ok(registry) => registry,
        Err(e) => {
            eprintln!("❌ Failed to build property registry: {}", e);
            process::exit(1);
        }
    };

    match (args[1].as_str(), &args[2..]) {
        ("list", []) => list_entity_types(&registry),
        ("summary", []) => summarize(&registry),
        ("show", [entity_type]) => show_entry(&registry, entity_type),
        ("resolve", segments) if !segments.is_empty() => resolve(&registry, segments),
        _ => {
            print_usage(program);
            process::exit(1);
        }
    }
}

/// Name to show in usage text. `argv` may be empty when the process is
/// spawned without an argv[0].
fn program_name(args: &[String]) -> &str {
    args.first().map_or("prop-inspect", String::as_str)
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} <command>", program);
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  list                                 Registered entity types");
    eprintln!("  show <entityType>                    Schema of one entity type as JSON");
    eprintln!("  resolve <entityType> [segment ...]   Descriptor a property path designates");
    eprintln!("  summary                              Descriptor kinds per entity type");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} resolve dockerImage name", program);
    eprintln!("  {} resolve dockerHub repositories my-app private", program);
}

fn list_entity_types(registry: &PropRegistry) {
    for entity_type in registry.list_entity_types() {
        println!("{}", entity_type);
    }
}

fn show_entry(registry: &PropRegistry, entity_type: &str) {
    let Some(entry) = registry.get(entity_type) else {
        eprintln!("❌ Unknown entity type: {}", entity_type);
        process::exit(1);
    };

    match serde_json::to_string_pretty(entry) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("❌ Failed to serialize '{}': {}", entity_type, e);
            process::exit(1);
        }
    }
}

fn resolve(registry: &PropRegistry, segments: &[String]) {
    let path: PropPath = segments.iter().cloned().collect();
    println!("Resolving: {}", path);

    let Some(prop) = path.resolve(registry) else {
        eprintln!("❌ not found");
        process::exit(1);
    };

    println!("✓ Resolved to {} '{}'", prop.kind(), prop.name());
    match serde_json::to_string_pretty(prop) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("❌ Failed to serialize descriptor: {}", e);
            process::exit(1);
        }
    }
}

fn summarize(registry: &PropRegistry) {
    println!("Property Registry Summary:");
    println!("  Entity types: {}", registry.len());

    for entry in registry.entries() {
        print_entry_summary(entry);
    }
}

fn print_entry_summary(entry: &RegistryEntry) {
    let mut kind_counts: BTreeMap<PropKind, usize> = BTreeMap::new();
    let mut depth = 0;

    for prop in &entry.properties {
        depth = depth.max(tree_depth(prop));
        prop.walk(&mut |node| *kind_counts.entry(node.kind()).or_insert(0) += 1);
    }

    println!();
    println!("  {}", entry.entity_type);
    println!("    Top-level properties: {}", entry.properties.len());
    println!("    Deepest nesting: {}", depth);
    for (kind, count) in kind_counts {
        println!("    - {}: {}", kind, count);
    }
}

fn tree_depth(prop: &PropDescriptor) -> usize {
    let children = prop
        .properties()
        .iter()
        .chain(prop.item())
        .chain(prop.value());
    1 + children.map(tree_depth).max().unwrap_or(0)
}
