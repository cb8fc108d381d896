//! A single registry shared across threads.
//!
//! The registry is built once and only read afterwards, so it can be shared
//! through an `Arc` without any locking.

use crate::common::embedded_registry;
use prop_registry::{PropKind, PropRegistry};
use std::sync::Arc;
use std::thread;

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_registry_is_send_and_sync() {
    assert_send_sync::<PropRegistry>();
}

#[test]
fn test_concurrent_resolution_agrees() {
    let registry = Arc::new(embedded_registry());
    let path = [
        "kubernetesDeployment",
        "kubernetesObject",
        "spec",
        "template",
        "spec",
        "containers",
        "ports",
        "protocol",
    ];
    let expected = registry.find_prop(&path).cloned();
    assert!(expected.is_some());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                (0..100)
                    .map(|_| registry.find_prop(&path).cloned())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        for result in handle.join().expect("resolver thread panicked") {
            assert_eq!(result, expected);
        }
    }
}

#[test]
fn test_scoped_threads_borrow_the_registry() {
    let registry = embedded_registry();
    let entity_types = registry.list_entity_types();

    thread::scope(|scope| {
        for entity_type in &entity_types {
            let registry = &registry;
            scope.spawn(move || {
                let name = registry.find_prop(&[*entity_type, "name"]).unwrap();
                assert_eq!(name.kind(), PropKind::Scalar);
            });
        }
    });
}
