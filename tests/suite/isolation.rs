//! Deep copies share nothing with their source

use std::thread;

use tether_types::{
    Bindable, BindingPhase, Condition, DeepCopy, List, Managed, MySQLInstance, ObjectReference,
};

use crate::common::{gke_cluster, mysql_claim};

#[test]
fn collections_are_not_shared() {
    let original = gke_cluster();
    let mut copy = original.deep_copy();

    copy.spec
        .labels
        .as_mut()
        .unwrap()
        .insert("team".to_owned(), "web".to_owned());
    copy.spec.tags.as_mut().unwrap().push("green".to_owned());

    assert_eq!(original.spec.labels.as_ref().unwrap()["team"], "data");
    assert_eq!(original.spec.tags.as_deref(), Some(&["blue".to_owned()][..]));
}

#[test]
fn absent_and_empty_collections_stay_distinct() {
    let mut original = gke_cluster();
    original.spec.addons = None;
    original.spec.node_locations = Some(Vec::new());

    let copy = original.deep_copy();
    assert!(copy.spec.addons.is_none());
    assert_eq!(copy.spec.node_locations, Some(Vec::new()));
}

#[test]
fn absent_record_copies_to_absent() {
    let none: Option<MySQLInstance> = None;
    assert!(none.deep_copy().is_none());
}

#[test]
fn copies_mutated_on_other_threads_leave_original_alone() {
    let original = gke_cluster();

    thread::scope(|scope| {
        for worker in 0..4 {
            let mut copy = original.deep_copy();
            scope.spawn(move || {
                copy.set_binding_phase(BindingPhase::Bound);
                copy.set_claim_reference(Some(ObjectReference::new(
                    "default",
                    &format!("claim-{worker}"),
                )));
                copy.set_conditions([Condition::resource_bound()]);
                copy.spec.num_nodes += worker;
                assert_eq!(copy.binding_phase(), BindingPhase::Bound);
            });
        }
    });

    assert_eq!(original.binding_phase(), BindingPhase::Unbound);
    assert!(original.claim_reference().is_none());
    assert!(original.conditions().is_empty());
    assert_eq!(original.spec.num_nodes, 3);
}

#[test]
fn list_copy_is_element_wise() {
    let original = List::new(vec![mysql_claim(), mysql_claim()]);
    let mut copy = original.deep_copy();
    copy.items[1].set_binding_phase(BindingPhase::Failed);

    assert_eq!(original.items[1].binding_phase(), BindingPhase::Unbound);
    assert_eq!(copy.items[0], original.items[0]);
}
