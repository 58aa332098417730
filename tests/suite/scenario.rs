//! End-to-end walk through a MySQL claim's life

use tether_core::{TransitionGuard, bind_claim};
use tether_types::{
    Bindable, BindingPhase, Claim, Condition, ConditionReason, ConditionStatus, ConditionType,
    DeepCopy, ObjectReference,
};

use crate::common::{class_ref, mysql_claim};

#[test]
fn mysql_claim_binds_and_copies_independently() {
    let mut claim = mysql_claim();
    assert_eq!(claim.binding_phase(), BindingPhase::Unbound);
    assert_eq!(
        claim.class_reference().and_then(ObjectReference::name),
        Some("standard-mysql")
    );
    assert_eq!(
        claim.class_reference().and_then(ObjectReference::namespace),
        Some("default")
    );

    claim.set_binding_phase(BindingPhase::Bound);
    claim.set_conditions([Condition::resource_bound()]);
    assert_eq!(claim.binding_phase(), BindingPhase::Bound);
    let ready = claim.get_condition(&ConditionType::READY);
    assert_eq!(ready.status, ConditionStatus::True);
    assert_eq!(ready.reason, ConditionReason::RESOURCE_BOUND);

    let mut copy = claim.deep_copy();
    assert_eq!(copy, claim);

    copy.set_class_reference(Some(class_ref("premium-mysql")));
    copy.set_binding_phase(BindingPhase::Released);

    assert_eq!(
        claim.class_reference().and_then(ObjectReference::name),
        Some("standard-mysql")
    );
    assert_eq!(claim.binding_phase(), BindingPhase::Bound);
    assert_ne!(copy, claim);
}

#[test]
fn guarded_bind_matches_manual_bind() {
    let guard = TransitionGuard::default();
    let mut guarded = mysql_claim();
    bind_claim(
        &guard,
        &mut guarded,
        ObjectReference::new("tether-system", "mysql-6f2a"),
    )
    .unwrap();

    assert_eq!(guarded.binding_phase(), BindingPhase::Bound);
    assert_eq!(guarded.conditions().len(), 1);
    assert_eq!(
        guarded.get_condition(&ConditionType::READY).reason,
        ConditionReason::RESOURCE_BOUND
    );
}

#[test]
fn absent_reference_round_trips() {
    let mut claim = mysql_claim();
    claim.set_write_connection_secret_to_reference(None);
    assert!(claim.write_connection_secret_to_reference().is_none());

    claim.set_class_reference(None);
    assert!(claim.class_reference().is_none());
    assert!(claim.deep_copy().class_reference().is_none());
}
