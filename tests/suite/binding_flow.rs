//! Claim and managed resource binding under configured guards

use tether_config::TetherConfig;
use tether_core::{
    Admission, BindError, TransitionError, TransitionGuard, bind_claim, bind_resource, fail,
    needs_binding, release,
};
use tether_types::{
    Bindable, BindingPhase, Claim, ConditionReason, ConditionType, Managed, MySQLInstance,
    Object, ObjectReference, TransitionMode,
};

use crate::common::{gke_cluster, mysql_claim, postgres_claim};

fn reference_to<T: Object>(record: &T) -> ObjectReference {
    let meta = record.metadata();
    ObjectReference::new(meta.namespace().unwrap_or_default(), meta.name().unwrap_or_default())
        .with_kind(T::API_VERSION, T::KIND)
}

#[test]
fn claim_and_resource_bind_to_each_other() {
    let guard = TransitionGuard::default();
    let mut claim = mysql_claim();
    let mut cluster = gke_cluster();
    assert!(needs_binding(&claim));

    bind_claim(&guard, &mut claim, reference_to(&cluster)).unwrap();
    bind_resource(&guard, &mut cluster, reference_to(&claim)).unwrap();

    assert_eq!(claim.binding_phase(), BindingPhase::Bound);
    assert_eq!(cluster.binding_phase(), BindingPhase::Bound);
    assert_eq!(
        claim.resource_reference().and_then(|r| r.kind.as_deref()),
        Some("GKECluster")
    );
    assert_eq!(
        cluster.claim_reference().and_then(|r| r.kind.as_deref()),
        Some(MySQLInstance::KIND)
    );
    assert!(!needs_binding(&claim));
}

#[test]
fn released_resource_is_not_rebound_in_strict_mode() {
    let guard = TransitionGuard::default();
    let mut cluster = gke_cluster();
    bind_resource(&guard, &mut cluster, ObjectReference::new("default", "app-db")).unwrap();
    release(&guard, &mut cluster).unwrap();

    let err = bind_resource(&guard, &mut cluster, ObjectReference::new("default", "other"))
        .unwrap_err();
    assert!(matches!(
        err,
        BindError::Transition(TransitionError {
            from: BindingPhase::Released,
            ..
        })
    ));
    assert_eq!(
        cluster.claim_reference().and_then(ObjectReference::name),
        Some("app-db")
    );
}

#[test]
fn second_claim_cannot_take_over_a_bound_resource() {
    let guard = TransitionGuard::default();
    let mut cluster = gke_cluster();
    let mut first = mysql_claim();
    let mut second = mysql_claim();
    second.metadata_mut().name = Some("app-db-2".to_owned());

    bind_claim(&guard, &mut first, reference_to(&cluster)).unwrap();
    bind_resource(&guard, &mut cluster, reference_to(&first)).unwrap();

    bind_claim(&guard, &mut second, reference_to(&cluster)).unwrap();
    let err = bind_resource(&guard, &mut cluster, reference_to(&second)).unwrap_err();
    assert!(matches!(err, BindError::AlreadyBound { .. }));
    assert_eq!(
        cluster.claim_reference().and_then(ObjectReference::name),
        Some("app-db")
    );
}

#[test]
fn permissive_config_lets_a_failed_claim_rebind() {
    let config = TetherConfig::parse("[binding]\ntransitions = \"permissive\"\n").unwrap();
    let guard = TransitionGuard::from(&config);
    assert_eq!(guard.mode(), TransitionMode::Permissive);

    let mut claim = mysql_claim();
    fail(&guard, &mut claim, "provisioning timed out").unwrap();
    bind_claim(&guard, &mut claim, ObjectReference::new("default", "mysql-6f2a")).unwrap();

    assert_eq!(claim.binding_phase(), BindingPhase::Bound);
    assert_eq!(claim.conditions().len(), 1);
    assert_eq!(
        claim.get_condition(&ConditionType::READY).reason,
        ConditionReason::RESOURCE_BOUND
    );
}

#[test]
fn configured_allow_lists_drive_admission() {
    let config =
        TetherConfig::parse("[engine_versions]\npostgresql = [\"9.6\", \"10\"]\n").unwrap();
    let admission = Admission::from(&config);

    assert!(admission.check(&postgres_claim("pg", "10")).is_ok());
    assert!(admission.check(&postgres_claim("pg", "9.5")).is_err());
    assert!(admission.check(&mysql_claim()).is_ok());
}

#[test]
fn reclaim_policy_is_readable_through_the_trait() {
    let cluster = gke_cluster();
    assert_eq!(cluster.reclaim_policy().to_string(), "Delete");
}
