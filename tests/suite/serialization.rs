//! Wire shape of serialized records

use serde_json::json;

use tether_types::{
    Bindable, BindingPhase, Condition, ConditionType, GKECluster, GKEClusterList, List,
    MySQLInstance, MySQLInstanceList,
};

use crate::common::{gke_cluster, mysql_claim};

#[test]
fn managed_resource_document_shape() {
    let value = serde_json::to_value(gke_cluster()).unwrap();
    assert_eq!(
        value,
        json!({
            "apiVersion": "compute.gcp.tether.io/v1alpha1",
            "kind": "GKECluster",
            "metadata": {"name": "gke-7d1c", "namespace": "tether-system"},
            "spec": {
                "classRef": {"namespace": "tether-system", "name": "standard-gke"},
                "reclaimPolicy": "Delete",
                "clusterVersion": "1.11",
                "labels": {"team": "data"},
                "machineType": "n1-standard-1",
                "numNodes": 3,
                "zone": "us-central1-a",
                "tags": ["blue"],
                "enableIPAlias": false,
                "createSubnetwork": false
            },
            "status": {"bindingPhase": "Unbound"}
        })
    );
}

#[test]
fn bound_claim_survives_a_round_trip() {
    let mut claim = mysql_claim();
    claim.set_binding_phase(BindingPhase::Bound);
    claim.set_conditions([Condition::resource_bound()]);

    let text = serde_json::to_string(&claim).unwrap();
    let decoded: MySQLInstance = serde_json::from_str(&text).unwrap();
    assert_eq!(decoded, claim);
}

#[test]
fn duplicate_condition_types_fold_on_decode() {
    let claim: MySQLInstance = serde_json::from_value(json!({
        "apiVersion": "database.tether.io/v1alpha1",
        "kind": "MySQLInstance",
        "metadata": {"name": "app-db"},
        "spec": {"engineVersion": "5.7"},
        "status": {
            "bindingPhase": "Bound",
            "conditions": [
                {"type": "Ready", "status": "False", "lastTransitionTime": "2026-03-14T08:00:00Z", "reason": "Creating"},
                {"type": "Synced", "status": "True", "lastTransitionTime": "2026-03-14T08:00:00Z", "reason": "ReconcileSuccess"},
                {"type": "Ready", "status": "True", "lastTransitionTime": "2026-03-14T08:30:00Z", "reason": "ResourceBound"}
            ]
        }
    }))
    .unwrap();

    let types: Vec<&str> = claim
        .conditions()
        .iter()
        .map(|c| c.condition_type.as_str())
        .collect();
    assert_eq!(types, ["Ready", "Synced"]);
    assert_eq!(
        claim.get_condition(&ConditionType::READY).reason.as_str(),
        "ResourceBound"
    );
}

#[test]
fn empty_lists_keep_their_items_field() {
    let mysql: MySQLInstanceList = List::default();
    assert_eq!(serde_json::to_value(&mysql).unwrap()["items"], json!([]));

    let clusters: GKEClusterList = List::new(Vec::new());
    let value = serde_json::to_value(&clusters).unwrap();
    assert_eq!(value["kind"], "GKEClusterList");
    assert_eq!(value["items"], json!([]));
}

#[test]
fn list_decodes_without_items() {
    let list: List<GKECluster> =
        serde_json::from_value(json!({"kind": "GKEClusterList", "metadata": {}})).unwrap();
    assert!(list.is_empty());
}
