//! Shared test utilities and fixtures

#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;

use chrono::{TimeZone, Utc};
use tempfile::NamedTempFile;

use tether_types::{
    GKECluster, GKEClusterSpec, MySQLInstance, MySQLInstanceSpec, ObjectMeta, ObjectReference,
    PostgreSQLInstance, PostgreSQLInstanceSpec, ReclaimPolicy, ResourceClaimSpec, ResourceSpec,
    Time,
};

/// Fixed instant used as "now" when rendering ages.
pub fn now() -> Time {
    Utc.with_ymd_and_hms(2026, 3, 14, 9, 0, 0).unwrap()
}

pub fn class_ref(name: &str) -> ObjectReference {
    ObjectReference::new("default", name)
}

/// `MySQLInstance` "app-db" referencing class `default/standard-mysql`.
pub fn mysql_claim() -> MySQLInstance {
    let mut metadata = ObjectMeta::named("default", "app-db");
    metadata.uid = Some("3f1a9c2e-0b7d-4e61-9a55-2d8c1f4b7e10".to_owned());
    MySQLInstance::new(
        metadata,
        MySQLInstanceSpec {
            claim: ResourceClaimSpec {
                class_reference: Some(class_ref("standard-mysql")),
                ..ResourceClaimSpec::default()
            },
            engine_version: "5.7".to_owned(),
        },
    )
}

pub fn postgres_claim(name: &str, version: &str) -> PostgreSQLInstance {
    PostgreSQLInstance::new(
        ObjectMeta::named("default", name),
        PostgreSQLInstanceSpec {
            engine_version: version.to_owned(),
            ..PostgreSQLInstanceSpec::default()
        },
    )
}

/// Managed GKE cluster with labels and tags populated.
pub fn gke_cluster() -> GKECluster {
    GKECluster::new(
        ObjectMeta::named("tether-system", "gke-7d1c"),
        GKEClusterSpec {
            resource: ResourceSpec {
                class_reference: Some(ObjectReference::new("tether-system", "standard-gke")),
                reclaim_policy: ReclaimPolicy::Delete,
                ..ResourceSpec::default()
            },
            cluster_version: "1.11".to_owned(),
            machine_type: "n1-standard-1".to_owned(),
            num_nodes: 3,
            zone: "us-central1-a".to_owned(),
            labels: Some([("team".to_owned(), "data".to_owned())].into()),
            tags: Some(vec!["blue".to_owned()]),
            ..GKEClusterSpec::default()
        },
    )
}

/// Write `content` to a temporary file that lives as long as the handle.
pub fn temp_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write temp file");
    file
}

/// Path to the `tether` binary built by Cargo for integration tests.
pub fn tether_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_tether"))
}
