//! GKE cluster managed resource.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::binding::BindingStatus;
use crate::bindable::{Bindable, Managed, Object, Summarize};
use crate::claim::ResourceSpec;
use crate::deepcopy::{DeepCopy, copy_mapping, copy_sequence};
use crate::list::List;
use crate::meta::{ObjectMeta, TypeMeta};
use crate::reference::ObjectReference;

pub const API_VERSION: &str = "compute.gcp.tether.io/v1alpha1";

/// Status shared by every managed resource kind.
pub type ResourceStatus = BindingStatus;

/// Cluster state the provider reports once the cluster is usable.
pub const CLUSTER_STATE_RUNNING: &str = "RUNNING";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GKEClusterSpec {
    #[serde(flatten)]
    pub resource: ResourceSpec,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub cluster_version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addons: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub machine_type: String,
    #[serde(default)]
    pub num_nodes: i64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub zone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_labels: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_locations: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_taints: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_version: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scopes: Option<Vec<String>>,
    #[serde(default, rename = "enableIPAlias")]
    pub enable_ip_alias: bool,
    #[serde(default)]
    pub create_subnetwork: bool,
    #[serde(default, rename = "clusterIPV4CIDR", skip_serializing_if = "String::is_empty")]
    pub cluster_ipv4_cidr: String,
    #[serde(default, rename = "serviceIPV4CIDR", skip_serializing_if = "String::is_empty")]
    pub service_ipv4_cidr: String,
}

impl DeepCopy for GKEClusterSpec {
    fn deep_copy_into(&self, out: &mut Self) {
        self.resource.deep_copy_into(&mut out.resource);
        out.cluster_version = self.cluster_version.deep_copy();
        out.addons = self.addons.as_deref().map(copy_sequence);
        out.labels = self.labels.as_ref().map(copy_mapping);
        out.machine_type = self.machine_type.deep_copy();
        out.num_nodes = self.num_nodes;
        out.zone = self.zone.deep_copy();
        out.node_labels = self.node_labels.as_deref().map(copy_sequence);
        out.node_locations = self.node_locations.as_deref().map(copy_sequence);
        out.node_taints = self.node_taints.as_deref().map(copy_sequence);
        out.node_version = self.node_version.as_deref().map(copy_sequence);
        out.tags = self.tags.as_deref().map(copy_sequence);
        out.scopes = self.scopes.as_deref().map(copy_sequence);
        out.enable_ip_alias = self.enable_ip_alias;
        out.create_subnetwork = self.create_subnetwork;
        out.cluster_ipv4_cidr = self.cluster_ipv4_cidr.deep_copy();
        out.service_ipv4_cidr = self.service_ipv4_cidr.deep_copy();
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GKEClusterStatus {
    #[serde(flatten)]
    pub resource: ResourceStatus,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub cluster_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub endpoint: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub state: String,
}

impl DeepCopy for GKEClusterStatus {
    fn deep_copy_into(&self, out: &mut Self) {
        self.resource.deep_copy_into(&mut out.resource);
        out.cluster_name = self.cluster_name.deep_copy();
        out.endpoint = self.endpoint.deep_copy();
        out.state = self.state.deep_copy();
    }
}

/// A Google Kubernetes Engine cluster.
#[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GKECluster {
    #[serde(flatten)]
    pub type_meta: TypeMeta,
    #[serde(default)]
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub spec: GKEClusterSpec,
    #[serde(default)]
    pub status: GKEClusterStatus,
}

impl GKECluster {
    #[must_use]
    pub fn new(metadata: ObjectMeta, spec: GKEClusterSpec) -> Self {
        Self {
            type_meta: TypeMeta::new(Self::API_VERSION, Self::KIND),
            metadata,
            spec,
            status: GKEClusterStatus::default(),
        }
    }

    /// The provider reports the cluster as running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.status.state == CLUSTER_STATE_RUNNING
    }
}

impl Object for GKECluster {
    const API_VERSION: &'static str = API_VERSION;
    const KIND: &'static str = "GKECluster";

    fn metadata(&self) -> &ObjectMeta {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut ObjectMeta {
        &mut self.metadata
    }
}

impl Bindable for GKECluster {
    fn binding_status(&self) -> &BindingStatus {
        &self.status.resource
    }

    fn binding_status_mut(&mut self) -> &mut BindingStatus {
        &mut self.status.resource
    }
}

impl Managed for GKECluster {
    fn resource_spec(&self) -> &ResourceSpec {
        &self.spec.resource
    }

    fn resource_spec_mut(&mut self) -> &mut ResourceSpec {
        &mut self.spec.resource
    }
}

impl Summarize for GKECluster {
    fn class_name(&self) -> Option<&str> {
        Managed::class_reference(self).and_then(ObjectReference::name)
    }

    fn version_selector(&self) -> Option<&str> {
        Some(self.spec.cluster_version.as_str()).filter(|v| !v.is_empty())
    }
}

impl DeepCopy for GKECluster {
    fn deep_copy_into(&self, out: &mut Self) {
        out.type_meta = self.type_meta.clone();
        self.metadata.deep_copy_into(&mut out.metadata);
        self.spec.deep_copy_into(&mut out.spec);
        self.status.deep_copy_into(&mut out.status);
    }
}

impl Clone for GKECluster {
    fn clone(&self) -> Self {
        self.deep_copy()
    }
}

pub type GKEClusterList = List<GKECluster>;
