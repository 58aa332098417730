//! Resource classes: named provisioning policies for claims that carry no
//! explicit resource reference.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::bindable::Object;
use crate::claim::ReclaimPolicy;
use crate::deepcopy::{DeepCopy, copy_mapping, copy_optional};
use crate::list::List;
use crate::meta::{ObjectMeta, TypeMeta};
use crate::reference::ObjectReference;

pub const API_VERSION: &str = "core.tether.io/v1alpha1";

#[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceClass {
    #[serde(flatten)]
    pub type_meta: TypeMeta,
    #[serde(default)]
    pub metadata: ObjectMeta,
    /// Provisioner that satisfies claims of this class, e.g.
    /// `cloudsqlinstance.database.gcp.tether.io/v1alpha1`.
    pub provisioner: String,
    #[serde(rename = "providerRef", default, skip_serializing_if = "Option::is_none")]
    pub provider_reference: Option<ObjectReference>,
    #[serde(default)]
    pub reclaim_policy: ReclaimPolicy,
    /// Provider-specific provisioning parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<BTreeMap<String, String>>,
}

impl ResourceClass {
    #[must_use]
    pub fn new(metadata: ObjectMeta, provisioner: &str) -> Self {
        Self {
            type_meta: TypeMeta::new(Self::API_VERSION, Self::KIND),
            metadata,
            provisioner: provisioner.to_owned(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn parameter(&self, key: &str) -> Option<&str> {
        self.parameters
            .as_ref()
            .and_then(|params| params.get(key))
            .map(String::as_str)
    }

    /// A reference to this class suitable for a claim's `classRef`.
    #[must_use]
    pub fn reference(&self) -> ObjectReference {
        ObjectReference {
            kind: Some(Self::KIND.to_owned()),
            api_version: Some(Self::API_VERSION.to_owned()),
            namespace: self.metadata.namespace.clone(),
            name: self.metadata.name.clone(),
            uid: self.metadata.uid.clone(),
            ..ObjectReference::default()
        }
    }
}

impl Object for ResourceClass {
    const API_VERSION: &'static str = API_VERSION;
    const KIND: &'static str = "ResourceClass";

    fn metadata(&self) -> &ObjectMeta {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut ObjectMeta {
        &mut self.metadata
    }
}

impl DeepCopy for ResourceClass {
    fn deep_copy_into(&self, out: &mut Self) {
        out.type_meta = self.type_meta.clone();
        self.metadata.deep_copy_into(&mut out.metadata);
        out.provisioner = self.provisioner.deep_copy();
        out.provider_reference = copy_optional(self.provider_reference.as_ref());
        out.reclaim_policy = self.reclaim_policy;
        out.parameters = self.parameters.as_ref().map(copy_mapping);
    }
}

impl Clone for ResourceClass {
    fn clone(&self) -> Self {
        self.deep_copy()
    }
}

pub type ResourceClassList = List<ResourceClass>;
