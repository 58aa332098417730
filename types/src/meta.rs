//! Object and list metadata.
//!
//! Identity is opaque to the binding model: these types are carried,
//! serialized and deep-copied, never interpreted.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::deepcopy::{DeepCopy, copy_mapping, copy_sequence};

/// Wall-clock timestamp, serialized as RFC 3339.
pub type Time = DateTime<Utc>;

deep_copy_by_value!(Time);

/// `apiVersion` and `kind`, serialized inline at the top level of a record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl TypeMeta {
    #[must_use]
    pub fn new(api_version: &str, kind: &str) -> Self {
        Self {
            api_version: Some(api_version.to_owned()),
            kind: Some(kind.to_owned()),
        }
    }
}

deep_copy_by_value!(TypeMeta);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generation: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_timestamp: Option<Time>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deletion_timestamp: Option<Time>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotations: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finalizers: Option<Vec<String>>,
}

impl ObjectMeta {
    /// Metadata carrying only a name and namespace.
    #[must_use]
    pub fn named(namespace: &str, name: &str) -> Self {
        Self {
            name: Some(name.to_owned()),
            namespace: Some(namespace.to_owned()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }
}

impl DeepCopy for ObjectMeta {
    fn deep_copy_into(&self, out: &mut Self) {
        out.name = self.name.deep_copy();
        out.namespace = self.namespace.deep_copy();
        out.uid = self.uid.deep_copy();
        out.resource_version = self.resource_version.deep_copy();
        out.generation = self.generation;
        out.creation_timestamp = self.creation_timestamp;
        out.deletion_timestamp = self.deletion_timestamp;
        out.labels = self.labels.as_ref().map(copy_mapping);
        out.annotations = self.annotations.as_ref().map(copy_mapping);
        out.finalizers = self.finalizers.as_deref().map(copy_sequence);
    }
}

/// Metadata attached to a list of records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_version: Option<String>,
    #[serde(default, rename = "continue", skip_serializing_if = "Option::is_none")]
    pub continue_token: Option<String>,
}

deep_copy_by_value!(ListMeta);
