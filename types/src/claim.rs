//! Spec components shared by every claim kind and every managed resource
//! kind.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::deepcopy::{DeepCopy, copy_optional};
use crate::reference::{LocalObjectReference, ObjectReference};

/// The part of every claim spec that participates in binding.
///
/// Each reference is optional and absence means "not yet matched".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceClaimSpec {
    #[serde(
        rename = "writeConnectionSecretToRef",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub write_connection_secret_to_reference: Option<LocalObjectReference>,
    #[serde(rename = "classRef", default, skip_serializing_if = "Option::is_none")]
    pub class_reference: Option<ObjectReference>,
    #[serde(rename = "resourceRef", default, skip_serializing_if = "Option::is_none")]
    pub resource_reference: Option<ObjectReference>,
}

impl DeepCopy for ResourceClaimSpec {
    fn deep_copy_into(&self, out: &mut Self) {
        out.write_connection_secret_to_reference =
            copy_optional(self.write_connection_secret_to_reference.as_ref());
        out.class_reference = copy_optional(self.class_reference.as_ref());
        out.resource_reference = copy_optional(self.resource_reference.as_ref());
    }
}

/// What happens to a managed resource when its claim is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ReclaimPolicy {
    /// Keep the resource; it moves to `Released` and is not rebound.
    #[default]
    Retain,
    /// Delete the resource along with its claim.
    Delete,
}

impl fmt::Display for ReclaimPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Retain => "Retain",
            Self::Delete => "Delete",
        })
    }
}

deep_copy_by_value!(ReclaimPolicy);

/// The part of every managed resource spec that participates in binding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceSpec {
    #[serde(
        rename = "writeConnectionSecretToRef",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub write_connection_secret_to_reference: Option<LocalObjectReference>,
    #[serde(rename = "claimRef", default, skip_serializing_if = "Option::is_none")]
    pub claim_reference: Option<ObjectReference>,
    #[serde(rename = "classRef", default, skip_serializing_if = "Option::is_none")]
    pub class_reference: Option<ObjectReference>,
    #[serde(rename = "providerRef", default, skip_serializing_if = "Option::is_none")]
    pub provider_reference: Option<ObjectReference>,
    #[serde(default)]
    pub reclaim_policy: ReclaimPolicy,
}

impl DeepCopy for ResourceSpec {
    fn deep_copy_into(&self, out: &mut Self) {
        out.write_connection_secret_to_reference =
            copy_optional(self.write_connection_secret_to_reference.as_ref());
        out.claim_reference = copy_optional(self.claim_reference.as_ref());
        out.class_reference = copy_optional(self.class_reference.as_ref());
        out.provider_reference = copy_optional(self.provider_reference.as_ref());
        out.reclaim_policy = self.reclaim_policy;
    }
}
