//! Database claim kinds.
//!
//! `MySQLInstance` and `PostgreSQLInstance` are portable requests for a
//! database. Both embed [`ResourceClaimSpec`] and share
//! [`ResourceClaimStatus`]; they differ only in their engine version field.

use serde::{Deserialize, Serialize};

use crate::binding::{BindingStatus, ResourceClaimStatus};
use crate::bindable::{Bindable, Claim, Object, Summarize};
use crate::claim::ResourceClaimSpec;
use crate::deepcopy::DeepCopy;
use crate::list::List;
use crate::meta::{ObjectMeta, TypeMeta};
use crate::reference::ObjectReference;

pub const API_VERSION: &str = "database.tether.io/v1alpha1";

/// Engine versions admitted for `MySQLInstance.spec.engineVersion`.
pub const MYSQL_ENGINE_VERSIONS: &[&str] = &["5.6", "5.7"];

/// Engine versions admitted for `PostgreSQLInstance.spec.engineVersion`.
pub const POSTGRESQL_ENGINE_VERSIONS: &[&str] = &["9.6"];

// ── MySQL ────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MySQLInstanceSpec {
    #[serde(flatten)]
    pub claim: ResourceClaimSpec,
    /// Required; an empty value is rejected at admission, not when decoding.
    #[serde(default)]
    pub engine_version: String,
}

impl DeepCopy for MySQLInstanceSpec {
    fn deep_copy_into(&self, out: &mut Self) {
        self.claim.deep_copy_into(&mut out.claim);
        out.engine_version = self.engine_version.deep_copy();
    }
}

/// Claim for an abstract MySQL database instance.
#[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MySQLInstance {
    #[serde(flatten)]
    pub type_meta: TypeMeta,
    #[serde(default)]
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub spec: MySQLInstanceSpec,
    #[serde(default)]
    pub status: ResourceClaimStatus,
}

impl MySQLInstance {
    #[must_use]
    pub fn new(metadata: ObjectMeta, spec: MySQLInstanceSpec) -> Self {
        Self {
            type_meta: TypeMeta::new(Self::API_VERSION, Self::KIND),
            metadata,
            spec,
            status: ResourceClaimStatus::default(),
        }
    }
}

pub type MySQLInstanceList = List<MySQLInstance>;

// ── PostgreSQL ───────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostgreSQLInstanceSpec {
    #[serde(flatten)]
    pub claim: ResourceClaimSpec,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub engine_version: String,
}

impl DeepCopy for PostgreSQLInstanceSpec {
    fn deep_copy_into(&self, out: &mut Self) {
        self.claim.deep_copy_into(&mut out.claim);
        out.engine_version = self.engine_version.deep_copy();
    }
}

/// Claim for an abstract PostgreSQL database instance.
#[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostgreSQLInstance {
    #[serde(flatten)]
    pub type_meta: TypeMeta,
    #[serde(default)]
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub spec: PostgreSQLInstanceSpec,
    #[serde(default)]
    pub status: ResourceClaimStatus,
}

impl PostgreSQLInstance {
    #[must_use]
    pub fn new(metadata: ObjectMeta, spec: PostgreSQLInstanceSpec) -> Self {
        Self {
            type_meta: TypeMeta::new(Self::API_VERSION, Self::KIND),
            metadata,
            spec,
            status: ResourceClaimStatus::default(),
        }
    }
}

pub type PostgreSQLInstanceList = List<PostgreSQLInstance>;

// ── Shared wiring ────────────────────────────────────────────

macro_rules! database_claim {
    ($kind:ident) => {
        impl Object for $kind {
            const API_VERSION: &'static str = API_VERSION;
            const KIND: &'static str = stringify!($kind);

            fn metadata(&self) -> &ObjectMeta {
                &self.metadata
            }

            fn metadata_mut(&mut self) -> &mut ObjectMeta {
                &mut self.metadata
            }
        }

        impl Bindable for $kind {
            fn binding_status(&self) -> &BindingStatus {
                &self.status
            }

            fn binding_status_mut(&mut self) -> &mut BindingStatus {
                &mut self.status
            }
        }

        impl Claim for $kind {
            fn claim_spec(&self) -> &ResourceClaimSpec {
                &self.spec.claim
            }

            fn claim_spec_mut(&mut self) -> &mut ResourceClaimSpec {
                &mut self.spec.claim
            }
        }

        impl Summarize for $kind {
            fn class_name(&self) -> Option<&str> {
                self.class_reference().and_then(ObjectReference::name)
            }

            fn version_selector(&self) -> Option<&str> {
                Some(self.spec.engine_version.as_str()).filter(|v| !v.is_empty())
            }
        }

        impl DeepCopy for $kind {
            fn deep_copy_into(&self, out: &mut Self) {
                out.type_meta = self.type_meta.clone();
                self.metadata.deep_copy_into(&mut out.metadata);
                self.spec.deep_copy_into(&mut out.spec);
                self.status.deep_copy_into(&mut out.status);
            }
        }

        impl Clone for $kind {
            fn clone(&self) -> Self {
                self.deep_copy()
            }
        }
    };
}

database_claim!(MySQLInstance);
database_claim!(PostgreSQLInstance);
