//! Core domain types for Tether.
//!
//! This crate contains the resource-claim binding model: condition ledger,
//! binding phase, claim and managed-resource records, and the deep copy
//! engine that isolates snapshots from each other. No IO, no async, no
//! synchronization. Every operation is synchronous and in-memory.
//!
//! Records cross thread and queue boundaries only as deep copies:
//!
//! ```
//! use tether_types::{
//!     Bindable, BindingPhase, Claim, Condition, DeepCopy, MySQLInstance,
//!     MySQLInstanceSpec, ObjectMeta, ObjectReference,
//! };
//!
//! let mut claim = MySQLInstance::new(
//!     ObjectMeta::named("default", "app-db"),
//!     MySQLInstanceSpec { engine_version: "5.7".into(), ..Default::default() },
//! );
//! claim.set_class_reference(Some(ObjectReference::new("default", "standard-mysql")));
//! claim.set_binding_phase(BindingPhase::Bound);
//! claim.set_conditions([Condition::resource_bound()]);
//!
//! let snapshot = claim.deep_copy();
//! assert_eq!(snapshot, claim);
//! ```

#[macro_use]
mod deepcopy;

mod bindable;
mod binding;
mod claim;
mod class;
mod compute;
mod condition;
mod database;
mod list;
mod meta;
mod reference;
mod settings;

pub use bindable::{Bindable, Claim, Managed, Object, Summarize, Summary};
pub use binding::{BindingPhase, BindingStatus, ResourceClaimStatus};
pub use claim::{ReclaimPolicy, ResourceClaimSpec, ResourceSpec};
pub use class::{ResourceClass, ResourceClassList};
pub use compute::{
    CLUSTER_STATE_RUNNING, GKECluster, GKEClusterList, GKEClusterSpec, GKEClusterStatus,
    ResourceStatus,
};
pub use condition::{
    Condition, ConditionReason, ConditionStatus, ConditionType, ConditionedStatus,
};
pub use database::{
    MYSQL_ENGINE_VERSIONS, MySQLInstance, MySQLInstanceList, MySQLInstanceSpec,
    POSTGRESQL_ENGINE_VERSIONS, PostgreSQLInstance, PostgreSQLInstanceList,
    PostgreSQLInstanceSpec,
};
pub use deepcopy::{DeepCopy, copy_mapping, copy_optional, copy_sequence};
pub use list::List;
pub use meta::{ListMeta, ObjectMeta, Time, TypeMeta};
pub use reference::{LocalObjectReference, ObjectReference};
pub use settings::{
    BindingSettings, EngineVersionPolicy, EngineVersionPolicyError, TransitionMode,
};
