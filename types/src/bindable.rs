//! Capability traits.
//!
//! A reconciliation loop drives any kind through these traits alone. Each
//! kind only exposes where its shared components live; the accessor logic
//! is written once, in the provided methods.

use crate::binding::{BindingPhase, BindingStatus};
use crate::claim::{ReclaimPolicy, ResourceClaimSpec, ResourceSpec};
use crate::condition::{Condition, ConditionType};
use crate::meta::{ObjectMeta, Time};
use crate::reference::{LocalObjectReference, ObjectReference};

/// A top-level object with identity metadata.
pub trait Object {
    const API_VERSION: &'static str;
    const KIND: &'static str;

    fn metadata(&self) -> &ObjectMeta;
    fn metadata_mut(&mut self) -> &mut ObjectMeta;
}

/// Anything carrying a binding phase and a condition ledger.
pub trait Bindable {
    fn binding_status(&self) -> &BindingStatus;
    fn binding_status_mut(&mut self) -> &mut BindingStatus;

    fn binding_phase(&self) -> BindingPhase {
        self.binding_status().phase()
    }

    fn set_binding_phase(&mut self, phase: BindingPhase) {
        self.binding_status_mut().set_phase(phase);
    }

    fn conditions(&self) -> &[Condition] {
        self.binding_status().conditions()
    }

    fn get_condition(&self, condition_type: &ConditionType) -> Condition {
        self.binding_status().get_condition(condition_type)
    }

    fn set_conditions<I>(&mut self, conditions: I)
    where
        I: IntoIterator<Item = Condition>,
        Self: Sized,
    {
        self.binding_status_mut().set_conditions(conditions);
    }
}

/// A portable request for a capability.
pub trait Claim: Bindable {
    fn claim_spec(&self) -> &ResourceClaimSpec;
    fn claim_spec_mut(&mut self) -> &mut ResourceClaimSpec;

    fn class_reference(&self) -> Option<&ObjectReference> {
        self.claim_spec().class_reference.as_ref()
    }

    fn set_class_reference(&mut self, reference: Option<ObjectReference>) {
        self.claim_spec_mut().class_reference = reference;
    }

    fn resource_reference(&self) -> Option<&ObjectReference> {
        self.claim_spec().resource_reference.as_ref()
    }

    fn set_resource_reference(&mut self, reference: Option<ObjectReference>) {
        self.claim_spec_mut().resource_reference = reference;
    }

    fn write_connection_secret_to_reference(&self) -> Option<&LocalObjectReference> {
        self.claim_spec()
            .write_connection_secret_to_reference
            .as_ref()
    }

    fn set_write_connection_secret_to_reference(
        &mut self,
        reference: Option<LocalObjectReference>,
    ) {
        self.claim_spec_mut().write_connection_secret_to_reference = reference;
    }
}

/// A concrete, provider-specific resource that can satisfy a claim.
pub trait Managed: Bindable {
    fn resource_spec(&self) -> &ResourceSpec;
    fn resource_spec_mut(&mut self) -> &mut ResourceSpec;

    fn claim_reference(&self) -> Option<&ObjectReference> {
        self.resource_spec().claim_reference.as_ref()
    }

    fn set_claim_reference(&mut self, reference: Option<ObjectReference>) {
        self.resource_spec_mut().claim_reference = reference;
    }

    fn class_reference(&self) -> Option<&ObjectReference> {
        self.resource_spec().class_reference.as_ref()
    }

    fn set_class_reference(&mut self, reference: Option<ObjectReference>) {
        self.resource_spec_mut().class_reference = reference;
    }

    fn provider_reference(&self) -> Option<&ObjectReference> {
        self.resource_spec().provider_reference.as_ref()
    }

    fn set_provider_reference(&mut self, reference: Option<ObjectReference>) {
        self.resource_spec_mut().provider_reference = reference;
    }

    fn write_connection_secret_to_reference(&self) -> Option<&LocalObjectReference> {
        self.resource_spec()
            .write_connection_secret_to_reference
            .as_ref()
    }

    fn set_write_connection_secret_to_reference(
        &mut self,
        reference: Option<LocalObjectReference>,
    ) {
        self.resource_spec_mut().write_connection_secret_to_reference = reference;
    }

    fn reclaim_policy(&self) -> ReclaimPolicy {
        self.resource_spec().reclaim_policy
    }

    fn set_reclaim_policy(&mut self, policy: ReclaimPolicy) {
        self.resource_spec_mut().reclaim_policy = policy;
    }
}

/// Read-only listing columns derived from a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub name: Option<String>,
    pub binding_phase: BindingPhase,
    pub class_name: Option<String>,
    pub version: Option<String>,
    pub created: Option<Time>,
}

/// Kinds that appear in a listing.
pub trait Summarize: Object + Bindable {
    /// Name of the referenced resource class, if any.
    fn class_name(&self) -> Option<&str>;

    /// The kind's version selector, if set.
    fn version_selector(&self) -> Option<&str>;

    fn summary(&self) -> Summary {
        Summary {
            name: self.metadata().name.clone(),
            binding_phase: self.binding_phase(),
            class_name: self.class_name().map(str::to_owned),
            version: self.version_selector().map(str::to_owned),
            created: self.metadata().creation_timestamp,
        }
    }
}
