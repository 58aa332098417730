//! Generic binding operations over any claim or managed resource kind.
//!
//! Each operation checks the transition first and only mutates the record
//! when the guard lets the change through, so a rejected call leaves the
//! record exactly as it was.

use thiserror::Error;

use tether_types::{
    Bindable, BindingPhase, Claim, Condition, Managed, Object, ObjectReference, TransitionMode,
};

use crate::transition::{TransitionError, TransitionGuard, may_bind};

/// How a claim expects to be matched to a resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Matching<'a> {
    /// The claim names a concrete resource.
    Explicit(&'a ObjectReference),
    /// The claim names a resource class to provision from.
    Dynamic(&'a ObjectReference),
    /// Neither is set yet.
    Unmatched,
}

/// An explicit resource reference wins over a class reference.
pub fn matching<C: Claim>(claim: &C) -> Matching<'_> {
    if let Some(resource) = claim.resource_reference() {
        Matching::Explicit(resource)
    } else if let Some(class) = claim.class_reference() {
        Matching::Dynamic(class)
    } else {
        Matching::Unmatched
    }
}

/// The claim is unbound and has something to be matched against.
pub fn needs_binding<C: Claim>(claim: &C) -> bool {
    may_bind(claim.binding_phase()) && matching(claim) != Matching::Unmatched
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    #[error(transparent)]
    Transition(#[from] TransitionError),
    #[error("{kind} {name} is already bound to {current}")]
    AlreadyBound {
        kind: &'static str,
        name: String,
        current: String,
    },
}

/// Whether a bind of `record` to `next` has anything left to do.
///
/// A record already bound to `next` is left as is. A record bound to
/// something else is only re-pointed in permissive mode.
fn needs_rebind<R>(
    guard: &TransitionGuard,
    record: &R,
    current: Option<&ObjectReference>,
    next: &ObjectReference,
) -> Result<bool, BindError>
where
    R: Bindable + Object,
{
    if record.binding_phase() != BindingPhase::Bound {
        guard.check(record.binding_phase(), BindingPhase::Bound)?;
        return Ok(true);
    }
    if current == Some(next) {
        return Ok(false);
    }

    let name = record.metadata().name().unwrap_or_default();
    let current = current.map_or_else(|| "<none>".to_owned(), ToString::to_string);
    if guard.mode() == TransitionMode::Permissive {
        tracing::warn!(kind = R::KIND, name, %current, %next, "Re-pointing bound record");
        return Ok(true);
    }
    tracing::warn!(kind = R::KIND, name, %current, %next, "Rejected rebind of bound record");
    Err(BindError::AlreadyBound {
        kind: R::KIND,
        name: name.to_owned(),
        current,
    })
}

/// Bind `claim` to the concrete `resource`.
pub fn bind_claim<C>(
    guard: &TransitionGuard,
    claim: &mut C,
    resource: ObjectReference,
) -> Result<(), BindError>
where
    C: Claim + Object,
{
    if !needs_rebind(guard, claim, claim.resource_reference(), &resource)? {
        return Ok(());
    }
    tracing::info!(
        kind = C::KIND,
        name = claim.metadata().name().unwrap_or_default(),
        resource = %resource,
        "Binding claim"
    );
    claim.set_resource_reference(Some(resource));
    guard.apply(claim, BindingPhase::Bound)?;
    claim.set_conditions([Condition::resource_bound()]);
    Ok(())
}

/// Bind managed `resource` to the claim it satisfies.
pub fn bind_resource<M>(
    guard: &TransitionGuard,
    resource: &mut M,
    claim: ObjectReference,
) -> Result<(), BindError>
where
    M: Managed + Object,
{
    if !needs_rebind(guard, resource, resource.claim_reference(), &claim)? {
        return Ok(());
    }
    tracing::info!(
        kind = M::KIND,
        name = resource.metadata().name().unwrap_or_default(),
        claim = %claim,
        "Binding managed resource"
    );
    resource.set_claim_reference(Some(claim));
    guard.apply(resource, BindingPhase::Bound)?;
    resource.set_conditions([Condition::resource_bound()]);
    Ok(())
}

/// Detach `record` from its counterpart.
///
/// References are kept: a released record still names what it was bound
/// to, which is what an operator inspects before reclaiming by hand.
pub fn release<R>(guard: &TransitionGuard, record: &mut R) -> Result<(), TransitionError>
where
    R: Bindable + Object,
{
    guard.apply(record, BindingPhase::Released)?;
    tracing::info!(
        kind = R::KIND,
        name = record.metadata().name().unwrap_or_default(),
        "Released"
    );
    record.set_conditions([Condition::resource_released()]);
    Ok(())
}

/// Record a terminal binding failure.
pub fn fail<R>(
    guard: &TransitionGuard,
    record: &mut R,
    message: &str,
) -> Result<(), TransitionError>
where
    R: Bindable + Object,
{
    guard.apply(record, BindingPhase::Failed)?;
    tracing::info!(
        kind = R::KIND,
        name = record.metadata().name().unwrap_or_default(),
        message,
        "Binding failed"
    );
    record.set_conditions([Condition::binding_failed(message)]);
    Ok(())
}
