//! Binding phase transition table and the guard that enforces it.
//!
//! Records accept any phase at any time. This is the controller-level
//! discipline layered on top:
//!
//! ```text
//! Unbound ──► Bound ──► Released
//!    │          │          │
//!    └──────────┴──────────┴──► Failed
//! ```
//!
//! Setting the current phase again is a no-op and always allowed.
//! `Released` and `Failed` are terminal for automatic rebinding.

use thiserror::Error;

use tether_types::{Bindable, BindingPhase, Object, TransitionMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("illegal binding phase transition {from} -> {to}")]
pub struct TransitionError {
    pub from: BindingPhase,
    pub to: BindingPhase,
}

/// Phases reachable from `from` in one step, excluding `from` itself.
#[must_use]
pub fn allowed_targets(from: BindingPhase) -> &'static [BindingPhase] {
    match from {
        BindingPhase::Unbound => &[BindingPhase::Bound, BindingPhase::Failed],
        BindingPhase::Bound => &[BindingPhase::Released, BindingPhase::Failed],
        BindingPhase::Released => &[BindingPhase::Failed],
        BindingPhase::Failed => &[],
    }
}

#[must_use]
pub fn is_allowed(from: BindingPhase, to: BindingPhase) -> bool {
    from == to || allowed_targets(from).contains(&to)
}

/// No automatic transition leads out of this phase towards `Bound`.
#[must_use]
pub fn is_terminal(phase: BindingPhase) -> bool {
    matches!(phase, BindingPhase::Released | BindingPhase::Failed)
}

/// A reconciler may try to bind a record in this phase.
#[must_use]
pub fn may_bind(phase: BindingPhase) -> bool {
    phase == BindingPhase::Unbound
}

/// Applies phase changes according to a [`TransitionMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransitionGuard {
    mode: TransitionMode,
}

impl TransitionGuard {
    #[must_use]
    pub fn new(mode: TransitionMode) -> Self {
        Self { mode }
    }

    #[must_use]
    pub fn mode(&self) -> TransitionMode {
        self.mode
    }

    /// Whether the guard would let `from -> to` through.
    pub fn check(&self, from: BindingPhase, to: BindingPhase) -> Result<(), TransitionError> {
        if is_allowed(from, to) || self.mode == TransitionMode::Permissive {
            Ok(())
        } else {
            Err(TransitionError { from, to })
        }
    }

    /// Move `record` to `to`, returning the phase it left.
    ///
    /// In strict mode an illegal transition leaves the record untouched. In
    /// permissive mode it is logged and applied.
    pub fn apply<R>(
        &self,
        record: &mut R,
        to: BindingPhase,
    ) -> Result<BindingPhase, TransitionError>
    where
        R: Bindable + Object,
    {
        let from = record.binding_phase();
        let name = record.metadata().name().unwrap_or_default();

        if is_allowed(from, to) {
            tracing::debug!(kind = R::KIND, name, %from, %to, "Binding phase transition");
        } else if self.mode == TransitionMode::Permissive {
            tracing::warn!(
                kind = R::KIND,
                name,
                %from,
                %to,
                "Applying binding phase transition outside the transition table"
            );
        } else {
            tracing::warn!(kind = R::KIND, name, %from, %to, "Rejected binding phase transition");
            return Err(TransitionError { from, to });
        }

        record.set_binding_phase(to);
        Ok(from)
    }
}
