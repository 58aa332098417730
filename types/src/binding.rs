//! Binding phase and the shared binding status component.
//!
//! [`BindingStatus`] is the one component every claim and managed resource
//! status embeds. It carries the phase and the condition ledger and derives
//! neither from the other. Transition legality is not checked here; any
//! phase may be set at any time.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::condition::{Condition, ConditionType, ConditionedStatus};
use crate::deepcopy::DeepCopy;

/// Whether a claim or resource is matched to its counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BindingPhase {
    /// Not yet matched. The initial phase.
    #[default]
    Unbound,
    /// Matched to a concrete resource and usable.
    Bound,
    /// The counterpart was reclaimed or detached.
    Released,
    /// A terminal error was observed.
    Failed,
}

impl BindingPhase {
    pub const ALL: [Self; 4] = [Self::Unbound, Self::Bound, Self::Released, Self::Failed];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unbound => "Unbound",
            Self::Bound => "Bound",
            Self::Released => "Released",
            Self::Failed => "Failed",
        }
    }

    /// Parse a phase name, case-insensitively.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|phase| phase.as_str().eq_ignore_ascii_case(s.trim()))
    }
}

impl fmt::Display for BindingPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

deep_copy_by_value!(BindingPhase);

/// Binding phase plus condition ledger.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BindingStatus {
    #[serde(default)]
    binding_phase: BindingPhase,
    #[serde(flatten)]
    conditioned: ConditionedStatus,
}

impl BindingStatus {
    #[must_use]
    pub fn phase(&self) -> BindingPhase {
        self.binding_phase
    }

    pub fn set_phase(&mut self, phase: BindingPhase) {
        self.binding_phase = phase;
    }

    #[must_use]
    pub fn conditions(&self) -> &[Condition] {
        self.conditioned.conditions()
    }

    #[must_use]
    pub fn get_condition(&self, condition_type: &ConditionType) -> Condition {
        self.conditioned.get_condition(condition_type)
    }

    pub fn set_conditions<I>(&mut self, conditions: I)
    where
        I: IntoIterator<Item = Condition>,
    {
        self.conditioned.set_conditions(conditions);
    }
}

impl DeepCopy for BindingStatus {
    fn deep_copy_into(&self, out: &mut Self) {
        out.binding_phase = self.binding_phase;
        self.conditioned.deep_copy_into(&mut out.conditioned);
    }
}

/// Status of every claim kind.
pub type ResourceClaimStatus = BindingStatus;
