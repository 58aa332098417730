//! Condition ledger.
//!
//! An ordered set of typed status conditions keyed by [`ConditionType`].
//! Setting a condition whose type is already present overwrites that entry
//! in place; new types are appended. There is no removal: a condition that
//! no longer applies is set to [`ConditionStatus::Unknown`] with a reason.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::deepcopy::{DeepCopy, copy_sequence};
use crate::meta::Time;

// ── Status, type and reason ──────────────────────────────────

/// Tri-state condition status. `Unknown` means "not yet evaluated" and is
/// distinct from `False`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ConditionStatus {
    True,
    False,
    #[default]
    Unknown,
}

impl ConditionStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::True => "True",
            Self::False => "False",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for ConditionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The dedup key of a condition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConditionType(Cow<'static, str>);

impl ConditionType {
    /// The resource is (or is not) usable.
    pub const READY: Self = Self(Cow::Borrowed("Ready"));
    /// The last reconcile of the resource succeeded (or did not).
    pub const SYNCED: Self = Self(Cow::Borrowed("Synced"));

    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(Cow::Owned(value.into()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConditionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Machine-readable cause of a condition's current status.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConditionReason(Cow<'static, str>);

impl ConditionReason {
    pub const AVAILABLE: Self = Self(Cow::Borrowed("Available"));
    pub const UNAVAILABLE: Self = Self(Cow::Borrowed("Unavailable"));
    pub const CREATING: Self = Self(Cow::Borrowed("Creating"));
    pub const DELETING: Self = Self(Cow::Borrowed("Deleting"));
    pub const RESOURCE_BOUND: Self = Self(Cow::Borrowed("ResourceBound"));
    pub const RESOURCE_RELEASED: Self = Self(Cow::Borrowed("ResourceReleased"));
    pub const BINDING_FAILED: Self = Self(Cow::Borrowed("BindingFailed"));
    pub const RECONCILE_SUCCESS: Self = Self(Cow::Borrowed("ReconcileSuccess"));
    pub const RECONCILE_ERROR: Self = Self(Cow::Borrowed("ReconcileError"));

    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(Cow::Owned(value.into()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConditionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ── Condition ────────────────────────────────────────────────

/// A timestamped, typed status assertion about a record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    #[serde(rename = "type")]
    pub condition_type: ConditionType,
    pub status: ConditionStatus,
    pub last_transition_time: Time,
    #[serde(default)]
    pub reason: ConditionReason,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
}

impl Condition {
    /// A condition stamped with the current time.
    #[must_use]
    pub fn new(
        condition_type: ConditionType,
        status: ConditionStatus,
        reason: ConditionReason,
    ) -> Self {
        Self {
            condition_type,
            status,
            last_transition_time: Utc::now(),
            reason,
            message: String::new(),
        }
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    #[must_use]
    pub fn with_transition_time(mut self, at: Time) -> Self {
        self.last_transition_time = at;
        self
    }

    /// Same type, status, reason and message; the transition time is ignored.
    #[must_use]
    pub fn equal_ignoring_time(&self, other: &Self) -> bool {
        self.condition_type == other.condition_type
            && self.status == other.status
            && self.reason == other.reason
            && self.message == other.message
    }

    /// The resource is usable.
    #[must_use]
    pub fn available() -> Self {
        Self::new(
            ConditionType::READY,
            ConditionStatus::True,
            ConditionReason::AVAILABLE,
        )
    }

    /// The resource exists but is not usable.
    #[must_use]
    pub fn unavailable() -> Self {
        Self::new(
            ConditionType::READY,
            ConditionStatus::False,
            ConditionReason::UNAVAILABLE,
        )
    }

    #[must_use]
    pub fn creating() -> Self {
        Self::new(
            ConditionType::READY,
            ConditionStatus::False,
            ConditionReason::CREATING,
        )
    }

    #[must_use]
    pub fn deleting() -> Self {
        Self::new(
            ConditionType::READY,
            ConditionStatus::False,
            ConditionReason::DELETING,
        )
    }

    /// The claim has been matched to a concrete resource.
    #[must_use]
    pub fn resource_bound() -> Self {
        Self::new(
            ConditionType::READY,
            ConditionStatus::True,
            ConditionReason::RESOURCE_BOUND,
        )
    }

    #[must_use]
    pub fn resource_released() -> Self {
        Self::new(
            ConditionType::READY,
            ConditionStatus::False,
            ConditionReason::RESOURCE_RELEASED,
        )
    }

    #[must_use]
    pub fn binding_failed(message: impl Into<String>) -> Self {
        Self::new(
            ConditionType::READY,
            ConditionStatus::False,
            ConditionReason::BINDING_FAILED,
        )
        .with_message(message)
    }

    #[must_use]
    pub fn reconcile_success() -> Self {
        Self::new(
            ConditionType::SYNCED,
            ConditionStatus::True,
            ConditionReason::RECONCILE_SUCCESS,
        )
    }

    /// The last reconcile failed; the error text becomes the message.
    #[must_use]
    pub fn reconcile_error(err: &dyn Error) -> Self {
        Self::new(
            ConditionType::SYNCED,
            ConditionStatus::False,
            ConditionReason::RECONCILE_ERROR,
        )
        .with_message(err.to_string())
    }
}

impl DeepCopy for Condition {
    fn deep_copy_into(&self, out: &mut Self) {
        out.condition_type = self.condition_type.clone();
        out.status = self.status;
        out.last_transition_time = self.last_transition_time;
        out.reason = self.reason.clone();
        out.message = self.message.deep_copy();
    }
}

// ── Ledger ───────────────────────────────────────────────────

#[derive(Deserialize)]
struct RawConditionedStatus {
    #[serde(default)]
    conditions: Vec<Condition>,
}

/// Ordered condition ledger.
///
/// Invariant: no two entries share a [`ConditionType`]. Duplicates in a
/// deserialized document are folded at the parse boundary: the first
/// position is kept and later entries overwrite it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawConditionedStatus")]
pub struct ConditionedStatus {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    conditions: Vec<Condition>,
}

impl From<RawConditionedStatus> for ConditionedStatus {
    fn from(raw: RawConditionedStatus) -> Self {
        let mut status = Self::default();
        status.set_conditions(raw.conditions);
        status
    }
}

impl ConditionedStatus {
    /// The full ledger in insertion order.
    #[must_use]
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// The entry for `condition_type`, or an `Unknown` condition when the
    /// ledger has none.
    #[must_use]
    pub fn get_condition(&self, condition_type: &ConditionType) -> Condition {
        self.conditions
            .iter()
            .find(|c| &c.condition_type == condition_type)
            .cloned()
            .unwrap_or_else(|| Condition {
                condition_type: condition_type.clone(),
                status: ConditionStatus::Unknown,
                ..Condition::default()
            })
    }

    /// Upsert each supplied condition by type.
    ///
    /// An existing entry of the same type is overwritten in place. If it is
    /// equal ignoring the transition time it is left untouched, so the
    /// recorded transition time only moves on a real change.
    pub fn set_conditions<I>(&mut self, conditions: I)
    where
        I: IntoIterator<Item = Condition>,
    {
        for condition in conditions {
            match self
                .conditions
                .iter_mut()
                .find(|existing| existing.condition_type == condition.condition_type)
            {
                Some(existing) if existing.equal_ignoring_time(&condition) => {}
                Some(existing) => *existing = condition,
                None => self.conditions.push(condition),
            }
        }
    }
}

impl DeepCopy for ConditionedStatus {
    fn deep_copy_into(&self, out: &mut Self) {
        out.conditions = copy_sequence(&self.conditions);
    }
}
