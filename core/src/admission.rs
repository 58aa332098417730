//! Engine version admission.
//!
//! Records carry whatever version string they were given. This is the
//! check an admission layer runs before a record reaches a reconciler.

use thiserror::Error;

use tether_types::{EngineVersionPolicy, MySQLInstance, Object, Summarize};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdmissionError {
    #[error("{kind} {name}: engine version is required (allowed: {})", allowed.join(", "))]
    MissingEngineVersion {
        kind: &'static str,
        name: String,
        allowed: Vec<String>,
    },
    #[error("{kind} {name}: engine version {value:?} is not one of {}", allowed.join(", "))]
    EngineVersionNotAllowed {
        kind: &'static str,
        name: String,
        value: String,
        allowed: Vec<String>,
    },
}

/// Validates version selectors against an [`EngineVersionPolicy`].
#[derive(Debug, Clone, Default)]
pub struct Admission {
    policy: EngineVersionPolicy,
}

impl Admission {
    #[must_use]
    pub fn new(policy: EngineVersionPolicy) -> Self {
        Self { policy }
    }

    /// Kinds without an allow-list are always admitted. An empty selector is
    /// admitted only where the kind's version field is optional.
    pub fn check<T: Summarize>(&self, record: &T) -> Result<(), AdmissionError> {
        let Some(allowed) = self.policy.allowed(T::KIND) else {
            return Ok(());
        };
        let name = record.metadata().name().unwrap_or_default().to_owned();

        let result = match record.version_selector() {
            None if version_required(T::KIND) => Err(AdmissionError::MissingEngineVersion {
                kind: T::KIND,
                name,
                allowed: allowed.to_vec(),
            }),
            None => Ok(()),
            Some(value) if allowed.iter().any(|v| v == value) => Ok(()),
            Some(value) => Err(AdmissionError::EngineVersionNotAllowed {
                kind: T::KIND,
                name,
                value: value.to_owned(),
                allowed: allowed.to_vec(),
            }),
        };

        if let Err(err) = &result {
            tracing::warn!(kind = T::KIND, error = %err, "Admission rejected record");
        }
        result
    }
}

/// `MySQLInstance.spec.engineVersion` is a required field; the PostgreSQL
/// one is optional.
fn version_required(kind: &str) -> bool {
    kind == MySQLInstance::KIND
}
