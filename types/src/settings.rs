//! Resolved configuration types shared across crates.
//!
//! These types represent fully-validated configuration state. Raw TOML
//! deserialization structs stay private; the invariants below are enforced
//! via `#[serde(try_from)]` at the deserialization boundary, so holding a
//! value is proof it is valid.

use std::fmt;

use serde::Deserialize;

use crate::bindable::Object;
use crate::database::{
    MYSQL_ENGINE_VERSIONS, MySQLInstance, POSTGRESQL_ENGINE_VERSIONS, PostgreSQLInstance,
};

/// How the controller boundary treats a phase change outside the
/// transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionMode {
    /// Reject the change and leave the record untouched.
    #[default]
    Strict,
    /// Log the change and apply it anyway.
    Permissive,
}

impl fmt::Display for TransitionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Strict => "strict",
            Self::Permissive => "permissive",
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BindingSettings {
    #[serde(default)]
    transitions: TransitionMode,
}

impl BindingSettings {
    #[must_use]
    pub fn new(transitions: TransitionMode) -> Self {
        Self { transitions }
    }

    #[must_use]
    pub fn transitions(&self) -> TransitionMode {
        self.transitions
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum EngineVersionPolicyError {
    #[error("engine version allow-list for {kind} must not be empty")]
    EmptyAllowList { kind: &'static str },
    #[error("engine version allow-list for {kind} contains a blank entry")]
    BlankVersion { kind: &'static str },
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawEngineVersionPolicy {
    mysql: Option<Vec<String>>,
    postgresql: Option<Vec<String>>,
}

/// Engine version allow-lists per claim kind.
///
/// Invariant: each list is non-empty and holds no blank entries. Kinds
/// left out of the raw config fall back to the built-in lists.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawEngineVersionPolicy")]
pub struct EngineVersionPolicy {
    mysql: Vec<String>,
    postgresql: Vec<String>,
}

impl Default for EngineVersionPolicy {
    fn default() -> Self {
        Self {
            mysql: owned(MYSQL_ENGINE_VERSIONS),
            postgresql: owned(POSTGRESQL_ENGINE_VERSIONS),
        }
    }
}

fn owned(versions: &[&str]) -> Vec<String> {
    versions.iter().map(|v| (*v).to_owned()).collect()
}

fn checked(
    kind: &'static str,
    versions: Vec<String>,
) -> Result<Vec<String>, EngineVersionPolicyError> {
    if versions.is_empty() {
        return Err(EngineVersionPolicyError::EmptyAllowList { kind });
    }
    if versions.iter().any(|v| v.trim().is_empty()) {
        return Err(EngineVersionPolicyError::BlankVersion { kind });
    }
    Ok(versions)
}

impl TryFrom<RawEngineVersionPolicy> for EngineVersionPolicy {
    type Error = EngineVersionPolicyError;

    fn try_from(raw: RawEngineVersionPolicy) -> Result<Self, Self::Error> {
        let defaults = Self::default();
        Self::new(
            raw.mysql.unwrap_or(defaults.mysql),
            raw.postgresql.unwrap_or(defaults.postgresql),
        )
    }
}

impl EngineVersionPolicy {
    pub fn new(
        mysql: Vec<String>,
        postgresql: Vec<String>,
    ) -> Result<Self, EngineVersionPolicyError> {
        Ok(Self {
            mysql: checked(MySQLInstance::KIND, mysql)?,
            postgresql: checked(PostgreSQLInstance::KIND, postgresql)?,
        })
    }

    #[must_use]
    pub fn mysql(&self) -> &[String] {
        &self.mysql
    }

    #[must_use]
    pub fn postgresql(&self) -> &[String] {
        &self.postgresql
    }

    /// The allow-list for `kind`, or `None` when the kind has no version
    /// selector constraint.
    #[must_use]
    pub fn allowed(&self, kind: &str) -> Option<&[String]> {
        if kind == MySQLInstance::KIND {
            Some(&self.mysql)
        } else if kind == PostgreSQLInstance::KIND {
            Some(&self.postgresql)
        } else {
            None
        }
    }
}
