//! Loading serialized records of any supported kind.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::de::DeserializeOwned;
use serde_json::Value;

use tether_core::{Admission, AdmissionError};
use tether_types::{
    GKECluster, List, MySQLInstance, Object, PostgreSQLInstance, Summarize, Summary,
};

/// A record whose kind was resolved from its `kind` field.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyRecord {
    MySQL(MySQLInstance),
    PostgreSQL(PostgreSQLInstance),
    Gke(GKECluster),
}

impl AnyRecord {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MySQL(_) => MySQLInstance::KIND,
            Self::PostgreSQL(_) => PostgreSQLInstance::KIND,
            Self::Gke(_) => GKECluster::KIND,
        }
    }

    pub fn summary(&self) -> Summary {
        match self {
            Self::MySQL(record) => record.summary(),
            Self::PostgreSQL(record) => record.summary(),
            Self::Gke(record) => record.summary(),
        }
    }

    pub fn admit(&self, admission: &Admission) -> Result<(), AdmissionError> {
        match self {
            Self::MySQL(record) => admission.check(record),
            Self::PostgreSQL(record) => admission.check(record),
            Self::Gke(record) => admission.check(record),
        }
    }
}

/// Read `path` and decode every record in it. A list document yields its
/// items in order.
pub fn load(path: &Path) -> Result<Vec<AnyRecord>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse(&content).with_context(|| format!("decoding {}", path.display()))
}

pub fn parse(content: &str) -> Result<Vec<AnyRecord>> {
    let value: Value = serde_json::from_str(content)?;
    let Some(kind) = value.get("kind").and_then(Value::as_str) else {
        bail!("document has no kind");
    };

    let kind = kind.to_owned();
    match kind.as_str() {
        k if k == MySQLInstance::KIND => one(value, AnyRecord::MySQL),
        k if k == PostgreSQLInstance::KIND => one(value, AnyRecord::PostgreSQL),
        k if k == GKECluster::KIND => one(value, AnyRecord::Gke),
        "MySQLInstanceList" => many(value, AnyRecord::MySQL),
        "PostgreSQLInstanceList" => many(value, AnyRecord::PostgreSQL),
        "GKEClusterList" => many(value, AnyRecord::Gke),
        other => bail!("unsupported kind {other:?}"),
    }
}

fn one<T: DeserializeOwned>(value: Value, wrap: fn(T) -> AnyRecord) -> Result<Vec<AnyRecord>> {
    Ok(vec![wrap(serde_json::from_value(value)?)])
}

/// Items may omit `kind`; when present it must name the list's element kind.
fn many<T>(value: Value, wrap: fn(T) -> AnyRecord) -> Result<Vec<AnyRecord>>
where
    T: DeserializeOwned + Object,
{
    let list: List<Value> = serde_json::from_value(value)?;
    tracing::debug!(items = list.len(), "Decoded list");

    let mut records = Vec::with_capacity(list.len());
    for (index, item) in list.items.into_iter().enumerate() {
        if let Some(kind) = item.get("kind").and_then(Value::as_str)
            && kind != T::KIND
        {
            bail!("list item {index} has kind {kind:?}, expected {:?}", T::KIND);
        }
        let record = serde_json::from_value(item)
            .with_context(|| format!("decoding list item {index}"))?;
        records.push(wrap(record));
    }
    Ok(records)
}
