//! DBMS telemetry collection (version, parameters, metrics).
//!
//! Collectors only sit next to the TF-IDF core: they never fail the run that
//! uses them. Database access goes through the [`Connector`] and
//! [`SqlConnection`] traits so any driver can be plugged in.

pub mod tidb;

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

pub use tidb::TidbCollector;

/// Where and as whom to connect.
#[derive(Debug, Clone)]
pub struct ConnectionParams {
    pub url: String,
    pub username: String,
    pub password: String,
}

/// A result row: (column label, value as text) in select-list order.
pub type Row = Vec<(String, String)>;

/// Failures reported by a driver. Collectors log these and carry on.
#[derive(Debug, Error)]
pub enum CollectorError {
    #[error("connection failed: {0}")]
    Connection(String),

    #[error("query failed: {0}")]
    Query(String),

    #[error("column {0:?} missing from result row")]
    MissingColumn(String),
}

/// An open connection able to run read-only queries.
pub trait SqlConnection {
    fn query(&mut self, sql: &str) -> Result<Vec<Row>, CollectorError>;
}

/// Opens connections from connection parameters.
pub trait Connector {
    type Connection: SqlConnection;

    fn connect(&self, params: &ConnectionParams) -> Result<Self::Connection, CollectorError>;
}

/// Telemetry gathered from one DBMS. Fields left empty when collection
/// failed before reaching them.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DbTelemetry {
    pub version: Option<String>,
    pub parameters: BTreeMap<String, String>,
    pub metrics: BTreeMap<String, String>,
    pub collected_at: Option<DateTime<Utc>>,
}

impl DbTelemetry {
    pub fn is_empty(&self) -> bool {
        self.version.is_none() && self.parameters.is_empty() && self.metrics.is_empty()
    }
}

/// Fetch a column from a row or report it missing.
pub(crate) fn column<'r>(row: &'r Row, name: &str) -> Result<&'r str, CollectorError> {
    row.iter()
        .find(|(label, _)| label == name)
        .map(|(_, value)| value.as_str())
        .ok_or_else(|| CollectorError::MissingColumn(name.to_string()))
}
