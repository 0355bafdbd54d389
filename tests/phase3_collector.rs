//! Phase 3 tests: TiDB telemetry collection against a scripted connection.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use sql_tfidf::collector::{
    CollectorError, ConnectionParams, Connector, Row, SqlConnection, TidbCollector,
};

// ==================== Helpers ====================

/// Connection answering queries from a script; unscripted queries fail.
struct ScriptedConnection {
    script: HashMap<String, Vec<Row>>,
    executed: Arc<Mutex<Vec<String>>>,
}

impl SqlConnection for ScriptedConnection {
    fn query(&mut self, sql: &str) -> Result<Vec<Row>, CollectorError> {
        self.executed.lock().unwrap().push(sql.to_string());
        self.script
            .get(sql)
            .cloned()
            .ok_or_else(|| CollectorError::Query(format!("unexpected query: {sql}")))
    }
}

struct ScriptedConnector {
    script: HashMap<String, Vec<Row>>,
    executed: Arc<Mutex<Vec<String>>>,
}

impl ScriptedConnector {
    fn new(script: HashMap<String, Vec<Row>>) -> Self {
        Self {
            script,
            executed: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn executed(&self) -> Vec<String> {
        self.executed.lock().unwrap().clone()
    }
}

impl Connector for ScriptedConnector {
    type Connection = ScriptedConnection;

    fn connect(&self, params: &ConnectionParams) -> Result<ScriptedConnection, CollectorError> {
        if params.password == "wrong" {
            return Err(CollectorError::Connection("access denied".into()));
        }
        Ok(ScriptedConnection {
            script: self.script.clone(),
            executed: Arc::clone(&self.executed),
        })
    }
}

fn row(pairs: &[(&str, &str)]) -> Row {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn params(password: &str) -> ConnectionParams {
    ConnectionParams {
        url: "mysql://127.0.0.1:4000/bench".into(),
        username: "root".into(),
        password: password.into(),
    }
}

fn metric_sql(name: &str) -> String {
    let filter = match name {
        "node_disk_io_util" => "device='vdc' and time=now()",
        "tidb_qps" => "result='OK' and time=now()",
        "tidb_query_duration" => "quantile=0.99 and time = now()",
        _ => "time=now()",
    };
    format!("SELECT instance, sum(value) from METRICS_SCHEMA.{name} where {filter} group by instance;")
}

const METRICS: &[&str] = &[
    "node_disk_io_util",
    "tidb_qps",
    "tidb_query_duration",
    "tikv_grpc_message_duration",
    "tikv_grpc_message_total_count",
    "tikv_memory",
    "tikv_thread_cpu",
];

fn full_script() -> HashMap<String, Vec<Row>> {
    let mut script = HashMap::new();
    script.insert(
        "SELECT @@GLOBAL.version;".to_string(),
        vec![row(&[("@@GLOBAL.version", "5.7.25-TiDB-v7.5.0")])],
    );
    script.insert(
        "SHOW CONFIG;".to_string(),
        vec![
            row(&[
                ("Type", "tidb"),
                ("Instance", "127.0.0.1:4000"),
                ("Name", "log.level"),
                ("Value", "info"),
            ]),
            row(&[
                ("Type", "tikv"),
                ("Instance", "127.0.0.1:20160"),
                ("Name", "raftstore.sync-log"),
                ("Value", "true"),
            ]),
        ],
    );
    for name in METRICS {
        script.insert(
            metric_sql(name),
            vec![row(&[("instance", "127.0.0.1:10080"), ("sum(value)", "1.5")])],
        );
    }
    script
}

// ==================== Collection Tests ====================

#[test]
fn test_collect_everything() {
    let connector = ScriptedConnector::new(full_script());
    let telemetry = TidbCollector::collect(&connector, &params("secret"));

    assert_eq!(telemetry.version.as_deref(), Some("5.7.25-TiDB-v7.5.0"));
    assert_eq!(telemetry.parameters.len(), 2);
    assert_eq!(
        telemetry.parameters.get("(tidb,127.0.0.1:4000,log.level)").map(String::as_str),
        Some("info")
    );
    assert_eq!(telemetry.metrics.len(), METRICS.len());
    assert_eq!(
        telemetry.metrics.get("(tidb_qps,127.0.0.1:10080)").map(String::as_str),
        Some("1.5")
    );
    assert_eq!(connector.executed().len(), 2 + METRICS.len());
}

#[test]
fn test_connection_failure_is_not_propagated() {
    let connector = ScriptedConnector::new(full_script());
    let telemetry = TidbCollector::collect(&connector, &params("wrong"));
    assert!(telemetry.is_empty());
    assert!(connector.executed().is_empty());
}

#[test]
fn test_query_failure_keeps_partial_results() {
    let mut script = full_script();
    script.remove("SHOW CONFIG;");
    let connector = ScriptedConnector::new(script);
    let telemetry = TidbCollector::collect(&connector, &params("secret"));

    assert!(telemetry.version.is_some());
    assert!(telemetry.parameters.is_empty());
    assert!(telemetry.metrics.is_empty());
    // Collection stops at the first failing query.
    assert_eq!(connector.executed().len(), 2);
}

#[test]
fn test_missing_column_stops_collection() {
    let mut script = full_script();
    script.insert(
        metric_sql("tikv_memory"),
        vec![row(&[("instance", "127.0.0.1:20180")])],
    );
    let connector = ScriptedConnector::new(script);
    let telemetry = TidbCollector::collect(&connector, &params("secret"));

    assert_eq!(telemetry.parameters.len(), 2);
    // Metrics before tikv_memory (in name order) were kept.
    assert_eq!(telemetry.metrics.len(), 5);
    assert!(!telemetry.metrics.contains_key("(tikv_memory,127.0.0.1:20180)"));
}

#[test]
fn test_empty_version_result() {
    let mut script = full_script();
    script.insert("SELECT @@GLOBAL.version;".to_string(), Vec::new());
    let connector = ScriptedConnector::new(script);
    let telemetry = TidbCollector::collect(&connector, &params("secret"));
    assert!(telemetry.version.is_none());
    assert_eq!(telemetry.metrics.len(), METRICS.len());
}

#[test]
fn test_version_is_first_column() {
    let mut script = full_script();
    script.insert(
        "SELECT @@GLOBAL.version;".to_string(),
        vec![row(&[
            ("version", "v7.5.0"),
            ("a", "z"),
            ("b", "y"),
            ("c", "x"),
            ("d", "w"),
        ])],
    );
    let connector = ScriptedConnector::new(script);
    for _ in 0..50 {
        let telemetry = TidbCollector::collect(&connector, &params("secret"));
        assert_eq!(telemetry.version.as_deref(), Some("v7.5.0"));
    }
}

#[test]
fn test_telemetry_serializes() {
    let connector = ScriptedConnector::new(full_script());
    let telemetry = TidbCollector::collect(&connector, &params("secret"));
    let json = serde_json::to_value(&telemetry).unwrap();
    assert_eq!(json["version"], "5.7.25-TiDB-v7.5.0");
    assert!(json["collected_at"].is_string());
    assert_eq!(json["metrics"].as_object().unwrap().len(), METRICS.len());
}
