//! TiDB telemetry collector.

use chrono::Utc;

use super::{column, CollectorError, ConnectionParams, Connector, DbTelemetry, SqlConnection};

const VERSION_SQL: &str = "SELECT @@GLOBAL.version;";

const PARAMETERS_SQL: &str = "SHOW CONFIG;";

/// (metric name, query), keyed into the metrics map as `(name,instance)`.
const METRICS_SQL: &[(&str, &str)] = &[
    (
        "node_disk_io_util",
        "SELECT instance, sum(value) from METRICS_SCHEMA.node_disk_io_util where device='vdc' and time=now() group by instance;",
    ),
    (
        "tidb_qps",
        "SELECT instance, sum(value) from METRICS_SCHEMA.tidb_qps where result='OK' and time=now() group by instance;",
    ),
    (
        "tidb_query_duration",
        "SELECT instance, sum(value) from METRICS_SCHEMA.tidb_query_duration where quantile=0.99 and time = now() group by instance;",
    ),
    (
        "tikv_grpc_message_duration",
        "SELECT instance, sum(value) from METRICS_SCHEMA.tikv_grpc_message_duration where time=now() group by instance;",
    ),
    (
        "tikv_grpc_message_total_count",
        "SELECT instance, sum(value) from METRICS_SCHEMA.tikv_grpc_message_total_count where time=now() group by instance;",
    ),
    (
        "tikv_memory",
        "SELECT instance, sum(value) from METRICS_SCHEMA.tikv_memory where time=now() group by instance;",
    ),
    (
        "tikv_thread_cpu",
        "SELECT instance, sum(value) from METRICS_SCHEMA.tikv_thread_cpu where time=now() group by instance;",
    ),
];

/// Collects version, `SHOW CONFIG` parameters and `METRICS_SCHEMA` metrics.
pub struct TidbCollector;

impl TidbCollector {
    /// Connect and gather telemetry. Never fails: the first connection or
    /// query error is logged and whatever was gathered so far is returned.
    pub fn collect<C: Connector>(connector: &C, params: &ConnectionParams) -> DbTelemetry {
        let mut telemetry = DbTelemetry {
            collected_at: Some(Utc::now()),
            ..DbTelemetry::default()
        };
        let result = connector
            .connect(params)
            .and_then(|mut conn| Self::collect_into(&mut conn, &mut telemetry));
        if let Err(err) = result {
            log::error!("Error while collecting DB parameters: {err}");
        }
        telemetry
    }

    fn collect_into<S: SqlConnection>(
        conn: &mut S,
        telemetry: &mut DbTelemetry,
    ) -> Result<(), CollectorError> {
        let rows = conn.query(VERSION_SQL)?;
        if let Some(row) = rows.first() {
            // First column, whatever the driver labelled it.
            telemetry.version = row.first().map(|(_, value)| value.clone());
        }

        for row in conn.query(PARAMETERS_SQL)? {
            let key = format!(
                "({},{},{})",
                column(&row, "Type")?,
                column(&row, "Instance")?,
                column(&row, "Name")?
            );
            telemetry
                .parameters
                .insert(key, column(&row, "Value")?.to_string());
        }

        for &(metric, sql) in METRICS_SQL {
            for row in conn.query(sql)? {
                let key = format!("({},{})", metric, column(&row, "instance")?);
                telemetry
                    .metrics
                    .insert(key, column(&row, "sum(value)")?.to_string());
            }
        }

        log::debug!(
            "collected {} parameters and {} metrics",
            telemetry.parameters.len(),
            telemetry.metrics.len()
        );
        Ok(())
    }
}
