//! Compiled-in query parameters.
//!
//! There is deliberately no config file and no CLI override for these values:
//! this tool runs exactly one query against exactly one table. Changing the
//! query means changing these constants and rebuilding.

/// The fixed SQL statement submitted on every run.
pub const FLOW_LOGS_QUERY: &str = "SELECT * FROM vpc_flow_logs_table LIMIT 10;";

/// The Athena database the query runs against.
pub const FLOW_LOGS_DATABASE: &str = "vpc_flow_logs_db";

/// S3 location where Athena writes result data and metadata.
pub const RESULTS_OUTPUT_LOCATION: &str = "s3://vpc-flow-logs-athena-querylogs-results/";

/// The full set of parameters for one query submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySpec {
    /// SQL text to execute.
    pub sql: String,
    /// Source database name.
    pub database: String,
    /// Output-storage URI for result data.
    pub output_location: String,
}

impl Default for QuerySpec {
    fn default() -> Self {
        Self {
            sql: FLOW_LOGS_QUERY.to_string(),
            database: FLOW_LOGS_DATABASE.to_string(),
            output_location: RESULTS_OUTPUT_LOCATION.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_spec_uses_fixed_literals() {
        let spec = QuerySpec::default();
        assert_eq!(spec.sql, "SELECT * FROM vpc_flow_logs_table LIMIT 10;");
        assert_eq!(spec.database, "vpc_flow_logs_db");
        assert_eq!(
            spec.output_location,
            "s3://vpc-flow-logs-athena-querylogs-results/"
        );
    }

    #[test]
    fn test_output_location_is_s3_uri() {
        assert!(RESULTS_OUTPUT_LOCATION.starts_with("s3://"));
        assert!(RESULTS_OUTPUT_LOCATION.ends_with('/'));
    }
}
