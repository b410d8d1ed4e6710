//! Athena-backed query service implementation.
//!
//! Thin wrapper over the AWS SDK: three calls (StartQueryExecution,
//! GetQueryExecution, GetQueryResults) mapped onto the `QueryService` trait.
//! Credentials and region are delegated to the calling environment through
//! the aws-config default provider chain.

use std::str::FromStr;

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_athena::error::DisplayErrorContext;
use aws_sdk_athena::types::{QueryExecutionContext, ResultConfiguration};
use aws_sdk_athena::Client;
use tracing::debug;

use crate::athena::{QueryService, QueryState, ResultRow, ResultSet};
use crate::config::QuerySpec;
use crate::error::{FlowqError, Result};

/// Query service client backed by AWS Athena.
#[derive(Debug, Clone)]
pub struct AthenaClient {
    client: Client,
}

impl AthenaClient {
    /// Creates a client from the ambient AWS environment.
    ///
    /// Region and credentials come from the default provider chain
    /// (environment variables, shared config files, instance metadata).
    pub async fn from_env() -> Self {
        let config = aws_config::load_defaults(BehaviorVersion::latest()).await;
        Self {
            client: Client::new(&config),
        }
    }

    /// Creates a client from an already-configured SDK client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl QueryService for AthenaClient {
    async fn start_query(&self, spec: &QuerySpec) -> Result<String> {
        let context = QueryExecutionContext::builder()
            .database(&spec.database)
            .build();
        let result_config = ResultConfiguration::builder()
            .output_location(&spec.output_location)
            .build();

        let output = self
            .client
            .start_query_execution()
            .query_string(&spec.sql)
            .query_execution_context(context)
            .result_configuration(result_config)
            .send()
            .await
            .map_err(|e| {
                FlowqError::submit(format!(
                    "StartQueryExecution failed: {}",
                    DisplayErrorContext(&e)
                ))
            })?;

        output
            .query_execution_id()
            .map(str::to_owned)
            .ok_or_else(|| FlowqError::submit("service returned no query execution id"))
    }

    async fn query_state(&self, execution_id: &str) -> Result<QueryState> {
        let output = self
            .client
            .get_query_execution()
            .query_execution_id(execution_id)
            .send()
            .await
            .map_err(|e| {
                FlowqError::status(format!(
                    "GetQueryExecution failed: {}",
                    DisplayErrorContext(&e)
                ))
            })?;

        let status = output
            .query_execution()
            .and_then(|qe| qe.status())
            .ok_or_else(|| FlowqError::status("response missing query status"))?;

        let state = status
            .state()
            .ok_or_else(|| FlowqError::status("response missing query state"))?;

        if let Some(reason) = status.state_change_reason() {
            debug!(execution_id, reason, "state change reason");
        }

        QueryState::from_str(state.as_str()).map_err(FlowqError::status)
    }

    async fn fetch_results(&self, execution_id: &str) -> Result<ResultSet> {
        let output = self
            .client
            .get_query_results()
            .query_execution_id(execution_id)
            .send()
            .await
            .map_err(|e| {
                FlowqError::results(format!(
                    "GetQueryResults failed: {}",
                    DisplayErrorContext(&e)
                ))
            })?;

        // First page only; the NextToken, if any, is ignored.
        let rows = output
            .result_set()
            .map(|rs| rs.rows())
            .unwrap_or_default()
            .iter()
            .map(|row| {
                ResultRow::new(
                    row.data()
                        .iter()
                        .map(|datum| datum.var_char_value().map(str::to_owned))
                        .collect(),
                )
            })
            .collect();

        Ok(ResultSet::new(rows))
    }
}
