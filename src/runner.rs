//! Submit-poll-fetch orchestration.
//!
//! Drives one query from submission through completion against any
//! `QueryService` implementation, so the flow can be tested independently of
//! the real Athena client.

use std::time::Duration;

use tracing::{debug, info};

use crate::athena::{QueryService, QueryState, ResultSet};
use crate::config::QuerySpec;
use crate::error::{FlowqError, Result};

/// Fixed delay between consecutive status checks.
///
/// The loop is a busy-poll with fixed cadence: no backoff and no iteration
/// cap. A query stuck in `RUNNING` keeps the process alive indefinitely.
pub const POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Runs one query end to end: submit, poll to completion, fetch results.
pub struct QueryRunner<'a> {
    service: &'a dyn QueryService,
}

impl<'a> QueryRunner<'a> {
    /// Creates a runner over the given service.
    pub fn new(service: &'a dyn QueryService) -> Self {
        Self { service }
    }

    /// Submits the query and drives it to completion.
    ///
    /// Returns the fetched rows once the query reaches `SUCCEEDED`. A
    /// `FAILED` or `CANCELLED` terminal state produces a `QueryFailed` error
    /// whose message names the state; no fetch is attempted in that case.
    pub async fn run(&self, spec: &QuerySpec) -> Result<RunOutcome> {
        let execution_id = self.service.start_query(spec).await?;
        info!(%execution_id, database = %spec.database, "query submitted");

        let state = self.wait_for_completion(&execution_id).await?;
        info!(%execution_id, %state, "query completed");

        let results = self.service.fetch_results(&execution_id).await?;
        debug!(%execution_id, rows = results.row_count(), "results fetched");

        Ok(RunOutcome {
            execution_id,
            state,
            results,
        })
    }

    /// Polls until the execution reaches a terminal state.
    ///
    /// Sleeps before every check, including the first, matching the original
    /// cadence of the workflow this tool automates.
    async fn wait_for_completion(&self, execution_id: &str) -> Result<QueryState> {
        loop {
            tokio::time::sleep(POLL_INTERVAL).await;

            let state = self.service.query_state(execution_id).await?;
            match state {
                QueryState::Succeeded => return Ok(state),
                QueryState::Failed | QueryState::Cancelled => {
                    return Err(FlowqError::query_failed(format!(
                        "Query State: {state}, check Athena for the logs"
                    )));
                }
                QueryState::Queued | QueryState::Running => {
                    debug!(execution_id, %state, "still waiting");
                }
            }
        }
    }
}

/// Everything produced by a successful run.
#[derive(Debug)]
pub struct RunOutcome {
    /// Execution id assigned by the service.
    pub execution_id: String,
    /// Final state observed (always `Succeeded`).
    pub state: QueryState,
    /// First page of result rows.
    pub results: ResultSet,
}
