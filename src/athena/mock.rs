//! Mock query services for testing.
//!
//! Provide scripted state sequences and canned rows without making real
//! service calls, and record enough about the call pattern for tests to
//! assert on submission counts, poll cadence, and fetch ordering.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::time::Instant;

use crate::athena::{QueryService, QueryState, ResultRow, ResultSet};
use crate::config::QuerySpec;
use crate::error::{FlowqError, Result};

/// Execution id handed out by the mock.
pub const MOCK_EXECUTION_ID: &str = "mock-execution-0001";

/// Mock query service driven by a scripted state sequence.
///
/// Each status poll consumes the next state in the script; once the script is
/// exhausted the final state repeats. Used for unit testing without a live
/// service.
#[derive(Debug)]
pub struct MockQueryService {
    /// Scripted states, consumed one per poll.
    states: Vec<QueryState>,
    /// Rows returned by `fetch_results`.
    rows: Vec<ResultRow>,
    /// Specs passed to `start_query`, in call order.
    submitted: Mutex<Vec<QuerySpec>>,
    /// Timestamps of each status poll.
    poll_instants: Mutex<Vec<Instant>>,
    /// Number of status polls served.
    poll_count: AtomicUsize,
    /// Number of result fetches served.
    fetch_count: AtomicUsize,
    /// Last state reported to the caller.
    last_state: Mutex<Option<QueryState>>,
}

impl Default for MockQueryService {
    fn default() -> Self {
        Self {
            states: vec![QueryState::Succeeded],
            rows: Vec::new(),
            submitted: Mutex::new(Vec::new()),
            poll_instants: Mutex::new(Vec::new()),
            poll_count: AtomicUsize::new(0),
            fetch_count: AtomicUsize::new(0),
            last_state: Mutex::new(None),
        }
    }
}

impl MockQueryService {
    /// Creates a mock that immediately reports `SUCCEEDED` and has no rows.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the scripted state sequence.
    pub fn with_states(mut self, states: Vec<QueryState>) -> Self {
        self.states = states;
        self
    }

    /// Sets the rows returned on a successful fetch.
    pub fn with_rows(mut self, rows: Vec<ResultRow>) -> Self {
        self.rows = rows;
        self
    }

    /// Returns the specs submitted so far, in call order.
    pub fn submitted_specs(&self) -> Vec<QuerySpec> {
        self.submitted.lock().unwrap().clone()
    }

    /// Returns the number of status polls served.
    pub fn poll_count(&self) -> usize {
        self.poll_count.load(Ordering::SeqCst)
    }

    /// Returns the number of result fetches served.
    pub fn fetch_count(&self) -> usize {
        self.fetch_count.load(Ordering::SeqCst)
    }

    /// Returns the timestamp of each status poll, in call order.
    pub fn poll_instants(&self) -> Vec<Instant> {
        self.poll_instants.lock().unwrap().clone()
    }
}

#[async_trait]
impl QueryService for MockQueryService {
    async fn start_query(&self, spec: &QuerySpec) -> Result<String> {
        self.submitted.lock().unwrap().push(spec.clone());
        Ok(MOCK_EXECUTION_ID.to_string())
    }

    async fn query_state(&self, execution_id: &str) -> Result<QueryState> {
        if execution_id != MOCK_EXECUTION_ID {
            return Err(FlowqError::status(format!(
                "unknown execution id: {execution_id}"
            )));
        }

        let index = self.poll_count.fetch_add(1, Ordering::SeqCst);
        self.poll_instants.lock().unwrap().push(Instant::now());

        // Repeat the final state once the script runs out.
        let state = *self
            .states
            .get(index.min(self.states.len().saturating_sub(1)))
            .ok_or_else(|| FlowqError::internal("mock has no scripted states"))?;

        *self.last_state.lock().unwrap() = Some(state);
        Ok(state)
    }

    async fn fetch_results(&self, execution_id: &str) -> Result<ResultSet> {
        if execution_id != MOCK_EXECUTION_ID {
            return Err(FlowqError::results(format!(
                "unknown execution id: {execution_id}"
            )));
        }

        // A fetch before a terminal state was reported is a caller bug.
        let last = *self.last_state.lock().unwrap();
        if !last.is_some_and(|s| s.is_terminal()) {
            return Err(FlowqError::internal(
                "fetch_results called before a terminal state was observed",
            ));
        }

        let _ = self.fetch_count.fetch_add(1, Ordering::SeqCst);
        Ok(ResultSet::new(self.rows.clone()))
    }
}

/// Query service whose every call fails, for error-path testing.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingQueryService;

impl FailingQueryService {
    /// Creates a new failing service.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl QueryService for FailingQueryService {
    async fn start_query(&self, _spec: &QuerySpec) -> Result<String> {
        Err(FlowqError::submit("simulated submission failure"))
    }

    async fn query_state(&self, _execution_id: &str) -> Result<QueryState> {
        Err(FlowqError::status("simulated status failure"))
    }

    async fn fetch_results(&self, _execution_id: &str) -> Result<ResultSet> {
        Err(FlowqError::results("simulated results failure"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_mock_records_submission() {
        let mock = MockQueryService::new();
        let spec = QuerySpec::default();

        let id = mock.start_query(&spec).await.unwrap();

        assert_eq!(id, MOCK_EXECUTION_ID);
        assert_eq!(mock.submitted_specs(), vec![spec]);
    }

    #[tokio::test]
    async fn test_mock_serves_scripted_states() {
        let mock = MockQueryService::new().with_states(vec![
            QueryState::Queued,
            QueryState::Running,
            QueryState::Succeeded,
        ]);
        let id = mock.start_query(&QuerySpec::default()).await.unwrap();

        assert_eq!(mock.query_state(&id).await.unwrap(), QueryState::Queued);
        assert_eq!(mock.query_state(&id).await.unwrap(), QueryState::Running);
        assert_eq!(mock.query_state(&id).await.unwrap(), QueryState::Succeeded);
        // Script exhausted: final state repeats.
        assert_eq!(mock.query_state(&id).await.unwrap(), QueryState::Succeeded);
        assert_eq!(mock.poll_count(), 4);
    }

    #[tokio::test]
    async fn test_mock_rejects_unknown_execution_id() {
        let mock = MockQueryService::new();
        let err = mock.query_state("bogus-id").await.unwrap_err();
        assert!(err.to_string().contains("unknown execution id"));
    }

    #[tokio::test]
    async fn test_mock_rejects_fetch_before_terminal_state() {
        let mock = MockQueryService::new().with_states(vec![QueryState::Running]);
        let id = mock.start_query(&QuerySpec::default()).await.unwrap();

        let _ = mock.query_state(&id).await.unwrap();
        let err = mock.fetch_results(&id).await.unwrap_err();

        assert!(err.to_string().contains("before a terminal state"));
        assert_eq!(mock.fetch_count(), 0);
    }

    #[tokio::test]
    async fn test_mock_returns_configured_rows() {
        let rows = vec![ResultRow::new(vec![Some("srcaddr".to_string())])];
        let mock = MockQueryService::new().with_rows(rows.clone());
        let id = mock.start_query(&QuerySpec::default()).await.unwrap();

        let _ = mock.query_state(&id).await.unwrap();
        let results = mock.fetch_results(&id).await.unwrap();

        assert_eq!(results.rows, rows);
        assert_eq!(mock.fetch_count(), 1);
    }

    #[tokio::test]
    async fn test_failing_service_fails_every_call() {
        let service = FailingQueryService::new();

        assert!(service.start_query(&QuerySpec::default()).await.is_err());
        assert!(service.query_state("any").await.is_err());
        assert!(service.fetch_results("any").await.is_err());
    }
}
