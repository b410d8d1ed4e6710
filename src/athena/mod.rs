//! Query service abstraction for flowq.
//!
//! Provides a trait-based interface over the remote query service, allowing
//! the real Athena client and test doubles to be used interchangeably.

mod client;
mod mock;
mod types;

pub use client::AthenaClient;
pub use mock::{FailingQueryService, MockQueryService};
pub use types::{ResultRow, ResultSet};

use std::str::FromStr;

use async_trait::async_trait;

use crate::config::QuerySpec;
use crate::error::Result;

/// Lifecycle state of a submitted query execution.
///
/// The service transitions state asynchronously; this program only ever
/// observes the current value through polling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryState {
    /// Accepted by the service, not yet running.
    Queued,
    /// Currently executing.
    Running,
    /// Finished and results are available.
    Succeeded,
    /// Finished with an error on the service side.
    Failed,
    /// Cancelled before completion.
    Cancelled,
}

impl QueryState {
    /// Returns true if the query will not change state further.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed | Self::Cancelled)
    }

    /// Returns the state as the service's wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Queued => "QUEUED",
            Self::Running => "RUNNING",
            Self::Succeeded => "SUCCEEDED",
            Self::Failed => "FAILED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

impl FromStr for QueryState {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "QUEUED" => Ok(Self::Queued),
            "RUNNING" => Ok(Self::Running),
            "SUCCEEDED" => Ok(Self::Succeeded),
            "FAILED" => Ok(Self::Failed),
            "CANCELLED" => Ok(Self::Cancelled),
            _ => Err(format!("Unknown query state: {s}")),
        }
    }
}

impl std::fmt::Display for QueryState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Trait defining the interface to the remote query service.
///
/// Implementations must be thread-safe (Send + Sync) to support async
/// operations. This program is a pure client; it does not define or control
/// the wire protocol, only consumes it.
#[async_trait]
pub trait QueryService: Send + Sync {
    /// Submits the query described by `spec` for execution.
    ///
    /// Returns the opaque execution id identifying this run. The service
    /// begins executing immediately and writes results to the spec's output
    /// location.
    async fn start_query(&self, spec: &QuerySpec) -> Result<String>;

    /// Returns the current state of the execution.
    async fn query_state(&self, execution_id: &str) -> Result<QueryState>;

    /// Fetches the first page of result rows for a succeeded execution.
    async fn fetch_results(&self, execution_id: &str) -> Result<ResultSet>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_from_str() {
        assert_eq!("QUEUED".parse::<QueryState>().unwrap(), QueryState::Queued);
        assert_eq!(
            "RUNNING".parse::<QueryState>().unwrap(),
            QueryState::Running
        );
        assert_eq!(
            "SUCCEEDED".parse::<QueryState>().unwrap(),
            QueryState::Succeeded
        );
        assert_eq!("FAILED".parse::<QueryState>().unwrap(), QueryState::Failed);
        assert_eq!(
            "CANCELLED".parse::<QueryState>().unwrap(),
            QueryState::Cancelled
        );
        assert!("succeeded".parse::<QueryState>().is_err());
        assert!("UNKNOWN".parse::<QueryState>().is_err());
    }

    #[test]
    fn test_state_display_round_trips() {
        for state in [
            QueryState::Queued,
            QueryState::Running,
            QueryState::Succeeded,
            QueryState::Failed,
            QueryState::Cancelled,
        ] {
            assert_eq!(state.to_string().parse::<QueryState>().unwrap(), state);
        }
    }

    #[test]
    fn test_terminal_states() {
        assert!(!QueryState::Queued.is_terminal());
        assert!(!QueryState::Running.is_terminal());
        assert!(QueryState::Succeeded.is_terminal());
        assert!(QueryState::Failed.is_terminal());
        assert!(QueryState::Cancelled.is_terminal());
    }

    #[tokio::test]
    async fn test_mock_service_implements_trait() {
        let service: Box<dyn QueryService> = Box::new(MockQueryService::new());
        let id = service.start_query(&QuerySpec::default()).await.unwrap();
        assert!(!id.is_empty());
    }
}
