//! Polling of a pull request's combined commit status.
//!
//! Each poll resolves the head commit, fetches its combined status, and
//! emits [`MonitorEvent`]s to a [`MonitorSink`]. Failing states raise an
//! alert event. The loop sleeps between polls unless it runs once.

mod sink;

use std::fmt;
use std::time::Duration;

use crate::github::{
    CombinedStatus, PullRequestLocator, StatusContext, StatusGateway, WorkflowError,
};

pub use sink::{MonitorSink, TimestampedLog, timestamp};

/// Default delay between polls.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(30);

const FAILING_STATES: [&str; 2] = ["failure", "error"];

fn is_failing(state: &str) -> bool {
    FAILING_STATES.contains(&state)
}

/// Combined status reduced to what the monitor reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusSummary {
    /// Combined state across all contexts.
    pub state: String,
    /// Individual contexts in API order.
    pub contexts: Vec<StatusContext>,
}

impl StatusSummary {
    /// Whether the combined state or any context reports a failure.
    #[must_use]
    pub fn is_failing(&self) -> bool {
        is_failing(&self.state)
            || self
                .contexts
                .iter()
                .any(|context| is_failing(&context.state))
    }
}

impl From<CombinedStatus> for StatusSummary {
    fn from(value: CombinedStatus) -> Self {
        Self {
            state: value.state,
            contexts: value.statuses,
        }
    }
}

impl fmt::Display for StatusSummary {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let contexts = self
            .contexts
            .iter()
            .map(|context| format!("{}:{}", context.context, context.state))
            .collect::<Vec<_>>()
            .join(", ");
        write!(formatter, "combined_state={} contexts=[{contexts}]", self.state)
    }
}

/// Something worth logging during a monitoring session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonitorEvent {
    /// The session started.
    Started {
        /// Repository owner.
        owner: String,
        /// Repository name.
        repository: String,
        /// Pull request number.
        number: u64,
        /// Poll interval.
        interval: Duration,
    },
    /// The pull request head moved to a new commit.
    HeadChanged {
        /// New head SHA.
        sha: String,
    },
    /// The head commit could not be resolved.
    HeadUnavailable {
        /// Failure detail.
        message: String,
    },
    /// The combined status could not be fetched.
    StatusUnavailable {
        /// Failure detail.
        message: String,
    },
    /// A status snapshot.
    Status(StatusSummary),
    /// A snapshot containing a failing state.
    Alert(StatusSummary),
}

impl MonitorEvent {
    /// Whether the event should also be shown on the console.
    #[must_use]
    pub const fn is_console(&self) -> bool {
        matches!(
            self,
            Self::HeadUnavailable { .. } | Self::StatusUnavailable { .. } | Self::Alert(_)
        )
    }
}

impl fmt::Display for MonitorEvent {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Started {
                owner,
                repository,
                number,
                interval,
            } => write!(
                formatter,
                "monitor start owner={owner} repo={repository} pr={number} interval={}s",
                interval.as_secs()
            ),
            Self::HeadChanged { sha } => write!(formatter, "head sha={sha}"),
            Self::HeadUnavailable { .. } => {
                formatter.write_str("ERROR: unable to retrieve PR head sha")
            }
            Self::StatusUnavailable { message } => {
                write!(formatter, "ERROR: status api failed: {message}")
            }
            Self::Status(summary) => write!(formatter, "{summary}"),
            Self::Alert(summary) => write!(formatter, "ALERT: failure detected {summary}"),
        }
    }
}

/// Outcome of a single poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    /// A status snapshot was obtained.
    Reported(StatusSummary),
    /// The head commit or its status could not be fetched.
    Failed,
}

/// Polls commit status for one pull request.
pub struct StatusMonitor<'client, Gateway>
where
    Gateway: StatusGateway,
{
    gateway: &'client Gateway,
    locator: PullRequestLocator,
    last_sha: Option<String>,
}

impl<'client, Gateway> StatusMonitor<'client, Gateway>
where
    Gateway: StatusGateway,
{
    /// Creates a monitor for the pull request.
    #[must_use]
    pub const fn new(gateway: &'client Gateway, locator: PullRequestLocator) -> Self {
        Self {
            gateway,
            locator,
            last_sha: None,
        }
    }

    /// Performs one poll, recording its events in `sink`.
    ///
    /// Gateway failures become events rather than errors.
    ///
    /// # Errors
    ///
    /// Returns the sink's error when an event cannot be recorded.
    pub async fn poll(&mut self, sink: &mut dyn MonitorSink) -> Result<PollOutcome, WorkflowError> {
        let sha = match self.gateway.head_sha(&self.locator).await {
            Ok(sha) => sha,
            Err(error) => {
                tracing::warn!(%error, "head SHA lookup failed");
                sink.record(&MonitorEvent::HeadUnavailable {
                    message: error.to_string(),
                })?;
                return Ok(PollOutcome::Failed);
            }
        };

        if self.last_sha.as_deref() != Some(sha.as_str()) {
            sink.record(&MonitorEvent::HeadChanged { sha: sha.clone() })?;
            self.last_sha = Some(sha.clone());
        }

        let summary = match self.gateway.combined_status(&self.locator, &sha).await {
            Ok(status) => StatusSummary::from(status),
            Err(error) => {
                sink.record(&MonitorEvent::StatusUnavailable {
                    message: error.to_string(),
                })?;
                return Ok(PollOutcome::Failed);
            }
        };

        sink.record(&MonitorEvent::Status(summary.clone()))?;
        if summary.is_failing() {
            sink.record(&MonitorEvent::Alert(summary.clone()))?;
        }
        Ok(PollOutcome::Reported(summary))
    }

    /// Runs the polling loop.
    ///
    /// With `once` set, returns the outcome of the first poll. Otherwise the
    /// loop sleeps for `interval` between polls and never returns normally.
    ///
    /// # Errors
    ///
    /// Returns the sink's error when an event cannot be recorded.
    pub async fn run(
        &mut self,
        sink: &mut dyn MonitorSink,
        interval: Duration,
        once: bool,
    ) -> Result<PollOutcome, WorkflowError> {
        sink.record(&MonitorEvent::Started {
            owner: self.locator.owner().to_owned(),
            repository: self.locator.repository().to_owned(),
            number: self.locator.number().get(),
            interval,
        })?;

        loop {
            let outcome = self.poll(sink).await?;
            if once {
                return Ok(outcome);
            }
            tokio::time::sleep(interval).await;
        }
    }
}
