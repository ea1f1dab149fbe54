//! Reachability checks for evidence links.
//!
//! Each of the four evidence URLs is probed with a `HEAD` request. Results
//! are reported per label; a probe failure is a report row rather than an
//! error so the whole set is always checked.

mod probe;

use std::fmt;

use async_trait::async_trait;

use crate::evidence::{EvidenceLabel, EvidenceMap};

pub use probe::{DEFAULT_TIMEOUT, HttpLinkProbe};

/// Outcome of probing one URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The server answered with a success or redirect status.
    Reachable(u16),
    /// The server answered with a client or server error status.
    Rejected(u16),
    /// The request failed before a status was received.
    Unreachable,
    /// No URL was recorded for the label.
    Missing,
}

impl ProbeOutcome {
    /// Classifies an HTTP status code.
    #[must_use]
    pub const fn from_status(code: u16) -> Self {
        if matches!(code, 200..=399) {
            Self::Reachable(code)
        } else {
            Self::Rejected(code)
        }
    }

    /// Whether the link counts as healthy.
    #[must_use]
    pub const fn is_ok(self) -> bool {
        matches!(self, Self::Reachable(_))
    }

    /// Status code to report; zero when none was received.
    #[must_use]
    pub const fn code(self) -> u16 {
        match self {
            Self::Reachable(code) | Self::Rejected(code) => code,
            Self::Unreachable | Self::Missing => 0,
        }
    }
}

/// Something that can probe a URL.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkProbe: Send + Sync {
    /// Probes `url` and classifies the response.
    async fn probe(&self, url: &str) -> ProbeOutcome;
}

/// Result of checking one evidence label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkCheck {
    /// The evidence label.
    pub label: EvidenceLabel,
    /// URL that was probed; empty when none was recorded.
    pub url: String,
    /// Probe outcome.
    pub outcome: ProbeOutcome,
}

impl fmt::Display for LinkCheck {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.outcome.is_ok() { "OK" } else { "FAIL" };
        write!(
            formatter,
            "- {}: {status} ({}) {}",
            self.label,
            self.outcome.code(),
            self.url
        )
    }
}

/// Probes every evidence label, in label order.
///
/// Labels without a URL are reported as [`ProbeOutcome::Missing`] without a
/// request being made.
pub async fn check_links<P>(evidence: &EvidenceMap, probe: &P) -> Vec<LinkCheck>
where
    P: LinkProbe + ?Sized,
{
    let mut checks = Vec::with_capacity(EvidenceLabel::ALL.len());
    for label in EvidenceLabel::ALL {
        let url = evidence.url_or_empty(label).to_owned();
        let outcome = if url.is_empty() {
            ProbeOutcome::Missing
        } else {
            probe.probe(&url).await
        };
        tracing::debug!(%label, %url, ?outcome, "probed evidence link");
        checks.push(LinkCheck {
            label,
            url,
            outcome,
        });
    }
    checks
}

/// Number of checks that did not succeed.
#[must_use]
pub fn failure_count(checks: &[LinkCheck]) -> usize {
    checks.iter().filter(|check| !check.outcome.is_ok()).count()
}

#[cfg(test)]
mod tests {
    //! Unit tests for link checking and report formatting.

    use mockall::predicate::eq;
    use rstest::rstest;

    use super::{LinkCheck, MockLinkProbe, ProbeOutcome, check_links, failure_count};
    use crate::evidence::{EvidenceLabel, EvidenceMap};

    #[rstest]
    #[case(200, true)]
    #[case(302, true)]
    #[case(399, true)]
    #[case(404, false)]
    #[case(500, false)]
    fn classifies_status_codes(#[case] code: u16, #[case] healthy: bool) {
        assert_eq!(ProbeOutcome::from_status(code).is_ok(), healthy);
    }

    #[rstest]
    fn formats_report_rows() {
        let ok = LinkCheck {
            label: EvidenceLabel::TraceReport,
            url: "http://d".to_owned(),
            outcome: ProbeOutcome::Reachable(200),
        };
        let missing = LinkCheck {
            label: EvidenceLabel::SubmissionScreenshot,
            url: String::new(),
            outcome: ProbeOutcome::Missing,
        };

        assert_eq!(ok.to_string(), "- Trace Report HTML: OK (200) http://d");
        assert_eq!(missing.to_string(), "- 申请前截图（页面）: FAIL (0) ");
    }

    #[tokio::test]
    async fn probes_only_recorded_urls() {
        let mut evidence = EvidenceMap::new();
        evidence.insert(EvidenceLabel::ReviewDialogScreenshot, "http://b");
        evidence.insert(EvidenceLabel::TraceArchive, "http://c");

        let mut probe = MockLinkProbe::new();
        probe
            .expect_probe()
            .with(eq("http://b"))
            .times(1)
            .returning(|_| ProbeOutcome::Reachable(200));
        probe
            .expect_probe()
            .with(eq("http://c"))
            .times(1)
            .returning(|_| ProbeOutcome::Rejected(404));

        let checks = check_links(&evidence, &probe).await;

        let outcomes: Vec<_> = checks.iter().map(|check| check.outcome).collect();
        assert_eq!(
            outcomes,
            vec![
                ProbeOutcome::Missing,
                ProbeOutcome::Reachable(200),
                ProbeOutcome::Rejected(404),
                ProbeOutcome::Missing,
            ]
        );
        assert_eq!(failure_count(&checks), 3);
    }
}
