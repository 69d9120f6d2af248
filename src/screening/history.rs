//! In-memory session history.

use crate::domain::ScreeningSession;

/// Capacity-bounded session history with ring buffer semantics.
///
/// Holds completed sessions in memory for the dashboard view; nothing
/// is persisted.
pub struct SessionHistory {
    /// Stored sessions (oldest first).
    sessions: Vec<ScreeningSession>,
    /// Maximum number of sessions to retain.
    max_sessions: usize,
}

/// Summary statistics over stored sessions.
#[derive(Debug, Clone)]
pub struct HistoryStats {
    /// Number of sessions in the history.
    pub count: usize,
    /// Mean report confidence.
    pub confidence_mean: f64,
    /// Lowest report confidence.
    pub confidence_min: f64,
    /// Highest report confidence.
    pub confidence_max: f64,
    /// Fraction of sessions with every domain classified.
    pub determined_fraction: f64,
    /// Number of sessions with at least one High signal.
    pub high_signal_count: usize,
}

impl SessionHistory {
    /// Create a history with a given maximum capacity.
    ///
    /// When the capacity is exceeded, the oldest sessions are evicted.
    #[must_use]
    pub fn new(max_sessions: usize) -> Self {
        Self {
            sessions: Vec::with_capacity(max_sessions.min(256)),
            max_sessions: max_sessions.max(1),
        }
    }

    /// Create with default capacity (50 sessions).
    #[must_use]
    pub fn default_capacity() -> Self {
        Self::new(50)
    }

    /// Push a completed session into the history.
    ///
    /// If the history is at capacity, the oldest session is evicted.
    pub fn push(&mut self, session: ScreeningSession) {
        if self.sessions.len() >= self.max_sessions {
            self.sessions.remove(0);
        }
        self.sessions.push(session);
    }

    /// Get the most recent session, if any.
    #[must_use]
    pub fn latest(&self) -> Option<&ScreeningSession> {
        self.sessions.last()
    }

    /// Get the last `n` sessions (most recent last).
    ///
    /// Returns fewer than `n` if the history contains fewer sessions.
    #[must_use]
    pub fn history(&self, n: usize) -> &[ScreeningSession] {
        let start = self.sessions.len().saturating_sub(n);
        &self.sessions[start..]
    }

    /// Compute summary statistics over all stored sessions.
    ///
    /// Returns `None` if the history is empty.
    #[must_use]
    pub fn stats(&self) -> Option<HistoryStats> {
        if self.sessions.is_empty() {
            return None;
        }

        let n = self.sessions.len() as f64;
        let mut sum = 0.0;
        let mut min = f64::MAX;
        let mut max = f64::MIN;
        let mut determined = 0_usize;
        let mut high = 0_usize;

        for session in &self.sessions {
            let report = session.report();
            sum += report.confidence;
            min = min.min(report.confidence);
            max = max.max(report.confidence);
            if report.is_fully_determined() {
                determined += 1;
            }
            if report.has_high_signal() {
                high += 1;
            }
        }

        Some(HistoryStats {
            count: self.sessions.len(),
            confidence_mean: sum / n,
            confidence_min: min,
            confidence_max: max,
            determined_fraction: determined as f64 / n,
            high_signal_count: high,
        })
    }

    /// Number of sessions currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether the history is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Maximum capacity of the history.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.max_sessions
    }

    /// Clear all stored sessions.
    pub fn clear(&mut self) {
        self.sessions.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ScreeningModule;
    use crate::screening::{MeasurementSource, ScreeningService, SyntheticSource};

    fn make_session(seed: u64, modules: &[ScreeningModule]) -> ScreeningSession {
        let mut service = ScreeningService::new(SyntheticSource::with_seed(seed));
        service.run(modules).unwrap()
    }

    #[test]
    fn empty_history() {
        let history = SessionHistory::new(10);
        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
        assert!(history.latest().is_none());
        assert!(history.stats().is_none());
    }

    #[test]
    fn push_and_retrieve() {
        let mut history = SessionHistory::new(10);
        let session = make_session(1, &ScreeningModule::ALL);
        let id = session.id().clone();
        history.push(session);
        assert_eq!(history.len(), 1);
        assert_eq!(history.latest().unwrap().id(), &id);
    }

    #[test]
    fn eviction_at_capacity() {
        let mut history = SessionHistory::new(2);
        let first = make_session(1, &ScreeningModule::ALL);
        let first_id = first.id().clone();
        history.push(first);
        history.push(make_session(2, &ScreeningModule::ALL));
        history.push(make_session(3, &ScreeningModule::ALL));
        assert_eq!(history.len(), 2);
        // Oldest evicted
        assert!(history.history(10).iter().all(|s| s.id() != &first_id));
    }

    #[test]
    fn stats_track_confidence_and_determination() {
        let mut history = SessionHistory::new(10);
        // One full run (confidence 1.0) and one cardio-only run (0.4)
        history.push(make_session(4, &ScreeningModule::ALL));
        history.push(make_session(5, &[ScreeningModule::FaceScan]));

        let stats = history.stats().unwrap();
        assert_eq!(stats.count, 2);
        assert!((stats.confidence_mean - 0.7).abs() < 1e-9);
        assert_eq!(stats.confidence_min, 0.4);
        assert_eq!(stats.confidence_max, 1.0);
        assert!((stats.determined_fraction - 0.5).abs() < 1e-9);
    }

    #[test]
    fn capacity_is_at_least_one() {
        let mut history = SessionHistory::new(0);
        assert_eq!(history.capacity(), 1);
        let mut source = SyntheticSource::with_seed(9);
        let bundle = source.capture(&ScreeningModule::ALL);
        let report = crate::stratify::RiskStratifier::with_defaults().stratify(&bundle);
        history.push(ScreeningSession::new(
            ScreeningModule::ALL.to_vec(),
            bundle,
            report,
        ));
        assert_eq!(history.len(), 1);
    }
}
