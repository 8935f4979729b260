//! Request counters for the recommend endpoint.
//!
//! Lock-free counters shared by all handlers and exported in Prometheus text
//! format by the `/metrics` handler.

use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};

use auxilio_core::Catalogue;

/// Counters for `POST /recommend`.
#[derive(Debug)]
pub struct ServerMetrics {
    /// Total recommend requests received.
    pub requests_total: AtomicU64,
    /// Requests rejected with an unknown category.
    pub unknown_category_total: AtomicU64,
    /// Requests that failed with an internal error.
    pub internal_errors_total: AtomicU64,
    matches: Vec<(String, AtomicU64)>,
}

impl ServerMetrics {
    /// Creates counters with one match counter per catalogue category.
    #[must_use]
    pub fn new(catalogue: &Catalogue) -> Self {
        Self {
            requests_total: AtomicU64::new(0),
            unknown_category_total: AtomicU64::new(0),
            internal_errors_total: AtomicU64::new(0),
            matches: catalogue
                .names()
                .map(|n| (n.to_string(), AtomicU64::new(0)))
                .collect(),
        }
    }

    /// Increments the request counter.
    pub fn inc_requests(&self) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Increments the unknown-category counter.
    pub fn inc_unknown_category(&self) {
        self.unknown_category_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Increments the internal error counter.
    pub fn inc_internal_errors(&self) {
        self.internal_errors_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a successful match for `category`.
    pub fn record_match(&self, category: &str) {
        if let Some((_, counter)) = self.matches.iter().find(|(name, _)| name == category) {
            counter.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Returns the match count for `category` (0 if unknown).
    #[must_use]
    pub fn matches_for(&self, category: &str) -> u64 {
        self.matches
            .iter()
            .find(|(name, _)| name == category)
            .map_or(0, |(_, c)| c.load(Ordering::Relaxed))
    }

    /// Exports counters in Prometheus text format.
    #[must_use]
    pub fn export_prometheus(&self) -> String {
        let mut output = String::new();

        // Writing into a String cannot fail.
        let _ = writeln!(
            output,
            "# HELP auxilio_info Auxilio server information\n# TYPE auxilio_info gauge\nauxilio_info{{version=\"{}\"}} 1\n",
            env!("CARGO_PKG_VERSION")
        );
        let _ = writeln!(
            output,
            "# HELP auxilio_recommend_requests_total Recommend requests received\n# TYPE auxilio_recommend_requests_total counter\nauxilio_recommend_requests_total {}\n",
            self.requests_total.load(Ordering::Relaxed)
        );
        let _ = writeln!(
            output,
            "# HELP auxilio_unknown_category_total Requests rejected with an unknown category\n# TYPE auxilio_unknown_category_total counter\nauxilio_unknown_category_total {}\n",
            self.unknown_category_total.load(Ordering::Relaxed)
        );
        let _ = writeln!(
            output,
            "# HELP auxilio_internal_errors_total Requests failed with an internal error\n# TYPE auxilio_internal_errors_total counter\nauxilio_internal_errors_total {}\n",
            self.internal_errors_total.load(Ordering::Relaxed)
        );

        let _ = writeln!(
            output,
            "# HELP auxilio_category_matches_total Matches per category\n# TYPE auxilio_category_matches_total counter"
        );
        for (name, counter) in &self.matches {
            let _ = writeln!(
                output,
                "auxilio_category_matches_total{{category=\"{}\"}} {}",
                name,
                counter.load(Ordering::Relaxed)
            );
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        let metrics = ServerMetrics::new(&Catalogue::builtin());
        assert_eq!(metrics.requests_total.load(Ordering::Relaxed), 0);
        assert_eq!(metrics.matches_for("corte"), 0);
    }

    #[test]
    fn test_record_match_ignores_unknown_names() {
        let metrics = ServerMetrics::new(&Catalogue::builtin());
        metrics.record_match("corte");
        metrics.record_match("corte");
        metrics.record_match("fractura");
        assert_eq!(metrics.matches_for("corte"), 2);
        assert_eq!(metrics.matches_for("fractura"), 0);
    }

    #[test]
    fn test_export_prometheus_format() {
        let metrics = ServerMetrics::new(&Catalogue::builtin());
        metrics.inc_requests();
        metrics.inc_unknown_category();
        metrics.record_match("quemadura");

        let output = metrics.export_prometheus();
        assert!(output.contains("# TYPE auxilio_recommend_requests_total counter"));
        assert!(output.contains("auxilio_recommend_requests_total 1"));
        assert!(output.contains("auxilio_unknown_category_total 1"));
        assert!(output.contains("auxilio_internal_errors_total 0"));
        assert!(output.contains("auxilio_category_matches_total{category=\"quemadura\"} 1"));
        assert!(output.contains("auxilio_category_matches_total{category=\"otro\"} 0"));
    }
}
