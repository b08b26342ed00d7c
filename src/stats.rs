//! Match statistics - which tier answered and how long matching took

use std::time::{Duration, Instant};

use crate::matcher::{MatchResult, MatchTier};

#[derive(Clone, Default)]
pub struct MatchStats {
    pub exact: Vec<Sample>,
    pub keyword: Vec<Sample>,
    pub prefix: Vec<Sample>,
    pub no_match: Vec<Sample>,
    /// Final transcripts dropped because no trigger phrase was found
    pub untriggered: usize,
}

#[derive(Clone)]
pub struct Sample {
    pub duration: Duration,
    pub results: usize,
}

impl MatchStats {
    pub fn record(&mut self, result: &MatchResult, duration: Duration) {
        let sample = Sample {
            duration,
            results: result.len(),
        };
        match result.tier {
            Some(MatchTier::Exact) => self.exact.push(sample),
            Some(MatchTier::Keyword) => self.keyword.push(sample),
            Some(MatchTier::Prefix) => self.prefix.push(sample),
            None => self.no_match.push(sample),
        }
    }

    pub fn record_untriggered(&mut self) {
        self.untriggered += 1;
    }

    pub fn searches(&self) -> usize {
        self.exact.len() + self.keyword.len() + self.prefix.len() + self.no_match.len()
    }

    pub fn summary(&self) -> String {
        let mut out = String::new();

        for (label, samples) in [
            ("Exact", &self.exact),
            ("Keyword", &self.keyword),
            ("Prefix", &self.prefix),
            ("No match", &self.no_match),
        ] {
            if samples.is_empty() {
                continue;
            }
            let (avg, max) = Self::calc(samples);
            let results: usize = samples.iter().map(|s| s.results).sum();
            out.push_str(&format!(
                "{} (n={}): avg={}us max={}us results={}\n",
                label,
                samples.len(),
                avg.as_micros(),
                max.as_micros(),
                results
            ));
        }

        if self.untriggered > 0 {
            out.push_str(&format!("No trigger phrase: {}\n", self.untriggered));
        }

        if out.is_empty() {
            out.push_str("No searches yet.\n");
        }
        out
    }

    fn calc(samples: &[Sample]) -> (Duration, Duration) {
        let total: Duration = samples.iter().map(|s| s.duration).sum();
        let avg = total / samples.len() as u32;
        let max = samples.iter().map(|s| s.duration).max().unwrap_or_default();
        (avg, max)
    }
}

/// Times a single search
pub struct Timer {
    start: Instant,
}

impl Timer {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn finish(self, stats: &mut MatchStats, result: &MatchResult) {
        stats.record(result, self.start.elapsed());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_summary() {
        assert_eq!(MatchStats::default().summary(), "No searches yet.\n");
    }

    #[test]
    fn test_records_by_tier() {
        let mut stats = MatchStats::default();
        let none = MatchResult::default();
        stats.record(&none, Duration::from_micros(10));
        stats.record(&none, Duration::from_micros(30));
        stats.record_untriggered();

        assert_eq!(stats.searches(), 2);
        assert_eq!(stats.no_match.len(), 2);
        let summary = stats.summary();
        assert!(summary.contains("No match (n=2): avg=20us max=30us results=0"));
        assert!(summary.contains("No trigger phrase: 1"));
        assert!(!summary.contains("Exact"));
    }
}
