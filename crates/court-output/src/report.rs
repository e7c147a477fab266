//! The human-readable end-of-run report.

use std::fmt;

use court_core::Discipline;
use court_sim::RunSummary;

/// Final report: per-class service statistics plus the closing state.
///
/// `Display` renders the whole report; the CLI just prints it.
#[derive(Clone, PartialEq, Debug)]
pub struct RunReport {
    summary: RunSummary,
}

impl RunReport {
    pub fn new(summary: RunSummary) -> Self {
        Self { summary }
    }

    pub fn summary(&self) -> &RunSummary {
        &self.summary
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = &self.summary;

        writeln!(f, "final clock: {:.2} min ({:.2} h)", s.final_clock_min, s.final_clock_min / 60.0)?;
        writeln!(f, "court: {}", s.court)?;
        writeln!(
            f,
            "waiting: shared {}, basketball {}",
            s.shared_queue_len, s.basketball_queue_len
        )?;
        writeln!(
            f,
            "teams: {} created, {} finished",
            s.teams_created, s.teams_finished
        )?;

        for d in Discipline::ALL {
            let stats = s.per_class[d];
            match stats.average_wait() {
                Some(avg) => writeln!(
                    f,
                    "{d:<10} {} served, average wait {avg:.2} min (total {:.2})",
                    stats.served, stats.total_wait
                )?,
                None => writeln!(f, "{d:<10} none served")?,
            }
        }
        Ok(())
    }
}
