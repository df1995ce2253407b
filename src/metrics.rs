//! This module contains the [MetricsCollector], which runs solving
//! strategies on boards and records their reports for later comparison. The
//! collector is the seam towards display layers: it holds plain data and
//! does no formatting itself.

use crate::SudokuBoard;
use crate::solver::{SolveReport, Solver};

/// Records the [SolveReport]s of solver runs, keyed by the strategy name, in
/// the order the runs were made. A typical use is running every strategy on
/// the same board and asking for the [fastest](MetricsCollector::fastest)
/// one.
#[derive(Clone, Debug, Default)]
pub struct MetricsCollector {
    reports: Vec<(&'static str, SolveReport)>
}

impl MetricsCollector {

    /// Creates a new metrics collector without any recorded reports.
    pub fn new() -> MetricsCollector {
        MetricsCollector {
            reports: Vec::new()
        }
    }

    /// Runs the given solver on the given board, records the resulting
    /// report under the solver's name, and returns a reference to it.
    pub fn run(&mut self, solver: &dyn Solver, board: &SudokuBoard)
            -> &SolveReport {
        let report = solver.solve(board);
        self.reports.push((solver.name(), report));
        &self.reports.last().unwrap().1
    }

    /// Gets the recorded reports as `(strategy name, report)` pairs, in run
    /// order.
    pub fn reports(&self) -> &[(&'static str, SolveReport)] {
        &self.reports
    }

    /// Gets the name and report of the strategy with the lowest wall-clock
    /// time among the recorded runs that actually solved their board, or
    /// `None` if no run did. Ties keep the earlier run.
    pub fn fastest(&self) -> Option<(&'static str, &SolveReport)> {
        self.reports.iter()
            .filter(|(_, report)| report.is_solved())
            .min_by_key(|(_, report)| report.elapsed)
            .map(|(name, report)| (*name, report))
    }

    /// Removes all recorded reports.
    pub fn clear(&mut self) {
        self.reports.clear();
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::puzzles::{self, Difficulty};
    use crate::solver::{
        BacktrackingSolver,
        MrvBacktrackingSolver,
        Outcome
    };
    use crate::solver::propagation::NakedSinglesSolver;

    #[test]
    fn collector_records_reports_in_run_order() {
        let board = puzzles::exemplar(Difficulty::Easy);
        let mut collector = MetricsCollector::new();

        collector.run(&BacktrackingSolver, &board);
        collector.run(&MrvBacktrackingSolver, &board);

        let names: Vec<&str> = collector.reports().iter()
            .map(|(name, _)| *name)
            .collect();

        assert_eq!(vec!["Backtracking", "MRV Backtracking"], names);
        assert!(collector.reports().iter()
            .all(|(_, report)| report.is_solved()));
    }

    #[test]
    fn fastest_ignores_unsuccessful_runs() {
        let board = puzzles::exemplar(Difficulty::Expert);
        let mut collector = MetricsCollector::new();

        // stalls on this board, so it must not win despite being quick
        collector.run(&NakedSinglesSolver, &board);

        assert!(collector.fastest().is_none());

        collector.run(&MrvBacktrackingSolver, &board);

        let (name, report) = collector.fastest().unwrap();

        assert_eq!("MRV Backtracking", name);
        assert!(report.is_solved());
    }

    #[test]
    fn run_returns_the_recorded_report() {
        let board = puzzles::exemplar(Difficulty::Easy);
        let mut collector = MetricsCollector::new();
        let report = collector.run(&NakedSinglesSolver, &board);

        assert!(matches!(report.outcome, Outcome::Solved(_)));
    }

    #[test]
    fn clear_removes_all_reports() {
        let board = puzzles::exemplar(Difficulty::Easy);
        let mut collector = MetricsCollector::new();
        collector.run(&BacktrackingSolver, &board);
        collector.clear();

        assert!(collector.reports().is_empty());
        assert!(collector.fastest().is_none());
    }
}
