use std::num::NonZero;

use crate::board::Board;
use crate::location::Location;

/// How often [`BacktrackSearch::run_with`] hands out a [`Progress`] snapshot,
/// in trial steps, unless overridden with [`BacktrackSearch::report_every`].
pub const DEFAULT_REPORT_EVERY: u64 = 10_000_000;

/// Terminal states of a [`BacktrackSearch`]. Both are expected outcomes of
/// the search, not failures.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SearchOutcome {
    /// The cursor fell off the end of the grid: every cell holds a legal value.
    Solved,
    /// The cursor fell off the start of the grid: every assignment was tried
    /// and rejected, so the puzzle has no solution.
    Exhausted,
}

/// Reasons [`Board::solve`] may fail.
#[derive(Debug)]
pub enum SolveFailure {
    /// The search space ran out without ever completing the grid legally.
    Exhausted {
        /// Trial steps taken before giving up.
        steps: u64,
    },
}

/// How a finished [`BacktrackSearch`] ended, and how much work it took.
#[derive(Clone, Copy, Debug)]
pub struct SearchReport {
    /// How the search ended.
    pub outcome: SearchOutcome,
    /// Total trial steps taken: one per value cycled on some cell.
    pub steps: u64,
}

/// A snapshot of a running search, handed to the observer passed to
/// [`BacktrackSearch::run_with`].
pub struct Progress<'a> {
    /// Trial steps taken so far.
    pub steps: u64,
    /// The cell currently under consideration.
    pub cursor: Location,
    /// The partially filled board.
    pub board: &'a Board,
}

/// Depth-first search with chronological backtracking over the cells of a
/// [`Board`], in row-major order.
///
/// The search owns only the cursor and loop control; all grid state and all
/// legality logic stay on the board, which is mutated in place. Use
/// [`Self::run`] or [`Self::run_with`] to drive the search to one of its
/// terminal states.
pub struct BacktrackSearch<'a> {
    board: &'a mut Board,
    cursor: Location,
    steps: u64,
    report_every: NonZero<u64>,
}

impl<'a> From<&'a mut Board> for BacktrackSearch<'a> {
    fn from(board: &'a mut Board) -> Self {
        Self {
            board,
            cursor: Location(0, 0),
            steps: 0,
            report_every: NonZero::new(DEFAULT_REPORT_EVERY).unwrap(),
        }
    }
}

impl BacktrackSearch<'_> {
    /// Hand a [`Progress`] snapshot to the observer every `every` trial steps
    /// instead of every [`DEFAULT_REPORT_EVERY`].
    pub fn report_every(mut self, every: NonZero<u64>) -> Self {
        self.report_every = every;
        self
    }

    /// Run the search to one of its terminal states without observation.
    pub fn run(self) -> SearchReport {
        self.run_with(|_| {})
    }

    /// Run the search to one of its terminal states, periodically handing a
    /// [`Progress`] snapshot to `observe` (including one before the first
    /// trial, showing the untouched board).
    ///
    /// The loop is unbounded in principle: a puzzle without a solution is only
    /// discovered by exhausting the whole space.
    pub fn run_with<F>(mut self, mut observe: F) -> SearchReport
    where
        F: FnMut(Progress<'_>),
    {
        loop {
            if self.steps % self.report_every.get() == 0 {
                observe(Progress {
                    steps: self.steps,
                    cursor: self.cursor,
                    board: self.board,
                });
            }
            self.steps += 1;

            let have_candidate = self.board.cycle(self.cursor);
            if have_candidate && self.board.is_still_valid(self.cursor) {
                match self.board.advance(self.cursor) {
                    Some(next) => self.cursor = next,
                    None => {
                        return SearchReport {
                            outcome: SearchOutcome::Solved,
                            steps: self.steps,
                        }
                    }
                }
            } else {
                if have_candidate && !self.board.is_fixed(self.cursor) {
                    // an illegal candidate on a free cell: its next value must
                    // be ruled out before any retreat
                    continue;
                }

                // either the cell cycled back to unset, or it is a given that
                // no retrying can change
                match self.board.retreat(self.cursor) {
                    Some(previous) => self.cursor = previous,
                    None => {
                        return SearchReport {
                            outcome: SearchOutcome::Exhausted,
                            steps: self.steps,
                        }
                    }
                }
            }
        }
    }
}
