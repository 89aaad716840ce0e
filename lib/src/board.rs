use std::fmt::{Debug, Display, Formatter};

use ndarray::Array2;

use crate::cell::{Cell, Value};
use crate::location::{Dimension, Location};
use crate::search::{BacktrackSearch, SearchOutcome, SolveFailure};

/// Offset pairs which, together with the cell they are applied to, cover every
/// horizontal and vertical window of three containing that cell.
const RUN_WINDOWS: [[(isize, isize); 2]; 6] = [
    [(-2, 0), (-1, 0)],
    [(-1, 0), (1, 0)],
    [(1, 0), (2, 0)],
    [(0, -2), (0, -1)],
    [(0, -1), (0, 1)],
    [(0, 1), (0, 2)],
];

/// A Binairo board: a rectangular grid of binary cells whose side lengths are
/// both even.
///
/// [`Board`]s should be built using a [`BoardBuilder`](crate::builder::BoardBuilder),
/// most often via [`BoardBuilder::from_text`](crate::builder::BoardBuilder::from_text).
/// The board owns all grid state and all legality logic; a
/// [`BacktrackSearch`] mutates it in place through the crate-internal
/// transitions below.
pub struct Board {
    pub(crate) cells: Array2<Cell>,
    // width, height
    pub(crate) dims: (Dimension, Dimension),
}

impl Board {
    /// This board's dimensions, in `(width, height)` order. Both are even.
    pub fn dims(&self) -> (Dimension, Dimension) {
        self.dims
    }

    /// The value currently held at `location`, or `None` if the cell is unset
    /// or `location` is out of bounds.
    pub fn value(&self, location: Location) -> Option<Value> {
        self.cells.get(location.as_index()).and_then(Cell::value)
    }

    /// Whether the cell at `location` is a given from the input puzzle.
    /// Out-of-bounds locations are not fixed.
    pub fn is_fixed(&self, location: Location) -> bool {
        self.cells.get(location.as_index()).is_some_and(Cell::is_fixed)
    }

    /// Step the cell at `at` to its next candidate value. See [`Cell::cycle`].
    pub(crate) fn cycle(&mut self, at: Location) -> bool {
        self.cells[at.as_index()].cycle()
    }

    /// Decide whether every rule still holds after the cell at `at` was
    /// (re)assigned, in a scan filling the board left to right, top to bottom.
    ///
    /// Only concrete cells take part: unset cells beyond the scan front never
    /// match anything, while givens ahead of it do, so a placement which can
    /// no longer avoid a run of three is rejected immediately. Runs in time
    /// proportional to the current row length plus column height, not the
    /// whole board.
    pub(crate) fn is_still_valid(&self, at: Location) -> bool {
        // `at` itself is always concrete here: the search only checks after
        // placing a candidate, and givens are concrete from construction
        let here = self.value(at);

        // no three identical values adjacent horizontally or vertically
        if RUN_WINDOWS
            .iter()
            .any(|window| window.iter().all(|offset| self.value(at.offset_by(*offset)) == here))
        {
            return false;
        }

        let Location(x, y) = at;
        let (cols, rows) = (self.dims.0.get(), self.dims.1.get());

        // neither value may claim more than half of a row
        let (mut zeros, mut ones) = (0, 0);
        for i in 0..=x {
            match self.value(Location(i, y)) {
                Some(Value::Zero) => zeros += 1,
                Some(Value::One) => ones += 1,
                None => unreachable!("unset cell at {} inside the scanned prefix", Location(i, y)),
            }
        }
        if zeros > cols / 2 || ones > cols / 2 {
            return false;
        }

        // a row can only be compared once complete; rows above `y` are already
        // pairwise distinct, so the new row only needs checking against each
        if x == cols - 1
            && (0..y).any(|prior| {
                self.cells
                    .row(prior)
                    .iter()
                    .zip(self.cells.row(y))
                    .all(|(theirs, ours)| theirs.value() == ours.value())
            })
        {
            return false;
        }

        // neither value may claim more than half of a column
        let (mut zeros, mut ones) = (0, 0);
        for i in 0..=y {
            match self.value(Location(x, i)) {
                Some(Value::Zero) => zeros += 1,
                Some(Value::One) => ones += 1,
                None => unreachable!("unset cell at {} inside the scanned prefix", Location(x, i)),
            }
        }
        if zeros > rows / 2 || ones > rows / 2 {
            return false;
        }

        // and no two complete columns may be identical
        if y == rows - 1
            && (0..x).any(|prior| {
                self.cells
                    .column(prior)
                    .iter()
                    .zip(self.cells.column(x))
                    .all(|(theirs, ours)| theirs.value() == ours.value())
            })
        {
            return false;
        }

        true
    }

    /// The next cell after `from` in row-major order, or `None` when `from`
    /// is the last cell; falling off the end means the board is complete.
    pub(crate) fn advance(&self, from: Location) -> Option<Location> {
        let mut next = Location(from.0 + 1, from.1);
        if next.0 == self.dims.0.get() {
            next = Location(0, next.1 + 1);
        }
        (next.1 < self.dims.1.get()).then_some(next)
    }

    /// The nearest non-fixed cell before `from` in row-major order, or `None`
    /// when no such cell exists; falling off the start means the search space
    /// is exhausted. Fixed cells are skipped, never retried.
    pub(crate) fn retreat(&self, from: Location) -> Option<Location> {
        let mut location = from;
        loop {
            location = match location.0.checked_sub(1) {
                Some(x) => Location(x, location.1),
                None => Location(self.dims.0.get() - 1, location.1.checked_sub(1)?),
            };
            if !self.is_fixed(location) {
                return Some(location);
            }
        }
    }

    /// Solves this board, mutating and consuming `self` and returning a solved
    /// version of `self`, deferring to a [`BacktrackSearch`] over the grid.
    ///
    /// Use a [`BacktrackSearch`] directly instead to observe progress or to
    /// keep the exhausted board around.
    pub fn solve(mut self) -> Result<Self, SolveFailure> {
        let report = BacktrackSearch::from(&mut self).run();
        match report.outcome {
            SearchOutcome::Solved => Ok(self),
            SearchOutcome::Exhausted => Err(SolveFailure::Exhausted { steps: report.steps }),
        }
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // three characters per cell: value, given marker, separator
        let mut out = String::with_capacity(self.cells.nrows() * (self.cells.ncols() * 3 + 1));

        for row in self.cells.rows() {
            for cell in row {
                out.push(cell.value().map_or('X', |value| value.symbol()));
                out.push(if cell.is_fixed() { '*' } else { ' ' });
                out.push(' ');
            }
            out.push('\n');
        }

        write!(f, "{out}")
    }
}

impl Debug for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}
