use std::mem;

use ndarray::Array2;

use crate::board::Board;
use crate::cell::{Cell, Value};
use crate::location::Dimension;

/// A cell marker as written in puzzle text: a given `0` or `1`, or an unknown
/// the solver must fill.
///
/// Deliberately distinct from the runtime [`Value`](crate::Value): a symbol
/// exists only at parse time, while an unset runtime cell is a transient
/// search state.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Symbol {
    /// A fixed zero.
    Zero,
    /// A fixed one.
    One,
    /// A cell left to the solver.
    Unknown,
}

/// Reasons a builder may become invalid while building.
#[derive(Copy, Clone, Debug)]
pub enum BuilderInvalidReason {
    /// A row's length does not match the length of the first row.
    RaggedRow,
    /// The board would have no cells at all.
    Empty,
    /// The row or column count is odd; the balance rule needs even sides.
    OddDimension,
}

/// Collects rows of [`Symbol`]s and checks board shape before producing a
/// [`Board`].
///
/// Builders mutate themselves while building but can be [`Clone`]d to save
/// their state at some point.
#[derive(Clone, Default)]
pub struct BoardBuilder {
    rows: Vec<Vec<Symbol>>,
    invalid_reasons: Vec<BuilderInvalidReason>,
}

impl BoardBuilder {
    /// Parse puzzle text into a builder.
    ///
    /// `0`, `1` and `X` mark cells; `#` starts a comment running to the end of
    /// the line; a newline (or the end of the input) ends the current row; any
    /// other character is ignored. Rows holding at most one cell are discarded
    /// as blank, so decorated or empty lines never produce bogus rows. The
    /// leniency means a [`Board`]'s [`Display`](std::fmt::Display) render
    /// parses back: the given markers and padding fall away.
    pub fn from_text(text: &str) -> Self {
        let mut builder = Self::default();
        let mut row = Vec::new();
        let mut in_comment = false;

        for c in text.chars() {
            if in_comment {
                if c != '\n' {
                    continue;
                }
                in_comment = false;
            }

            match c {
                '0' => row.push(Symbol::Zero),
                '1' => row.push(Symbol::One),
                'X' => row.push(Symbol::Unknown),
                '#' => in_comment = true,
                '\n' => {
                    if row.len() > 1 {
                        builder.push_row(mem::take(&mut row));
                    } else {
                        row.clear();
                    }
                }
                _ => {}
            }
        }
        if row.len() > 1 {
            builder.push_row(row);
        }

        builder
    }

    /// Append one row of symbols.
    ///
    /// May cause the builder to enter a [`RaggedRow`](BuilderInvalidReason::RaggedRow)
    /// invalid state if the row's length differs from the first row's.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn push_row(&mut self, row: Vec<Symbol>) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if self.rows.first().is_some_and(|first| first.len() != row.len()) {
            self.invalid_reasons.push(BuilderInvalidReason::RaggedRow);
            return self;
        }

        self.rows.push(row);
        self
    }

    /// Check the validity of this builder, ensuring no
    /// [`BuilderInvalidReason`] condition has arisen.
    ///
    /// Returns `None` if the builder is valid, `Some(&Vec<BuilderInvalidReason>)` otherwise.
    /// Note that shape conditions are only checked by [`Self::build`].
    pub fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    /// Convert the state of this builder into a [`Board`].
    /// If the builder is invalid for any reason, a [`Vec`] of
    /// [`BuilderInvalidReason`] will indicate why.
    pub fn build(&self) -> Result<Board, Vec<BuilderInvalidReason>> {
        let mut reasons = self.invalid_reasons.clone();

        let rows = self.rows.len();
        let cols = self.rows.first().map_or(0, Vec::len);
        if rows == 0 || cols == 0 {
            reasons.push(BuilderInvalidReason::Empty);
        } else if rows % 2 != 0 || cols % 2 != 0 {
            reasons.push(BuilderInvalidReason::OddDimension);
        }

        if !reasons.is_empty() {
            return Err(reasons);
        }

        let cells = Array2::from_shape_fn((rows, cols), |(r, c)| match self.rows[r][c] {
            Symbol::Zero => Cell::Fixed(Value::Zero),
            Symbol::One => Cell::Fixed(Value::One),
            Symbol::Unknown => Cell::Free(None),
        });

        Ok(Board {
            cells,
            // both nonzero; the Empty check would have tripped otherwise
            dims: (Dimension::new(cols).unwrap(), Dimension::new(rows).unwrap()),
        })
    }
}
