use itertools::Itertools;
use strum::VariantArray;

/// A concrete cell value. Candidates are tried in variant order, so an
/// underconstrained board yields its `Zero`-leaning solution first.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, VariantArray)]
pub enum Value {
    /// Binary zero, displayed as `0`.
    Zero,
    /// Binary one, displayed as `1`.
    One,
}

impl Value {
    pub(crate) fn symbol(&self) -> char {
        match self {
            Self::Zero => '0',
            Self::One => '1',
        }
    }
}

/// One grid position: a given from the input puzzle, or a cell the search
/// may rewrite.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) enum Cell {
    /// A given; never changes after board construction.
    Fixed(Value),
    /// Searchable. `None` while no value is under trial.
    Free(Option<Value>),
}

impl Default for Cell {
    fn default() -> Self {
        Self::Free(None)
    }
}

impl Cell {
    pub(crate) fn value(&self) -> Option<Value> {
        match self {
            Self::Fixed(value) => Some(*value),
            Self::Free(value) => *value,
        }
    }

    pub(crate) fn is_fixed(&self) -> bool {
        matches!(self, Self::Fixed(_))
    }

    /// Step this cell to its next candidate value, returning `true` while a
    /// candidate is under trial.
    ///
    /// A free cell walks `Value::VARIANTS` in order and, one step past the
    /// last variant, resets to unset and returns `false`: every candidate has
    /// been tried and the caller must backtrack. A fixed cell is a no-op that
    /// always reports a candidate; its given is never retried, only passed
    /// over.
    pub(crate) fn cycle(&mut self) -> bool {
        match self {
            Self::Fixed(_) => true,
            Self::Free(value) => {
                let next = match *value {
                    None => Value::VARIANTS.first().copied(),
                    Some(current) => Value::VARIANTS
                        .iter()
                        .find_position(|variant| **variant == current)
                        .and_then(|(position, _)| Value::VARIANTS.get(position + 1))
                        .copied(),
                };
                *value = next;
                next.is_some()
            }
        }
    }
}
