#[cfg(test)]
mod tests {
    use std::num::NonZero;

    use crate::board::Board;
    use crate::builder::{BoardBuilder, BuilderInvalidReason};
    use crate::cell::{Cell, Value};
    use crate::location::Location;
    use crate::search::{BacktrackSearch, SearchOutcome, SolveFailure};

    const ALL_UNKNOWN_6: &str = "XXXXXX
XXXXXX
XXXXXX
XXXXXX
XXXXXX
XXXXXX
";

    // six distinct completions exist for these givens
    const PARTIAL_6: &str = "X10XXX
1XXX0X
XX0XXX
11XX10
XXXX0X
XXXXXX
";

    // three ones fixed at the end of the last row leave no legal completion
    const ADVERSARIAL_6: &str = "XXXXXX
XXXXXX
XXXXXX
XXXXXX
XXXXXX
XXX111
";

    /// Every invariant a solved board must satisfy.
    fn assert_solved(board: &Board) {
        let (cols, rows) = (board.dims().0.get(), board.dims().1.get());
        let value_at = |x: usize, y: usize| {
            board
                .value(Location(x, y))
                .expect("a solved board has no unset cells")
        };

        for y in 0..rows {
            let zeros = (0..cols).filter(|&x| value_at(x, y) == Value::Zero).count();
            assert_eq!(zeros, cols / 2, "row {y} is unbalanced");
        }
        for x in 0..cols {
            let zeros = (0..rows).filter(|&y| value_at(x, y) == Value::Zero).count();
            assert_eq!(zeros, rows / 2, "column {x} is unbalanced");
        }

        for y in 0..rows {
            for x in 0..cols - 2 {
                assert!(
                    !(value_at(x, y) == value_at(x + 1, y) && value_at(x + 1, y) == value_at(x + 2, y)),
                    "run of three in row {y} starting at column {x}"
                );
            }
        }
        for x in 0..cols {
            for y in 0..rows - 2 {
                assert!(
                    !(value_at(x, y) == value_at(x, y + 1) && value_at(x, y + 1) == value_at(x, y + 2)),
                    "run of three in column {x} starting at row {y}"
                );
            }
        }

        for a in 0..rows {
            for b in a + 1..rows {
                assert!(
                    (0..cols).any(|x| value_at(x, a) != value_at(x, b)),
                    "rows {a} and {b} are identical"
                );
            }
        }
        for a in 0..cols {
            for b in a + 1..cols {
                assert!(
                    (0..rows).any(|y| value_at(a, y) != value_at(b, y)),
                    "columns {a} and {b} are identical"
                );
            }
        }
    }

    #[test]
    fn parse_and_render() {
        let board = BoardBuilder::from_text("# a comment line\n1X # trailing comment\nX0\n")
            .build()
            .unwrap();

        assert_eq!(board.dims().0.get(), 2);
        assert_eq!(board.dims().1.get(), 2);
        assert_eq!(board.to_string(), "1* X  \nX  0* \n");
    }

    #[test]
    fn blank_and_short_rows_are_discarded() {
        // the lone "0" line and the empty line hold at most one cell each
        let board = BoardBuilder::from_text("0\n\n10\n01\n").build().unwrap();
        assert_eq!(board.to_string(), "1* 0* \n0* 1* \n");
    }

    #[test]
    fn reject_odd_dimensions() {
        let reasons = BoardBuilder::from_text("101\n010\n101\n").build().unwrap_err();
        assert!(matches!(reasons.as_slice(), [BuilderInvalidReason::OddDimension]));
    }

    #[test]
    fn reject_ragged_rows() {
        let builder = BoardBuilder::from_text("10\n0110\n");
        assert!(builder.is_valid().is_some());
        assert!(matches!(
            builder.build().unwrap_err().first(),
            Some(BuilderInvalidReason::RaggedRow)
        ));
    }

    #[test]
    fn reject_empty_input() {
        let reasons = BoardBuilder::from_text("# nothing but commentary\n").build().unwrap_err();
        assert!(matches!(reasons.as_slice(), [BuilderInvalidReason::Empty]));
    }

    #[test]
    fn free_cell_cycles_in_variant_order() {
        let mut cell = Cell::Free(None);

        assert!(cell.cycle());
        assert_eq!(cell.value(), Some(Value::Zero));
        assert!(cell.cycle());
        assert_eq!(cell.value(), Some(Value::One));

        // exhaustion resets the cell for the next visit
        assert!(!cell.cycle());
        assert_eq!(cell.value(), None);
        assert!(cell.cycle());
        assert_eq!(cell.value(), Some(Value::Zero));
    }

    #[test]
    fn fixed_cell_reports_its_given_forever() {
        let mut cell = Cell::Fixed(Value::One);
        for _ in 0..3 {
            assert!(cell.cycle());
            assert_eq!(cell.value(), Some(Value::One));
        }
    }

    #[test]
    fn advance_wraps_and_falls_off_the_end() {
        let board = BoardBuilder::from_text("10\n01\n").build().unwrap();
        assert_eq!(board.advance(Location(0, 0)), Some(Location(1, 0)));
        assert_eq!(board.advance(Location(1, 0)), Some(Location(0, 1)));
        assert_eq!(board.advance(Location(1, 1)), None);
    }

    #[test]
    fn retreat_skips_fixed_cells() {
        // givens at (0, 0) and (1, 1)
        let board = BoardBuilder::from_text("1X\nX0\n").build().unwrap();
        assert_eq!(board.retreat(Location(1, 1)), Some(Location(0, 1)));
        assert_eq!(board.retreat(Location(0, 1)), Some(Location(1, 0)));
        // only the (0, 0) given remains before (1, 0), so the cursor falls off
        assert_eq!(board.retreat(Location(1, 0)), None);
    }

    #[test]
    fn solve_minimal_given_board() {
        let solved = BoardBuilder::from_text("10\n01\n").build().unwrap().solve().unwrap();
        assert_solved(&solved);
        assert_eq!(solved.to_string(), "1* 0* \n0* 1* \n");
    }

    #[test]
    fn fully_given_board_takes_one_step_per_cell() {
        let mut board = BoardBuilder::from_text("0110\n1001\n0101\n1010\n").build().unwrap();
        let report = BacktrackSearch::from(&mut board).run();

        assert_eq!(report.outcome, SearchOutcome::Solved);
        assert_eq!(report.steps, 16);
        assert_solved(&board);
    }

    #[test]
    fn solve_unconstrained_6x6() {
        let solved = BoardBuilder::from_text(ALL_UNKNOWN_6).build().unwrap().solve().unwrap();
        assert_solved(&solved);
    }

    #[test]
    fn solve_partial_6x6_preserves_givens() {
        let unsolved = BoardBuilder::from_text(PARTIAL_6).build().unwrap();
        let solved = BoardBuilder::from_text(PARTIAL_6).build().unwrap().solve().unwrap();
        assert_solved(&solved);

        let (cols, rows) = (solved.dims().0.get(), solved.dims().1.get());
        for y in 0..rows {
            for x in 0..cols {
                let location = Location(x, y);
                assert_eq!(solved.is_fixed(location), unsolved.is_fixed(location));
                if unsolved.is_fixed(location) {
                    assert_eq!(solved.value(location), unsolved.value(location));
                }
            }
        }
    }

    #[test]
    fn unsolvable_puzzle_exhausts_the_space() {
        let mut unconstrained = BoardBuilder::from_text(ALL_UNKNOWN_6).build().unwrap();
        let baseline = BacktrackSearch::from(&mut unconstrained).run();
        assert_eq!(baseline.outcome, SearchOutcome::Solved);

        let mut adversarial = BoardBuilder::from_text(ADVERSARIAL_6).build().unwrap();
        let report = BacktrackSearch::from(&mut adversarial).run();
        assert_eq!(report.outcome, SearchOutcome::Exhausted);
        // ruling out every assignment dwarfs finding one solution
        assert!(report.steps > baseline.steps);
    }

    #[test]
    fn solve_reports_exhaustion_as_failure() {
        let failure = BoardBuilder::from_text(ADVERSARIAL_6).build().unwrap().solve().unwrap_err();
        let SolveFailure::Exhausted { steps } = failure;
        assert!(steps > 0);
    }

    #[test]
    fn unsolved_render_reparses_identically() {
        let board = BoardBuilder::from_text(PARTIAL_6).build().unwrap();
        let reparsed = BoardBuilder::from_text(&board.to_string()).build().unwrap();
        assert_eq!(board.to_string(), reparsed.to_string());
    }

    #[test]
    fn solved_render_reparses_to_the_same_values() {
        let solved = BoardBuilder::from_text(PARTIAL_6).build().unwrap().solve().unwrap();
        let reparsed = BoardBuilder::from_text(&solved.to_string()).build().unwrap();

        let (cols, rows) = (solved.dims().0.get(), solved.dims().1.get());
        for y in 0..rows {
            for x in 0..cols {
                assert_eq!(solved.value(Location(x, y)), reparsed.value(Location(x, y)));
            }
        }
    }

    #[test]
    fn progress_reports_at_the_configured_cadence() {
        let mut board = BoardBuilder::from_text("XXXX\nXXXX\nXXXX\nXXXX\n").build().unwrap();
        let mut snapshots = Vec::new();

        let report = BacktrackSearch::from(&mut board)
            .report_every(NonZero::new(5).unwrap())
            .run_with(|progress| snapshots.push(progress.steps));

        assert_eq!(report.outcome, SearchOutcome::Solved);
        assert_eq!(snapshots.first(), Some(&0));
        assert!(snapshots.iter().all(|steps| steps % 5 == 0));
        assert_eq!(snapshots.len() as u64, (report.steps - 1) / 5 + 1);
    }
}
