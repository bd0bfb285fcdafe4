//! Tests for the board engine: generation, cross toggles and the win check
use lights_out::board::affected_cells;
use lights_out::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

const SIZES: [(usize, usize); 6] = [(1, 1), (1, 5), (2, 2), (3, 3), (5, 5), (4, 7)];

fn diff_cells(a: &Grid, b: &Grid) -> Vec<(usize, usize)> {
    let mut cells = Vec::new();
    for row in 0..a.rows() {
        for col in 0..a.cols() {
            if a.get(row, col) != b.get(row, col) {
                cells.push((row, col));
            }
        }
    }
    cells
}

#[test]
fn test_chance_zero_is_all_off_and_one_is_all_lit() {
    let mut rng = StdRng::seed_from_u64(1);
    for (rows, cols) in SIZES {
        let off = create_random_grid(rows, cols, 0.0, &mut rng).unwrap();
        assert_eq!(off.lit_count(), 0);
        assert!(has_won(&off));

        let lit = create_random_grid(rows, cols, 1.0, &mut rng).unwrap();
        assert_eq!(lit.lit_count(), rows * cols);
        assert_eq!((lit.rows(), lit.cols()), (rows, cols));
    }
}

#[test]
fn test_toggle_is_its_own_inverse() {
    let mut rng = StdRng::seed_from_u64(2);
    for (rows, cols) in SIZES {
        let grid = create_random_grid(rows, cols, 0.5, &mut rng).unwrap();
        for row in -2..rows as isize + 2 {
            for col in -2..cols as isize + 2 {
                let once = toggle_around(&grid, row, col);
                assert_eq!(toggle_around(&once, row, col), grid);
            }
        }
    }
}

#[test]
fn test_has_won_iff_all_off() {
    let mut rng = StdRng::seed_from_u64(3);
    for (rows, cols) in SIZES {
        assert!(has_won(&Grid::all_off(rows, cols).unwrap()));
        let grid = create_random_grid(rows, cols, 0.5, &mut rng).unwrap();
        assert_eq!(has_won(&grid), grid.lit_count() == 0);
    }

    let one_lit = Grid::from_rows(vec![vec![false, false], vec![false, true]]).unwrap();
    assert!(!has_won(&one_lit));
}

#[test]
fn test_has_won_compares_by_value_at_any_size() {
    // Rows that differ from each other must still be checked individually
    let last_row_lit = Grid::from_rows(vec![
        vec![false, false, false],
        vec![false, false, false],
        vec![false, false, true],
    ])
    .unwrap();
    assert!(!has_won(&last_row_lit));
    assert!(has_won(&Grid::all_off(7, 2).unwrap()));
}

#[test]
fn test_solvable_difficulty_zero_is_all_off() {
    let mut rng = StdRng::seed_from_u64(4);
    for (rows, cols) in SIZES {
        let grid = create_solvable_grid(rows, cols, 0, &mut rng).unwrap();
        assert_eq!(grid, Grid::all_off(rows, cols).unwrap());
    }
}

#[test]
fn test_corner_toggle_affects_three_cells() {
    let grid = Grid::all_off(4, 4).unwrap();
    let toggled = toggle_around(&grid, 0, 0);
    assert_eq!(diff_cells(&grid, &toggled), vec![(0, 0), (0, 1), (1, 0)]);

    let far_corner = toggle_around(&grid, 3, 3);
    assert_eq!(diff_cells(&grid, &far_corner).len(), 3);
}

#[test]
fn test_interior_toggle_affects_five_cells() {
    let grid = create_random_grid(5, 5, 0.5, &mut StdRng::seed_from_u64(5)).unwrap();
    let toggled = toggle_around(&grid, 2, 3);
    assert_eq!(
        diff_cells(&grid, &toggled),
        vec![(1, 3), (2, 2), (2, 3), (2, 4), (3, 3)]
    );
}

#[test]
fn test_edge_and_off_board_toggles() {
    let grid = Grid::all_off(3, 3).unwrap();
    assert_eq!(diff_cells(&grid, &toggle_around(&grid, 0, 1)).len(), 4);
    // Center off the board, one neighbour on it
    assert_eq!(diff_cells(&grid, &toggle_around(&grid, 3, 1)), vec![(2, 1)]);
    assert_eq!(toggle_around(&grid, 10, -10), grid);
    assert_eq!(affected_cells(3, 3, 3, 1), vec![(2, 1)]);
}

#[test]
fn test_single_cell_board_end_to_end() {
    let mut rng = StdRng::seed_from_u64(6);
    let grid = create_random_grid(1, 1, 1.0, &mut rng).unwrap();
    assert_eq!(grid.as_rows(), &[vec![true]]);

    let toggled = toggle_around(&grid, 0, 0);
    assert_eq!(toggled.as_rows(), &[vec![false]]);
    assert!(has_won(&toggled));
}

#[test]
fn test_center_cross_end_to_end() {
    let mut rng = StdRng::seed_from_u64(7);
    let grid = create_random_grid(3, 3, 0.0, &mut rng).unwrap();
    let toggled = toggle_around(&grid, 1, 1);
    assert_eq!(
        toggled.as_rows(),
        &[
            vec![false, true, false],
            vec![true, true, true],
            vec![false, true, false],
        ]
    );
    assert!(!has_won(&toggled));
    // Input grid is untouched
    assert!(has_won(&grid));
}

#[test]
fn test_invalid_arguments_rejected() {
    let mut rng = StdRng::seed_from_u64(8);
    let cases = [
        create_random_grid(0, 5, 0.5, &mut rng),
        create_random_grid(5, 0, 0.5, &mut rng),
        create_random_grid(5, 5, -0.1, &mut rng),
        create_random_grid(5, 5, 1.1, &mut rng),
        create_random_grid(5, 5, f64::NAN, &mut rng),
        create_solvable_grid(5, 5, -1, &mut rng),
        create_solvable_grid(0, 5, 3, &mut rng),
    ];
    for result in cases {
        match result {
            Err(BoardError::InvalidArgument(_)) => {}
            other => panic!("expected InvalidArgument, got {:?}", other),
        }
    }
}

#[test]
fn test_invalid_arguments_consume_no_randomness() {
    let mut rng = SequenceSource::constant(0.1);
    assert!(create_random_grid(5, 5, 2.0, &mut rng).is_err());
    assert!(create_solvable_grid(5, 5, -4, &mut rng).is_err());
    assert_eq!(rng.draws(), 0);
}

#[test]
fn test_replaying_generation_walk_solves_board() {
    let seed = 9;
    let difficulty = 12;
    let grid = create_solvable_grid(5, 5, difficulty, &mut StdRng::seed_from_u64(seed)).unwrap();

    // Replay the same coordinate draws on the generated board
    let mut replay = StdRng::seed_from_u64(seed);
    let mut solved = grid.clone();
    for _ in 0..difficulty {
        let row = replay.next_index(5) as isize;
        let col = replay.next_index(5) as isize;
        solved = toggle_around(&solved, row, col);
    }
    assert!(has_won(&solved));
}

#[test]
fn test_solvable_generator_may_cancel_toggles() {
    // The generator is biased: repeating a coordinate undoes it, so two
    // scripted toggles on the same cell leave an already-solved board.
    let mut rng = SequenceSource::constant(0.5);
    let grid = create_solvable_grid(3, 3, 2, &mut rng).unwrap();
    assert!(has_won(&grid));
    assert_eq!(rng.draws(), 4);
}

#[test]
fn test_solvable_lit_count_bounded_by_difficulty() {
    let mut rng = StdRng::seed_from_u64(10);
    for difficulty in 0..8 {
        let grid = create_solvable_grid(6, 6, difficulty, &mut rng).unwrap();
        assert!(grid.lit_count() <= 5 * difficulty as usize);
    }
}

#[test]
fn test_thread_rng_accepted() {
    let mut rng = rand::thread_rng();
    let grid = create_random_grid(4, 4, 0.5, &mut rng).unwrap();
    assert_eq!(grid.cell_count(), 16);
}

#[test]
fn test_grids_from_independent_sessions_on_threads() {
    let handles: Vec<_> = (0..4u64)
        .map(|seed| {
            std::thread::spawn(move || {
                let mut rng = StdRng::seed_from_u64(seed);
                let grid = create_solvable_grid(4, 4, 6, &mut rng).unwrap();
                (seed, grid)
            })
        })
        .collect();

    for handle in handles {
        let (seed, grid) = handle.join().unwrap();
        let expected = create_solvable_grid(4, 4, 6, &mut StdRng::seed_from_u64(seed)).unwrap();
        assert_eq!(grid, expected);
    }
}
