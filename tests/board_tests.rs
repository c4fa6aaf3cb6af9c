use minesweeper::{Board, ClickResult, ConfigError};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn fixed_board() -> Board {
    Board::with_mines(3, 3, &[(0, 0), (1, 1)]).unwrap()
}

#[test]
fn test_build_places_requested_mines() {
    let mut rng = SmallRng::seed_from_u64(42);
    let board = Board::build(4, 5, 7, &mut rng).unwrap();
    assert_eq!(board.height(), 4);
    assert_eq!(board.width(), 5);
    assert_eq!(board.mine_count(), 7);
    assert_eq!(board.cells().filter(|c| c.is_mine()).count(), 7);
    assert_eq!(board.safe_cell_count(), 13);
}

#[test]
fn test_build_allows_all_but_one_cell() {
    let mut rng = SmallRng::seed_from_u64(1);
    let board = Board::build(3, 3, 8, &mut rng).unwrap();
    assert_eq!(board.cells().filter(|c| !c.is_mine()).count(), 1);
}

#[test]
fn test_build_rejects_too_many_mines() {
    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(
        Board::build(3, 3, 9, &mut rng).unwrap_err(),
        ConfigError::TooManyMines { mines: 9, cells: 9 }
    );
    assert!(Board::build(0, 5, 0, &mut rng).is_err());
}

#[test]
fn test_same_seed_same_board() {
    let mut rng1 = SmallRng::seed_from_u64(7);
    let mut rng2 = SmallRng::seed_from_u64(7);
    let b1 = Board::build(6, 6, 10, &mut rng1).unwrap();
    let b2 = Board::build(6, 6, 10, &mut rng2).unwrap();
    assert_eq!(b1, b2);
}

#[test]
fn test_fixed_mines_neighbour_counts() {
    let board = fixed_board();
    let counts: Vec<u8> = board.cells().map(|c| c.adjacent_mines()).collect();
    // mine cells are included; only non-mine counts are meaningful
    assert_eq!(counts[1], 2);
    assert_eq!(counts[2], 1);
    assert_eq!(counts[3], 2);
    assert_eq!(counts[5], 1);
    assert_eq!(&counts[6..], &[1, 1, 1]);
}

#[test]
fn test_with_mines_rejects_bad_positions() {
    assert_eq!(
        Board::with_mines(3, 3, &[(3, 0)]).unwrap_err(),
        ConfigError::MineOutOfBounds { row: 3, col: 0 }
    );
    assert_eq!(
        Board::with_mines(3, 3, &[(1, 2), (1, 2)]).unwrap_err(),
        ConfigError::DuplicateMine { row: 1, col: 2 }
    );
    assert!(matches!(
        Board::with_mines(1, 2, &[(0, 0), (0, 1)]),
        Err(ConfigError::TooManyMines { mines: 2, cells: 2 })
    ));
}

#[test]
fn test_is_valid_position() {
    let board = fixed_board();
    assert!(board.is_valid_position(0, 0));
    assert!(board.is_valid_position(2, 2));
    assert!(!board.is_valid_position(3, 0));
    assert!(!board.is_valid_position(0, 3));
    assert!(!board.is_valid_position(-1, 1));
    assert!(!board.is_valid_position(1, -1));
}

#[test]
fn test_render_hidden_board() {
    let board = fixed_board();
    assert_eq!(board.render_hidden(), "@@@\n@@@\n@@@\n");
    assert_eq!(board.to_string(), board.render_hidden());
}

#[test]
fn test_render_after_reveal() {
    let mut board = fixed_board();
    assert!(board.reveal(0, 2));
    assert!(board.reveal(1, 1));
    assert!(!board.reveal(5, 5));
    assert_eq!(board.render_hidden(), "@@1\n@M@\n@@@\n");
}

#[test]
fn test_reveal_all() {
    let mut board = fixed_board();
    assert_eq!(board.reveal_all(), "M21\n2M1\n111\n");
    assert!(board.cells().all(|c| c.is_revealed()));
}

#[test]
fn test_click_is_a_query() {
    let mut board = fixed_board();
    assert_eq!(board.click(0, 0), Some(ClickResult::Mine));
    assert_eq!(board.click(0, 2), Some(ClickResult::Safe));
    assert_eq!(board.click(0, 2), Some(ClickResult::Safe));
    assert_eq!(board.click(3, 3), None);

    board.reveal(0, 2);
    let before = *board.cell(0, 2).unwrap();
    assert_eq!(board.click(0, 2), Some(ClickResult::AlreadyClicked));
    assert_eq!(*board.cell(0, 2).unwrap(), before);

    board.reveal(0, 0);
    assert_eq!(board.click(0, 0), Some(ClickResult::AlreadyClicked));
    assert!(board.cell(0, 0).unwrap().is_mine());
}

#[test]
fn test_enumerate_row_major() {
    let board = fixed_board();
    let mines: Vec<(usize, usize)> = board
        .enumerate()
        .filter(|(_, c)| c.is_mine())
        .map(|(pos, _)| pos)
        .collect();
    assert_eq!(mines, vec![(0, 0), (1, 1)]);
}

#[test]
fn test_rejects_dimensions_that_overflow() {
    let mut rng = SmallRng::seed_from_u64(3);
    let huge = usize::MAX / 2;
    assert_eq!(
        Board::build(huge, 3, 2, &mut rng).unwrap_err(),
        ConfigError::BoardTooLarge { height: huge, width: 3 }
    );
    assert_eq!(
        Board::with_mines(3, huge, &[(0, 0)]).unwrap_err(),
        ConfigError::BoardTooLarge { height: 3, width: huge }
    );
    assert!(matches!(
        Board::build(usize::MAX, usize::MAX, 0, &mut rng),
        Err(ConfigError::BoardTooLarge { .. })
    ));
}
