use super::*;

#[test]
fn test_player_opponent() {
    assert_eq!(Player::Black.opponent(), Player::White);
    assert_eq!(Player::White.opponent(), Player::Black);
}

#[test]
fn test_stone_player_conversion() {
    assert_eq!(Stone::from(Player::Black), Stone::Black);
    assert_eq!(Player::White.stone(), Stone::White);
    assert_eq!(Stone::Black.player(), Some(Player::Black));
    assert_eq!(Stone::Empty.player(), None);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::center();
    assert_eq!(pos, Pos::new(7, 7));
    assert_eq!(pos.to_index(), 7 * 15 + 7);

    let pos2 = Pos::from_index(112);
    assert_eq!(pos2.row, 7);
    assert_eq!(pos2.col, 7);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(14, 14));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(15, 0));
    assert!(!Pos::is_valid(0, 15));
    assert_eq!(Pos::try_new(3, 15), None);
}

#[test]
fn test_pos_offset() {
    let pos = Pos::new(0, 14);
    assert_eq!(pos.offset((1, -1), 2), Some(Pos::new(2, 12)));
    assert_eq!(pos.offset((0, 1), 1), None);
    assert_eq!(pos.offset((1, 0), -1), None);
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 15);
    assert_eq!(TOTAL_CELLS, 225);
}

#[test]
fn test_pos_ordering() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(0, 1);
    let pos3 = Pos::new(1, 0);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert!(pos1 < pos3);
}

#[test]
fn test_place_once_per_cell() {
    let mut board = Board::new();
    assert!(board.place(3, 4, Player::Black));
    let snapshot = board.clone();

    assert!(!board.place(3, 4, Player::White));
    assert!(!board.place(3, 4, Player::Black));
    assert_eq!(board, snapshot);
    assert_eq!(board.at(3, 4), Some(Stone::Black));
    assert_eq!(board.last_move(), Some(Pos::new(3, 4)));
}

#[test]
fn test_place_out_of_bounds() {
    let mut board = Board::new();
    assert!(!board.place(-1, 0, Player::Black));
    assert!(!board.place(0, 15, Player::White));
    assert!(board.is_board_empty());
    assert_eq!(board.last_move(), None);
}

#[test]
fn test_at_out_of_bounds() {
    let board = Board::new();
    assert_eq!(board.at(0, 0), Some(Stone::Empty));
    assert_eq!(board.at(15, 0), None);
    assert_eq!(board.at(0, -1), None);
}

#[test]
fn test_clear() {
    let mut board = Board::new();
    board.place(5, 5, Player::White);
    board.clear(5, 5);
    assert_eq!(board.at(5, 5), Some(Stone::Empty));
    assert_eq!(board.last_move(), None);

    // Off-board clear is a no-op
    board.place(1, 1, Player::Black);
    let snapshot = board.clone();
    board.clear(-3, 20);
    assert_eq!(board, snapshot);
}

#[test]
fn test_reset() {
    let mut board = Board::new();
    board.place(0, 0, Player::Black);
    board.place(14, 14, Player::White);
    board.reset();
    assert!(board.is_board_empty());
    assert_eq!(board.last_move(), None);
    assert_eq!(board, Board::new());
}

#[test]
fn test_stone_count_and_full() {
    let mut board = Board::new();
    assert_eq!(board.stone_count(), 0);
    assert!(!board.is_full());

    for idx in 0..TOTAL_CELLS {
        let pos = Pos::from_index(idx);
        let player = if idx % 2 == 0 { Player::Black } else { Player::White };
        assert!(board.place_at(pos, player));
    }
    assert_eq!(board.stone_count(), TOTAL_CELLS);
    assert!(board.is_full());
}

#[test]
fn test_stones_iter_row_major() {
    let mut board = Board::new();
    board.place(4, 2, Player::White);
    board.place(1, 9, Player::Black);
    let stones: Vec<_> = board.stones().collect();
    assert_eq!(
        stones,
        vec![(Pos::new(1, 9), Player::Black), (Pos::new(4, 2), Player::White)]
    );
}

#[test]
fn test_stone_guard_restores_cell() {
    let mut board = Board::new();
    board.place(7, 7, Player::Black);
    let snapshot = board.clone();

    {
        let mut outer = board.try_stone(Pos::new(7, 8), Player::White);
        assert_eq!(outer.get(Pos::new(7, 8)), Stone::White);
        {
            let inner = outer.try_stone(Pos::new(7, 9), Player::Black);
            assert_eq!(inner.get(Pos::new(7, 9)), Stone::Black);
            assert_eq!(inner.pos(), Pos::new(7, 9));
            // Speculative stones do not move the last-move marker
            assert_eq!(inner.last_move(), Some(Pos::new(7, 7)));
        }
        assert_eq!(outer.get(Pos::new(7, 9)), Stone::Empty);
    }

    assert_eq!(board, snapshot);
}
