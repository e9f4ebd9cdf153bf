//! Tests for the win evaluator.

use strictly_timetravel::rules::LINES;
use strictly_timetravel::{Board, Cell, Player, Position, check_winner};

fn board_with(marks: &[(Position, Player)]) -> Board {
    let mut board = Board::new();
    for &(pos, player) in marks {
        board.set(pos, Cell::marked(player, pos.coords()));
    }
    board
}

#[test]
fn test_every_line_returns_its_triple() {
    for (i, line) in LINES.iter().enumerate() {
        let marks: Vec<_> = line.iter().map(|&p| (p, Player::O)).collect();
        let board = board_with(&marks);
        let found = check_winner(&board).expect("line should win");
        assert_eq!(found.positions(), *line, "line {}", i);
        assert_eq!(found.player(), Player::O);
        for (cell, pos) in found.cells().iter().zip(line) {
            assert_eq!(*cell, board.get(*pos));
        }
    }
}

#[test]
fn test_no_three_in_a_row() {
    // X X O / O O X / X O X
    let board = board_with(&[
        (Position::TopLeft, Player::X),
        (Position::TopCenter, Player::X),
        (Position::TopRight, Player::O),
        (Position::MiddleLeft, Player::O),
        (Position::Center, Player::O),
        (Position::MiddleRight, Player::X),
        (Position::BottomLeft, Player::X),
        (Position::BottomCenter, Player::O),
        (Position::BottomRight, Player::X),
    ]);
    assert_eq!(check_winner(&board), None);
}

#[test]
fn test_two_marks_do_not_win() {
    let board = board_with(&[
        (Position::TopRight, Player::X),
        (Position::Center, Player::X),
    ]);
    assert!(check_winner(&board).is_none());
}

#[test]
fn test_evaluation_is_pure() {
    let board = board_with(&[
        (Position::TopLeft, Player::X),
        (Position::MiddleLeft, Player::X),
        (Position::BottomLeft, Player::X),
    ]);
    let before = board.clone();
    assert_eq!(check_winner(&board), check_winner(&board));
    assert_eq!(board, before);
}

/// First line in table order held by a single player.
fn first_complete_line(board: &Board) -> Option<([Position; 3], Player)> {
    LINES.iter().find_map(|line| {
        let signs = line.map(|pos| board.get(pos).sign());
        match signs {
            [Some(a), Some(b), Some(c)] if a == b && b == c => Some((*line, a)),
            _ => None,
        }
    })
}

#[test]
fn test_every_board_matches_line_search() {
    let mut checked = 0;
    for code in 0..3usize.pow(9) {
        let mut board = Board::new();
        let mut rest = code;
        for pos in Position::ALL {
            match rest % 3 {
                1 => board.set(pos, Cell::marked(Player::X, pos.coords())),
                2 => board.set(pos, Cell::marked(Player::O, pos.coords())),
                _ => {}
            }
            rest /= 3;
        }

        let found = check_winner(&board).map(|line| (line.positions(), line.player()));
        assert_eq!(found, first_complete_line(&board), "board {}", code);
        checked += 1;
    }
    assert_eq!(checked, 19_683);
}
