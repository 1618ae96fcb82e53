//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position};
use tracing::instrument;

/// The 8 winning lines in evaluation order: rows, then columns, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first completed line and its owner.
///
/// Lines are scanned in [`LINES`] order, so when several lines are complete
/// the earliest one wins.
#[instrument]
pub fn winning_line(board: &Board) -> Option<(Player, [Position; 3])> {
    LINES.into_iter().find_map(|line| {
        let [a, b, c] = line;
        let player = board.get(a).player()?;
        (board.get(b) == board.get(a) && board.get(c) == board.get(a)).then_some((player, line))
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row, `None`
/// otherwise. A full board without a line is not treated specially.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|(player, _)| player)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    fn board_from(marks: &[(Position, Player)]) -> Board {
        let mut board = Board::new();
        for (pos, player) in marks {
            board.set(*pos, Square::Occupied(*player));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_from(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::TopRight, Player::X),
        ]);
        assert_eq!(check_winner(&board), Some(Player::X));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_from(&[
            (Position::TopRight, Player::O),
            (Position::Center, Player::O),
            (Position::BottomLeft, Player::O),
        ]);
        assert_eq!(
            winning_line(&board),
            Some((Player::O, LINES[7]))
        );
    }

    #[test]
    fn test_winner_middle_column() {
        let board = board_from(&[
            (Position::TopCenter, Player::O),
            (Position::Center, Player::O),
            (Position::BottomCenter, Player::O),
        ]);
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_from(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
        ]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_from(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::O),
            (Position::TopRight, Player::X),
        ]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_first_line_in_order_is_reported() {
        // X completes the top row and the main diagonal at once.
        let board = board_from(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::TopRight, Player::X),
            (Position::Center, Player::X),
            (Position::BottomRight, Player::X),
        ]);
        assert_eq!(winning_line(&board), Some((Player::X, LINES[0])));
    }

    #[test]
    fn test_earlier_row_wins_over_later_row() {
        // Not reachable in play, but pins the scan order.
        let board = board_from(&[
            (Position::BottomLeft, Player::X),
            (Position::BottomCenter, Player::X),
            (Position::BottomRight, Player::X),
            (Position::MiddleLeft, Player::O),
            (Position::Center, Player::O),
            (Position::MiddleRight, Player::O),
        ]);
        assert_eq!(winning_line(&board), Some((Player::O, LINES[1])));
    }

    #[test]
    fn test_other_cells_do_not_matter() {
        let base = board_from(&[
            (Position::MiddleLeft, Player::X),
            (Position::Center, Player::X),
            (Position::MiddleRight, Player::X),
        ]);
        for filler in [Position::TopLeft, Position::BottomCenter, Position::TopRight] {
            for player in [Player::X, Player::O] {
                assert_eq!(check_winner(&base.with_mark(filler, player)), Some(Player::X));
            }
        }
    }

    #[test]
    fn test_full_board_without_line_has_no_winner() {
        // X O X / X O O / O X X
        let board = board_from(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::O),
            (Position::TopRight, Player::X),
            (Position::MiddleLeft, Player::X),
            (Position::Center, Player::O),
            (Position::MiddleRight, Player::O),
            (Position::BottomLeft, Player::O),
            (Position::BottomCenter, Player::X),
            (Position::BottomRight, Player::X),
        ]);
        assert_eq!(check_winner(&board), None);
    }
}
