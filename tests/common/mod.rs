//! Shared tic-tac-toe fixture for the integration tests.

#![allow(dead_code)]

use uct_search::{GameAction, GameState, Player, Verdict};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn other(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl Player for Mark {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Move(pub usize);

impl GameAction for Move {}

#[derive(Clone, Debug)]
pub struct TicTacToe {
    pub board: [Option<Mark>; 9],
    pub to_move: Mark,
    pub moves_played: usize,
}

const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

impl TicTacToe {
    pub fn new() -> Self {
        TicTacToe {
            board: [None; 9],
            to_move: Mark::X,
            moves_played: 0,
        }
    }

    /// Builds a position from the cells held by each side.
    pub fn with_marks(xs: &[usize], os: &[usize], to_move: Mark) -> Self {
        let mut game = TicTacToe::new();
        for &cell in xs {
            game.board[cell] = Some(Mark::X);
        }
        for &cell in os {
            game.board[cell] = Some(Mark::O);
        }
        game.moves_played = xs.len() + os.len();
        game.to_move = to_move;
        game
    }

    pub fn winner(&self) -> Option<Mark> {
        for line in LINES {
            if let Some(mark) = self.board[line[0]] {
                if self.board[line[1]] == Some(mark) && self.board[line[2]] == Some(mark) {
                    return Some(mark);
                }
            }
        }
        None
    }
}

impl GameState for TicTacToe {
    type Action = Move;
    type Player = Mark;

    fn legal_actions(&self) -> Vec<Move> {
        if self.winner().is_some() {
            return vec![];
        }
        (0..9)
            .filter(|&cell| self.board[cell].is_none())
            .map(Move)
            .collect()
    }

    fn apply(&self, action: &Move) -> Self {
        let mut next = self.clone();
        next.board[action.0] = Some(self.to_move);
        next.to_move = self.to_move.other();
        next.moves_played = self.moves_played + 1;
        next
    }

    fn verdict_for(&self, side: &Mark) -> Verdict {
        match self.winner() {
            Some(winner) if winner == *side => Verdict::Won,
            Some(_) => Verdict::Lost,
            // Draws stay undecided; the engine scores them as unknown.
            None => Verdict::Undecided,
        }
    }

    fn side_to_move(&self) -> Mark {
        self.to_move
    }

    fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.moves_played == 9
    }
}

/// X to move with two winning threats on row 0; cell 2 wins immediately.
/// Open cells in order: 2, 5, 6, 7, 8.
///
/// ```text
/// X X .
/// O O .
/// . . .
/// ```
pub fn near_win_board() -> TicTacToe {
    TicTacToe::with_marks(&[0, 1], &[3, 4], Mark::X)
}

/// X to move with a single legal move (cell 8), which wins on the diagonal.
///
/// ```text
/// X O O
/// O X X
/// X O .
/// ```
pub fn one_move_from_win() -> TicTacToe {
    TicTacToe::with_marks(&[0, 4, 5, 6], &[1, 2, 3, 7], Mark::X)
}

/// X to move with a single legal move (cell 8), which draws.
///
/// ```text
/// X O X
/// X O O
/// O X .
/// ```
pub fn one_move_from_draw() -> TicTacToe {
    TicTacToe::with_marks(&[0, 2, 3, 7], &[1, 4, 5, 6], Mark::X)
}

/// A finished, drawn board.
pub fn drawn_board() -> TicTacToe {
    TicTacToe::with_marks(&[0, 2, 3, 7, 8], &[1, 4, 5, 6], Mark::O)
}

/// A finished board won by X on row 0.
pub fn won_board() -> TicTacToe {
    TicTacToe::with_marks(&[0, 1, 2], &[3, 4], Mark::O)
}
