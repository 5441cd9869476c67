//! Tic-tac-toe demo: the engine (X) against a uniformly random opponent.
//!
//! Shows the full driving loop: a time-budgeted search per turn, best-move
//! extraction, and tree reuse across both sides' moves via `advance`.
//!
//! Run with `RUST_LOG=debug` to watch the per-turn search summaries.

use std::fmt;
use std::time::Duration;

use uct_search::{rollout, GameAction, GameState, Player, SearchConfig, SearchTree, Verdict};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mark {
    X,
    O,
}

impl Player for Mark {}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Move(usize);

impl GameAction for Move {}

#[derive(Clone, Debug)]
struct TicTacToe {
    board: [Option<Mark>; 9],
    to_move: Mark,
    moves_played: usize,
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
    fn new() -> Self {
        TicTacToe {
            board: [None; 9],
            to_move: Mark::X,
            moves_played: 0,
        }
    }

    fn winner(&self) -> Option<Mark> {
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
        next.to_move = match self.to_move {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        };
        next.moves_played = self.moves_played + 1;
        next
    }

    fn verdict_for(&self, side: &Mark) -> Verdict {
        match self.winner() {
            Some(winner) if winner == *side => Verdict::Won,
            Some(_) => Verdict::Lost,
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

impl fmt::Display for TicTacToe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let symbol = match self.board[row * 3 + col] {
                    Some(Mark::X) => 'X',
                    Some(Mark::O) => 'O',
                    None => '.',
                };
                write!(f, " {}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn main() -> Result<(), uct_search::SearchError> {
    env_logger::init();

    println!("uct-search tic-tac-toe demo");
    println!("engine plays X, a random opponent plays O");
    println!();

    let mut game = TicTacToe::new();
    let config = SearchConfig::default().with_max_time(Duration::from_millis(200));
    let mut tree = SearchTree::new(game.clone(), Mark::X, config);
    let mut rng = rand::thread_rng();

    while !game.is_terminal() {
        println!("{}", game);

        let action = if game.side_to_move() == Mark::X {
            let action = tree.run()?;
            println!(
                "engine plays cell {} (winning probability {:.1}%)",
                action.0,
                100.0 * tree.best_child().map(|c| c.win_rate()).unwrap_or(0.0)
            );
            action
        } else {
            let action = rollout::random_action(&game, &mut rng)
                .expect("non-terminal state must have a legal move");
            println!("opponent plays cell {}", action.0);
            action
        };

        tree.advance(&action)?;
        game = game.apply(&action);
    }

    println!("{}", game);
    match game.winner() {
        Some(Mark::X) => println!("game over, engine won"),
        Some(Mark::O) => println!("game over, opponent won"),
        None => println!("game over, drawn"),
    }

    Ok(())
}
