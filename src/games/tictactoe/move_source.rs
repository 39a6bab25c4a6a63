//! Where a player's moves come from.
//!
//! Every seat at the table owns a [`MoveSource`]. The human one reads the
//! console; the computer one applies a [`ComputerStrategy`].

use derive_more::Display;
use derive_new::new;
use tracing::{debug, instrument};

use super::board::Board;
use super::player::Player;
use super::position::Position;
use crate::config::ComputerStrategy;
use crate::console::{Console, ConsoleError};
use crate::prompt::joinor;
use crate::rng::GameRng;

/// The players involved in one turn.
#[derive(Debug, Clone, Copy)]
pub struct Turn<'a> {
    /// Player whose move is being chosen.
    pub me: &'a Player,
    /// The other player.
    pub opponent: &'a Player,
}

/// Why a move source could not produce a position.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum TurnError {
    /// Input ended or failed while waiting for a human.
    #[display("{}", _0)]
    Console(ConsoleError),

    /// No unmarked squares remain.
    #[display("No unmarked squares remain")]
    BoardFull,
}

impl std::error::Error for TurnError {}

impl From<ConsoleError> for TurnError {
    fn from(err: ConsoleError) -> Self {
        Self::Console(err)
    }
}

/// Capability to pick the next square for a player.
pub trait MoveSource: std::fmt::Debug {
    /// Chooses an unmarked position on `board`.
    ///
    /// Implementations that read input report rejected entries through
    /// `console` and keep asking.
    fn choose(
        &mut self,
        board: &Board,
        turn: Turn<'_>,
        console: &mut dyn Console,
    ) -> Result<Position, TurnError>;

    /// Returns true if a person at the keyboard makes these moves.
    fn is_interactive(&self) -> bool;
}

/// Moves typed at the console.
#[derive(Debug, Default, Clone, Copy)]
pub struct HumanMoveSource;

impl HumanMoveSource {
    /// Creates a console-backed move source.
    pub fn new() -> Self {
        Self
    }
}

impl MoveSource for HumanMoveSource {
    #[instrument(skip(self, board, console), fields(player = %turn.me.name()))]
    fn choose(
        &mut self,
        board: &Board,
        turn: Turn<'_>,
        console: &mut dyn Console,
    ) -> Result<Position, TurnError> {
        let open = board.unmarked_positions();
        if open.is_empty() {
            return Err(TurnError::BoardFull);
        }

        console.print(&format!("Choose a square ({}):", joinor(&open)));
        loop {
            let input = console.read_line()?;
            let checked = Position::parse(&input).and_then(|pos| board.check(pos.number()));
            match checked {
                Ok(pos) => return Ok(pos),
                Err(e) => {
                    debug!(error = %e, "Invalid move input");
                    console.print(&format!("Sorry, that's not a valid choice. {e}."));
                }
            }
        }
    }

    fn is_interactive(&self) -> bool {
        true
    }
}

/// Moves picked by a policy.
#[derive(Debug, Clone, new)]
pub struct ComputerMoveSource {
    strategy: ComputerStrategy,
    rng: GameRng,
}

impl ComputerMoveSource {
    /// Returns the configured policy.
    pub fn strategy(&self) -> ComputerStrategy {
        self.strategy
    }

    /// Applies the policy to `board`.
    #[instrument(skip(self, board, turn), fields(strategy = ?self.strategy))]
    pub fn pick(&mut self, board: &Board, turn: Turn<'_>) -> Option<Position> {
        let open = board.unmarked_positions();
        let choice = match self.strategy {
            ComputerStrategy::Random => self.rng.choose(&open).copied(),
            ComputerStrategy::FirstAvailable => open.first().copied(),
            ComputerStrategy::Smart => board
                .completing_position(turn.me.marker())
                .or_else(|| board.completing_position(turn.opponent.marker()))
                .or_else(|| board.is_empty(Position::Center).then_some(Position::Center))
                .or_else(|| self.rng.choose(&open).copied()),
        };
        debug!(choice = ?choice, "Computer picked");
        choice
    }
}

impl MoveSource for ComputerMoveSource {
    fn choose(
        &mut self,
        board: &Board,
        turn: Turn<'_>,
        _console: &mut dyn Console,
    ) -> Result<Position, TurnError> {
        self.pick(board, turn).ok_or(TurnError::BoardFull)
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;
    use crate::games::tictactoe::player::Marker;
    use crate::scoreboard::PlayerId;
    use strum::IntoEnumIterator;

    fn players() -> (Player, Player) {
        (
            Player::new(PlayerId::new(0), "Human", Marker::new('X')),
            Player::new(PlayerId::new(1), "Computer", Marker::new('O')),
        )
    }

    #[test]
    fn test_human_reprompts_until_valid() {
        let (human, computer) = players();
        let mut board = Board::new();
        board.place(5, computer.marker()).unwrap();

        let mut console = ScriptedConsole::new(["abc", "5", "12", "3"]);
        let turn = Turn {
            me: &human,
            opponent: &computer,
        };
        let pos = HumanMoveSource::new()
            .choose(&board, turn, &mut console)
            .unwrap();

        assert_eq!(pos, Position::TopRight);
        let rejections = console
            .output()
            .iter()
            .filter(|line| line.starts_with("Sorry"))
            .count();
        assert_eq!(rejections, 3);
        assert!(console.output()[0].contains("1, 2, 3, 4, 6, 7, 8, or 9"));
    }

    #[test]
    fn test_human_eof() {
        let (human, computer) = players();
        let mut console = ScriptedConsole::new(Vec::<String>::new());
        let turn = Turn {
            me: &human,
            opponent: &computer,
        };
        let result = HumanMoveSource::new().choose(&Board::new(), turn, &mut console);
        assert_eq!(result, Err(TurnError::Console(ConsoleError::Closed)));
    }

    #[test]
    fn test_smart_completes_own_line_first() {
        let (human, computer) = players();
        let mut board = Board::new();
        board.place(1, computer.marker()).unwrap();
        board.place(2, computer.marker()).unwrap();
        board.place(4, human.marker()).unwrap();
        board.place(7, human.marker()).unwrap();

        let mut source = ComputerMoveSource::new(ComputerStrategy::Smart, GameRng::new(1));
        let turn = Turn {
            me: &computer,
            opponent: &human,
        };
        assert_eq!(source.pick(&board, turn), Some(Position::TopRight));
    }

    #[test]
    fn test_smart_blocks() {
        let (human, computer) = players();
        let mut board = Board::new();
        board.place(4, human.marker()).unwrap();
        board.place(5, human.marker()).unwrap();
        board.place(1, computer.marker()).unwrap();

        let mut source = ComputerMoveSource::new(ComputerStrategy::Smart, GameRng::new(1));
        let turn = Turn {
            me: &computer,
            opponent: &human,
        };
        assert_eq!(source.pick(&board, turn), Some(Position::MiddleRight));
    }

    #[test]
    fn test_smart_takes_center() {
        let (human, computer) = players();
        let mut board = Board::new();
        board.place(1, human.marker()).unwrap();

        let mut source = ComputerMoveSource::new(ComputerStrategy::Smart, GameRng::new(1));
        let turn = Turn {
            me: &computer,
            opponent: &human,
        };
        assert_eq!(source.pick(&board, turn), Some(Position::Center));
    }

    #[test]
    fn test_first_available() {
        let (human, computer) = players();
        let mut board = Board::new();
        board.place(1, human.marker()).unwrap();

        let mut source =
            ComputerMoveSource::new(ComputerStrategy::FirstAvailable, GameRng::new(1));
        let turn = Turn {
            me: &computer,
            opponent: &human,
        };
        assert_eq!(source.pick(&board, turn), Some(Position::TopCenter));
    }

    #[test]
    fn test_every_strategy_picks_unmarked() {
        let (human, computer) = players();
        let mut board = Board::new();
        for n in [1, 3, 5, 8] {
            board.place(n, human.marker()).unwrap();
        }
        let turn = Turn {
            me: &computer,
            opponent: &human,
        };

        for strategy in ComputerStrategy::iter() {
            let mut source = ComputerMoveSource::new(strategy, GameRng::new(99));
            for _ in 0..20 {
                let pos = source.pick(&board, turn).unwrap();
                assert!(board.is_empty(pos), "{strategy:?} picked {pos}");
            }
        }
    }

    #[test]
    fn test_full_board_reports_error() {
        let (human, computer) = players();
        let mut board = Board::new();
        for n in 1..=9 {
            board.place(n, human.marker()).unwrap();
        }
        let turn = Turn {
            me: &computer,
            opponent: &human,
        };
        let mut console = ScriptedConsole::default();
        let mut source = ComputerMoveSource::new(ComputerStrategy::Random, GameRng::new(5));
        assert_eq!(
            source.choose(&board, turn, &mut console),
            Err(TurnError::BoardFull)
        );
    }
}
