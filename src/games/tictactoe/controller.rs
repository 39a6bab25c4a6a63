//! Match controller: turn loop, scoring, and continuation prompts.
//!
//! The controller is an explicit state machine over [`MatchState`].
//! [`MatchController::step`] performs exactly one transition, so tests can
//! walk a match move by move; [`MatchController::run`] wraps the whole
//! session with welcome text and the "another match?" loop.

use derive_more::Display;
use tracing::{debug, info, instrument, warn};

use super::board::Board;
use super::move_source::{ComputerMoveSource, HumanMoveSource, MoveSource, Turn, TurnError};
use super::player::{Marker, Player};
use crate::config::{FirstMover, TicTacToeSettings};
use crate::console::{Console, ConsoleError};
use crate::prompt::ask_yes_no;
use crate::rng::GameRng;
use crate::scoreboard::{PlayerId, Scoreboard};

/// How a single game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum GameOutcome {
    /// Somebody completed a line.
    #[display("{} completed a line", _0)]
    LineWin(PlayerId),
    /// The board filled up with no line.
    #[display("draw")]
    Draw,
}

/// Where the controller is in a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MatchState {
    /// Waiting for this player to move.
    #[display("awaiting move from {}", _0)]
    AwaitingMove(PlayerId),
    /// A game just ended and has not been scored yet.
    #[display("game over: {}", _0)]
    GameOver(GameOutcome),
    /// This player reached the target score.
    #[display("match won by {}", _0)]
    MatchOver(PlayerId),
}

/// How [`MatchController::play_match`] finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchEnd {
    /// The match ran to the target score.
    Won(PlayerId),
    /// The player declined to continue between games.
    Abandoned,
}

/// Which seat opens each game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Opening {
    /// Seat 0 opens.
    #[default]
    First,
    /// Seat 1 opens.
    Second,
    /// Decided by coin flip at the start of every match.
    Random,
}

impl From<FirstMover> for Opening {
    fn from(first: FirstMover) -> Self {
        match first {
            FirstMover::Human => Opening::First,
            FirstMover::Computer => Opening::Second,
            FirstMover::Random => Opening::Random,
        }
    }
}

/// A player together with the source of their moves.
#[derive(Debug)]
pub struct Seat {
    player: Player,
    source: Box<dyn MoveSource>,
}

impl Seat {
    /// Seats a player.
    pub fn new(player: Player, source: Box<dyn MoveSource>) -> Self {
        Self { player, source }
    }

    /// Returns the seated player.
    pub fn player(&self) -> &Player {
        &self.player
    }
}

/// Match-level rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchRules {
    /// Game wins that take the match.
    pub target_score: u32,
    /// Who opens each game.
    pub opening: Opening,
    /// Whether to ask before each new game within a match.
    pub prompt_between_games: bool,
}

impl Default for MatchRules {
    fn default() -> Self {
        Self {
            target_score: 5,
            opening: Opening::First,
            prompt_between_games: true,
        }
    }
}

/// Drives tic-tac-toe matches between two seats.
#[derive(Debug)]
pub struct MatchController<C: Console> {
    console: C,
    board: Board,
    seats: [Seat; 2],
    scoreboard: Scoreboard,
    rules: MatchRules,
    rng: GameRng,
    opener: PlayerId,
    state: MatchState,
}

impl<C: Console> MatchController<C> {
    /// Creates a controller; the first game is ready to play.
    #[instrument(skip(console, seats, rng))]
    pub fn new(console: C, seats: [Seat; 2], rules: MatchRules, mut rng: GameRng) -> Self {
        let scoreboard = Scoreboard::new(
            seats
                .iter()
                .map(|seat| (seat.player.id(), seat.player.name().to_string())),
            rules.target_score,
        );
        let opener = Self::resolve_opener(&seats, rules.opening, &mut rng);
        info!(opener = %opener, target = rules.target_score, "Match controller created");

        Self {
            console,
            board: Board::new(),
            seats,
            scoreboard,
            rules,
            rng,
            opener,
            state: MatchState::AwaitingMove(opener),
        }
    }

    /// Sets up a human at seat 0 against a computer at seat 1.
    pub fn human_vs_computer(console: C, settings: &TicTacToeSettings, mut rng: GameRng) -> Self {
        let human = Player::new(
            PlayerId::new(0),
            settings.human_name().as_str(),
            Marker::new(*settings.human_marker()),
        );
        let computer = Player::new(
            PlayerId::new(1),
            settings.computer_name().as_str(),
            Marker::new(*settings.computer_marker()),
        );
        let seats = [
            Seat::new(human, Box::new(HumanMoveSource::new())),
            Seat::new(
                computer,
                Box::new(ComputerMoveSource::new(*settings.strategy(), rng.fork())),
            ),
        ];
        let rules = MatchRules {
            target_score: *settings.target_score(),
            opening: (*settings.first_mover()).into(),
            prompt_between_games: *settings.prompt_between_games(),
        };
        Self::new(console, seats, rules, rng)
    }

    /// Returns the current state.
    pub fn state(&self) -> MatchState {
        self.state
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the scoreboard.
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Returns the console.
    pub fn console(&self) -> &C {
        &self.console
    }

    /// Returns the player in a seat.
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.seats
            .iter()
            .map(|seat| &seat.player)
            .find(|player| player.id() == id)
    }

    /// Returns the player who opens every game of this match.
    pub fn opener(&self) -> PlayerId {
        self.opener
    }

    /// Performs one state transition and returns the new state.
    ///
    /// `MatchOver` is absorbing; call [`MatchController::new_match`] to
    /// leave it.
    #[instrument(skip(self), fields(state = %self.state))]
    pub fn step(&mut self) -> Result<MatchState, ConsoleError> {
        let next = match self.state {
            MatchState::AwaitingMove(id) => self.take_turn(id)?,
            MatchState::GameOver(outcome) => self.conclude_game(outcome),
            MatchState::MatchOver(winner) => MatchState::MatchOver(winner),
        };
        debug!(next = %next, "Transition");
        self.state = next;
        Ok(next)
    }

    /// Zeroes the scores, clears the board, and re-enters `AwaitingMove`.
    #[instrument(skip(self))]
    pub fn new_match(&mut self) {
        self.scoreboard.reset_all();
        self.board.reset();
        self.opener = Self::resolve_opener(&self.seats, self.rules.opening, &mut self.rng);
        self.state = MatchState::AwaitingMove(self.opener);
        info!(opener = %self.opener, "New match");
    }

    /// Plays until a match winner emerges or the player stops between games.
    #[instrument(skip(self))]
    pub fn play_match(&mut self) -> Result<MatchEnd, ConsoleError> {
        loop {
            match self.state {
                MatchState::AwaitingMove(id) => {
                    if self.seat(id).source.is_interactive() {
                        self.display_scores_and_board();
                    }
                    self.step()?;
                }
                MatchState::GameOver(outcome) => {
                    self.display_game_result(outcome);
                    if let MatchState::AwaitingMove(_) = self.step()? {
                        if self.rules.prompt_between_games && !self.continue_match()? {
                            return Ok(MatchEnd::Abandoned);
                        }
                        self.console.print("Let's keep playing!");
                    }
                }
                MatchState::MatchOver(winner) => {
                    self.display_match_result(winner);
                    return Ok(MatchEnd::Won(winner));
                }
            }
        }
    }

    /// Runs a whole session: welcome, matches until declined, goodbye.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<(), ConsoleError> {
        self.console.print("Welcome to Tic Tac Toe!");
        self.console.print("");

        loop {
            match self.play_match()? {
                MatchEnd::Abandoned => break,
                MatchEnd::Won(_) => {
                    let prompt = "Would you like to play another match? (y/n)";
                    if !ask_yes_no(&mut self.console, prompt)? {
                        break;
                    }
                    self.new_match();
                }
            }
        }

        self.console.print("Thanks for playing Tic Tac Toe! Goodbye!");
        Ok(())
    }

    fn take_turn(&mut self, id: PlayerId) -> Result<MatchState, ConsoleError> {
        let (me, _) = self.seat_pair(id);
        loop {
            let [first, second] = &mut self.seats;
            let (seat, other) = if me == 0 {
                (first, &*second)
            } else {
                (second, &*first)
            };
            let turn = Turn {
                me: &seat.player,
                opponent: &other.player,
            };
            let chosen = match seat.source.choose(&self.board, turn, &mut self.console) {
                Ok(pos) => pos,
                Err(TurnError::Console(e)) => return Err(e),
                Err(TurnError::BoardFull) => {
                    warn!("Asked for a move on a full board");
                    return Ok(self.evaluate(id));
                }
            };

            let marker = self.seats[me].player.marker();
            match self.board.place(chosen.number(), marker) {
                Ok(pos) => {
                    debug!(player = %id, %pos, "Move placed");
                    return Ok(self.evaluate(id));
                }
                Err(e) => {
                    warn!(error = %e, "Move source produced an invalid move");
                    self.console.print(&format!("{e}."));
                }
            }
        }
    }

    fn evaluate(&self, mover: PlayerId) -> MatchState {
        if let Some(marker) = self.board.winning_marker() {
            let winner = self
                .seats
                .iter()
                .find(|seat| seat.player.marker() == marker)
                .map(|seat| seat.player.id())
                .unwrap_or(mover);
            return MatchState::GameOver(GameOutcome::LineWin(winner));
        }
        if self.board.is_full() {
            return MatchState::GameOver(GameOutcome::Draw);
        }
        let (_, opponent) = self.seat_pair(mover);
        MatchState::AwaitingMove(self.seats[opponent].player.id())
    }

    fn conclude_game(&mut self, outcome: GameOutcome) -> MatchState {
        info!(%outcome, "Game over");
        if let GameOutcome::LineWin(winner) = outcome {
            if let Err(e) = self.scoreboard.add_point(winner) {
                warn!(error = %e, "Could not score game");
            }
        }

        if let Some(winner) = self.scoreboard.winner() {
            info!(winner = %winner, "Match over");
            return MatchState::MatchOver(winner);
        }

        self.board.reset();
        MatchState::AwaitingMove(self.opener)
    }

    fn continue_match(&mut self) -> Result<bool, ConsoleError> {
        self.console
            .print(&format!("Current scores are {}", self.scoreboard.summary()));
        self.console.print(&format!(
            "First player to {} wins.",
            self.scoreboard.target_score()
        ));
        ask_yes_no(
            &mut self.console,
            "Would you like to continue this match? (y/n)",
        )
    }

    fn display_scores_and_board(&mut self) {
        let banner = format!(
            "First player to {} wins takes the match.",
            self.scoreboard.target_score()
        );
        let line = "-".repeat(40);
        let scores = self.scoreboard.summary();
        let markers = self
            .seats
            .iter()
            .map(|seat| format!("{} is {}.", seat.player.name(), seat.player.marker()))
            .collect::<Vec<_>>()
            .join(" ");
        let board = self.board.render();

        let lines: [&str; 8] = [&banner, &line, &scores, &line, &markers, "", &board, ""];
        for text in lines {
            self.console.print(text);
        }
    }

    fn display_game_result(&mut self, outcome: GameOutcome) {
        let board = self.board.render();
        self.console.print(&board);
        self.console.print("");
        let message = match outcome {
            GameOutcome::LineWin(id) => format!("{} won!", self.name(id)),
            GameOutcome::Draw => "It's a tie!".to_string(),
        };
        self.console.print(&message);
    }

    fn display_match_result(&mut self, winner: PlayerId) {
        let summary = format!("With a final score of: {}", self.scoreboard.summary());
        let message = format!("{} won the match!", self.name(winner));
        self.console.print("");
        self.console.print(&summary);
        self.console.print(&message);
    }

    fn name(&self, id: PlayerId) -> String {
        self.player(id)
            .map(|player| player.name().to_string())
            .unwrap_or_else(|| id.to_string())
    }

    fn seat(&self, id: PlayerId) -> &Seat {
        &self.seats[self.seat_pair(id).0]
    }

    fn seat_pair(&self, id: PlayerId) -> (usize, usize) {
        if self.seats[1].player.id() == id {
            (1, 0)
        } else {
            (0, 1)
        }
    }

    fn resolve_opener(seats: &[Seat; 2], opening: Opening, rng: &mut GameRng) -> PlayerId {
        let index = match opening {
            Opening::First => 0,
            Opening::Second => 1,
            Opening::Random => usize::from(rng.gen_bool(0.5)),
        };
        seats[index].player.id()
    }
}
