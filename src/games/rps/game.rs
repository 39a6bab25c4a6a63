//! Rock-paper-scissors-lizard-spock match loop.

use std::cmp::Ordering;

use strum::IntoEnumIterator;
use tracing::{debug, info, instrument, warn};

use super::choice::Choice;
use super::history::History;
use super::personality::Personality;
use crate::config::RpsSettings;
use crate::console::{Console, ConsoleError};
use crate::prompt::{ask_name, ask_yes_no, retrieve};
use crate::rng::GameRng;
use crate::scoreboard::{PlayerId, Scoreboard};

const HUMAN: PlayerId = PlayerId::new(0);
const COMPUTER: PlayerId = PlayerId::new(1);

/// Capability to produce a throw.
pub trait ChoiceSource: std::fmt::Debug {
    /// Produces the next throw.
    fn choose(&mut self, console: &mut dyn Console) -> Result<Choice, ConsoleError>;
}

/// Throws typed at the console.
#[derive(Debug, Default, Clone, Copy)]
pub struct HumanChoice;

impl ChoiceSource for HumanChoice {
    #[instrument(skip(self, console))]
    fn choose(&mut self, console: &mut dyn Console) -> Result<Choice, ConsoleError> {
        let menu = Choice::iter()
            .map(Choice::menu_label)
            .collect::<Vec<_>>()
            .join(", ");
        let prompt = format!("Choose one of the following: {menu}");
        let accepted = Choice::accepted_inputs();
        let options = accepted.iter().map(String::as_str).collect::<Vec<_>>();

        loop {
            let answer = retrieve(console, &prompt, &options, "That's an invalid choice.")?;
            if let Some(choice) = Choice::parse(&answer) {
                return Ok(choice);
            }
        }
    }
}

/// Throws drawn from a personality.
#[derive(Debug, Clone)]
pub struct ComputerChoice {
    personality: Personality,
    rng: GameRng,
}

impl ComputerChoice {
    /// Creates a computer thrower.
    pub fn new(personality: Personality, rng: GameRng) -> Self {
        Self { personality, rng }
    }
}

impl ChoiceSource for ComputerChoice {
    fn choose(&mut self, _console: &mut dyn Console) -> Result<Choice, ConsoleError> {
        Ok(self.personality.throw(&mut self.rng))
    }
}

/// What happened in one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundOutcome {
    /// The human's throw.
    pub human: Choice,
    /// The computer's throw.
    pub computer: Choice,
    /// Who won, or `None` for a tie.
    pub winner: Option<PlayerId>,
}

/// A human against one computer personality, matches to a target score.
#[derive(Debug)]
pub struct RpsGame<C: Console> {
    console: C,
    human_name: String,
    computer_name: String,
    human: Box<dyn ChoiceSource>,
    computer: Box<dyn ChoiceSource>,
    scoreboard: Scoreboard,
    history: History,
}

impl<C: Console> RpsGame<C> {
    /// Creates a game with explicit throw sources.
    #[instrument(skip(console, human, computer))]
    pub fn new(
        console: C,
        human_name: String,
        computer_name: String,
        human: Box<dyn ChoiceSource>,
        computer: Box<dyn ChoiceSource>,
        target_score: u32,
    ) -> Self {
        let scoreboard = Scoreboard::new(
            [(HUMAN, human_name.clone()), (COMPUTER, computer_name.clone())],
            target_score,
        );
        Self {
            console,
            human_name,
            computer_name,
            human,
            computer,
            scoreboard,
            history: History::new(Some("Rock, Paper, Scissors initiated!".to_string())),
        }
    }

    /// Greets the player, asks their name, and seats a computer opponent.
    #[instrument(skip(console, settings, rng))]
    pub fn setup(
        mut console: C,
        settings: &RpsSettings,
        mut rng: GameRng,
    ) -> Result<Self, ConsoleError> {
        console.print("Welcome to Rock, Paper, Scissors, Lizard, Spock!");
        let name = ask_name(&mut console, "What's your name?", |_| None)?;

        let personality = match settings.computer_name() {
            Some(name) => Personality::named(name),
            None => Personality::random(&mut rng),
        };
        info!(opponent = personality.name(), "Opponent chosen");

        let computer_name = personality.name().to_string();
        Ok(Self::new(
            console,
            name,
            computer_name,
            Box::new(HumanChoice),
            Box::new(ComputerChoice::new(personality, rng.fork())),
            *settings.target_score(),
        ))
    }

    /// Returns the scoreboard.
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Returns the session history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Returns the console.
    pub fn console(&self) -> &C {
        &self.console
    }

    /// Plays one game: both throw, the winner scores, history records it.
    #[instrument(skip(self))]
    pub fn play_round(&mut self) -> Result<RoundOutcome, ConsoleError> {
        self.history.new_game();
        let scores = self.scoreboard.summary();
        self.console.print(&scores);

        let human = self.human.choose(&mut self.console)?;
        let computer = self.computer.choose(&mut self.console)?;
        let winner = match human.versus(computer) {
            Ordering::Greater => Some(HUMAN),
            Ordering::Less => Some(COMPUTER),
            Ordering::Equal => None,
        };
        debug!(%human, %computer, ?winner, "Round decided");

        let human_line = format!("{} chose {}", self.human_name, human);
        let computer_line = format!("{} chose {}", self.computer_name, computer);
        let verdict = match winner {
            Some(id) => format!("{} won!", self.name(id)),
            None => "It's a tie!".to_string(),
        };
        for line in [&human_line, &computer_line, &verdict] {
            self.console.print(line);
        }

        if let Some(id) = winner {
            if let Err(e) = self.scoreboard.add_point(id) {
                warn!(error = %e, "Could not score game");
            }
        }

        let summary = match winner {
            Some(id) => format!("{} won this game.", self.name(id)),
            None => "This game was a tie.".to_string(),
        };
        let scores = format!("Scores: {}", self.scoreboard.summary());
        self.history.add_items([
            format!("{human_line}..."),
            format!("{computer_line}..."),
            summary,
            scores,
        ]);

        Ok(RoundOutcome {
            human,
            computer,
            winner,
        })
    }

    /// Plays games until someone reaches the target or the player stops.
    ///
    /// Returns the match winner, or `None` if the player quit early.
    #[instrument(skip(self))]
    pub fn play_match(&mut self) -> Result<Option<PlayerId>, ConsoleError> {
        self.history.add_banner("~~~Start of a new match~~~");
        loop {
            self.play_round()?;

            if let Some(winner) = self.scoreboard.winner() {
                let name = self.name(winner).to_string();
                self.console.print(&format!("END OF THE MATCH! {name} wins!"));
                self.history.add_banner(&format!("{name} wins the match!"));
                info!(winner = %name, "Match over");
                return Ok(Some(winner));
            }

            let prompt = "Would you like to continue this match with another game? (y/n)";
            if !ask_yes_no(&mut self.console, prompt)? {
                return Ok(None);
            }
        }
    }

    /// Runs matches until the player declines, then prints the history.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<(), ConsoleError> {
        loop {
            if self.play_match()?.is_none() {
                break;
            }
            let prompt = format!(
                "Would you like to play another match to see who gets to {} wins first? (y/n)",
                self.scoreboard.target_score()
            );
            if !ask_yes_no(&mut self.console, &prompt)? {
                break;
            }
            self.scoreboard.reset_all();
        }

        self.console.print("Here's your game history:");
        for line in self.history.render() {
            self.console.print(&line);
        }
        self.console
            .print("Thanks for playing Rock, Paper, Scissors, Lizard, Spock. Goodbye!");
        Ok(())
    }

    fn name(&self, id: PlayerId) -> &str {
        if id == HUMAN {
            &self.human_name
        } else {
            &self.computer_name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;
    use std::collections::VecDeque;

    #[derive(Debug)]
    struct Fixed(VecDeque<Choice>);

    impl ChoiceSource for Fixed {
        fn choose(&mut self, _console: &mut dyn Console) -> Result<Choice, ConsoleError> {
            self.0.pop_front().ok_or(ConsoleError::Closed)
        }
    }

    fn fixed(choices: &[Choice]) -> Box<dyn ChoiceSource> {
        Box::new(Fixed(choices.iter().copied().collect()))
    }

    fn game(input: &[&str], computer: &[Choice], target: u32) -> RpsGame<ScriptedConsole> {
        RpsGame::new(
            ScriptedConsole::new(input.iter().copied()),
            "Ann".to_string(),
            "Hal".to_string(),
            Box::new(HumanChoice),
            fixed(computer),
            target,
        )
    }

    #[test]
    fn test_round_winner_scores() {
        let mut game = game(&["rock"], &[Choice::Scissors], 3);
        let outcome = game.play_round().unwrap();

        assert_eq!(outcome.winner, Some(HUMAN));
        assert_eq!(game.scoreboard().score(HUMAN), Some(1));
        assert!(game.console().printed("Ann won!"));
        assert!(game.console().printed("Hal chose Scissors"));
    }

    #[test]
    fn test_tie_scores_nobody() {
        let mut game = game(&["k"], &[Choice::Spock], 3);
        let outcome = game.play_round().unwrap();

        assert_eq!(outcome.winner, None);
        assert_eq!(game.scoreboard().score(HUMAN), Some(0));
        assert_eq!(game.scoreboard().score(COMPUTER), Some(0));
        assert!(game.console().printed("It's a tie!"));
    }

    #[test]
    fn test_invalid_throw_reprompts() {
        let mut game = game(&["banana", "p"], &[Choice::Rock], 3);
        let outcome = game.play_round().unwrap();

        assert_eq!(outcome.human, Choice::Paper);
        assert!(game.console().printed("That's an invalid choice."));
    }

    #[test]
    fn test_match_ends_at_target() {
        let mut game = game(&["rock", "y", "rock"], &[Choice::Lizard, Choice::Scissors], 2);
        let winner = game.play_match().unwrap();

        assert_eq!(winner, Some(HUMAN));
        assert!(game.console().printed("END OF THE MATCH! Ann wins!"));
    }

    #[test]
    fn test_quit_mid_match() {
        let mut game = game(&["rock", "n"], &[Choice::Paper], 5);
        assert_eq!(game.play_match().unwrap(), None);
        assert_eq!(game.scoreboard().score(COMPUTER), Some(1));
    }

    #[test]
    fn test_run_prints_history() {
        let mut game = game(&["spock", "n"], &[Choice::Rock], 1);
        game.run().unwrap();

        let console = game.console();
        assert!(console.printed("Here's your game history:"));
        assert!(console.printed("1-1. Ann chose Spock..."));
        assert!(console.printed("Ann wins the match!"));
        assert!(console.printed("Goodbye"));
        assert_eq!(game.history().games(), 1);
    }

    #[test]
    fn test_setup_with_named_opponent() {
        let console = ScriptedConsole::new(["", "Ann"]);
        let settings = RpsSettings::default().with_computer_name("Wall-E");
        let game = RpsGame::setup(console, &settings, GameRng::new(9)).unwrap();

        assert!(game.console().printed("Sorry, you must enter a name."));
        assert_eq!(game.name(COMPUTER), "Wall-E");
        assert_eq!(game.name(HUMAN), "Ann");
    }
}
