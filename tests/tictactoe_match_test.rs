//! End-to-end tic-tac-toe matches driven through a scripted console.

use parlor_games::games::tictactoe::{HumanMoveSource, Marker, Player, Seat};
use parlor_games::{
    ComputerStrategy, ConsoleError, GameOutcome, GameRng, MatchController, MatchEnd, MatchRules,
    MatchState, PlayerId, ScriptedConsole, TicTacToeSettings,
};

const ANN: PlayerId = PlayerId::new(0);
const BO: PlayerId = PlayerId::new(1);

fn two_humans(script: &[&str], target_score: u32) -> MatchController<ScriptedConsole> {
    let seats = [
        Seat::new(
            Player::new(ANN, "Ann", Marker::new('X')),
            Box::new(HumanMoveSource::new()),
        ),
        Seat::new(
            Player::new(BO, "Bo", Marker::new('O')),
            Box::new(HumanMoveSource::new()),
        ),
    ];
    let rules = MatchRules {
        target_score,
        ..MatchRules::default()
    };
    MatchController::new(
        ScriptedConsole::new(script.iter().copied()),
        seats,
        rules,
        GameRng::new(7),
    )
}

#[test]
fn test_top_row_wins_match() {
    let mut ctl = two_humans(&["1", "4", "2", "5", "3"], 1);

    assert_eq!(ctl.play_match().unwrap(), MatchEnd::Won(ANN));
    assert_eq!(ctl.scoreboard().score(ANN), Some(1));
    assert_eq!(ctl.scoreboard().score(BO), Some(0));
    assert!(ctl.console().printed("Ann won!"));
    assert!(ctl.console().printed("Ann won the match!"));
}

#[test]
fn test_draw_scores_nobody_and_resets_board() {
    let moves = ["1", "2", "3", "5", "4", "6", "8", "7", "9"];
    let mut ctl = two_humans(&moves, 1);
    for _ in 0..moves.len() {
        ctl.step().unwrap();
    }
    assert_eq!(ctl.state(), MatchState::GameOver(GameOutcome::Draw));

    assert_eq!(ctl.step().unwrap(), MatchState::AwaitingMove(ANN));
    assert_eq!(ctl.scoreboard().score(ANN), Some(0));
    assert_eq!(ctl.scoreboard().score(BO), Some(0));
    assert_eq!(ctl.board().unmarked_positions().len(), 9);
}

#[test]
fn test_draw_then_decline_abandons() {
    let mut script = vec!["1", "2", "3", "5", "4", "6", "8", "7", "9"];
    script.push("n");
    let mut ctl = two_humans(&script, 3);

    assert_eq!(ctl.play_match().unwrap(), MatchEnd::Abandoned);
    assert!(ctl.console().printed("It's a tie!"));
    assert!(ctl.console().printed("Would you like to continue this match?"));
}

#[test]
fn test_scores_accumulate_to_target() {
    let script = [
        // Ann takes the top row.
        "1", "4", "2", "5", "3", "y",
        // Bo takes the middle row.
        "1", "4", "2", "5", "9", "6", "y",
        // Ann again.
        "1", "4", "2", "5", "3",
    ];
    let mut ctl = two_humans(&script, 2);

    assert_eq!(ctl.play_match().unwrap(), MatchEnd::Won(ANN));
    assert_eq!(ctl.scoreboard().score(ANN), Some(2));
    assert_eq!(ctl.scoreboard().score(BO), Some(1));
    assert!(ctl.console().printed("Let's keep playing!"));
    assert!(ctl.console().printed("With a final score of: Ann: 2\tBo: 1"));
}

#[test]
fn test_invalid_square_reprompts() {
    let mut ctl = two_humans(&["0", "five", "5", "5", "1"], 1);
    ctl.step().unwrap();
    ctl.step().unwrap();

    assert!(ctl.console().printed("Sorry, that's not a valid choice."));
    assert!(ctl.console().printed("already taken"));
    assert_eq!(ctl.state(), MatchState::AwaitingMove(ANN));
}

#[test]
fn test_new_match_zeroes_scores() {
    let mut ctl = two_humans(&["1", "4", "2", "5", "3"], 1);
    ctl.play_match().unwrap();
    ctl.new_match();

    assert_eq!(ctl.state(), MatchState::AwaitingMove(ANN));
    assert_eq!(ctl.scoreboard().score(ANN), Some(0));
    assert!(ctl.board().unmarked_positions().len() == 9);
}

#[test]
fn test_full_session_against_computer() {
    let settings = TicTacToeSettings::default()
        .with_target_score(1)
        .with_strategy(ComputerStrategy::FirstAvailable);
    // Computer answers 2 then 3; the left column wins.
    let console = ScriptedConsole::new(["1", "4", "7", "n"]);
    let mut ctl = MatchController::human_vs_computer(console, &settings, GameRng::new(3));

    ctl.run().unwrap();

    let console = ctl.console();
    assert!(console.printed("Welcome to Tic Tac Toe!"));
    assert!(console.printed("Player won the match!"));
    assert!(console.printed("Would you like to play another match? (y/n)"));
    assert!(console.printed("Goodbye!"));
    assert_eq!(console.remaining_input(), 0);
}

#[test]
fn test_eof_surfaces_closed() {
    let settings = TicTacToeSettings::default();
    let console = ScriptedConsole::new(Vec::<String>::new());
    let mut ctl = MatchController::human_vs_computer(console, &settings, GameRng::new(1));

    assert_eq!(ctl.run(), Err(ConsoleError::Closed));
}
