//! Single games between a trained agent and a human

use crate::{
    Result,
    pipeline::episode::GameState,
    ports::{BoardDisplay, Learner},
    tictactoe::{GameOutcome, Player},
};

/// Play one game between `agent` and `human`, rendering after every move.
///
/// `agent_symbol` decides who opens: X always moves first. No rewards are
/// distributed; both traces are cleared when the game ends.
pub fn play_interactive(
    agent: &mut dyn Learner,
    human: &mut dyn Learner,
    agent_symbol: Player,
    display: &mut dyn BoardDisplay,
) -> Result<GameOutcome> {
    let mut game = match agent_symbol {
        Player::X => GameState::new(agent, human),
        Player::O => GameState::new(human, agent),
    };

    let result = drive(&mut game, display);
    game.reset_traces();
    game.reset();
    result
}

fn drive(game: &mut GameState<'_>, display: &mut dyn BoardDisplay) -> Result<GameOutcome> {
    loop {
        let (_, outcome) = game.play_turn()?;
        display.show_board(game.board())?;

        if outcome.is_terminal() {
            let winner_name = outcome
                .winner()
                .map(|player| game.learner(player).name().to_string());
            display.announce(outcome, winner_name.as_deref())?;
            log::debug!("interactive game finished: {outcome:?}");
            return Ok(outcome);
        }
    }
}
