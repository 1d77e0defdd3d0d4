//! Temporal-difference backups and greedy move selection

use tictactoe_rl::{
    agent::{ValueAgent, ValueTable},
    config::AgentConfig,
    ports::Learner,
    tictactoe::{BoardState, Player},
    types::Fingerprint,
};

fn fp(s: &str) -> Fingerprint {
    s.parse().unwrap()
}

#[test]
fn test_backup_from_zero_values() {
    let mut table = ValueTable::new(0.0);
    let trace = [fp("X........"), fp("X...O.X.."), fp("X..XO.X..")];

    table.backup(&trace, 1.0, 0.1, 1.0);

    assert!((table.get_or_default(trace[2]) - 0.1).abs() < 1e-12);
    assert!((table.get_or_default(trace[1]) - 0.01).abs() < 1e-12);
    assert!((table.get_or_default(trace[0]) - 0.001).abs() < 1e-12);
}

#[test]
fn test_backup_with_discount() {
    let mut table = ValueTable::new(0.0);
    let s = fp("X........");
    table.set(s, 0.5);

    table.backup(&[s], 1.0, 0.5, 0.9);

    // 0.5 + 0.5 * (0.9 - 0.5)
    assert!((table.get_or_default(s) - 0.7).abs() < 1e-12);
}

#[test]
fn test_feed_reward_updates_trace_in_agent() {
    let config = AgentConfig::default().with_learning_rate(0.1);
    let mut agent = ValueAgent::new("x", config);
    let states = [fp("X........"), fp("X...O.X..")];
    for s in states {
        agent.add_state(s);
    }

    agent.feed_reward(1.0);

    assert!((agent.table().get_or_default(states[1]) - 0.1).abs() < 1e-12);
    assert!((agent.table().get_or_default(states[0]) - 0.01).abs() < 1e-12);
    // Trace survives until reset
    assert_eq!(agent.trace().len(), 2);

    agent.reset_trace();
    agent.reset_trace();
    assert!(agent.trace().is_empty());
}

#[test]
fn test_greedy_agent_follows_highest_value() {
    let mut table = ValueTable::new(0.0);
    let board = BoardState::from_string("XX.OO....").unwrap();
    let winning = board.make_move(2).unwrap().fingerprint();
    table.set(winning, 1.0);

    let config = AgentConfig::default().with_epsilon(0.0);
    let mut agent = ValueAgent::with_table("x", config, table).with_seed(3);

    for _ in 0..10 {
        let action = agent
            .choose_action(&board.available_moves(), &board, Player::X)
            .unwrap();
        assert_eq!(action, 2);
    }
}

#[test]
fn test_greedy_ties_go_to_first_legal_move() {
    let config = AgentConfig::default().with_epsilon(0.0);
    let mut agent = ValueAgent::new("x", config).with_seed(1);
    let board = BoardState::new();

    let action = agent
        .choose_action(&[3, 5, 7], &board, Player::X)
        .unwrap();
    assert_eq!(action, 3);
}

#[test]
fn test_choose_action_does_not_touch_trace_or_board() {
    let mut agent = ValueAgent::new("x", AgentConfig::default()).with_seed(5);
    let board = BoardState::new();
    let before = board;

    agent
        .choose_action(&board.available_moves(), &board, Player::X)
        .unwrap();

    assert_eq!(board, before);
    assert!(agent.trace().is_empty());
}

#[test]
fn test_no_legal_moves_is_an_error() {
    let mut agent = ValueAgent::new("x", AgentConfig::default()).with_seed(5);
    let board = BoardState::new();
    assert!(agent.choose_action(&[], &board, Player::X).is_err());
}
