//! Tests for the tic-tac-toe state machine through its public surface.

use strictly_tictactoe::{
    CELL_COUNT, GameContext, GameEvent, GameMachine, GameOver, GameState, Player, Square, Tag,
};

fn play(game: &mut GameMachine, moves: &[usize]) {
    for &index in moves {
        game.attempt_move(index);
    }
}

fn assert_initial(game: &GameMachine) {
    assert_eq!(game.state(), GameState::Playing);
    assert_eq!(game.context(), &GameContext::new());
    assert!(game.context().board().squares().iter().all(|s| *s == Square::Empty));
    assert_eq!(game.context().moves_played(), 0);
    assert_eq!(game.context().current_player(), Player::X);
    assert_eq!(game.context().winner(), None);
}

#[test]
fn test_new_game_is_initial() {
    assert_initial(&GameMachine::new());
}

#[test]
fn test_scenario_row_win() {
    let mut game = GameMachine::new();
    play(&mut game, &[0, 3, 1, 4, 2]);

    assert_eq!(game.state(), GameState::GameOver(GameOver::Winner));
    assert_eq!(game.context().winner(), Some(Player::X));
    assert!(game.has_tag(Tag::Winner));
    assert!(!game.has_tag(Tag::Draw));
    assert_eq!(game.winning_line().map(|l| l.cells), Some([0, 1, 2]));
}

#[test]
fn test_scenario_draw() {
    let mut game = GameMachine::new();
    play(&mut game, &[0, 1, 2, 3, 5, 4, 6, 8, 7]);

    assert_eq!(game.state(), GameState::GameOver(GameOver::Draw));
    assert_eq!(game.context().winner(), None);
    assert_eq!(game.context().moves_played(), 9);
    assert!(game.has_tag(Tag::Draw));
    assert!(!game.has_tag(Tag::Winner));
}

#[test]
fn test_scenario_repeat_move_is_noop() {
    let mut game = GameMachine::new();
    assert!(game.attempt_move(0).accepted);
    let after_first = game.clone();

    let transition = game.attempt_move(0);
    assert!(!transition.accepted);
    assert_eq!(transition.from, transition.to);
    assert_eq!(game, after_first);
    assert_eq!(game.context().current_player(), Player::O);
}

#[test]
fn test_out_of_range_index_is_ignored() {
    let mut game = GameMachine::new();
    for index in [9, 10, 100, usize::MAX] {
        assert!(!game.attempt_move(index).accepted);
    }
    assert_initial(&game);
}

#[test]
fn test_moves_after_game_over_are_ignored() {
    let mut game = GameMachine::new();
    play(&mut game, &[0, 3, 1, 4, 2]);
    let finished = game.clone();

    for index in 0..CELL_COUNT {
        assert!(!game.attempt_move(index).accepted);
    }
    assert_eq!(game, finished);
}

#[test]
fn test_moves_counted_and_turns_alternate() {
    let mut game = GameMachine::new();
    let sequence = [4, 4, 0, 8, 0, 2, 6, 3, 5];
    let mut accepted = 0u8;
    let mut expected = Player::X;

    for index in sequence {
        let before = *game.context().board();
        let mover = game.context().current_player();
        if game.attempt_move(index).accepted {
            accepted += 1;
            assert_eq!(mover, expected);
            expected = expected.opponent();
            assert_eq!(
                game.context().board().get(index),
                Some(Square::Occupied(mover))
            );
        }
        // No previously occupied square changes.
        for i in 0..CELL_COUNT {
            if before.get(i) != Some(Square::Empty) {
                assert_eq!(game.context().board().get(i), before.get(i));
            }
        }
        assert_eq!(game.context().moves_played(), accepted);
    }
}

#[test]
fn test_winner_is_player_who_just_moved() {
    let mut game = GameMachine::new();
    // O completes the middle column.
    play(&mut game, &[0, 1, 3, 4, 8, 7]);
    assert_eq!(game.context().winner(), Some(Player::O));
    assert_eq!(game.context().current_player(), Player::X);
}

#[test]
fn test_final_move_win_is_not_draw() {
    let mut game = GameMachine::new();
    play(&mut game, &[0, 1, 2, 3, 4, 5, 7, 6, 8]);
    assert_eq!(game.context().moves_played(), 9);
    assert_eq!(game.state(), GameState::GameOver(GameOver::Winner));
    assert_eq!(game.context().winner(), Some(Player::X));
}

#[test]
fn test_reset_from_every_state() {
    let mut playing = GameMachine::new();
    play(&mut playing, &[4, 0]);

    let mut won = GameMachine::new();
    play(&mut won, &[0, 3, 1, 4, 2]);

    let mut drawn = GameMachine::new();
    play(&mut drawn, &[0, 1, 2, 3, 5, 4, 6, 8, 7]);

    for mut game in [GameMachine::new(), playing, won, drawn] {
        let transition = game.reset();
        assert!(transition.accepted);
        assert_eq!(transition.to, GameState::Playing);
        assert_initial(&game);
    }
}

#[test]
fn test_reset_does_not_trigger_game_over() {
    let mut game = GameMachine::new();
    play(&mut game, &[0, 1, 2, 3, 5, 4, 6, 8, 7]);
    game.reset();
    assert_eq!(game.state(), GameState::Playing);
    assert!(game.state().tags().is_empty());

    // A fresh game plays normally after reset.
    play(&mut game, &[0, 3, 1, 4, 2]);
    assert_eq!(game.context().winner(), Some(Player::X));
}

#[test]
fn test_send_events_directly() {
    let mut game = GameMachine::new();
    let transition = game.send(GameEvent::Play { index: 8 });
    assert!(transition.accepted);
    assert_eq!(transition.event.to_string(), "PLAY(8)");

    let transition = game.try_send(GameEvent::Reset).unwrap();
    assert!(transition.accepted);
    assert_initial(&game);
}
