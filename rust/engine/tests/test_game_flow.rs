use std::collections::HashSet;

use fivecard_engine::cards::Card;
use fivecard_engine::engine::{make_move, new_game, Engine};
use fivecard_engine::errors::GameError;
use fivecard_engine::game::{GameResult, GameState, Phase};
use fivecard_engine::hand::{evaluate, Outcome};
use fivecard_engine::player::HandState;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

const NONE: [&str; 0] = [];

fn game(seed: u64) -> GameState {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    new_game("alice", "bob", &mut rng).expect("new game")
}

fn card_count(g: &GameState) -> usize {
    let set: HashSet<Card> = g
        .deck()
        .cards()
        .iter()
        .chain(g.player_one_hand().cards())
        .chain(g.player_two_hand().cards())
        .copied()
        .collect();
    set.len()
}

#[test]
fn new_game_deals_five_each_and_player_one_starts() {
    let g = game(1);
    assert_eq!(g.phase(), Phase::Starting);
    assert_eq!(g.active_player_id().unwrap(), "alice");
    assert_eq!(g.deck().remaining(), 42);
    assert_eq!(card_count(&g), 52);
    assert!(!g.is_finished());
    assert!(!g.is_forfeited());
    assert!(g.winner_id().is_none());
    assert_eq!(g.player_one().hand_state(), HandState::Starting);
    g.validate().expect("fresh game is consistent");
}

#[test]
fn same_seed_deals_same_game() {
    assert_eq!(game(42), game(42));
    assert_ne!(game(42).player_one_hand(), game(43).player_one_hand());
}

#[test]
fn new_game_rejects_missing_or_identical_players() {
    let mut rng = ChaCha20Rng::seed_from_u64(0);
    assert!(matches!(
        new_game("", "bob", &mut rng),
        Err(GameError::InvalidPlayers { .. })
    ));
    assert!(matches!(
        new_game("alice", "  ", &mut rng),
        Err(GameError::InvalidPlayers { .. })
    ));
    assert!(matches!(
        new_game("alice", "alice", &mut rng),
        Err(GameError::InvalidPlayers { .. })
    ));
}

#[test]
fn player_one_move_passes_the_turn() {
    let g = game(3);
    let discard: Vec<String> = g.player_one_hand().ids()[..3].to_vec();
    let (next, final_hand) = make_move(&g, "alice", &discard).unwrap();

    assert_eq!(next.phase(), Phase::PlayerOneMoved);
    assert_eq!(next.active_player_id().unwrap(), "bob");
    assert!(!next.is_finished());
    assert_eq!(next.player_one_hand(), &final_hand);
    assert_eq!(next.player_one().starting_hand(), g.player_one_hand());
    assert_eq!(next.player_one().hand_state(), HandState::Ending);
    for id in &discard {
        assert!(final_hand.find_by_id(id).is_none(), "{} should be gone", id);
    }
    // kept cards stay in front
    assert_eq!(&final_hand.ids()[..2], &g.player_one_hand().ids()[3..]);
    assert_eq!(next.deck().remaining(), 42);
    assert_eq!(card_count(&next), 52);
    assert!(result_is_pending(&next));
    next.validate().unwrap();
}

fn result_is_pending(g: &GameState) -> bool {
    g.result().is_none()
}

#[test]
fn standing_pat_keeps_the_dealt_hand() {
    let g = game(4);
    let (next, final_hand) = make_move(&g, "alice", NONE).unwrap();
    assert_eq!(&final_hand, g.player_one_hand());
    assert_eq!(next.deck(), g.deck());
}

#[test]
fn full_game_finishes_and_records_winner() {
    for seed in 0..200u64 {
        let g = game(seed);
        let p1_discard = g.player_one_hand().ids()[..(seed % 6) as usize].to_vec();
        let (g, p1_final) = make_move(&g, "alice", &p1_discard).unwrap();
        let p2_discard = g.player_two_hand().ids()[..((seed / 6) % 6) as usize].to_vec();
        let (g, p2_final) = make_move(&g, "bob", &p2_discard).unwrap();

        assert!(g.is_finished());
        assert_eq!(g.phase(), Phase::Finished);
        assert!(g.active_player_id().is_none());
        assert_eq!(card_count(&g), 52);
        assert_eq!(g.deck().remaining(), 42);

        let outcome = evaluate(&p1_final, &p2_final);
        match outcome {
            Outcome::Tie => assert!(g.winner_id().is_none()),
            Outcome::FirstWins => assert_eq!(g.winner_id().unwrap(), "alice"),
            Outcome::SecondWins => assert_eq!(g.winner_id().unwrap(), "bob"),
        }
        match g.result() {
            Some(GameResult::Showdown(info)) => {
                assert_eq!(info.outcome, outcome);
                assert_eq!(info.player_one_hand, p1_final);
                assert_eq!(info.player_two_hand, p2_final);
                assert_eq!(info.player_two_category, p2_final.strength().category);
            }
            other => panic!("expected showdown, got {:?}", other),
        }
        g.validate().unwrap();
    }
}

#[test]
fn discards_are_never_redrawn() {
    let g = game(11);
    let p1_all = g.player_one_hand().ids();
    let (g, _) = make_move(&g, "alice", &p1_all).unwrap();
    let p2_all = g.player_two_hand().ids();
    let (g, p2_final) = make_move(&g, "bob", &p2_all).unwrap();
    for id in &p1_all {
        assert!(p2_final.find_by_id(id).is_none());
    }
    assert_eq!(card_count(&g), 52);
}

#[test]
fn unknown_card_id_changes_nothing() {
    let g = game(5);
    let mut discard = g.player_one_hand().ids()[..2].to_vec();
    let foreign = g.player_two_hand().cards()[0].id();
    discard.push(foreign.clone());

    let before = g.clone();
    assert_eq!(
        make_move(&g, "alice", &discard),
        Err(GameError::UnknownCardId { id: foreign })
    );
    assert_eq!(g, before);
    assert!(matches!(
        make_move(&g, "alice", ["not_a_card"]),
        Err(GameError::UnknownCardId { .. })
    ));
}

#[test]
fn more_than_five_discards_is_rejected() {
    let g = game(6);
    let mut discard = g.player_one_hand().ids();
    discard.push(g.deck().cards()[0].id());
    assert_eq!(
        make_move(&g, "alice", &discard),
        Err(GameError::TooManyCardsExchanged { requested: 6 })
    );
}

#[test]
fn turn_order_is_enforced() {
    let g = game(7);
    assert_eq!(
        make_move(&g, "bob", NONE),
        Err(GameError::NotPlayersTurn {
            expected: "alice".into(),
            actual: "bob".into()
        })
    );
    assert_eq!(
        make_move(&g, "mallory", NONE),
        Err(GameError::UnknownPlayer {
            id: "mallory".into()
        })
    );

    let (g, _) = make_move(&g, "alice", NONE).unwrap();
    assert!(matches!(
        make_move(&g, "alice", NONE),
        Err(GameError::NotPlayersTurn { .. })
    ));

    let (g, _) = make_move(&g, "bob", NONE).unwrap();
    assert_eq!(make_move(&g, "bob", NONE), Err(GameError::GameFinished));
    assert_eq!(make_move(&g, "alice", NONE), Err(GameError::GameFinished));
}

#[test]
fn engine_replays_a_sequence_of_games_from_its_seed() {
    let mut a = Engine::new(Some(77));
    let mut b = Engine::new(Some(a.seed()));
    for _ in 0..3 {
        let ga = a.new_game("alice", "bob").unwrap();
        let gb = b.new_game("alice", "bob").unwrap();
        assert_eq!(ga, gb);
    }
    let first = Engine::new(Some(77)).new_game("alice", "bob").unwrap();
    let g = a.new_game("alice", "bob").unwrap();
    assert_ne!(first, g, "later games use later shuffles");
    let (g, _) = a.make_move(&g, "alice", NONE).unwrap();
    assert_eq!(g.phase(), Phase::PlayerOneMoved);
}
