use fivecard_engine::cards::{Card, Rank, Suit};
use fivecard_engine::codec::{
    decode_deck, decode_game, decode_hand, encode_deck, encode_game, encode_hand,
};
use fivecard_engine::deck::Deck;
use fivecard_engine::engine::{make_move, new_game};
use fivecard_engine::errors::GameError;
use fivecard_engine::hand::Hand;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn shuffled_deck() -> Deck {
    let mut rng = ChaCha20Rng::seed_from_u64(31);
    let mut deck = Deck::standard();
    deck.shuffle(&mut rng);
    deck
}

#[test]
fn deck_round_trip_preserves_order() {
    let deck = shuffled_deck();
    let s = encode_deck(&deck).expect("encode");
    assert_eq!(decode_deck(&s).expect("decode"), deck);
}

#[test]
fn encoding_is_structured_rank_suit_records() {
    let hand = Hand::new(Deck::standard().draw(5).unwrap()).unwrap();
    let s = encode_hand(&hand).unwrap();
    let v: serde_json::Value = serde_json::from_str(&s).unwrap();
    assert_eq!(v["version"], 1);
    assert_eq!(v["cards"][0]["rank"], "ace");
    assert_eq!(v["cards"][0]["suit"], "club");
    assert_eq!(v["cards"].as_array().unwrap().len(), 5);
    assert_eq!(decode_hand(&s).unwrap(), hand);
}

#[test]
fn unknown_rank_or_suit_is_rejected() {
    let joker = r#"{"version":1,"cards":[{"rank":"joker","suit":"spade"}]}"#;
    assert!(matches!(
        decode_deck(joker),
        Err(GameError::InvalidEncoding { .. })
    ));
    let bad_suit = r#"{"version":1,"cards":[{"rank":"ace","suit":"star"}]}"#;
    assert!(matches!(
        decode_deck(bad_suit),
        Err(GameError::InvalidEncoding { .. })
    ));
}

#[test]
fn unsupported_version_is_rejected() {
    let s = r#"{"version":2,"cards":[]}"#;
    assert_eq!(
        decode_deck(s),
        Err(GameError::InvalidEncoding {
            reason: "unsupported format version 2".into()
        })
    );
}

#[test]
fn hand_must_hold_five_distinct_cards() {
    let four = r#"{"version":1,"cards":[
        {"rank":"two","suit":"spade"},{"rank":"three","suit":"spade"},
        {"rank":"four","suit":"spade"},{"rank":"five","suit":"spade"}]}"#;
    assert_eq!(decode_hand(four), Err(GameError::InvalidHandSize { size: 4 }));

    let twice = r#"{"version":1,"cards":[
        {"rank":"two","suit":"spade"},{"rank":"two","suit":"spade"},
        {"rank":"four","suit":"spade"},{"rank":"five","suit":"spade"},
        {"rank":"six","suit":"spade"}]}"#;
    assert_eq!(
        decode_hand(twice),
        Err(GameError::DuplicateCard {
            id: Card::new(Rank::Two, Suit::Spade).id()
        })
    );
}

#[test]
fn game_round_trip_mid_game() {
    let mut rng = ChaCha20Rng::seed_from_u64(8);
    let g = new_game("alice", "bob", &mut rng).unwrap();
    let discard = g.player_one_hand().ids()[..4].to_vec();
    let (g, _) = make_move(&g, "alice", &discard).unwrap();

    let s = encode_game(&g).unwrap();
    let back = decode_game(&s).unwrap();
    assert_eq!(back, g);

    let none: [&str; 0] = [];
    let (finished, _) = make_move(&back, "bob", none).unwrap();
    assert_eq!(decode_game(&encode_game(&finished).unwrap()).unwrap(), finished);
}

#[test]
fn tampered_game_is_rejected() {
    let mut rng = ChaCha20Rng::seed_from_u64(9);
    let g = new_game("alice", "bob", &mut rng).unwrap();
    let mut v: serde_json::Value = serde_json::from_str(&encode_game(&g).unwrap()).unwrap();

    // hand the turn to bob without alice having moved
    v["game"]["active_player_id"] = serde_json::json!("bob");
    assert!(matches!(
        decode_game(&v.to_string()),
        Err(GameError::InvalidState { .. })
    ));

    // drop a card from the deck
    let mut v: serde_json::Value = serde_json::from_str(&encode_game(&g).unwrap()).unwrap();
    v["game"]["deck"].as_array_mut().unwrap().pop();
    assert!(matches!(
        decode_game(&v.to_string()),
        Err(GameError::InvalidState { .. })
    ));
}

#[test]
fn blank_player_id_is_rejected() {
    let mut rng = ChaCha20Rng::seed_from_u64(10);
    let g = new_game("alice", "bob", &mut rng).unwrap();
    let mut v: serde_json::Value = serde_json::from_str(&encode_game(&g).unwrap()).unwrap();
    v["game"]["player_one"]["id"] = serde_json::json!("  ");
    v["game"]["active_player_id"] = serde_json::json!("  ");
    assert!(matches!(
        decode_game(&v.to_string()),
        Err(GameError::InvalidEncoding { .. })
    ));
}

#[test]
fn tampered_starting_hand_is_rejected() {
    let mut rng = ChaCha20Rng::seed_from_u64(11);
    let g = new_game("alice", "bob", &mut rng).unwrap();
    let (g, _) = make_move(&g, "alice", g.player_one_hand().ids()).unwrap();

    // alice's dealt cards now sit in the deck; claim she was dealt bob's hand
    let mut v: serde_json::Value = serde_json::from_str(&encode_game(&g).unwrap()).unwrap();
    v["game"]["player_one"]["starting_hand"] = v["game"]["player_two"]["starting_hand"].clone();
    assert!(matches!(
        decode_game(&v.to_string()),
        Err(GameError::DuplicateCard { .. })
    ));
}

#[test]
fn starting_card_missing_from_final_hand_and_deck_is_rejected() {
    let mut rng = ChaCha20Rng::seed_from_u64(12);
    let g = new_game("alice", "bob", &mut rng).unwrap();
    let none: [&str; 0] = [];
    let (g, _) = make_move(&g, "alice", none).unwrap();
    let bob_start = g.player_two_hand().clone();
    let (g, bob_final) = make_move(&g, "bob", &bob_start.ids()[..1]).unwrap();
    let drawn = bob_final
        .cards()
        .iter()
        .find(|c| !bob_start.contains(c))
        .copied()
        .unwrap();
    assert!(!g.deck().contains(&drawn));

    // alice's dealt hand claims a card bob drew later
    let mut v: serde_json::Value = serde_json::from_str(&encode_game(&g).unwrap()).unwrap();
    v["game"]["player_one"]["starting_hand"][0] = serde_json::to_value(drawn).unwrap();
    assert_eq!(
        decode_game(&v.to_string()),
        Err(GameError::InvalidState {
            reason: "starting hand does not match final hand and deck".into()
        })
    );
}
