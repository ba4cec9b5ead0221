use draw_poker::game::{Game, GameConfig, HistoryVerb, Phase};
use draw_poker::player::Seat;

fn opened_game(seed: u64) -> Game {
    let mut game = Game::new(GameConfig::default().with_seed(seed)).unwrap();
    while game.phase() != Phase::OpenCheck {
        game.next_round().unwrap();
    }
    game
}

#[test]
fn history_records_open_and_antes() {
    let mut game = opened_game(17);
    let round = game.round();
    let opener = game.opener().unwrap();
    game.open().unwrap();

    let history = game.history_recent(3);
    assert_eq!(history.len(), 3);
    assert_eq!(history[0].verb, HistoryVerb::Open);
    assert_eq!(history[0].seat, opener);
    assert_eq!(history[1].verb, HistoryVerb::Ante);
    assert_eq!(history[1].seat, Seat::Computer);
    assert_eq!(history[1].amount, Some(1));
    assert_eq!(history[2].verb, HistoryVerb::Ante);
    assert_eq!(history[2].seat, Seat::Human);
    assert!(history.iter().all(|e| e.round == round));
}

#[test]
fn history_records_discards_and_resolution() {
    let mut game = opened_game(23);
    game.open().unwrap();
    game.refresh(&[0, 1]).unwrap();
    let discards = game.history_recent(2);
    assert_eq!(discards[0].verb, HistoryVerb::Discard);
    assert_eq!(discards[0].seat, Seat::Computer);
    assert_eq!(discards[1].seat, Seat::Human);
    assert_eq!(discards[1].amount, Some(2));

    game.check().unwrap();
    let last = game.history_recent(1);
    assert!(matches!(last[0].verb, HistoryVerb::Win | HistoryVerb::Split));
}

#[test]
fn history_offset_pages_from_the_end() {
    let mut game = opened_game(31);
    game.open().unwrap();
    game.refresh(&[]).unwrap();
    game.check().unwrap();
    let total = game.history_len();
    assert!(total >= 7);

    let window = game.history_recent_offset(3, 0);
    assert_eq!(window.len(), 3);
    assert_eq!(window, game.history_recent(3));
    let older = game.history_recent_offset(3, 2);
    assert_eq!(older.len(), 3);
    assert_ne!(window[0], older[0]);
    // offsets past the start clamp to the oldest page
    assert_eq!(game.history_recent_offset(3, 1_000), game.history_recent_offset(3, total - 3));
}
