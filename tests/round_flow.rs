use draw_poker::engine::{dispatch, Action, GameEngine};
use draw_poker::game::{ActionError, Game, GameConfig, HistoryVerb, Phase};
use draw_poker::player::Seat;
use draw_poker::policy::{CALL_THRESHOLD, MAX_DISCARDS};

fn total_coins(game: &Game) -> i64 {
    game.computer().coins() + game.human().coins() + game.pot()
}

/// Play one step the way a cautious human would.
fn step(game: &mut Game) -> Phase {
    let before = total_coins(game);
    match game.phase() {
        Phase::OpenCheck => {
            let (c, h) = (game.computer().coins(), game.human().coins());
            game.open().unwrap();
            assert_eq!(game.pot(), 2);
            assert_eq!(game.computer().coins(), c - 1);
            assert_eq!(game.human().coins(), h - 1);
        }
        Phase::Folded | Phase::Resolved => {
            game.next_round().unwrap();
        }
        Phase::Refresh => {
            let mut discards = game.human().evaluation().discards();
            discards.truncate(MAX_DISCARDS);
            game.refresh(&discards).unwrap();
        }
        Phase::Decision => {
            if game.can_bet() {
                game.bet(1).unwrap();
            } else {
                game.check().unwrap();
            }
            assert_eq!(game.pot(), 0);
            let someone_broke = game.computer().is_broke() || game.human().is_broke();
            assert_eq!(game.phase() == Phase::GameOver, someone_broke);
        }
        Phase::GameOver => {}
        _ => unreachable!(),
    }
    assert_eq!(total_coins(game), before);
    game.phase()
}

#[test]
fn computer_folds_when_only_the_refresh_made_two_pair() {
    let mut improved = 0;
    for seed in 0..200u64 {
        let mut game = Game::new(GameConfig::default().with_seed(seed)).unwrap();
        for _ in 0..50 {
            match game.phase() {
                Phase::OpenCheck => {
                    game.open().unwrap();
                }
                Phase::Refresh => {
                    let before = game.computer().score();
                    game.refresh(&[]).unwrap();
                    let after = game.computer().score();
                    if !game.can_bet() {
                        game.check().unwrap();
                        continue;
                    }
                    game.bet(1).unwrap();
                    let verb = game
                        .history_recent(4)
                        .iter()
                        .rev()
                        .map(|e| e.verb)
                        .find(|v| matches!(v, HistoryVerb::Call | HistoryVerb::Fold));
                    let verb = verb.unwrap();
                    if before < CALL_THRESHOLD {
                        assert_eq!(verb, HistoryVerb::Fold, "seed {seed}: {before} -> {after}");
                        if after >= CALL_THRESHOLD {
                            improved += 1;
                        }
                    } else {
                        assert_eq!(verb, HistoryVerb::Call, "seed {seed}: {before} -> {after}");
                    }
                }
                Phase::GameOver => break,
                _ => {
                    game.next_round().unwrap();
                }
            }
        }
    }
    assert!(improved > 0);
}

#[test]
fn seeded_sessions_conserve_coins_until_game_over() {
    for seed in 0..20u64 {
        let mut game = Game::new(GameConfig::new(3, Some(seed))).unwrap();
        assert_eq!(game.round(), 1);
        for _ in 0..2_000 {
            if step(&mut game) == Phase::GameOver {
                break;
            }
        }
        assert_eq!(total_coins(&game), 6);
    }
}

#[test]
fn same_seed_same_session() {
    let mut a = Game::new(GameConfig::default().with_seed(42)).unwrap();
    let mut b = Game::new(GameConfig::default().with_seed(42)).unwrap();
    for _ in 0..50 {
        step(&mut a);
        step(&mut b);
        assert_eq!(a.phase(), b.phase());
        assert_eq!(a.human().hand(), b.human().hand());
        assert_eq!(a.computer().coins(), b.computer().coins());
    }
}

#[test]
fn opening_message_names_the_opener() {
    for seed in 0..30u64 {
        let game = Game::new(GameConfig::default().with_seed(seed)).unwrap();
        let expected = match game.opener() {
            Some(Seat::Computer) => "Computer can open. Do you want to play?",
            Some(Seat::Human) => "Computer cannot open. You can open. Do you want to play?",
            None => "Computer cannot open. You cannot open.",
        };
        assert_eq!(game.message(), expected);
        assert_eq!(game.phase() == Phase::Folded, game.opener().is_none());
    }
}

#[test]
fn rejected_actions_change_nothing() {
    let mut game = Game::new(GameConfig::default().with_seed(8)).unwrap();
    let phase = game.phase();
    let hand = *game.human().hand();
    assert!(matches!(game.check(), Err(ActionError::IllegalTransition { .. })));
    assert!(matches!(game.bet(2), Err(ActionError::IllegalTransition { .. })));
    assert!(matches!(game.refresh(&[0]), Err(ActionError::IllegalTransition { .. })));
    assert_eq!(game.phase(), phase);
    assert_eq!(*game.human().hand(), hand);
    assert_eq!(game.pot(), 0);
    assert_eq!(game.history_len(), 0);
}

#[test]
fn restart_from_mid_round() {
    let mut game = Game::new(GameConfig::default().with_seed(5)).unwrap();
    while game.phase() != Phase::Refresh {
        step(&mut game);
    }
    let t = game.restart().unwrap();
    assert_eq!(t.phase, game.phase());
    assert_eq!(game.round(), 1);
    assert_eq!(game.pot(), 0);
    assert_eq!(game.human().coins(), 10);
    assert_eq!(game.computer().coins(), 10);
}

#[test]
fn engine_dispatch_reaches_the_same_states() {
    let mut game = Game::new(GameConfig::default().with_seed(13)).unwrap();
    let engine: &mut dyn GameEngine = &mut game;
    while engine.phase() != Phase::OpenCheck {
        dispatch(engine, Action::NextRound).unwrap();
    }
    let t = dispatch(engine, Action::Open).unwrap();
    assert_eq!(t.message, "Please select cards to refresh.");
    assert!(dispatch(engine, Action::Refresh(vec![0, 1, 2, 3, 4])).is_err());
    dispatch(engine, Action::Refresh(vec![0])).unwrap();
    assert_eq!(engine.phase(), Phase::Decision);
    assert_eq!(engine.max_bet(), 3);
    assert_eq!(
        dispatch(engine, Action::Bet(4)),
        Err(ActionError::BetAmount { max: 3, got: 4 })
    );
    dispatch(engine, Action::Bet(3)).unwrap();
    assert_eq!(engine.pot(), 0);
    assert_eq!(engine.contribution(Seat::Human), 4);
}
