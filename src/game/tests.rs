use std::{cell::RefCell, rc::Rc};

use rand::{rngs::StdRng, SeedableRng};
use strum::IntoEnumIterator;

use super::{
    data::WORD_BANK, Game, Tier, FALLBACK_WORD, INITIAL_TIME_LIMIT, MINIMUM_TIME_LIMIT,
    TIME_REDUCTION,
};
use crate::events::{LevelHandler, TimerHandler};

/// Records level and timer callbacks in arrival order.
struct Recorder {
    log: Rc<RefCell<Vec<String>>>,
}

impl LevelHandler for Recorder {
    fn on_level_completed(&mut self, level: u32, success: bool) {
        self.log
            .borrow_mut()
            .push(format!("completed({},{})", level, success));
    }

    fn on_level_changed(&mut self, new_level: u32) {
        self.log.borrow_mut().push(format!("changed({})", new_level));
    }

    fn on_game_ended(&mut self, final_level: u32) {
        self.log.borrow_mut().push(format!("ended({})", final_level));
    }
}

impl TimerHandler for Recorder {
    fn on_timer_tick(&mut self, remaining: u32) {
        self.log.borrow_mut().push(format!("tick({})", remaining));
    }

    fn on_timer_expired(&mut self) {
        self.log.borrow_mut().push("expired".to_string());
    }

    fn on_timer_started(&mut self, duration: u32) {
        self.log.borrow_mut().push(format!("started({})", duration));
    }
}

fn seeded_game(seed: u64) -> Game {
    Game::with_rng(
        WORD_BANK.iter().map(|w| w.to_string()).collect(),
        Box::new(StdRng::seed_from_u64(seed)),
    )
}

/// Attach a recorder to both handler categories and return the shared log.
fn record_events(game: &mut Game) -> Rc<RefCell<Vec<String>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    game.add_level_handler(Rc::new(RefCell::new(Recorder { log: log.clone() })));
    game.add_timer_handler(Rc::new(RefCell::new(Recorder { log: log.clone() })));
    log
}

#[test]
fn words_stay_in_their_tier() {
    let mut game = seeded_game(7);

    for tier in Tier::iter() {
        let levels: &[u32] = match tier {
            Tier::Simple => &[1, 3, 5],
            Tier::Medium => &[6, 8, 10],
            Tier::Complex => &[11, 13, 15],
            Tier::Phrase => &[16, 20, 100],
        };
        let expected = &WORD_BANK[tier.index_range(WORD_BANK.len())];

        for &level in levels {
            game.state.current_level = level;
            for _ in 0..50 {
                game.generate_new_word();
                assert!(
                    expected.iter().any(|w| *w == game.current_word()),
                    "level {} selected {:?} outside tier {:?}",
                    level,
                    game.current_word(),
                    tier,
                );
            }
        }
    }
}

#[test]
fn validate_exact_match_only() {
    let mut game = Game::with_word_bank(vec!["casa".to_string()]);
    game.start_game();

    assert!(game.validate_input(Some("casa")));
    // Surrounding whitespace is ignored
    assert!(game.validate_input(Some("  casa\t")));
    assert!(game.validate_input(Some("casa\n")));

    // Case and internal spacing are not
    assert!(!game.validate_input(Some("Casa")));
    assert!(!game.validate_input(Some("ca sa")));
    assert!(!game.validate_input(Some("cas")));
    assert!(!game.validate_input(Some("")));
    assert!(!game.validate_input(None));
}

#[test]
fn empty_bank_falls_back_to_placeholder() {
    let mut game = Game::with_word_bank(Vec::new());
    assert_eq!(game.current_word(), FALLBACK_WORD);

    game.state.current_level = 18;
    game.generate_new_word();
    assert_eq!(game.current_word(), FALLBACK_WORD);
}

#[test]
fn short_bank_stays_in_bounds() {
    // Three words: too small for any tier's nominal slice
    let bank = vec!["uno".to_string(), "dos".to_string(), "tres".to_string()];
    let mut game = Game::with_word_bank(bank.clone());

    for level in [1, 6, 11, 16, 42] {
        game.state.current_level = level;
        for _ in 0..20 {
            game.generate_new_word();
            assert!(bank.iter().any(|w| w == game.current_word()));
        }
    }
}

#[test]
fn successful_completion_advances() {
    let mut game = seeded_game(1);
    game.reset_game();
    game.start_game();

    game.complete_level(true);

    assert_eq!(game.current_level(), 2);
    assert_eq!(game.levels_completed_this_run(), 1);
    assert_eq!(game.best_levels_completed(), 1);
    assert!(game.is_running());
    assert_eq!(game.remaining_time(), game.time_limit());
}

#[test]
fn failed_completion_ends_the_game() {
    let mut game = seeded_game(2);
    game.start_game();
    let log = record_events(&mut game);

    game.complete_level(false);

    assert!(!game.is_running());
    assert_eq!(game.current_level(), 1);
    assert_eq!(game.levels_completed_this_run(), 0);
    assert_eq!(log.borrow().as_slice(), ["completed(1,false)", "ended(1)"]);
}

#[test]
fn time_limit_reduces_every_five_levels_down_to_a_floor() {
    let mut game = seeded_game(3);
    game.start_game();

    // Levels 1-4 leave the budget alone; the 5th completion reduces it
    for _ in 0..4 {
        game.complete_level(true);
        assert_eq!(game.time_limit(), INITIAL_TIME_LIMIT);
    }
    game.complete_level(true);
    assert_eq!(game.current_level(), 6);
    assert_eq!(game.time_limit(), INITIAL_TIME_LIMIT - TIME_REDUCTION);

    // Far past every reduction step, the floor holds
    for _ in 0..100 {
        game.complete_level(true);
    }
    assert_eq!(game.time_limit(), MINIMUM_TIME_LIMIT);
    assert!(game.is_running());
}

#[test]
fn countdown_expires_exactly_once() {
    let mut game = seeded_game(4);
    game.start_game();
    let log = record_events(&mut game);

    for _ in 0..INITIAL_TIME_LIMIT - 1 {
        assert!(game.decrement_time());
    }
    assert_eq!(game.remaining_time(), 1);

    // The 20th tick hits zero: one tick, one expiry
    assert!(!game.decrement_time());
    assert_eq!(game.remaining_time(), 0);

    // Further ticks are no-ops with no repeat expiry
    assert!(!game.decrement_time());
    assert!(!game.decrement_time());

    let log = log.borrow();
    assert_eq!(log.iter().filter(|e| *e == "expired").count(), 1);
    assert_eq!(log.last().unwrap(), "expired");
    assert_eq!(
        log.iter().filter(|e| e.starts_with("tick")).count() as u32,
        INITIAL_TIME_LIMIT
    );
}

#[test]
fn reset_preserves_the_best_counter() {
    let mut game = seeded_game(5);
    game.start_game();
    for _ in 0..7 {
        game.complete_level(true);
    }
    assert_eq!(game.best_levels_completed(), 7);
    assert_eq!(game.time_limit(), INITIAL_TIME_LIMIT - TIME_REDUCTION);

    game.reset_game();

    assert_eq!(game.current_level(), 1);
    assert_eq!(game.time_limit(), INITIAL_TIME_LIMIT);
    assert_eq!(game.remaining_time(), INITIAL_TIME_LIMIT);
    assert_eq!(game.levels_completed_this_run(), 0);
    assert!(!game.is_running());
    // The historical record outlives the session
    assert_eq!(game.best_levels_completed(), 7);

    // A worse follow-up run does not lower it
    game.start_game();
    game.complete_level(true);
    assert_eq!(game.best_levels_completed(), 7);
}

#[test]
fn level_completion_event_order() {
    let mut game = Game::with_word_bank(vec!["casa".to_string()]);
    game.reset_game();
    let log = record_events(&mut game);
    game.start_game();

    assert!(game.validate_input(Some("casa")));
    game.complete_level(true);

    assert_eq!(game.current_level(), 2);
    assert_eq!(
        log.borrow().as_slice(),
        [
            "started(20)",
            "completed(1,true)",
            "changed(2)",
            "started(20)",
        ]
    );
}

#[test]
fn reset_emits_nothing() {
    let mut game = seeded_game(6);
    let log = record_events(&mut game);

    game.reset_game();
    game.stop_game();

    assert!(log.borrow().is_empty());
}

#[test]
fn time_progress_ratio() {
    let mut game = seeded_game(8);
    game.start_game();
    assert_eq!(game.time_progress(), 1.0);

    game.decrement_time();
    let expected = f64::from(INITIAL_TIME_LIMIT - 1) / f64::from(INITIAL_TIME_LIMIT);
    assert!((game.time_progress() - expected).abs() < 1e-9);

    // A zero budget reports zero progress rather than dividing by it
    game.state.time_limit = 0;
    game.state.remaining_time = 0;
    assert_eq!(game.time_progress(), 0.0);
}
