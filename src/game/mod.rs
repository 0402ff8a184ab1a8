use rand::{Rng, RngCore};

pub use state::GameState;
pub use tier::Tier;

use crate::events::{EventDispatcher, SharedLevelHandler, SharedTimerHandler};

pub mod data;
mod state;
mod tier;
#[cfg(test)]
mod tests;

/// Time budget for level 1, in seconds.
pub const INITIAL_TIME_LIMIT: u32 = 20;
/// The time budget never drops below this many seconds.
pub const MINIMUM_TIME_LIMIT: u32 = 2;
/// Seconds shaved off the time budget at each reduction.
pub const TIME_REDUCTION: u32 = 2;
/// A reduction happens once every this many levels.
pub const LEVEL_INTERVAL: u32 = 5;
/// Placeholder word used when the word bank is empty.
pub const FALLBACK_WORD: &str = "default";

/// An instance of the typing game.
///
/// Owns all game data and the progression rules: level number, active word,
/// countdown, and completed-level counters. Performs no I/O and no timing of
/// its own; the host calls [`decrement_time`](Game::decrement_time) once per
/// elapsed second and [`validate_input`](Game::validate_input) per attempt,
/// and observes changes through registered level and timer handlers.
pub struct Game {
    /// Words and phrases to type, in tier order (see [`Tier`]).
    word_bank: Vec<String>,
    /// Random source for word selection. Injected so tests can be seeded.
    rng: Box<dyn RngCore>,
    /// Game state.
    state: GameState,
    /// Registered level and timer handlers.
    events: EventDispatcher,
}

impl Game {
    /// Start a new game with the built-in word bank and a thread-local RNG.
    pub fn new() -> Self {
        Game::with_word_bank(data::WORD_BANK.iter().map(|w| w.to_string()).collect())
    }

    /// Start a new game with a custom word bank.
    pub fn with_word_bank(word_bank: Vec<String>) -> Self {
        Game::with_rng(word_bank, Box::new(rand::thread_rng()))
    }

    /// Start a new game with a custom word bank and random source.
    pub fn with_rng(word_bank: Vec<String>, rng: Box<dyn RngCore>) -> Self {
        let mut game = Game {
            word_bank,
            rng,
            state: GameState {
                current_level: 1,
                current_word: String::new(),
                time_limit: INITIAL_TIME_LIMIT,
                remaining_time: INITIAL_TIME_LIMIT,
                game_running: false,
                levels_completed_this_run: 0,
                best_levels_completed: 0,
            },
            events: EventDispatcher::new(),
        };
        game.reset_game();
        game
    }

    /// Reinitialize for a fresh session: level 1, full time budget, not
    /// running, and a newly selected word. The best-levels counter is kept.
    /// Emits no notifications.
    pub fn reset_game(&mut self) {
        self.state.current_level = 1;
        self.state.time_limit = INITIAL_TIME_LIMIT;
        self.state.remaining_time = INITIAL_TIME_LIMIT;
        self.state.game_running = false;
        self.state.levels_completed_this_run = 0;
        self.generate_new_word();
    }

    /// Begin the session: marks the game running, refills the countdown,
    /// and notifies timer handlers that the countdown started.
    pub fn start_game(&mut self) {
        self.state.game_running = true;
        self.state.remaining_time = self.state.time_limit;
        self.events.timer_started(self.state.time_limit);
    }

    /// Mark the session over. Emits no notifications.
    pub fn stop_game(&mut self) {
        self.state.game_running = false;
    }

    /// Select a new word from the tier matching the current level.
    ///
    /// An empty bank yields [`FALLBACK_WORD`]. The drawn index is clamped to
    /// the bank, so banks smaller than the nominal tier layout are safe.
    pub fn generate_new_word(&mut self) {
        let bank_len = self.word_bank.len();
        if bank_len == 0 {
            self.state.current_word = FALLBACK_WORD.to_string();
            return;
        }

        let tier = Tier::for_level(self.state.current_level);
        let index = self.rng.gen_range(tier.index_range(bank_len));
        self.state.current_word = self.word_bank[index.min(bank_len - 1)].clone();
    }

    /// Whether the input, trimmed of surrounding whitespace, exactly matches
    /// the current word. Case-sensitive, no fuzzy matching; absent input is
    /// simply wrong.
    pub fn validate_input(&self, input: Option<&str>) -> bool {
        match input {
            Some(text) => text.trim() == self.state.current_word,
            None => false,
        }
    }

    /// Finish the current level.
    ///
    /// Notifies level handlers of the completion, then either advances to
    /// the next level (on success) or ends the game (on failure). Advancing
    /// emits `on_level_changed` followed by `on_timer_started`; failing
    /// emits `on_game_ended`.
    pub fn complete_level(&mut self, success: bool) {
        let level = self.state.current_level;
        self.events.level_completed(level, success);

        if success {
            self.state.levels_completed_this_run = level;
            self.state.best_levels_completed = self.state.best_levels_completed.max(level);
            self.advance_to_next_level();
        } else {
            self.state.game_running = false;
            self.events.game_ended(level);
        }
    }

    fn advance_to_next_level(&mut self) {
        self.state.current_level += 1;

        // Reduce the time budget every LEVEL_INTERVAL levels
        if self.state.current_level % LEVEL_INTERVAL == 1 && self.state.current_level > 1 {
            self.state.time_limit = self
                .state
                .time_limit
                .saturating_sub(TIME_REDUCTION)
                .max(MINIMUM_TIME_LIMIT);
        }

        self.state.remaining_time = self.state.time_limit;
        self.generate_new_word();

        self.events.level_changed(self.state.current_level);
        self.events.timer_started(self.state.time_limit);
    }

    /// Count down one second.
    ///
    /// Invoked by the host once per elapsed second; the core never sleeps or
    /// schedules anything itself. Emits `on_timer_tick` with the new value,
    /// plus `on_timer_expired` the moment the countdown reaches zero.
    /// Returns whether any time is left. Once at zero, further calls are
    /// no-ops returning false, with no repeat expiry notification.
    pub fn decrement_time(&mut self) -> bool {
        if self.state.remaining_time == 0 {
            return false;
        }

        self.state.remaining_time -= 1;
        self.events.timer_tick(self.state.remaining_time);
        if self.state.remaining_time == 0 {
            self.events.timer_expired();
        }
        self.state.remaining_time > 0
    }

    pub fn current_level(&self) -> u32 {
        self.state.current_level
    }

    pub fn current_word(&self) -> &str {
        &self.state.current_word
    }

    pub fn remaining_time(&self) -> u32 {
        self.state.remaining_time
    }

    pub fn time_limit(&self) -> u32 {
        self.state.time_limit
    }

    pub fn is_running(&self) -> bool {
        self.state.game_running
    }

    /// Fraction of the time budget still remaining, in `[0.0, 1.0]`.
    pub fn time_progress(&self) -> f64 {
        self.state.time_progress()
    }

    pub fn levels_completed_this_run(&self) -> u32 {
        self.state.levels_completed_this_run
    }

    pub fn best_levels_completed(&self) -> u32 {
        self.state.best_levels_completed
    }

    pub fn add_level_handler(&mut self, handler: SharedLevelHandler) {
        self.events.add_level_handler(handler);
    }

    pub fn remove_level_handler(&mut self, handler: &SharedLevelHandler) {
        self.events.remove_level_handler(handler);
    }

    pub fn add_timer_handler(&mut self, handler: SharedTimerHandler) {
        self.events.add_timer_handler(handler);
    }

    pub fn remove_timer_handler(&mut self, handler: &SharedTimerHandler) {
        self.events.remove_timer_handler(handler);
    }

    /// Deregister every handler in both categories. Used at teardown.
    pub fn clear_all_handlers(&mut self) {
        self.events.clear_all();
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
