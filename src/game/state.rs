/// Game state.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Current level, starting at 1. Only ever increments.
    pub current_level: u32,
    /// The word or phrase the player must type.
    pub current_word: String,
    /// Time budget for the current level, in seconds.
    pub time_limit: u32,
    /// Seconds left on the countdown, in `[0, time_limit]`.
    pub remaining_time: u32,
    /// Whether a session is in progress.
    pub game_running: bool,
    /// Highest level finished in the current session.
    pub levels_completed_this_run: u32,
    /// Highest level finished in any session since process start.
    /// Survives `reset_game`; never decreases.
    pub best_levels_completed: u32,
}

impl GameState {
    /// Fraction of the time budget still remaining, in `[0.0, 1.0]`.
    /// Zero if the budget itself is zero.
    pub fn time_progress(&self) -> f64 {
        if self.time_limit == 0 {
            return 0.0;
        }
        f64::from(self.remaining_time) / f64::from(self.time_limit)
    }
}
