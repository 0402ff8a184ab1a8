use std::{cell::RefCell, rc::Rc};


/// Receives level progression notifications from the game.
///
/// Every method has an empty default implementation, so a handler only
/// implements the callbacks it cares about.
pub trait LevelHandler {
    /// Called when a level is completed, successfully or not.
    fn on_level_completed(&mut self, level: u32, success: bool) {
        let _ = (level, success);
    }

    /// Called when the game advances to the next level.
    fn on_level_changed(&mut self, new_level: u32) {
        let _ = new_level;
    }

    /// Called when the game ends after a failed level.
    fn on_game_ended(&mut self, final_level: u32) {
        let _ = final_level;
    }
}

/// Receives countdown notifications from the game.
///
/// Every method has an empty default implementation, so a handler only
/// implements the callbacks it cares about.
pub trait TimerHandler {
    /// Called once per elapsed second while the countdown is running.
    fn on_timer_tick(&mut self, remaining: u32) {
        let _ = remaining;
    }

    /// Called when the countdown reaches zero.
    fn on_timer_expired(&mut self) {}

    /// Called when the countdown (re)starts.
    fn on_timer_started(&mut self, duration: u32) {
        let _ = duration;
    }
}

/// A registered level handler.
pub type SharedLevelHandler = Rc<RefCell<dyn LevelHandler>>;
/// A registered timer handler.
pub type SharedTimerHandler = Rc<RefCell<dyn TimerHandler>>;

/// Synchronous fan-out of game notifications to registered handlers.
///
/// Handlers are invoked in registration order, on whatever thread triggered
/// the state change. Registration is set-like: adding the same `Rc` instance
/// twice is a no-op, as is removing a handler that was never added.
#[derive(Default)]
pub struct EventDispatcher {
    level_handlers: Vec<SharedLevelHandler>,
    timer_handlers: Vec<SharedTimerHandler>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        EventDispatcher::default()
    }

    pub fn add_level_handler(&mut self, handler: SharedLevelHandler) {
        if !self.level_handlers.iter().any(|h| Rc::ptr_eq(h, &handler)) {
            self.level_handlers.push(handler);
        }
    }

    pub fn remove_level_handler(&mut self, handler: &SharedLevelHandler) {
        self.level_handlers.retain(|h| !Rc::ptr_eq(h, handler));
    }

    pub fn add_timer_handler(&mut self, handler: SharedTimerHandler) {
        if !self.timer_handlers.iter().any(|h| Rc::ptr_eq(h, &handler)) {
            self.timer_handlers.push(handler);
        }
    }

    pub fn remove_timer_handler(&mut self, handler: &SharedTimerHandler) {
        self.timer_handlers.retain(|h| !Rc::ptr_eq(h, handler));
    }

    /// Deregister every handler in both categories. Used at teardown.
    pub fn clear_all(&mut self) {
        self.level_handlers.clear();
        self.timer_handlers.clear();
    }

    pub fn level_completed(&self, level: u32, success: bool) {
        for handler in &self.level_handlers {
            handler.borrow_mut().on_level_completed(level, success);
        }
    }

    pub fn level_changed(&self, new_level: u32) {
        for handler in &self.level_handlers {
            handler.borrow_mut().on_level_changed(new_level);
        }
    }

    pub fn game_ended(&self, final_level: u32) {
        for handler in &self.level_handlers {
            handler.borrow_mut().on_game_ended(final_level);
        }
    }

    pub fn timer_tick(&self, remaining: u32) {
        for handler in &self.timer_handlers {
            handler.borrow_mut().on_timer_tick(remaining);
        }
    }

    pub fn timer_expired(&self) {
        for handler in &self.timer_handlers {
            handler.borrow_mut().on_timer_expired();
        }
    }

    pub fn timer_started(&self, duration: u32) {
        for handler in &self.timer_handlers {
            handler.borrow_mut().on_timer_started(duration);
        }
    }
}
