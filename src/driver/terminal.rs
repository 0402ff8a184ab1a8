use std::{
    cell::RefCell,
    io::{self, BufRead, Write},
    rc::Rc,
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};

use log::info;

use super::{Driver, DriverError};
use crate::{
    events::{LevelHandler, TimerHandler},
    game::Game,
};

/// An event fed to the session loop by the background threads.
enum HostEvent {
    /// One second elapsed.
    Tick,
    /// The player submitted a line of input.
    Line(String),
    /// Stdin closed.
    Eof,
}

/// A driver that hosts the game in the terminal.
///
/// Owns the periodic tick source the core deliberately lacks: one background
/// thread sends a tick every second, another forwards stdin lines, and the
/// session loop multiplexes both over a single channel. Ticks that arrive
/// while no session is running are dropped.
pub struct TerminalDriver {
    /// The game itself.
    game: Game,
    /// Ticks and player input, merged.
    events: Receiver<HostEvent>,
}

/// Prints countdown progress as the game notifies it.
struct ConsoleTimerHandler;

impl TimerHandler for ConsoleTimerHandler {
    fn on_timer_tick(&mut self, remaining: u32) {
        // Every 5 seconds, then every second once it gets tight
        if remaining > 0 && (remaining <= 5 || remaining % 5 == 0) {
            println!("{}s left", remaining);
        }
    }

    fn on_timer_expired(&mut self) {
        println!("Time's up!");
    }

    fn on_timer_started(&mut self, duration: u32) {
        println!("You have {}s.", duration);
    }
}

/// Announces level progression and logs completions.
struct ConsoleLevelHandler;

impl LevelHandler for ConsoleLevelHandler {
    fn on_level_completed(&mut self, level: u32, success: bool) {
        info!(
            "Level {} completed: {}",
            level,
            if success { "SUCCESS" } else { "FAILED" }
        );
    }

    fn on_level_changed(&mut self, new_level: u32) {
        println!("\n=== Level {} ===", new_level);
    }

    fn on_game_ended(&mut self, final_level: u32) {
        println!("Game over at level {}.", final_level);
    }
}

impl TerminalDriver {
    /// Run one session from start to game over. Returns false if stdin
    /// closed and the driver should shut down.
    fn run_session(&mut self) -> Result<bool, DriverError> {
        self.game.reset_game();
        self.game.start_game();
        println!("\n=== Level {} ===", self.game.current_level());
        self.show_word();

        while self.game.is_running() {
            match self.events.recv().map_err(|_| DriverError::ChannelClosed)? {
                HostEvent::Tick => {
                    if !self.game.decrement_time() {
                        // The countdown hit zero with nothing submitted
                        self.game.complete_level(false);
                    }
                }
                HostEvent::Line(input) => {
                    let correct = self.game.validate_input(Some(&input));
                    if !correct {
                        println!("Wrong! The word was: {}", self.game.current_word());
                    }
                    self.game.complete_level(correct);
                    if self.game.is_running() {
                        self.show_word();
                    }
                }
                HostEvent::Eof => return Ok(false),
            }
        }
        Ok(true)
    }

    fn show_word(&self) {
        println!("Type: {}", self.game.current_word());
    }

    fn show_summary(&self) {
        println!(
            "Levels completed this run: {} (best: {})",
            self.game.levels_completed_this_run(),
            self.game.best_levels_completed()
        );
    }

    fn prompt_play_again(&mut self) -> Result<bool, DriverError> {
        print!("Play again? [y/N] ");
        io::stdout().flush()?;
        loop {
            match self.events.recv().map_err(|_| DriverError::ChannelClosed)? {
                HostEvent::Line(answer) => return Ok(answer.trim().eq_ignore_ascii_case("y")),
                HostEvent::Tick => continue,
                HostEvent::Eof => return Ok(false),
            }
        }
    }

    fn shutdown(&mut self) {
        self.game.stop_game();
        self.game.clear_all_handlers();
    }
}

impl Driver for TerminalDriver {
    fn new(mut game: Game) -> Result<Self, DriverError> {
        game.add_timer_handler(Rc::new(RefCell::new(ConsoleTimerHandler)));
        game.add_level_handler(Rc::new(RefCell::new(ConsoleLevelHandler)));

        let (tx, rx) = mpsc::channel();
        spawn_ticker(tx.clone());
        spawn_stdin_reader(tx);

        Ok(TerminalDriver { game, events: rx })
    }

    fn play(&mut self) -> Result<(), DriverError> {
        loop {
            if !self.run_session()? {
                break;
            }
            self.show_summary();
            if !self.prompt_play_again()? {
                break;
            }
        }
        self.shutdown();
        Ok(())
    }
}

fn spawn_ticker(tx: Sender<HostEvent>) {
    thread::spawn(move || loop {
        thread::sleep(Duration::from_secs(1));
        if tx.send(HostEvent::Tick).is_err() {
            break;
        }
    });
}

fn spawn_stdin_reader(tx: Sender<HostEvent>) {
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(HostEvent::Line(line)).is_err() {
                        return;
                    }
                }
                Err(_) => break,
            }
        }
        let _ = tx.send(HostEvent::Eof);
    });
}
