use word_sprint::{
    driver::{terminal::TerminalDriver, Driver},
    game::Game,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::try_init().unwrap_or(());

    let game = Game::new();
    let mut driver = TerminalDriver::new(game)?;
    driver.play()?;

    Ok(())
}
