use anyhow::Context;
use log::info;

use freecell_rs::config::{Config, HELP};
use freecell_rs::game::Game;
use freecell_rs::prefs::{Preferences, Theme};
use freecell_rs::renderer::CliRenderer;
use freecell_rs::session::Session;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Config::from_env().context("invalid command-line arguments")?;
    if config.show_help {
        print!("{HELP}");
        return Ok(());
    }

    println!(
        r#"
┌─────────────────────────────────────────┐
│        FreeCell (Terminal Edition)      │
│   Type 'help' or '?' for commands.      │
└─────────────────────────────────────────┘
"#
    );

    let mut prefs = if config.persist {
        Preferences::load()
    } else {
        Preferences::default()
    };
    if let Some(theme) = &config.theme {
        prefs.theme = Theme::parse(theme).name().to_string();
    }
    let theme = Theme::parse(&prefs.theme);
    info!("starting with theme {}", theme.name());

    let renderer = CliRenderer::new(theme);
    let session = match config.seed {
        Some(seed) => Session::with_seed(seed, prefs.theme.clone(), renderer),
        None => Session::new(prefs.theme.clone(), renderer),
    };

    let mut game = Game::new(session, prefs, config.persist);
    game.run().context("terminal I/O failed")?;
    Ok(())
}
