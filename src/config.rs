use std::path::PathBuf;

use clap::Parser;

use crate::game_theme::GameTheme;

/// Smallest terminal the field, both paddles and the hint bar fit in.
pub const MIN_WIDTH: u16 = 20;
pub const MIN_HEIGHT: u16 = 8;

#[derive(Parser, Debug, Clone)]
#[command(name = "terminal-pong")]
#[command(about = "Two-player Pong in the terminal", long_about = None)]
pub struct Config {
    /// Colour palette for the bars and the play field
    #[arg(long, value_enum, default_value_t = GameTheme::Classic)]
    pub theme: GameTheme,

    /// Start in paused state
    #[arg(long, default_value_t = false)]
    pub paused: bool,

    /// Write logs to this file (level taken from RUST_LOG, default info)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Config::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["terminal-pong"]).unwrap();

        assert_eq!(config.theme, GameTheme::Classic);
        assert!(!config.paused);
        assert!(config.log_file.is_none());
    }

    #[test]
    fn parses_every_flag() {
        let config = Config::try_parse_from([
            "terminal-pong",
            "--theme",
            "gruvbox-dark",
            "--paused",
            "--log-file",
            "pong.log",
        ])
        .unwrap();

        assert_eq!(config.theme, GameTheme::GruvboxDark);
        assert!(config.paused);
        assert_eq!(config.log_file, Some(PathBuf::from("pong.log")));
    }

    #[test]
    fn rejects_unknown_theme() {
        assert!(Config::try_parse_from(["terminal-pong", "--theme", "neon"]).is_err());
    }
}
