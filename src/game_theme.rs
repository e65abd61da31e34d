use clap::ValueEnum;
use ratatui::style::{Color, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum GameTheme {
    #[default]
    Classic,
    Monokai,
    Solarized,
    Dracula,
    GruvboxDark,
    Nord,
    OneDark,
    HighContrast,
}

pub struct ThemeColors {
    /// Score and hint bars.
    pub bar_text: Color,
    pub bar_background: Color,
    /// Play field, shared by the ball and both paddles.
    pub field_pieces: Color,
    pub field_background: Color,
    /// Pause banner.
    pub accent: Color,
}

impl ThemeColors {
    pub fn bar_style(&self) -> Style {
        Style::default().fg(self.bar_text).bg(self.bar_background)
    }

    pub fn field_style(&self) -> Style {
        Style::default().fg(self.field_pieces).bg(self.field_background)
    }
}

impl GameTheme {
    pub fn colors(&self) -> ThemeColors {
        match self {
            GameTheme::Classic => ThemeColors {
                bar_text: Color::White,
                bar_background: Color::Black,
                field_pieces: Color::White,
                field_background: Color::Blue,
                accent: Color::Yellow,
            },
            GameTheme::Monokai => ThemeColors {
                bar_text: Color::Rgb(248, 248, 242),      // Monokai foreground
                bar_background: Color::Reset,
                field_pieces: Color::Rgb(102, 217, 239),  // Monokai cyan
                field_background: Color::Rgb(39, 40, 34), // Monokai background
                accent: Color::Rgb(249, 38, 114),         // Monokai pink
            },
            GameTheme::Solarized => ThemeColors {
                bar_text: Color::Rgb(101, 123, 131),     // Solarized base00
                bar_background: Color::Reset,
                field_pieces: Color::Rgb(133, 153, 0),   // Solarized green
                field_background: Color::Rgb(0, 43, 54), // Solarized base03
                accent: Color::Rgb(38, 139, 210),        // Solarized blue
            },
            GameTheme::Dracula => ThemeColors {
                bar_text: Color::Rgb(248, 248, 242),      // Dracula foreground
                bar_background: Color::Reset,
                field_pieces: Color::Rgb(80, 250, 123),   // Dracula green
                field_background: Color::Rgb(40, 42, 54), // Dracula background
                accent: Color::Rgb(189, 147, 249),        // Dracula purple
            },
            GameTheme::GruvboxDark => ThemeColors {
                bar_text: Color::Rgb(235, 219, 178),      // Gruvbox fg
                bar_background: Color::Reset,
                field_pieces: Color::Rgb(131, 165, 152),  // Gruvbox blue
                field_background: Color::Rgb(40, 40, 40), // Gruvbox bg
                accent: Color::Rgb(250, 189, 47),         // Gruvbox yellow
            },
            GameTheme::Nord => ThemeColors {
                bar_text: Color::Rgb(216, 222, 233),      // Nord fg
                bar_background: Color::Reset,
                field_pieces: Color::Rgb(136, 192, 208),  // Nord frost
                field_background: Color::Rgb(46, 52, 64), // Nord polar night
                accent: Color::Rgb(235, 203, 139),        // Nord yellow
            },
            GameTheme::OneDark => ThemeColors {
                bar_text: Color::Rgb(171, 178, 191),      // One Dark fg
                bar_background: Color::Reset,
                field_pieces: Color::Rgb(152, 195, 121),  // One Dark green
                field_background: Color::Rgb(40, 44, 52), // One Dark bg
                accent: Color::Rgb(198, 120, 221),        // One Dark purple
            },
            GameTheme::HighContrast => ThemeColors {
                bar_text: Color::White,
                bar_background: Color::Black,
                field_pieces: Color::Rgb(0, 255, 255), // bright cyan
                field_background: Color::Black,        // true black for max contrast
                accent: Color::Yellow,
            },
        }
    }
}
