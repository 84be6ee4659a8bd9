use owo_colors::{OwoColorize, Style};

/// Gray used for filler dots and secondary text
const MUTED: (u8, u8, u8) = (0x6C, 0x72, 0x80);

/// Applies styles only when colors are enabled
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn paint(&self, text: &str, style: Style) -> String {
        if !self.enabled {
            return text.to_string();
        }
        text.style(style).to_string()
    }

    pub fn muted(&self, text: &str) -> String {
        self.paint(text, Style::new().truecolor(MUTED.0, MUTED.1, MUTED.2))
    }

    pub fn bold(&self, text: &str) -> String {
        self.paint(text, Style::new().bold())
    }
}

/// Display width of `text`, counted in characters.
pub fn width_of(text: &str) -> usize {
    text.chars().count()
}

/// First `max` characters of `text`.
pub fn take_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
