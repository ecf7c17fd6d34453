// Terminal rendering of tagged lines using ANSI colors.

use colored::{Color, ColoredString, Colorize};

use super::render::{Line, Span, Tone};

/// Color used for a language badge.
pub fn language_color(lang: &str) -> Color {
    match lang {
        "Go" => Color::Cyan,
        "Python" => Color::BrightBlue,
        "JavaScript" => Color::Yellow,
        "TypeScript" => Color::BrightCyan,
        "Rust" => Color::BrightRed,
        "Java" | "C++" | "CSS" => Color::BrightMagenta,
        "C" => Color::BrightWhite,
        "Shell" => Color::Green,
        "HTML" => Color::Red,
        "Zig" => Color::BrightYellow,
        _ => Color::Magenta,
    }
}

fn paint(span: &Span) -> ColoredString {
    let text = span.text.as_str();
    match &span.tone {
        Tone::Plain => text.normal(),
        Tone::Header => text.bright_cyan().bold(),
        Tone::Rank => text.yellow(),
        Tone::Name => text.white().bold(),
        Tone::Rate => text.green(),
        Tone::Language(lang) => text.color(language_color(lang)).bold(),
        Tone::NoLanguage => text.bright_black(),
        Tone::Faint => text.dimmed(),
        Tone::Url => text.blue(),
        Tone::Topic => text.black().on_white(),
        Tone::Live => text.green(),
        Tone::Stale => text.yellow(),
    }
}

/// Turns rendered lines into terminal text.
#[derive(Debug, Clone, Copy)]
pub struct Terminal {
    color: bool,
}

impl Terminal {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Format one line, with ANSI styling when color is enabled.
    pub fn format(&self, line: &Line) -> String {
        if !self.color {
            return line.text();
        }
        line.0.iter().map(|span| paint(span).to_string()).collect()
    }

    pub fn print(&self, lines: &[Line]) {
        for line in lines {
            println!("{}", self.format(line));
        }
    }

    /// Print a one-off message in the given tone to stderr.
    pub fn eprint(&self, text: impl Into<String>, tone: Tone) {
        eprintln!("{}", self.format(&Line(vec![Span::new(text, tone)])));
    }

    pub fn success(&self, text: impl Into<String>) {
        self.eprint(text, Tone::Live);
    }

    pub fn error(&self, text: impl Into<String>) {
        let text = text.into();
        if self.color {
            eprintln!("{}", text.red());
        } else {
            eprintln!("{}", text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_color_is_plain_text() {
        let line = Line(vec![
            Span::new(" 1", Tone::Rank),
            Span::plain("  "),
            Span::new("● Rust", Tone::Language("Rust".to_string())),
        ]);
        assert_eq!(Terminal::new(false).format(&line), " 1  ● Rust");
    }

    #[test]
    fn test_language_colors() {
        assert_eq!(language_color("Rust"), Color::BrightRed);
        assert_eq!(language_color("Go"), Color::Cyan);
        assert_eq!(language_color("Haskell"), Color::Magenta);
    }
}
