// Command-line surface and resolved run configuration.
// Flags are parsed once and frozen into a Config passed to every stage.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::github::query::{SearchFilters, TimeWindow};

/// Default number of repositories shown.
pub const DEFAULT_LIMIT: u32 = 10;
/// Largest page size the search API accepts.
pub const MAX_LIMIT: u32 = 100;

#[derive(Parser, Debug, Default)]
#[command(name = "ghtrend")]
#[command(version, about = "GitHub trending repositories in your terminal", long_about = None)]
pub struct Cli {
    /// Time range: day, week, month, year
    #[arg(short, long, default_value = "week")]
    pub duration: String,

    /// Shortcut for --duration day
    #[arg(long)]
    pub today: bool,

    /// Shortcut for --duration week
    #[arg(long)]
    pub weekly: bool,

    /// Shortcut for --duration month
    #[arg(long)]
    pub monthly: bool,

    /// Shortcut for --duration year
    #[arg(long)]
    pub yearly: bool,

    /// Number of repositories (1-100)
    #[arg(short, long, default_value_t = DEFAULT_LIMIT as i64, allow_negative_numbers = true)]
    pub limit: i64,

    /// Filter by programming language
    #[arg(long, visible_alias = "lang")]
    pub language: Option<String>,

    /// Filter by spoken language
    #[arg(long)]
    pub spoken: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Save output to file
    #[arg(long, value_name = "PATH")]
    pub save: Option<PathBuf>,

    /// Open the top repository in the browser
    #[arg(long)]
    pub open: bool,

    /// HTTP/HTTPS proxy URL
    #[arg(long)]
    pub proxy: Option<String>,

    /// GitHub token
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Auto refresh interval (e.g. 30s, 5m, 1h30m)
    #[arg(short, long, value_parser = parse_interval)]
    pub watch: Option<Duration>,
}

/// Immutable configuration for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub filters: SearchFilters,
    pub limit: u32,
    pub json: bool,
    pub save: Option<PathBuf>,
    pub open: bool,
    pub proxy: Option<String>,
    pub token: Option<String>,
    pub color: bool,
    pub watch: Option<Duration>,
}

impl Config {
    /// Resolve parsed flags into the run configuration.
    pub fn from_cli(cli: Cli) -> Self {
        let mut window = TimeWindow::parse_lenient(&cli.duration);
        if cli.today {
            window = TimeWindow::Day;
        }
        if cli.weekly {
            window = TimeWindow::Week;
        }
        if cli.monthly {
            window = TimeWindow::Month;
        }
        if cli.yearly {
            window = TimeWindow::Year;
        }

        Self {
            filters: SearchFilters {
                window,
                language: non_empty(cli.language),
                spoken: non_empty(cli.spoken),
            },
            limit: clamp_limit(cli.limit),
            json: cli.json,
            save: cli.save.filter(|p| !p.as_os_str().is_empty()),
            open: cli.open,
            proxy: non_empty(cli.proxy),
            token: non_empty(cli.token),
            color: !cli.no_color,
            watch: cli.watch.filter(|d| !d.is_zero()),
        }
    }

    /// Whether log lines on stderr may carry ANSI styling.
    pub fn log_ansi(&self, stderr_is_terminal: bool) -> bool {
        self.color && stderr_is_terminal
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_cli(Cli {
            duration: "week".to_string(),
            limit: DEFAULT_LIMIT as i64,
            ..Cli::default()
        })
    }
}

/// Limits outside 1..=100 fall back to the default rather than the nearest bound.
pub fn clamp_limit(limit: i64) -> u32 {
    if (1..=MAX_LIMIT as i64).contains(&limit) {
        limit as u32
    } else {
        DEFAULT_LIMIT
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Parse an interval such as `90s`, `5m`, `1h30m`, or a bare number of seconds.
pub fn parse_interval(s: &str) -> Result<Duration, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("empty interval".to_string());
    }
    if let Ok(secs) = s.parse::<u64>() {
        return Ok(Duration::from_secs(secs));
    }

    let mut total: u64 = 0;
    let mut digits = String::new();
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c.is_ascii_digit() {
            digits.push(c);
            continue;
        }

        let mut unit = c.to_string();
        if c == 'm' && chars.peek() == Some(&'s') {
            unit.push('s');
            chars.next();
        }

        let value: u64 = digits
            .parse()
            .map_err(|_| format!("invalid interval '{}'", s))?;
        digits.clear();

        let scale: u64 = match unit.as_str() {
            "h" => 3_600_000,
            "m" => 60_000,
            "s" => 1_000,
            "ms" => 1,
            _ => return Err(format!("unknown unit '{}' in interval '{}'", unit, s)),
        };
        total = value
            .checked_mul(scale)
            .and_then(|millis| total.checked_add(millis))
            .ok_or_else(|| format!("interval too large: '{}'", s))?;
    }

    if !digits.is_empty() {
        return Err(format!("missing unit in interval '{}'", s));
    }

    Ok(Duration::from_millis(total))
}

/// Compact form of an interval, e.g. `1h30m` or `45s`.
pub fn format_interval(d: Duration) -> String {
    let secs = d.as_secs();
    if secs == 0 {
        return format!("{}ms", d.as_millis());
    }

    let (h, m, s) = (secs / 3600, (secs % 3600) / 60, secs % 60);
    let mut out = String::new();
    if h > 0 {
        out.push_str(&format!("{}h", h));
    }
    if m > 0 {
        out.push_str(&format!("{}m", m));
    }
    if s > 0 {
        out.push_str(&format!("{}s", s));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        let mut argv = vec!["ghtrend"];
        argv.extend_from_slice(args);
        Config::from_cli(Cli::try_parse_from(argv).unwrap())
    }

    #[test]
    fn test_defaults() {
        let config = parse(&[]);
        assert_eq!(config.filters.window, TimeWindow::Week);
        assert_eq!(config.limit, DEFAULT_LIMIT);
        assert!(config.color);
        assert!(config.watch.is_none());
        assert!(!config.json);
    }

    #[test]
    fn test_clamp_limit() {
        assert_eq!(clamp_limit(1), 1);
        assert_eq!(clamp_limit(100), 100);
        assert_eq!(clamp_limit(0), DEFAULT_LIMIT);
        assert_eq!(clamp_limit(-5), DEFAULT_LIMIT);
        assert_eq!(clamp_limit(101), DEFAULT_LIMIT);
        assert_eq!(parse(&["--limit", "250"]).limit, DEFAULT_LIMIT);
        assert_eq!(parse(&["-l", "25"]).limit, 25);
    }

    #[test]
    fn test_window_shortcuts() {
        assert_eq!(parse(&["--today"]).filters.window, TimeWindow::Day);
        assert_eq!(parse(&["-d", "year"]).filters.window, TimeWindow::Year);
        assert_eq!(
            parse(&["-d", "day", "--monthly"]).filters.window,
            TimeWindow::Month
        );
        assert_eq!(parse(&["-d", "bogus"]).filters.window, TimeWindow::Week);
    }

    #[test]
    fn test_log_ansi() {
        assert!(parse(&[]).log_ansi(true));
        assert!(!parse(&[]).log_ansi(false));
        assert!(!parse(&["--no-color"]).log_ansi(true));
    }

    #[test]
    fn test_language_alias() {
        let config = parse(&["--lang", "Go"]);
        assert_eq!(config.filters.language.as_deref(), Some("Go"));

        let config = parse(&["--language", "  "]);
        assert!(config.filters.language.is_none());
    }

    #[test]
    fn test_watch_flag() {
        let config = parse(&["--watch", "5m"]);
        assert_eq!(config.watch, Some(Duration::from_secs(300)));

        let config = parse(&["-w", "0"]);
        assert!(config.watch.is_none());
    }

    #[test]
    fn test_parse_interval() {
        assert_eq!(parse_interval("30"), Ok(Duration::from_secs(30)));
        assert_eq!(parse_interval("45s"), Ok(Duration::from_secs(45)));
        assert_eq!(parse_interval("1h30m"), Ok(Duration::from_secs(5400)));
        assert_eq!(parse_interval("250ms"), Ok(Duration::from_millis(250)));
        assert!(parse_interval("").is_err());
        assert!(parse_interval("5x").is_err());
        assert!(parse_interval("1h30").is_err());
        assert!(parse_interval("m").is_err());
    }

    #[test]
    fn test_parse_interval_overflow() {
        assert!(parse_interval("99999999999999999h").is_err());
        assert!(parse_interval("5124095576030431h5124095576030431h").is_err());
        assert!(parse_interval("99999999999999999999").is_err());
    }

    #[test]
    fn test_format_interval() {
        assert_eq!(format_interval(Duration::from_secs(300)), "5m");
        assert_eq!(format_interval(Duration::from_secs(5400)), "1h30m");
        assert_eq!(format_interval(Duration::from_secs(61)), "1m1s");
        assert_eq!(format_interval(Duration::from_millis(250)), "250ms");
    }
}
