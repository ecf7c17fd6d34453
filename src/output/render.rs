// Data-to-text rendering.
// Produces tagged spans so ranking output can be checked without a terminal.

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::github::Repository;
use crate::ranking::{activity_rate, format_rate};
use crate::source::Origin;

const MAX_DESCRIPTION_CHARS: usize = 90;
const MAX_TOPICS: usize = 4;

/// Semantic style of a span; the terminal layer decides how it looks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Header,
    Rank,
    Name,
    Rate,
    Language(String),
    NoLanguage,
    Faint,
    Url,
    Topic,
    Live,
    Stale,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub tone: Tone,
}

impl Span {
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Plain)
    }
}

/// One output line made of styled spans.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line(pub Vec<Span>);

impl Line {
    pub fn blank() -> Self {
        Self::default()
    }

    /// Text content with styling stripped.
    pub fn text(&self) -> String {
        self.0.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Banner describing where the data came from.
pub fn status_line(origin: Origin, now: DateTime<Utc>) -> Line {
    let span = match origin {
        Origin::Live => Span::new(
            format!("Live data • {}", now.format("%d %b %H:%M")),
            Tone::Live,
        ),
        Origin::Cache => Span::new("Using cached data", Tone::Stale),
        Origin::Fallback => Span::new("Using built-in fallback data", Tone::Stale),
    };
    Line(vec![span])
}

/// Shorten a description to the display width, counting characters not bytes.
pub fn truncate_description(desc: &str) -> String {
    if desc.chars().count() > MAX_DESCRIPTION_CHARS {
        let head: String = desc.chars().take(MAX_DESCRIPTION_CHARS - 3).collect();
        format!("{}...", head)
    } else {
        desc.to_string()
    }
}

fn language_span(language: Option<&str>) -> Span {
    match language {
        Some(lang) if !lang.is_empty() => {
            Span::new(format!("● {}", lang), Tone::Language(lang.to_string()))
        }
        _ => Span::new("—", Tone::NoLanguage),
    }
}

fn description_span(description: Option<&str>) -> Span {
    match description {
        Some(desc) if !desc.is_empty() => Span::plain(truncate_description(desc)),
        _ => Span::new("(no description)", Tone::Faint),
    }
}

/// Console listing: a header followed by two lines per repository.
pub fn listing(repos: &[Repository], now: DateTime<Utc>) -> Vec<Line> {
    let mut lines = vec![
        Line::blank(),
        Line(vec![Span::new(
            format!(
                "GitHub Trending • Top {} • {}",
                repos.len(),
                now.format("%d %b %Y")
            ),
            Tone::Header,
        )]),
        Line::blank(),
    ];

    for (i, repo) in repos.iter().enumerate() {
        let sep = || Span::plain("  ");
        lines.push(Line(vec![
            sep(),
            Span::new(format!("{:>2}", i + 1), Tone::Rank),
            sep(),
            Span::new(repo.full_name.clone(), Tone::Name),
            sep(),
            Span::new(
                format!("⭐ {}", format_rate(activity_rate(repo, now))),
                Tone::Rate,
            ),
            sep(),
            language_span(repo.language.as_deref()),
            sep(),
            description_span(repo.description.as_deref()),
        ]));

        let mut second = vec![
            Span::plain("     "),
            Span::new(repo.html_url.clone(), Tone::Url),
        ];
        if !repo.topics.is_empty() {
            second.push(Span::plain(" "));
            for topic in repo.topics.iter().take(MAX_TOPICS) {
                second.push(Span::plain(" "));
                second.push(Span::new(format!(" {} ", topic), Tone::Topic));
            }
        }
        lines.push(Line(second));
        lines.push(Line::blank());
    }

    lines
}

/// Plain-text report used when saving to a file.
pub fn text_report(repos: &[Repository], now: DateTime<Utc>) -> String {
    let mut out = String::new();
    for (i, repo) in repos.iter().enumerate() {
        out.push_str(&format!(
            "{}. {} – {} – {}\n   {}\n\n",
            i + 1,
            repo.full_name,
            format_rate(activity_rate(repo, now)),
            repo.language.as_deref().unwrap_or(""),
            repo.html_url
        ));
    }
    out
}

/// Pretty-printed JSON array of the raw records.
pub fn json_report(repos: &[Repository]) -> Result<String> {
    Ok(serde_json::to_string_pretty(repos)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2026-10-19T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn sample() -> Repository {
        Repository {
            full_name: "owner/tool".to_string(),
            description: Some("A fast tool".to_string()),
            stars: 300,
            language: Some("Rust".to_string()),
            html_url: "https://github.com/owner/tool".to_string(),
            created_at: Some("2026-10-17T12:00:00Z".to_string()),
            fork: false,
            archived: true,
            topics: vec!["a", "b", "c", "d", "e"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }

    #[test]
    fn test_truncate_description() {
        assert_eq!(truncate_description("short"), "short");

        let exact = "x".repeat(90);
        assert_eq!(truncate_description(&exact), exact);

        let long = "é".repeat(120);
        let truncated = truncate_description(&long);
        assert_eq!(truncated.chars().count(), 90);
        assert!(truncated.ends_with("..."));
    }

    #[test]
    fn test_listing_entry() {
        let lines = listing(&[sample()], fixed_now());
        assert_eq!(lines[1].text(), "GitHub Trending • Top 1 • 19 Oct 2026");

        let entry = lines[3].text();
        assert!(entry.contains(" 1"));
        assert!(entry.contains("owner/tool"));
        assert!(entry.contains("⭐ 150/day"));
        assert!(entry.contains("● Rust"));
        assert!(entry.contains("A fast tool"));

        let second = &lines[4];
        assert!(second.text().contains("https://github.com/owner/tool"));
        let topics = second.0.iter().filter(|s| s.tone == Tone::Topic).count();
        assert_eq!(topics, 4);
    }

    #[test]
    fn test_listing_placeholders() {
        let mut repo = sample();
        repo.description = None;
        repo.language = None;
        repo.topics.clear();

        let lines = listing(&[repo], fixed_now());
        let entry = lines[3].text();
        assert!(entry.contains("(no description)"));
        assert!(entry.contains("—"));
        assert!(!lines[4].0.iter().any(|s| s.tone == Tone::Topic));
    }

    #[test]
    fn test_status_lines() {
        let now = fixed_now();
        assert_eq!(status_line(Origin::Live, now).text(), "Live data • 19 Oct 12:00");
        assert_eq!(status_line(Origin::Cache, now).text(), "Using cached data");
        assert_eq!(
            status_line(Origin::Fallback, now).0[0].tone,
            Tone::Stale
        );
    }

    #[test]
    fn test_text_report() {
        let report = text_report(&[sample()], fixed_now());
        assert_eq!(
            report,
            "1. owner/tool – 150/day – Rust\n   https://github.com/owner/tool\n\n"
        );
    }

    #[test]
    fn test_json_report_fields() {
        let json = json_report(&[sample()]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let items = value.as_array().unwrap();
        assert_eq!(items.len(), 1);

        let item = items[0].as_object().unwrap();
        let mut keys: Vec<&str> = item.keys().map(String::as_str).collect();
        keys.sort();
        assert_eq!(
            keys,
            vec![
                "archived",
                "created_at",
                "description",
                "fork",
                "full_name",
                "html_url",
                "language",
                "stargazers_count",
                "topics",
            ]
        );
        assert_eq!(item["full_name"], "owner/tool");
        assert_eq!(item["stargazers_count"].as_u64(), Some(300));
        assert_eq!(item["archived"], true);
        assert_eq!(item["fork"], false);
        assert!(item["created_at"].is_string());
        assert_eq!(item["topics"].as_array().map(|t| t.len()), Some(5));
    }
}
