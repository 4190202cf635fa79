//! Framed, syntax-highlighted code snippets inside the sidebar.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::Theme;

/// Highlighting rules applied to a snippet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Yaml,
    Json,
    Python,
    Shell,
}

impl Language {
    pub fn label(&self) -> &'static str {
        match self {
            Language::Yaml => "yaml",
            Language::Json => "json",
            Language::Python => "python",
            Language::Shell => "bash",
        }
    }
}

/// What the title bar of a block offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hint {
    /// Not selected: `n`/`N` moves the selection here.
    None,
    /// Selected: `y` copies this block.
    Copy,
    /// Selected and just copied.
    Copied,
}

/// A titled block of code that can be copied with `y`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeSnippet {
    pub title: &'static str,
    pub language: Language,
    pub code: String,
}

impl CodeSnippet {
    pub fn new(title: &'static str, language: Language, code: impl Into<String>) -> Self {
        Self {
            title,
            language,
            code: code.into(),
        }
    }
}

/// Render `snippet` as sidebar lines.
///
/// The selected block gets a highlighted frame and the copy hint (or the
/// acknowledgement right after a copy).
pub fn render(snippet: &CodeSnippet, theme: &Theme, hint: Hint) -> Vec<Line<'static>> {
    let border = match hint {
        Hint::None => Style::default().fg(theme.border),
        Hint::Copy | Hint::Copied => Style::default().fg(theme.highlight),
    };

    let mut header = vec![
        Span::styled("┌ ", border),
        Span::styled(snippet.title, Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(format!(" ({}) ", snippet.language.label()), theme.muted_style()),
    ];
    match hint {
        Hint::None => {}
        Hint::Copy => header.push(Span::styled(" y:copy ", Style::default().add_modifier(Modifier::DIM))),
        Hint::Copied => header.push(Span::styled(
            " ✓ Copied ",
            Style::default().fg(theme.healthy).add_modifier(Modifier::BOLD),
        )),
    }
    let mut lines = vec![Line::from(header)];

    for raw in snippet.code.lines() {
        let mut spans = vec![Span::styled("│ ", border)];
        spans.extend(highlight(raw, snippet.language, theme));
        lines.push(Line::from(spans).style(Style::default().bg(theme.code_bg)));
    }
    lines.push(Line::from(Span::styled("└", border)));
    lines
}

/// Highlight a single line of code.
pub fn highlight(line: &str, language: Language, theme: &Theme) -> Vec<Span<'static>> {
    match language {
        Language::Yaml => highlight_yaml(line, theme),
        Language::Json => highlight_json(line, theme),
        Language::Python | Language::Shell => highlight_comment_only(line, theme),
    }
}

fn comment_style(theme: &Theme) -> Style {
    Style::default().fg(theme.muted).add_modifier(Modifier::ITALIC)
}

fn highlight_comment_only(line: &str, theme: &Theme) -> Vec<Span<'static>> {
    if line.trim_start().starts_with('#') {
        vec![Span::styled(line.to_string(), comment_style(theme))]
    } else {
        vec![Span::styled(line.to_string(), Style::default().fg(theme.text))]
    }
}

/// YAML: comments, `key:` prefixes and `- ` list markers.
fn highlight_yaml(line: &str, theme: &Theme) -> Vec<Span<'static>> {
    let trimmed = line.trim_start();
    let indent = &line[..line.len() - trimmed.len()];
    let key_style = Style::default().fg(theme.code_key);
    let value_style = Style::default().fg(theme.code_value);

    if trimmed.starts_with('#') {
        return vec![Span::styled(line.to_string(), comment_style(theme))];
    }

    let mut spans = vec![Span::raw(indent.to_string())];
    let mut rest = trimmed;
    if let Some(item) = rest.strip_prefix("- ") {
        spans.push(Span::styled("- ", Style::default().fg(theme.highlight)));
        rest = item;
    }

    let key_len = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-' | '/')))
        .unwrap_or(rest.len());
    if key_len > 0 && rest[key_len..].starts_with(':') {
        spans.push(Span::styled(rest[..key_len].to_string(), key_style));
        spans.push(Span::raw(":"));
        let value = &rest[key_len + 1..];
        if !value.is_empty() {
            spans.push(Span::styled(value.to_string(), value_style));
        }
    } else if !rest.is_empty() {
        spans.push(Span::styled(rest.to_string(), value_style));
    }
    spans
}

/// JSON: property names, string values and numbers.
fn highlight_json(line: &str, theme: &Theme) -> Vec<Span<'static>> {
    let key_style = Style::default().fg(theme.code_key);
    let string_style = Style::default().fg(theme.code_value);
    let number_style = Style::default().fg(theme.warning);
    let plain = Style::default().fg(theme.text);

    let mut spans = Vec::new();
    let mut chars = line.char_indices().peekable();
    let mut plain_start = 0;

    while let Some((i, c)) = chars.next() {
        if c == '"' {
            if plain_start < i {
                spans.push(Span::styled(line[plain_start..i].to_string(), plain));
            }
            let mut end = line.len();
            let mut escaped = false;
            for (j, d) in chars.by_ref() {
                if escaped {
                    escaped = false;
                } else if d == '\\' {
                    escaped = true;
                } else if d == '"' {
                    end = j + 1;
                    break;
                }
            }
            let is_key = line[end..].trim_start().starts_with(':');
            let style = if is_key { key_style } else { string_style };
            spans.push(Span::styled(line[i..end].to_string(), style));
            plain_start = end;
        } else if c.is_ascii_digit() || (c == '-' && chars.peek().is_some_and(|(_, d)| d.is_ascii_digit())) {
            if plain_start < i {
                spans.push(Span::styled(line[plain_start..i].to_string(), plain));
            }
            let mut end = i + c.len_utf8();
            while let Some(&(j, d)) = chars.peek() {
                if d.is_ascii_digit() || matches!(d, '.' | 'e' | 'E' | '+' | '-') {
                    chars.next();
                    end = j + d.len_utf8();
                } else {
                    break;
                }
            }
            spans.push(Span::styled(line[i..end].to_string(), number_style));
            plain_start = end;
        }
    }
    if plain_start < line.len() {
        spans.push(Span::styled(line[plain_start..].to_string(), plain));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(spans: &[Span]) -> Vec<String> {
        spans.iter().map(|s| s.content.to_string()).collect()
    }

    #[test]
    fn test_yaml_key_value() {
        let theme = Theme::dark();
        let spans = highlight("    timeout: 10s", Language::Yaml, &theme);
        assert_eq!(texts(&spans), vec!["    ", "timeout", ":", " 10s"]);
        assert_eq!(spans[1].style.fg, Some(theme.code_key));
    }

    #[test]
    fn test_yaml_list_item_and_comment() {
        let theme = Theme::dark();
        let spans = highlight("      - key: environment", Language::Yaml, &theme);
        assert_eq!(texts(&spans), vec!["      ", "- ", "key", ":", " environment"]);

        let spans = highlight("  # Pipelines", Language::Yaml, &theme);
        assert_eq!(spans.len(), 1);
        assert!(spans[0].style.add_modifier.contains(Modifier::ITALIC));
    }

    #[test]
    fn test_yaml_slashed_key() {
        let theme = Theme::dark();
        let spans = highlight("  otlp/elastic:", Language::Yaml, &theme);
        assert_eq!(texts(&spans), vec!["  ", "otlp/elastic", ":"]);
    }

    #[test]
    fn test_json_keys_strings_numbers() {
        let theme = Theme::dark();
        let spans = highlight(r#"  "http.response.status_code": 200,"#, Language::Json, &theme);
        assert_eq!(
            texts(&spans),
            vec!["  ", "\"http.response.status_code\"", ": ", "200", ","]
        );
        assert_eq!(spans[1].style.fg, Some(theme.code_key));
        assert_eq!(spans[3].style.fg, Some(theme.warning));

        let spans = highlight(r#"  "name": "SELECT orders","#, Language::Json, &theme);
        assert_eq!(spans[3].content, "\"SELECT orders\"");
        assert_eq!(spans[3].style.fg, Some(theme.code_value));
    }

    #[test]
    fn test_render_frames_code_and_shows_ack() {
        let theme = Theme::dark();
        let snippet = CodeSnippet::new("config.yaml", Language::Yaml, "a: 1\nb: 2");
        let lines = render(&snippet, &theme, Hint::Copy);
        assert_eq!(lines.len(), 4);
        assert!(lines[0].to_string().contains("y:copy"));

        let lines = render(&snippet, &theme, Hint::Copied);
        assert!(lines[0].to_string().contains("✓ Copied"));
        assert!(!lines[0].to_string().contains("y:copy"));

        let lines = render(&snippet, &theme, Hint::None);
        assert_eq!(lines[0].to_string(), "┌ config.yaml (yaml) ");
        assert_eq!(lines[0].spans[0].style.fg, Some(theme.border));
    }
}
