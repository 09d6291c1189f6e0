//! Line-based renderer for the small markdown subset model replies use:
//! `#`/`##`/`###` headings, `- ` bullets, blank lines and plain paragraphs.
//! No inline emphasis, no nesting. All text is HTML-escaped.

use std::str::Lines;

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Lazy stream of HTML fragments. Cloning restarts from the same position.
#[derive(Debug, Clone)]
pub struct Fragments<'a> {
    lines: Lines<'a>,
    // items of the list currently open, empty when outside a list
    list: Vec<String>,
    pending: Option<String>,
}

pub fn render(markdown: &str) -> Fragments<'_> {
    Fragments {
        lines: markdown.lines(),
        list: Vec::new(),
        pending: None,
    }
}

pub fn render_html(markdown: &str) -> String {
    render(markdown).collect()
}

impl Fragments<'_> {
    fn flush_list(&mut self) -> Option<String> {
        if self.list.is_empty() {
            return None;
        }
        let items: String = self.list.drain(..).collect();
        Some(format!("<ul>{items}</ul>"))
    }
}

fn block(line: &str) -> String {
    if line.trim().is_empty() {
        return "<br/>".to_string();
    }
    for (prefix, tag) in [("### ", "h3"), ("## ", "h2"), ("# ", "h1")] {
        if let Some(rest) = line.strip_prefix(prefix) {
            return format!("<{tag}>{}</{tag}>", escape_html(rest));
        }
    }
    format!("<p>{}</p>", escape_html(line))
}

impl Iterator for Fragments<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if let Some(fragment) = self.pending.take() {
            return Some(fragment);
        }
        loop {
            let Some(line) = self.lines.next() else {
                return self.flush_list();
            };
            if let Some(item) = line.strip_prefix("- ") {
                self.list.push(format!("<li>{}</li>", escape_html(item)));
                continue;
            }
            let fragment = block(line);
            return match self.flush_list() {
                Some(list) => {
                    self.pending = Some(fragment);
                    Some(list)
                }
                None => Some(fragment),
            };
        }
    }
}
