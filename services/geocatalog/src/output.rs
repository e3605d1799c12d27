//! Plain renderings of a catalog view for the terminal.

use std::fmt::Write;

use catalog::{CatalogEntry, CatalogView};

/// Output formats accepted by `--output`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Text,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "json" => Some(OutputFormat::Json),
            "text" | "table" => Some(OutputFormat::Text),
            _ => None,
        }
    }
}

pub fn render(view: &CatalogView, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(view),
        OutputFormat::Text => Ok(render_text(view)),
    }
}

fn render_text(view: &CatalogView) -> String {
    let mut out = String::new();
    for entry in view {
        render_entry(&mut out, entry);
        out.push('\n');
    }
    let _ = writeln!(out, "{} layers", view.len());
    out
}

fn render_entry(out: &mut String, entry: &CatalogEntry) {
    let layer = &entry.layer;

    let _ = writeln!(out, "{} [{}]", layer.title, layer.name);
    if let Some(description) = &layer.description {
        let _ = writeln!(out, "  {}", description);
    }
    let _ = writeln!(out, "  provider: {}", entry.provider.description);

    let found = layer
        .found_date
        .map(|d| d.to_string())
        .unwrap_or_else(|| "-".to_string());
    match layer.removed_date {
        Some(removed) => {
            let _ = writeln!(out, "  found: {}  removed: {}", found, removed);
        }
        None => {
            let _ = writeln!(out, "  found: {}", found);
        }
    }

    let _ = writeln!(out, "  thumbnail: {}", entry.presentation.thumbnail_url);
    for link in &entry.presentation.links {
        let _ = writeln!(out, "  {}: {}", link.label, link.url);
    }
}
