//! Output formatting for the CLI
//!
//! Structured results render as indented JSON. Items can instead go through a
//! small table-driven renderer: each [`ItemKind`] declares the rows it shows.

use anyhow::Result;
use serde::Serialize;

use crate::dynamodb::Item;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// One JSON document per command
    Json,
}

/// How an item is presented in text output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ItemKind {
    /// Astronomy Picture of the Day content entry
    Apod,
    /// Any other item; only the update timestamp is shown
    Generic,
}

/// One line of a rendered item.
#[derive(Debug)]
struct FieldRow {
    label: &'static str,
    attribute: &'static str,
    fallback: &'static str,
    suffix: &'static str,
}

const fn row(label: &'static str, attribute: &'static str) -> FieldRow {
    FieldRow {
        label,
        attribute,
        fallback: "N/A",
        suffix: "",
    }
}

const APOD_ROWS: &[FieldRow] = &[
    row("Date", "date"),
    row("Title", "originalTitle"),
    row("Slovak title", "slovakTitle"),
    row("Image", "imageUrl"),
    row("Quality", "contentQuality"),
    FieldRow {
        label: "Article length",
        attribute: "articleLengthWords",
        fallback: "0",
        suffix: " words",
    },
    row("Copyright", "copyright"),
];

const LAST_UPDATED: FieldRow = row("Last updated", "lastUpdated");

impl ItemKind {
    fn heading(self) -> Option<&'static str> {
        match self {
            ItemKind::Apod => Some("APOD item"),
            ItemKind::Generic => None,
        }
    }

    fn rows(self) -> &'static [FieldRow] {
        match self {
            ItemKind::Apod => APOD_ROWS,
            ItemKind::Generic => &[],
        }
    }
}

/// Renders an item as a block of labelled lines followed by a blank line.
pub fn render_item(item: &Item, kind: ItemKind) -> String {
    let mut lines = Vec::new();
    if let Some(heading) = kind.heading() {
        lines.push(format!("* {heading}"));
    }
    for field in kind.rows().iter().chain(std::iter::once(&LAST_UPDATED)) {
        let value = item
            .display_value(field.attribute)
            .unwrap_or_else(|| field.fallback.to_string());
        lines.push(format!("   {}: {}{}", field.label, value, field.suffix));
    }
    lines.push(String::new());
    lines.join("\n")
}

pub fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn render_items_json(items: &[Item]) -> Result<String> {
    let values: Vec<_> = items.iter().map(Item::to_json).collect();
    render_json(&values)
}

pub fn bullet_list<S: AsRef<str>>(entries: &[S]) -> String {
    entries
        .iter()
        .map(|e| format!("   - {}", e.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn rule() -> String {
    "=".repeat(50)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apod_entry() -> Item {
        Item::new()
            .set_string("date", "2024-01-01")
            .set_string("originalTitle", "The Horsehead Nebula")
            .set_string("imageUrl", "https://apod.nasa.gov/apod/image/horsehead.jpg")
            .set_string("lastUpdated", "2024-01-02T08:00:00Z")
    }

    #[test]
    fn apod_rows_fill_missing_fields_with_fallbacks() {
        let rendered = render_item(&apod_entry(), ItemKind::Apod);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "* APOD item");
        assert_eq!(lines[1], "   Date: 2024-01-01");
        assert_eq!(lines[2], "   Title: The Horsehead Nebula");
        assert_eq!(lines[3], "   Slovak title: N/A");
        assert_eq!(lines[6], "   Article length: 0 words");
        assert_eq!(lines[8], "   Last updated: 2024-01-02T08:00:00Z");
        assert!(rendered.ends_with('\n'));
    }

    #[test]
    fn generic_items_show_only_the_update_timestamp() {
        let rendered = render_item(&Item::new(), ItemKind::Generic);
        assert_eq!(rendered, "   Last updated: N/A\n");
    }

    #[test]
    fn bullets_are_indented() {
        assert_eq!(bullet_list(&["a", "b"]), "   - a\n   - b");
        assert_eq!(bullet_list::<&str>(&[]), "");
    }

    #[test]
    fn items_render_as_a_json_array() -> Result<()> {
        let rendered = render_items_json(&[apod_entry()])?;
        let parsed: serde_json::Value = serde_json::from_str(&rendered)?;
        assert_eq!(parsed[0]["originalTitle"], "The Horsehead Nebula");
        Ok(())
    }
}
