//! Terminal output helpers — dual-mode: styled text for humans, structured JSON for machines.
//!
//! Uses:
//! - `console` for colors (respects NO_COLOR, auto-disables when piped)
//! - `comfy-table` for structured data
//! - `indicatif` for spinners

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::Value as JsonValue;

use crate::cli::OutputFormat;

// ── Global format flag ─────────────────────────────────────────────

static JSON_MODE: AtomicBool = AtomicBool::new(false);

pub fn init(format: OutputFormat) {
    if matches!(format, OutputFormat::Json) {
        JSON_MODE.store(true, Ordering::Relaxed);
    }
}

pub fn is_json() -> bool {
    JSON_MODE.load(Ordering::Relaxed)
}

// ── JSON envelope ──────────────────────────────────────────────────

fn emit_json(level: &str, message: &str, data: Option<&JsonValue>) {
    let mut msg = serde_json::json!({ "level": level, "message": message });
    if let Some(data) = data {
        msg["data"] = data.clone();
    }
    println!("{msg}");
}

// ── Public helpers ─────────────────────────────────────────────────

pub fn header(text: &str) {
    if is_json() {
        emit_json("info", text, None);
    } else {
        println!("{}", style(text).bold().cyan());
    }
}

pub fn success(text: &str) {
    if is_json() {
        emit_json("success", text, None);
    } else {
        println!("{} {}", style("✓").green().bold(), text);
    }
}

pub fn error(text: &str) {
    if is_json() {
        emit_json("error", text, None);
    } else {
        eprintln!("{} {}", style("✗").red().bold(), text);
    }
}

pub fn reply(text: &str) {
    if is_json() {
        emit_json("reply", text, Some(&serde_json::json!({ "reply": text })));
    } else {
        println!("{text}");
    }
}

/// Spinner while a network call is in flight. Hidden in JSON mode.
pub fn spinner(message: &str) -> ProgressBar {
    if is_json() {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Render rows as a table (text) or an array of objects (JSON).
pub fn table(headers: &[&str], rows: Vec<Vec<String>>) {
    if is_json() {
        let items: Vec<JsonValue> = rows
            .iter()
            .map(|row| {
                let mut obj = serde_json::Map::new();
                for (header, value) in headers.iter().zip(row) {
                    obj.insert(header.to_lowercase(), JsonValue::String(value.clone()));
                }
                JsonValue::Object(obj)
            })
            .collect();
        println!("{}", JsonValue::Array(items));
        return;
    }
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(headers.iter().map(|h| Cell::new(h)));
    for row in rows {
        table.add_row(row);
    }
    println!("{table}");
}
