//! Tracing layer that forwards formatted log lines to a sink (e.g. TUI debug traces).

use std::fmt::Write;

use tracing::field::Visit;
use tracing_subscriber::layer::{Context, Layer};

use crate::config::LogSink;

/// Truncate absurdly long lines so the sink never chokes on one event.
const MAX_LINE_LEN: usize = 16_000;

/// Collects an event's fields into one line: "message key=value ...".
#[derive(Default)]
struct LineVisitor {
    buf: String,
}

impl LineVisitor {
    fn push_sep(&mut self) {
        if !self.buf.is_empty() {
            self.buf.push(' ');
        }
    }
}

impl Visit for LineVisitor {
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.push_sep();
        if field.name() == "message" {
            self.buf.push_str(value);
        } else {
            write!(self.buf, "{}={}", field.name(), value).ok();
        }
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.push_sep();
        if field.name() == "message" {
            write!(self.buf, "{:?}", value).ok();
        } else {
            write!(self.buf, "{}={:?}", field.name(), value).ok();
        }
    }
}

/// Layer that sends each formatted event to the given sink when present. The sink must not block.
pub(crate) fn tui_log_layer(sink: Option<LogSink>) -> LogSinkLayer {
    LogSinkLayer { sink }
}

#[derive(Clone)]
pub(crate) struct LogSinkLayer {
    sink: Option<LogSink>,
}

impl<S> Layer<S> for LogSinkLayer
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let Some(ref sink) = self.sink else {
            return;
        };
        let metadata = event.metadata();
        let mut visitor = LineVisitor::default();
        event.record(&mut visitor);

        let mut line = if visitor.buf.is_empty() {
            format!("[{}] {}", metadata.level(), metadata.target())
        } else {
            format!("[{}] {}: {}", metadata.level(), metadata.target(), visitor.buf)
        };
        if line.len() > MAX_LINE_LEN {
            let total = line.len();
            let mut cut = MAX_LINE_LEN;
            while !line.is_char_boundary(cut) {
                cut -= 1;
            }
            line.truncate(cut);
            write!(line, "… ({} chars)", total).ok();
        }
        sink(line);
    }
}
