use std::sync::mpsc::{Receiver, Sender, channel};
use tracing_subscriber::Layer;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Installs the global subscriber: a capture layer feeding the in-app log
/// and a plain formatter on stderr. Returns the receiving end of the capture.
pub fn init_log_capture() -> anyhow::Result<Receiver<String>> {
    let (tx, rx) = channel();

    let capture_layer = CaptureLayer { sender: tx };

    #[cfg(debug_assertions)]
    let filter = LevelFilter::TRACE;

    #[cfg(not(debug_assertions))]
    let filter = LevelFilter::DEBUG;

    #[cfg(feature = "verbose-logging")]
    let stderr_filter = LevelFilter::DEBUG;

    #[cfg(not(feature = "verbose-logging"))]
    let stderr_filter = LevelFilter::INFO;

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(stderr_filter);

    tracing_subscriber::registry()
        .with(filter)
        .with(capture_layer)
        .with(stderr_layer)
        .try_init()?;

    Ok(rx)
}

/// Forwards this crate's events as `[LEVEL] message key=value` lines.
struct CaptureLayer {
    sender: Sender<String>,
}

impl<S> Layer<S> for CaptureLayer
where
    S: tracing::Subscriber,
{
    fn on_event(
        &self,
        event: &tracing::Event<'_>,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let metadata = event.metadata();
        if !metadata.target().starts_with(env!("CARGO_CRATE_NAME")) {
            return;
        }

        let mut visitor = LineVisitor::default();
        event.record(&mut visitor);

        if let Some(line) = visitor.into_line() {
            let _ = self.sender.send(format!("[{}] {}", metadata.level(), line));
        }
    }
}

#[derive(Default)]
struct LineVisitor {
    message: String,
    fields: Vec<String>,
}

impl LineVisitor {
    fn into_line(self) -> Option<String> {
        if self.message.is_empty() && self.fields.is_empty() {
            return None;
        }
        let mut parts = Vec::with_capacity(self.fields.len() + 1);
        if !self.message.is_empty() {
            parts.push(self.message);
        }
        parts.extend(self.fields);
        Some(parts.join(" "))
    }
}

impl tracing::field::Visit for LineVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        match field.name() {
            "message" => self.message = format!("{:?}", value),
            name => self.fields.push(format!("{}={:?}", name, value)),
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        match field.name() {
            "message" => self.message = value.to_string(),
            name => self.fields.push(format!("{}={}", name, value)),
        }
    }
}
