use colored::{Color, Colorize};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::fmt::{FmtContext, FormatEvent};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::EnvFilter;

/// `draftpack <level>: <fields>`, with the event target added at debug and
/// trace so pool and loader events can be told apart.
pub struct DraftpackFormatter;

fn level_style(level: Level) -> (&'static str, Color) {
    match level {
        Level::TRACE => ("trace", Color::BrightBlack),
        Level::DEBUG => ("debug", Color::Cyan),
        Level::INFO => ("info", Color::Green),
        Level::WARN => ("warn", Color::Yellow),
        Level::ERROR => ("error", Color::Red),
    }
}

fn shows_target(level: Level) -> bool {
    level >= Level::DEBUG
}

impl<S, N> FormatEvent<S, N> for DraftpackFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let metadata = event.metadata();
        let level = *metadata.level();
        let (label, color) = level_style(level);
        write!(writer, "{} {}", "draftpack".bold(), label.color(color))?;
        if shows_target(level) {
            write!(writer, " {}", metadata.target().dimmed())?;
        }
        write!(writer, ": ")?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Logs go to stderr so stdout only carries tables and lists.
/// `RUST_LOG` wins over the verbosity flags.
pub fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .event_format(DraftpackFormatter)
        .init();
}
