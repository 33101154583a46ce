use colored::*;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::{FmtContext, FormatEvent};
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

use ipstep_common::config::Config;

const LOG_ENV: &str = "IPSTEP_LOG";

/// Prints one line per event: a status symbol, the emitting module when
/// `show_target` is set, then the event fields.
pub struct IpstepFormatter {
    pub show_target: bool,
}

/// Status symbol for a level, coloured by severity.
fn level_symbol(level: &Level) -> ColoredString {
    match *level {
        Level::ERROR => "[-]".red().bold(),
        Level::WARN => "[*]".yellow().bold(),
        Level::INFO => "[+]".green().bold(),
        Level::DEBUG => "[?]".blue(),
        _ => "[ ]".dimmed(),
    }
}

impl<S, N> FormatEvent<S, N> for IpstepFormatter
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
        let meta = event.metadata();
        write!(writer, "{} ", level_symbol(meta.level()))?;

        if self.show_target {
            let target: String = meta.target().replace("::", "/");
            write!(writer, "{} ", target.dimmed())?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Installs the global subscriber. Logs go to stderr so results on stdout stay scriptable.
///
/// `IPSTEP_LOG` takes precedence over the `-v` count.
pub fn init_logging(cfg: &Config) {
    let filter: EnvFilter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(cfg.log_level()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!cfg.no_color)
        .event_format(IpstepFormatter {
            show_target: cfg.verbose >= 2,
        })
        .init();
}
