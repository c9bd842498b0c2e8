use colored::Colorize;
use log::{Level, LevelFilter, Log, Metadata, Record};

/// `log` backend for the command line: colored level prefix on stderr.
pub struct CliLogger;

static LOGGER: CliLogger = CliLogger;

impl Log for CliLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        eprintln!("{} {}", prefix(record.level()), record.args());
    }

    fn flush(&self) {}
}

fn prefix(level: Level) -> colored::ColoredString {
    match level {
        Level::Error => "error:".red().bold(),
        Level::Warn => "warning:".yellow().bold(),
        Level::Info => "info:".green().bold(),
        Level::Debug => "debug:".dimmed(),
        Level::Trace => "trace:".dimmed(),
    }
}

/// Install the CLI logger. Safe to call more than once.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
