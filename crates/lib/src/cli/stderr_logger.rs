use log::Log;

/// Logger writing to stderr, leaving stdout to the answer.
pub(crate) struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        eprintln!(
            "{file}:{line}: {}: {}",
            record.level(),
            record.args(),
            file = record.file().unwrap_or_default(),
            line = record.line().unwrap_or_default()
        );
    }

    fn flush(&self) {}
}
