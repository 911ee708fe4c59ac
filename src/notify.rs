/// Fire-and-forget user feedback surface.
///
/// Messages and refresh signals are never awaited and their failures are
/// invisible to the flows; nothing here may abort scaffolding work.
pub trait Notifier {
    /// Shows an informational message.
    fn info(&self, message: &str);

    /// Signals that the host's file tree view should be refreshed.
    fn refresh(&self);
}

/// Console-backed [`Notifier`]. A terminal has no file tree view to
/// refresh, so that signal is only recorded at debug level.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn info(&self, message: &str) {
        println!("{}", message);
    }

    fn refresh(&self) {
        log::debug!("file tree refresh requested");
    }
}
