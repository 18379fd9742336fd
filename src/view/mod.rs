pub mod console;

pub use console::ConsoleNotifier;

/// Sink for transient failure messages. The aggregator reports each failed
/// operation here exactly once; nothing is stored.
pub trait Notifier: Send + Sync {
    fn notify_failure(&self, message: &str);
}
