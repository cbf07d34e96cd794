//! Recipient notification.
//!
//! Delivery is simulated: messages are written to a console stream, one
//! "Receiver" / "Message" pair per recipient.

use crate::{Error, Result};
use std::io::Write;
use std::sync::Mutex;
use tracing::debug;

/// Sends a message to a list of recipients.
pub trait Notifier: Send + Sync {
    /// Adds a recipient.
    fn add_recipient(&self, id: &str);

    /// Sends `message` to every recipient in the order they were added.
    fn notify_all(&self, message: &str) -> Result<()>;
}

/// Writes notifications to stdout or any other writer.
pub struct ConsoleNotifier {
    recipients: Mutex<Vec<String>>,
    out: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleNotifier {
    /// Creates a notifier printing to stdout.
    pub fn new() -> Self {
        Self::with_writer(std::io::stdout())
    }

    /// Creates a notifier printing to `out`.
    pub fn with_writer(out: impl Write + Send + 'static) -> Self {
        Self {
            recipients: Mutex::new(Vec::new()),
            out: Mutex::new(Box::new(out)),
        }
    }

    /// Returns the registered recipients.
    pub fn recipients(&self) -> Vec<String> {
        self.recipients.lock().unwrap().clone()
    }
}

impl Default for ConsoleNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for ConsoleNotifier {
    fn add_recipient(&self, id: &str) {
        self.recipients.lock().unwrap().push(id.to_string());
    }

    fn notify_all(&self, message: &str) -> Result<()> {
        let recipients = self.recipients.lock().unwrap();
        let mut out = self.out.lock().unwrap();
        for recipient in recipients.iter() {
            write!(out, "{}", format_notification(recipient, message)).map_err(Error::Notify)?;
        }
        out.flush().map_err(Error::Notify)?;
        debug!("Notified {} recipient(s)", recipients.len());
        Ok(())
    }
}

/// Formats the block written for one recipient.
fn format_notification(recipient: &str, message: &str) -> String {
    format!("Receiver: {}\nMessage: {}\n\n", recipient, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    /// Writer sharing its buffer with the test.
    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuf {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    #[test]
    fn test_format_notification() {
        assert_eq!(
            format_notification("ops@example.com", "storm"),
            "Receiver: ops@example.com\nMessage: storm\n\n"
        );
    }

    #[test]
    fn test_notify_all_in_order() {
        let buf = SharedBuf::default();
        let notifier = ConsoleNotifier::with_writer(buf.clone());
        notifier.add_recipient("a@example.com");
        notifier.add_recipient("b@example.com");

        notifier.notify_all("hello").unwrap();

        assert_eq!(
            buf.contents(),
            "Receiver: a@example.com\nMessage: hello\n\n\
             Receiver: b@example.com\nMessage: hello\n\n"
        );
        assert_eq!(notifier.recipients(), vec!["a@example.com", "b@example.com"]);
    }

    #[test]
    fn test_no_recipients_writes_nothing() {
        let buf = SharedBuf::default();
        let notifier = ConsoleNotifier::with_writer(buf.clone());
        notifier.notify_all("hello").unwrap();
        assert!(buf.contents().is_empty());
    }
}
