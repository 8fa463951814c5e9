// The text/status display collaborator. The seat map hands it one short,
// human-readable line per meaningful interaction.

use log::info;

/// Receives user-facing status messages.
pub trait StatusSink {
    fn show(&mut self, message: &str);
}

/// Reports status messages through the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogStatus;

impl StatusSink for LogStatus {
    fn show(&mut self, message: &str) {
        info!("{message}");
    }
}

/// Collects messages in memory, newest last.
impl StatusSink for Vec<String> {
    fn show(&mut self, message: &str) {
        self.push(message.to_string());
    }
}

impl<S: StatusSink + ?Sized> StatusSink for &mut S {
    fn show(&mut self, message: &str) {
        (**self).show(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn announce(sink: &mut impl StatusSink) {
        sink.show("selected seat: row 1 seat 1");
    }

    #[test]
    fn vec_sink_records_messages_in_order() {
        let mut messages = Vec::new();
        announce(&mut messages);
        let mut forwarded: &mut Vec<String> = &mut messages;
        announce(&mut forwarded);
        assert_eq!(messages, vec!["selected seat: row 1 seat 1"; 2]);
    }

    #[test_log::test]
    fn log_sink_accepts_messages() {
        LogStatus.show("seat already taken, please choose an empty seat");
    }
}
