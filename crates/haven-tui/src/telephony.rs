//! Telephony handoff seam.
//!
//! A dial is fire-and-forget: the shell hands over a literal number and never
//! hears back. No implementation here places a real call.

use haven_core::safety::DialRequest;

use crate::logging::Logger;

pub trait Telephony {
    fn dial(&mut self, request: &DialRequest);
}

/// Records the handoff in the log and nothing else.
#[derive(Debug, Clone)]
pub struct LoggedDialer {
    logger: Logger,
}

impl LoggedDialer {
    #[must_use]
    pub fn new(logger: &Logger) -> Self {
        Self {
            logger: logger.component("telephony"),
        }
    }
}

impl Telephony for LoggedDialer {
    fn dial(&mut self, request: &DialRequest) {
        self.logger.info_with(
            "dial handoff",
            &[
                ("number", request.number.as_str()),
                ("label", request.label.as_str()),
            ],
        );
    }
}

/// Keeps every request, in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingDialer {
    pub calls: Vec<DialRequest>,
}

impl Telephony for RecordingDialer {
    fn dial(&mut self, request: &DialRequest) {
        self.calls.push(request.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::LogLevel;

    #[test]
    fn logged_dialer_writes_number() {
        let (logger, buffer) = Logger::memory(LogLevel::Info);
        let mut dialer = LoggedDialer::new(&logger);
        dialer.dial(&DialRequest::new("10111", "Police"));
        let lines = buffer.borrow();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("component=telephony number=10111 label=Police dial handoff"));
    }

    #[test]
    fn recording_dialer_keeps_order() {
        let mut dialer = RecordingDialer::default();
        dialer.dial(&DialRequest::new("116", "Childline"));
        dialer.dial(&DialRequest::new("10177", "Emergency Medical"));
        let numbers: Vec<&str> = dialer.calls.iter().map(|c| c.number.as_str()).collect();
        assert_eq!(numbers, vec!["116", "10177"]);
    }
}
