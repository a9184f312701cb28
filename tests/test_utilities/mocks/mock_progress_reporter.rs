use rigscore::prelude::*;
use std::sync::{Arc, Mutex};

/// One call recorded by [`MockProgressReporter`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    Message(String),
    Step { current: usize, total: usize },
    Warning(String),
    Completed(String),
}

/// Mock ProgressReporter recording every call in order
///
/// Clones share the same log, so a test can keep one handle while the use
/// case owns another.
#[derive(Default, Clone)]
pub struct MockProgressReporter {
    events: Arc<Mutex<Vec<ProgressEvent>>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ProgressEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ProgressEvent::Warning(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    pub fn steps(&self) -> Vec<(usize, usize)> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ProgressEvent::Step { current, total } => Some((current, total)),
                _ => None,
            })
            .collect()
    }

    pub fn completion(&self) -> Option<String> {
        self.events().into_iter().rev().find_map(|event| match event {
            ProgressEvent::Completed(message) => Some(message),
            _ => None,
        })
    }

    fn record(&self, event: ProgressEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.record(ProgressEvent::Message(message.to_string()));
    }

    fn report_progress(&self, current: usize, total: usize, _message: Option<&str>) {
        self.record(ProgressEvent::Step { current, total });
    }

    fn report_error(&self, message: &str) {
        self.record(ProgressEvent::Warning(message.to_string()));
    }

    fn report_completion(&self, message: &str) {
        self.record(ProgressEvent::Completed(message.to_string()));
    }
}
