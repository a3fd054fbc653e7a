//! Report sinks.
//!
//! Displays only produce text; a [`ReportSink`] decides where it goes.

use parking_lot::Mutex;

/// Destination for rendered display reports.
pub trait ReportSink: Send + Sync {
    /// Accept one complete report. Reports carry no trailing newline.
    fn emit(&self, report: &str);
}

/// Writes each report to stdout followed by a blank line.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl ReportSink for StdoutSink {
    fn emit(&self, report: &str) {
        println!("{report}");
        println!();
    }
}

/// Keeps every emitted report in memory, in emission order.
#[derive(Debug, Default)]
pub struct MemorySink {
    reports: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All reports emitted so far.
    pub fn reports(&self) -> Vec<String> {
        self.reports.lock().clone()
    }

    /// The most recent report, if any.
    pub fn last(&self) -> Option<String> {
        self.reports.lock().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.reports.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.lock().is_empty()
    }
}

impl ReportSink for MemorySink {
    fn emit(&self, report: &str) {
        self.reports.lock().push(report.to_string());
    }
}
