//! Study session tracking.
//!
//! - `session`: the session record, timestamps and the live stopwatch
//! - `storage`: the append-only text log on disk
//! - `timer`: duration formatting and parsing
//! - `report`: totals across the log

pub mod report;
pub mod session;
pub mod storage;
pub mod timer;

pub use report::StudySummary;
pub use session::{format_timestamp, parse_timestamp, Session, Stopwatch};
pub use storage::{parse_line, ClearOutcome, LineError, ScannedLine, SessionStore, LOG_FILE_NAME};
pub use timer::{format_duration, parse_duration, TimeBreakdown};
