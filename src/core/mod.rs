pub mod journal;
pub mod lines;
pub mod report;
pub mod service;

pub use crate::domain::model::{Customer, LogEntry, ReportFormat, ServiceCounters, ServiceEvent, Tier};
pub use crate::domain::ports::{ConfigProvider, EventSink, Storage};
pub use crate::utils::error::Result;
