use crate::domain::model::{LogEntry, ReportFormat};
use crate::utils::error::Result;

/// Receives every event the service emits, in order.
pub trait EventSink {
    fn emit(&mut self, entry: LogEntry);
}

/// Paths are relative to the storage root; implementations reject any that escape it.
pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<String>> + Send;

    /// Like `write_file`, but fails if the file already exists.
    fn create_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub trait ConfigProvider {
    fn seed_enabled(&self) -> bool;
    fn seed_general(&self) -> &[String];
    fn seed_vip(&self) -> &[String];
    fn report_format(&self) -> ReportFormat;
    fn output_path(&self) -> &str;
}
