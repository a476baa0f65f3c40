use crate::app::command::{Command, HELP};
use crate::core::journal::Journal;
use crate::core::service::PassesService;
use crate::core::{ReportFormat, Storage};
use crate::utils::error::{ErrorSeverity, PassesError, Result};
use chrono::Local;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub commands: usize,
    pub rejected: usize,
}

/// Drives a `PassesService` from operator commands. New journal entries are
/// appended to `out` after every command; rejected input goes to `err`.
pub struct Console<S: Storage, O: Write, R: Write> {
    service: PassesService<Journal>,
    storage: S,
    format: ReportFormat,
    out: O,
    err: R,
    cursor: usize,
    timestamps: bool,
    exports: usize,
}

impl<S: Storage, O: Write, R: Write> Console<S, O, R> {
    pub fn new(
        service: PassesService<Journal>,
        storage: S,
        format: ReportFormat,
        out: O,
        err: R,
    ) -> Self {
        Self {
            service,
            storage,
            format,
            out,
            err,
            cursor: 0,
            timestamps: false,
            exports: 0,
        }
    }

    /// Prefix each event line with the local time it was recorded.
    pub fn with_timestamps(mut self, timestamps: bool) -> Self {
        self.timestamps = timestamps;
        self
    }

    pub fn service(&self) -> &PassesService<Journal> {
        &self.service
    }

    pub fn into_parts(self) -> (PassesService<Journal>, O, R) {
        (self.service, self.out, self.err)
    }

    /// Writes any journal entries the operator has not seen yet.
    pub fn flush_events(&mut self) -> Result<()> {
        let (fresh, cursor) = self.service.sink().since(self.cursor);
        for entry in fresh {
            if self.timestamps {
                writeln!(self.out, "[{}] {}", entry.at.format("%H:%M:%S"), entry.event)?;
            } else {
                writeln!(self.out, "{}", entry.event)?;
            }
        }
        self.cursor = cursor;
        self.out.flush()?;
        Ok(())
    }

    pub async fn execute(&mut self, command: Command) -> Result<Flow> {
        tracing::debug!(?command, "Executing command");

        match command {
            Command::Add(tier, name) => {
                self.service.add(tier, &name)?;
            }
            Command::Serve(tier) => {
                self.service.serve(tier);
            }
            Command::Report => {
                let rendered = self.service.generate_report().render(self.format)?;
                writeln!(self.out, "{}", rendered.trim_end())?;
            }
            Command::Export(file_name) => {
                let path = self.export(file_name).await?;
                writeln!(self.out, "Report exported to: {}", path)?;
            }
            Command::Help => {
                writeln!(self.out, "{}", HELP)?;
            }
            Command::Quit => return Ok(Flow::Quit),
        }

        self.flush_events()?;
        Ok(Flow::Continue)
    }

    /// A named export replaces an existing file; a generated name never does.
    async fn export(&mut self, file_name: Option<String>) -> Result<String> {
        let rendered = self.service.generate_report().render(self.format)?;

        let path = match file_name {
            Some(file_name) => self.storage.write_file(&file_name, rendered.as_bytes()).await?,
            None => {
                self.exports += 1;
                let file_name = format!(
                    "report_{}_{}.{}",
                    Local::now().format("%Y%m%d_%H%M%S_%3f"),
                    self.exports,
                    self.format.extension()
                );
                self.storage.create_file(&file_name, rendered.as_bytes()).await?
            }
        };
        tracing::info!("📁 Report exported to: {}", path);
        Ok(path)
    }

    /// Surfaces recoverable errors to the operator; anything worse ends the session.
    fn report_error(&mut self, error: PassesError) -> Result<()> {
        if error.severity() > ErrorSeverity::Medium {
            return Err(error);
        }
        tracing::warn!("Command rejected: {}", error);
        writeln!(self.err, "Error: {}", error.user_friendly_message())?;
        self.err.flush()?;
        Ok(())
    }

    pub async fn run<I: AsyncBufRead + Unpin>(
        &mut self,
        mut input: I,
        interactive: bool,
    ) -> Result<SessionSummary> {
        let mut summary = SessionSummary::default();
        let mut buf = Vec::new();
        let mut line_number = 0;

        self.flush_events()?;
        loop {
            if interactive {
                write!(self.out, "> ")?;
                self.out.flush()?;
            }

            buf.clear();
            if input.read_until(b'\n', &mut buf).await? == 0 {
                break;
            }
            line_number += 1;

            // 無法解碼的行只拒絕該行，不中斷整個班次
            let Ok(line) = std::str::from_utf8(&buf) else {
                summary.rejected += 1;
                self.report_error(PassesError::InvalidEncoding { line: line_number })?;
                continue;
            };

            let command = match Command::parse(line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(e) => {
                    summary.rejected += 1;
                    self.report_error(e)?;
                    continue;
                }
            };

            summary.commands += 1;
            match self.execute(command).await {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(e) => {
                    summary.rejected += 1;
                    self.report_error(e)?;
                }
            }
        }

        tracing::info!(
            commands = summary.commands,
            rejected = summary.rejected,
            "Session ended"
        );
        Ok(summary)
    }
}
