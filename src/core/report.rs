use crate::domain::model::ReportFormat;
use crate::utils::error::Result;
use serde::Serialize;
use std::fmt;

/// Point-in-time snapshot of counters and remaining customers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub vip_served: u64,
    pub general_served: u64,
    /// Top of the stack first.
    pub remaining_vip: Vec<String>,
    /// Head of the queue first.
    pub remaining_general: Vec<String>,
}

impl Report {
    pub fn render(&self, format: ReportFormat) -> Result<String> {
        match format {
            ReportFormat::Text => Ok(self.to_string()),
            ReportFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

fn write_section(f: &mut fmt::Formatter<'_>, names: &[String]) -> fmt::Result {
    if names.is_empty() {
        return writeln!(f, "None");
    }
    for name in names {
        writeln!(f, "{}", name)?;
    }
    Ok(())
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Customer Service Report ---")?;
        writeln!(f, "VIP customers served: {}", self.vip_served)?;
        writeln!(f, "General customers served: {}", self.general_served)?;
        writeln!(f)?;
        writeln!(f, "Remaining VIP customers:")?;
        write_section(f, &self.remaining_vip)?;
        writeln!(f)?;
        writeln!(f, "Remaining General customers:")?;
        write_section(f, &self.remaining_general)
    }
}
