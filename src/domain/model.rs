use crate::utils::error::Result;
use crate::utils::validation::validate_customer_name;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A waiting customer. The name is trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Customer {
    name: String,
}

impl Customer {
    pub fn new(raw_name: &str) -> Result<Self> {
        let name = validate_customer_name(raw_name)?;
        Ok(Self { name })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn into_name(self) -> String {
        self.name
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    General,
    Vip,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::General => f.write_str("general"),
            Tier::Vip => f.write_str("VIP"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceCounters {
    pub general_served: u64,
    pub vip_served: u64,
}

impl ServiceCounters {
    pub fn served(&self, tier: Tier) -> u64 {
        match tier {
            Tier::General => self.general_served,
            Tier::Vip => self.vip_served,
        }
    }

    pub(crate) fn record_served(&mut self, tier: Tier) {
        match tier {
            Tier::General => self.general_served += 1,
            Tier::Vip => self.vip_served += 1,
        }
    }
}

/// Something the service did, rendered as one operator log line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServiceEvent {
    SampleDataLoaded { general: usize, vip: usize },
    Added { tier: Tier, name: String },
    Served { tier: Tier, name: String },
    NothingToServe { tier: Tier },
}

impl fmt::Display for ServiceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceEvent::SampleDataLoaded { general, vip } => write!(
                f,
                "Sample data loaded: {} general and {} VIP customers added.",
                general, vip
            ),
            ServiceEvent::Added { tier, name } => write!(f, "Added {} customer: {}", tier, name),
            ServiceEvent::Served { tier, name } => write!(f, "Served {} customer: {}", tier, name),
            ServiceEvent::NothingToServe { tier } => write!(f, "No {} customers to serve", tier),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub at: DateTime<Local>,
    pub event: ServiceEvent,
}

impl LogEntry {
    pub fn now(event: ServiceEvent) -> Self {
        Self {
            at: Local::now(),
            event,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl ReportFormat {
    pub const NAMES: [&'static str; 2] = ["text", "json"];

    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Text => "txt",
            ReportFormat::Json => "json",
        }
    }
}

impl std::str::FromStr for ReportFormat {
    type Err = crate::utils::error::PassesError;

    fn from_str(s: &str) -> Result<Self> {
        crate::utils::validation::validate_one_of("report.format", s, &Self::NAMES)?;
        Ok(if s == "json" {
            ReportFormat::Json
        } else {
            ReportFormat::Text
        })
    }
}
