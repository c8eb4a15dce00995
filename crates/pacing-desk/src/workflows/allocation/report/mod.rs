mod hourly;
mod morning;
mod next_day;
mod realtime;
pub mod views;

pub use hourly::{HourlyAllocationTable, HourlyColumn};
pub use morning::render_morning;
pub use next_day::render_next_day;
pub use realtime::render_realtime;
pub use views::{format_count, ReportContext};

use super::result::AllocationResult;
use serde::{Deserialize, Serialize};

/// One of the three daily report templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    Morning,
    Realtime,
    NextDay,
}

impl ReportKind {
    pub const fn ordered() -> [Self; 3] {
        [Self::Morning, Self::Realtime, Self::NextDay]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Morning => "Morning target briefing",
            Self::Realtime => "Real-time status",
            Self::NextDay => "Next-day resource plan",
        }
    }

    pub fn render(self, result: &AllocationResult, context: &ReportContext) -> String {
        match self {
            Self::Morning => render_morning(result, context),
            Self::Realtime => render_realtime(result, context),
            Self::NextDay => render_next_day(result, context),
        }
    }
}

/// All rendered texts for a single run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportBundle {
    pub morning: String,
    pub realtime: String,
    pub next_day: String,
}

impl ReportBundle {
    pub fn build(result: &AllocationResult, context: &ReportContext) -> Self {
        Self {
            morning: render_morning(result, context),
            realtime: render_realtime(result, context),
            next_day: render_next_day(result, context),
        }
    }

    pub fn text(&self, kind: ReportKind) -> &str {
        match kind {
            ReportKind::Morning => &self.morning,
            ReportKind::Realtime => &self.realtime,
            ReportKind::NextDay => &self.next_day,
        }
    }
}
