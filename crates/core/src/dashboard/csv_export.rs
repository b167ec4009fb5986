use csv::WriterBuilder;

use crate::dashboard::dashboard_model::StateBreakdown;
use crate::errors::{Error, Result};

const HEADER: [&str; 4] = ["State", "Projects", "Budget", "Progress"];

/// Renders the per-state breakdown as CSV, one row per state.
pub fn write_state_report(rows: &[StateBreakdown]) -> Result<String> {
    let mut writer = WriterBuilder::new().from_writer(Vec::new());
    writer
        .write_record(HEADER)
        .map_err(|e| Error::Export(e.to_string()))?;
    for row in rows {
        writer
            .write_record([
                row.name.clone(),
                row.project_count.to_string(),
                row.total_budget.to_string(),
                format!("{:.2}", row.avg_progress),
            ])
            .map_err(|e| Error::Export(e.to_string()))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| Error::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| Error::Export(e.to_string()))
}
