/// Progress points an ongoing project may lag its expected progress before it
/// counts as an SLA breach.
pub const SLA_TOLERANCE_POINTS: f64 = 10.0;

/// Minimum accepted password length for new users.
pub const MIN_PASSWORD_LENGTH: usize = 6;

pub const AUDIT_ACTION_UPDATE_PROGRESS: &str = "UPDATE_PROGRESS";
pub const AUDIT_ACTION_FUND_TRANSACTION: &str = "FUND_TRANSACTION";
pub const AUDIT_ENTITY_PROJECT: &str = "project";

/// File name suggested for the state-wise CSV export.
pub const STATE_REPORT_FILENAME: &str = "pmajay-state-report.csv";
