use crate::types::report::JudgingReport;

pub fn to_json(report: &JudgingReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
