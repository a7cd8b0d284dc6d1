//! Per-input check results and their text/JSON renderings.

use cpf::{parser, Cpf, CpfError, CpfRecord};
use serde::Serialize;

/// Length of the raw digit shape; only shorter digit strings are padded.
const RAW_DIGITS: usize = 11;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub input: String,
    pub valid: bool,
    #[serde(flatten)]
    pub record: CpfRecord,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Checks one input. With `numeric`, bare digit strings shorter than eleven
/// characters are read as an integer and zero-padded first.
pub fn check_input(input: &str, numeric: bool) -> CheckReport {
    let candidate = numeric_candidate(input, numeric).unwrap_or_else(|| input.to_string());

    let cpf = Cpf::parse(&candidate);
    let reason = match cpf.validate() {
        Ok(()) => None,
        Err(CpfError::MalformedInput { .. }) => Some(
            CpfError::MalformedInput { input: candidate }.to_string(),
        ),
        Err(err) => Some(err.to_string()),
    };

    CheckReport {
        input: input.to_string(),
        valid: cpf.is_valid(),
        record: cpf.record(),
        reason,
    }
}

fn numeric_candidate(input: &str, numeric: bool) -> Option<String> {
    if !numeric
        || input.is_empty()
        || input.len() >= RAW_DIGITS
        || !input.bytes().all(|byte| byte.is_ascii_digit())
    {
        return None;
    }

    input.parse::<u64>().ok().map(parser::pad_numeric)
}

pub fn render_text(reports: &[CheckReport]) -> String {
    let mut out = String::new();
    for report in reports {
        let detail = match (&report.record.formatted, &report.reason) {
            (Some(formatted), _) => formatted.as_str(),
            (None, Some(reason)) => reason.as_str(),
            (None, None) => "",
        };
        let status = if report.valid { "valid" } else { "invalid" };
        out.push_str(&format!("{}\t{}\t{}\n", report.input, status, detail));
    }
    out
}

pub fn render_json(reports: &[CheckReport]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(reports)
}

pub fn invalid_count(reports: &[CheckReport]) -> usize {
    reports.iter().filter(|report| !report.valid).count()
}
