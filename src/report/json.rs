use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use crate::models::{Dependency, Evaluation, Finding};

/// The document emitted by `--report json`.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub target: &'a str,
    pub all_compatible: bool,
    pub findings: &'a [Finding],
    pub dependencies: &'a [Dependency],
}

/// Write the evaluation as one pretty-printed JSON document. No header line
/// or other chrome; stdout stays machine-parseable.
pub fn render(
    w: &mut impl Write,
    evaluation: &Evaluation,
    deps: &[Dependency],
    target: &str,
) -> Result<()> {
    let report = Report {
        target,
        all_compatible: evaluation.all_compatible,
        findings: &evaluation.findings,
        dependencies: deps,
    };

    writeln!(w, "{}", serde_json::to_string_pretty(&report)?)?;
    Ok(())
}
