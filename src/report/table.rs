use std::io::Write;

use anyhow::Result;
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use crate::models::{Dependency, Evaluation, FindingReason};

/// Render the verdict lines, then the dependency set as a table instead of
/// the two-line summary entries.
pub fn render(
    w: &mut impl Write,
    evaluation: &Evaluation,
    deps: &[Dependency],
    target: &str,
    quiet: bool,
) -> Result<()> {
    if evaluation.all_compatible {
        writeln!(
            w,
            "{}",
            format!("All dependencies are compatible with {}", target).green()
        )?;
    } else {
        writeln!(w, "{}", "Warning: Incompatible licenses detected!".red())?;
        for finding in &evaluation.findings {
            writeln!(
                w,
                "  - {} ({}): {}",
                finding.name, finding.license, finding.reason
            )?;
        }
    }

    if quiet {
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Name").add_attribute(Attribute::Bold),
            Cell::new("Version").add_attribute(Attribute::Bold),
            Cell::new("License").add_attribute(Attribute::Bold),
            Cell::new("Usage").add_attribute(Attribute::Bold),
            Cell::new("Status").add_attribute(Attribute::Bold),
        ]);

    for dep in deps {
        let reason = evaluation
            .findings
            .iter()
            .find(|f| f.name == dep.name)
            .map(|f| f.reason);

        let (status, color) = match reason {
            None => ("✓ compatible", Color::Green),
            Some(FindingReason::Incompatible) => ("✗ incompatible", Color::Red),
            Some(FindingReason::Unknown) => ("? unknown", Color::Yellow),
        };

        table.add_row(vec![
            Cell::new(&dep.name),
            Cell::new(&dep.version),
            Cell::new(&dep.license),
            Cell::new(&dep.usage),
            Cell::new(status).fg(color),
        ]);
    }

    writeln!(w)?;
    writeln!(w, "{}", table)?;

    Ok(())
}
