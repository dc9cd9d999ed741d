use std::io::Write;

use anyhow::Result;
use colored::*;

use crate::models::{Dependency, Evaluation};

/// Render the line-oriented report.
///
/// Output contract (stable, relied on by callers that parse stdout):
/// a verdict line (plus one `  - name (license): reason` line per finding),
/// a blank line, `Dependency summary:`, then two lines per dependency in
/// declaration order. `quiet` drops everything after the verdict.
///
/// Colors degrade to plain text when stdout is not a tty, so piped output
/// is byte-exact.
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

    writeln!(w)?;
    writeln!(w, "Dependency summary:")?;
    for dep in deps {
        writeln!(w, "  - {} ({}): {}", dep.name, dep.version, dep.license)?;
        writeln!(w, "    Usage: {}", dep.usage)?;
    }

    Ok(())
}
