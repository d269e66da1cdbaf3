use std::io::Write;

use waycheck_core::{EntityId, Error, Issue};

use crate::cli::OutputFormat;

/// Writes issues as pretty JSON or as one block of text per issue
pub fn write_issues(
    out: &mut impl Write,
    issues: &[Issue],
    format: OutputFormat,
) -> Result<(), Error> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, issues)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            for issue in issues {
                write_text(out, issue)?;
            }
        }
    }
    Ok(())
}

fn write_text(out: &mut impl Write, issue: &Issue) -> Result<(), Error> {
    let entities = join_ids(&issue.entities);
    writeln!(
        out,
        "{} {} {entities}: {}",
        issue.severity.as_str(),
        issue.kind.as_str(),
        issue.message
    )?;
    writeln!(out, "    {}", issue.tooltip)?;
    for fix in &issue.fixes {
        writeln!(out, "    fix: {} [{}]", fix.title, join_ids(&fix.entity_ids))?;
    }
    Ok(())
}

fn join_ids(ids: &[EntityId]) -> String {
    ids.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}
