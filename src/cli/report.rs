use crate::domain::Container;
use crate::services::{GroupListing, OperationReport};
use std::io::{self, Write};

pub fn render_listing<W: Write>(out: &mut W, listing: &[GroupListing]) -> io::Result<()> {
    writeln!(out, "Container Groups:")?;
    writeln!(out, "================")?;

    if listing.is_empty() {
        writeln!(out, "\nNo groups configured")?;
    }

    for group in listing {
        render_group(out, group)?;
    }

    Ok(())
}

pub fn render_group<W: Write>(out: &mut W, group: &GroupListing) -> io::Result<()> {
    writeln!(out, "\n{}:", group.name.to_uppercase())?;
    writeln!(out, "  Description: {}", group.description)?;

    if group.containers.is_empty() {
        return writeln!(out, "  Containers: None found");
    }

    writeln!(out, "  Containers ({}):", group.containers.len())?;
    for container in &group.containers {
        writeln!(out, "    - {} [{}]", container.name, container.state)?;
    }

    Ok(())
}

pub fn render_plan<W: Write>(out: &mut W, plan: &OperationReport) -> io::Result<()> {
    for diagnostic in &plan.diagnostics {
        writeln!(out, "{diagnostic}")?;
    }

    if plan.is_noop() {
        return writeln!(out, "No containers found matching the specified groups");
    }

    writeln!(
        out,
        "{} containers: {}",
        plan.action.progressive(),
        plan.containers.join(", ")
    )
}

/// Printed once the orchestrator call succeeded. Empty plans have no summary.
pub fn render_summary<W: Write>(out: &mut W, report: &OperationReport) -> io::Result<()> {
    if report.is_noop() {
        return Ok(());
    }

    writeln!(
        out,
        "Successfully {} {} containers from groups: {}",
        report.action.past_tense(),
        report.containers.len(),
        report.groups.join(", ")
    )
}

pub fn render_status<W: Write>(out: &mut W, containers: &[Container]) -> io::Result<()> {
    if containers.is_empty() {
        return writeln!(out, "No services declared in the compose file");
    }

    let width = containers
        .iter()
        .map(|c| c.name.len())
        .max()
        .unwrap_or(0)
        .max(10);

    for container in containers {
        writeln!(out, "- {:<width$} | {}", container.name, container.state)?;
    }

    Ok(())
}
