use super::report::{render_group, render_listing, render_plan, render_summary};
use crate::domain::ComposeRuntime;
use crate::infra::{ComposeAdapter, Settings};
use crate::services::{BulkAction, GroupService};
use anyhow::Result;
use clap::{Args, Subcommand};
use std::io::{self, Write};
use std::sync::Arc;

#[derive(Args)]
pub struct GroupsCommand {
    #[command(subcommand)]
    pub command: GroupsAction,
}

#[derive(Subcommand)]
pub enum GroupsAction {
    /// List every configured group with its containers and their state
    List,
    /// Start all containers belonging to the given groups
    Enable {
        /// Group names from container-groups.yml
        groups: Vec<String>,
    },
    /// Stop all running containers belonging to the given groups
    Disable {
        /// Group names from container-groups.yml
        groups: Vec<String>,
    },
    /// Show a single group and the containers it resolves to
    Show { group: String },
}

pub fn run(cmd: GroupsCommand, settings: &Settings) -> Result<()> {
    let runtime = Arc::new(ComposeAdapter::from_settings(settings));
    execute(cmd.command, settings, runtime, &mut io::stdout().lock())
}

/// Runs `action` against an arbitrary runtime, writing the report to `out`.
pub fn execute<W: Write>(
    action: GroupsAction,
    settings: &Settings,
    runtime: Arc<dyn ComposeRuntime>,
    out: &mut W,
) -> Result<()> {
    let service = GroupService::new(runtime, &settings.groups_file);

    match action {
        GroupsAction::List => {
            let listing = service.list_groups()?;
            render_listing(out, &listing)?;
        }
        GroupsAction::Enable { groups } => bulk(&service, BulkAction::Start, &groups, out)?,
        GroupsAction::Disable { groups } => bulk(&service, BulkAction::Stop, &groups, out)?,
        GroupsAction::Show { group } => {
            let listing = service.show_group(&group)?;
            render_group(out, &listing)?;
        }
    }

    Ok(())
}

/// Warnings and targets are written before the orchestrator runs so they
/// survive a failed start/stop.
fn bulk<W: Write>(
    service: &GroupService,
    action: BulkAction,
    groups: &[String],
    out: &mut W,
) -> Result<()> {
    let plan = service.plan(action, groups)?;
    render_plan(out, &plan)?;
    out.flush()?;

    service.run(&plan)?;
    render_summary(out, &plan)?;
    Ok(())
}
