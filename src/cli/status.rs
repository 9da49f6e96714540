use super::report::render_status;
use crate::domain::ComposeRuntime;
use crate::infra::{ComposeAdapter, Settings};
use crate::services::GroupService;
use anyhow::Result;
use std::io::{self, Write};
use std::sync::Arc;

pub fn run(settings: &Settings) -> Result<()> {
    let runtime = Arc::new(ComposeAdapter::from_settings(settings));
    execute(settings, runtime, &mut io::stdout().lock())
}

pub fn execute<W: Write>(
    settings: &Settings,
    runtime: Arc<dyn ComposeRuntime>,
    out: &mut W,
) -> Result<()> {
    let service = GroupService::new(runtime, &settings.groups_file);
    let containers = service.status()?;

    writeln!(out, "📦 Services in {}:", settings.compose_file.display())?;
    render_status(out, &containers)?;
    Ok(())
}
