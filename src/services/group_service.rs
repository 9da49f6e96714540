use crate::domain::{ComposeRuntime, Container, ContainerState, GroupConfiguration};
use crate::error::{Diagnostic, GroupError};
use crate::infra::config::load_groups;
use std::collections::{BTreeSet, HashSet};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkAction {
    Start,
    Stop,
}

impl BulkAction {
    pub fn verb(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Stop => "stop",
        }
    }

    pub fn progressive(&self) -> &'static str {
        match self {
            Self::Start => "Starting",
            Self::Stop => "Stopping",
        }
    }

    pub fn past_tense(&self) -> &'static str {
        match self {
            Self::Start => "started",
            Self::Stop => "stopped",
        }
    }
}

/// Resolved targets of an enable/disable request, built by [`GroupService::plan`].
///
/// `containers` is empty when no requested group matched anything, in which
/// case the orchestrator is never called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationReport {
    pub action: BulkAction,
    pub groups: Vec<String>,
    pub containers: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
}

impl OperationReport {
    pub fn is_noop(&self) -> bool {
        self.containers.is_empty()
    }
}

/// One group as shown by `groups list` / `groups show`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupListing {
    pub name: String,
    pub description: String,
    pub containers: Vec<Container>,
}

/// Resolves groups against the live compose inventory and drives bulk start/stop.
pub struct GroupService {
    runtime: Arc<dyn ComposeRuntime>,
    groups_file: PathBuf,
}

impl GroupService {
    pub fn new(runtime: Arc<dyn ComposeRuntime>, groups_file: impl Into<PathBuf>) -> Self {
        Self {
            runtime,
            groups_file: groups_file.into(),
        }
    }

    fn load(&self) -> Result<GroupConfiguration, GroupError> {
        Ok(load_groups(&self.groups_file)?)
    }

    fn all_services(&self) -> Result<Vec<String>, GroupError> {
        self.runtime
            .list_all_services()
            .map_err(GroupError::orchestrator("get containers"))
    }

    fn running_services(&self) -> Result<Vec<String>, GroupError> {
        self.runtime
            .list_running_services()
            .map_err(GroupError::orchestrator("get running containers"))
    }

    /// Starts every declared service selected by `group_names`.
    pub fn enable(&self, group_names: &[String]) -> Result<OperationReport, GroupError> {
        let report = self.plan(BulkAction::Start, group_names)?;
        self.run(&report)?;
        Ok(report)
    }

    /// Stops every running service selected by `group_names`.
    pub fn disable(&self, group_names: &[String]) -> Result<OperationReport, GroupError> {
        let report = self.plan(BulkAction::Stop, group_names)?;
        self.run(&report)?;
        Ok(report)
    }

    /// Resolves `group_names` against a fresh inventory without touching any container.
    ///
    /// Start plans resolve against every declared service, stop plans only
    /// against running ones. Unknown names end up in `diagnostics`.
    pub fn plan(
        &self,
        action: BulkAction,
        group_names: &[String],
    ) -> Result<OperationReport, GroupError> {
        if group_names.is_empty() {
            return Err(GroupError::Usage);
        }

        let config = self.load()?;
        let inventory = match action {
            BulkAction::Start => self.all_services()?,
            BulkAction::Stop => self.running_services()?,
        };

        let mut groups = Vec::new();
        let mut diagnostics = Vec::new();
        let mut targets = BTreeSet::new();

        for name in group_names {
            let Some(group) = config.get(name) else {
                debug!("group '{}' not found, skipping", name);
                diagnostics.push(Diagnostic::UnknownGroup(name.clone()));
                continue;
            };

            let matched = group.resolve(&inventory);
            debug!("group '{}' matched {:?}", name, matched);
            targets.extend(matched);
            if !groups.contains(name) {
                groups.push(name.clone());
            }
        }

        Ok(OperationReport {
            action,
            groups,
            containers: targets.into_iter().collect(),
            diagnostics,
        })
    }

    /// Issues the single bulk start/stop for a plan. Empty plans never reach the orchestrator.
    pub fn run(&self, report: &OperationReport) -> Result<(), GroupError> {
        if report.is_noop() {
            info!("no containers found matching the specified groups");
            return Ok(());
        }

        info!(
            "{} containers: {}",
            report.action.verb(),
            report.containers.join(", ")
        );
        let result = match report.action {
            BulkAction::Start => self.runtime.start_services(&report.containers),
            BulkAction::Stop => self.runtime.stop_services(&report.containers),
        };
        result.map_err(GroupError::orchestrator(format!(
            "{} containers",
            report.action.verb()
        )))
    }

    /// Every configured group resolved against all services, annotated with state.
    pub fn list_groups(&self) -> Result<Vec<GroupListing>, GroupError> {
        let config = self.load()?;
        let all = self.all_services()?;
        let running: HashSet<String> = self.running_services()?.into_iter().collect();

        Ok(config
            .iter()
            .map(|(name, group)| GroupListing {
                name: name.clone(),
                description: group.description.clone(),
                containers: annotate(group.resolve(&all), &running),
            })
            .collect())
    }

    /// A single group resolved against all services. Unknown names are an error here.
    pub fn show_group(&self, name: &str) -> Result<GroupListing, GroupError> {
        let config = self.load()?;
        let group = config
            .get(name)
            .ok_or_else(|| GroupError::UnknownGroup(name.to_string()))?;

        let all = self.all_services()?;
        let running: HashSet<String> = self.running_services()?.into_iter().collect();

        Ok(GroupListing {
            name: name.to_string(),
            description: group.description.clone(),
            containers: annotate(group.resolve(&all), &running),
        })
    }

    /// Every declared service with its state, regardless of groups.
    pub fn status(&self) -> Result<Vec<Container>, GroupError> {
        let mut all = self.all_services()?;
        let running: HashSet<String> = self.running_services()?.into_iter().collect();

        all.sort();
        all.dedup();
        Ok(annotate(all, &running))
    }
}

fn annotate(names: Vec<String>, running: &HashSet<String>) -> Vec<Container> {
    names
        .into_iter()
        .map(|name| {
            let state = ContainerState::from_running(running.contains(&name));
            Container::new(name, state)
        })
        .collect()
}
