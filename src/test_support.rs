use crate::domain::{ComposeRuntime, ContainerState};
use anyhow::{Result, bail};
use std::collections::BTreeMap;
use std::sync::RwLock;

/// In-memory compose project.
///
/// Every call is recorded as a string (`ps:all`, `ps:running`,
/// `start:a,b`, `stop:c`) so tests can assert on exactly what would have
/// been sent to the orchestrator.
#[derive(Debug)]
pub struct MockRuntime {
    services: RwLock<BTreeMap<String, ContainerState>>,
    commands: RwLock<Vec<String>>,
    fail_on: RwLock<Option<String>>,
}

impl MockRuntime {
    pub fn new() -> Self {
        Self {
            services: RwLock::new(BTreeMap::new()),
            commands: RwLock::new(Vec::new()),
            fail_on: RwLock::new(None),
        }
    }

    pub fn add_service(&self, name: &str, state: ContainerState) {
        self.services
            .write()
            .unwrap()
            .insert(name.to_string(), state);
    }

    /// Makes `ps`, `start` or `stop` fail from now on
    pub fn set_fail_on(&self, operation: &str) {
        *self.fail_on.write().unwrap() = Some(operation.to_string());
    }

    pub fn get_commands(&self) -> Vec<String> {
        self.commands.read().unwrap().clone()
    }

    pub fn get_state(&self, name: &str) -> Option<ContainerState> {
        self.services.read().unwrap().get(name).copied()
    }

    fn record_command(&self, cmd: &str) {
        self.commands.write().unwrap().push(cmd.to_string());
    }

    fn check_fail(&self, operation: &str) -> Result<()> {
        if let Some(ref fail_on) = *self.fail_on.read().unwrap() {
            if fail_on == operation {
                bail!("Mock failure on: {}", operation);
            }
        }
        Ok(())
    }

    fn set_state(&self, names: &[String], state: ContainerState) {
        let mut services = self.services.write().unwrap();
        for name in names {
            if let Some(current) = services.get_mut(name) {
                *current = state;
            }
        }
    }
}

impl Default for MockRuntime {
    fn default() -> Self {
        Self::new()
    }
}

impl ComposeRuntime for MockRuntime {
    fn list_all_services(&self) -> Result<Vec<String>> {
        self.record_command("ps:all");
        self.check_fail("ps")?;

        Ok(self.services.read().unwrap().keys().cloned().collect())
    }

    fn list_running_services(&self) -> Result<Vec<String>> {
        self.record_command("ps:running");
        self.check_fail("ps")?;

        Ok(self
            .services
            .read()
            .unwrap()
            .iter()
            .filter(|(_, state)| **state == ContainerState::Running)
            .map(|(name, _)| name.clone())
            .collect())
    }

    fn start_services(&self, names: &[String]) -> Result<()> {
        self.record_command(&format!("start:{}", names.join(",")));
        self.check_fail("start")?;

        self.set_state(names, ContainerState::Running);
        Ok(())
    }

    fn stop_services(&self, names: &[String]) -> Result<()> {
        self.record_command(&format!("stop:{}", names.join(",")));
        self.check_fail("stop")?;

        self.set_state(names, ContainerState::Stopped);
        Ok(())
    }
}
