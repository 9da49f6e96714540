use anyhow::Result;
use std::fmt::Debug;

/// The slice of the container orchestrator the group engine depends on.
///
/// Inventory is always queried fresh. Bulk commands name every target in a
/// single invocation.
pub trait ComposeRuntime: Send + Sync + Debug {
    /// Every service declared in the compose file, running or not
    fn list_all_services(&self) -> Result<Vec<String>>;

    /// Services whose containers are currently running
    fn list_running_services(&self) -> Result<Vec<String>>;

    /// Start all named services with one orchestrator call
    fn start_services(&self, names: &[String]) -> Result<()>;

    /// Stop all named services with one orchestrator call
    fn stop_services(&self, names: &[String]) -> Result<()>;
}
