pub mod cli;
pub mod domain;
pub mod error;
pub mod infra;
pub mod services;

// Make test_support available for integration tests
pub mod test_support;

pub use domain::{ComposeRuntime, Container, ContainerState, GroupConfiguration, GroupDefinition};
pub use error::{ConfigError, Diagnostic, GroupError};
pub use infra::{ComposeAdapter, Settings, SettingsOverrides};
pub use services::{BulkAction, GroupListing, GroupService, OperationReport};
