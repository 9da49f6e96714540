mod container;
pub mod group;
pub mod pattern;
pub mod traits;

pub use container::{Container, ContainerState};
pub use group::{GroupConfiguration, GroupDefinition};
pub use traits::ComposeRuntime;
