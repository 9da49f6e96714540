pub mod groups;
pub mod report;
pub mod status;

pub use groups::{GroupsAction, GroupsCommand};
