mod group_service;

pub use group_service::{BulkAction, GroupListing, GroupService, OperationReport};
