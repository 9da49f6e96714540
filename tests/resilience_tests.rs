use anyhow::Result;
use stackctl::domain::ContainerState;
use stackctl::test_support::MockRuntime;
use stackctl::{ConfigError, GroupError, GroupService};
use std::fs;
use std::sync::Arc;

fn service_with(yaml: &str) -> Result<(tempfile::TempDir, GroupService, Arc<MockRuntime>)> {
    let temp_dir = tempfile::tempdir()?;
    let groups_file = temp_dir.path().join("container-groups.yml");
    fs::write(&groups_file, yaml)?;

    let mock = Arc::new(MockRuntime::new());
    let service = GroupService::new(mock.clone(), groups_file);
    Ok((temp_dir, service, mock))
}

#[test]
fn test_failed_start_is_reported_not_retried() -> Result<()> {
    let (_dir, service, mock) = service_with("groups:\n  all:\n    patterns: ['*']\n")?;
    mock.add_service("api", ContainerState::Stopped);
    mock.add_service("db", ContainerState::Stopped);
    mock.set_fail_on("start");

    let err = service.enable(&["all".to_string()]).unwrap_err();
    assert!(matches!(err, GroupError::Orchestrator { .. }));
    assert!(err.to_string().contains("Mock failure on: start"));

    let starts = mock
        .get_commands()
        .iter()
        .filter(|c| c.starts_with("start:"))
        .count();
    assert_eq!(starts, 1, "bulk start must not be retried");

    Ok(())
}

#[test]
fn test_failed_stop_is_reported() -> Result<()> {
    let (_dir, service, mock) = service_with("groups:\n  all:\n    patterns: ['*']\n")?;
    mock.add_service("api", ContainerState::Running);
    mock.set_fail_on("stop");

    let err = service.disable(&["all".to_string()]).unwrap_err();
    assert!(err.to_string().contains("failed to stop containers"));

    Ok(())
}

#[test]
fn test_listing_fails_when_inventory_unavailable() -> Result<()> {
    let (_dir, service, mock) = service_with("groups:\n  all:\n    patterns: ['*']\n")?;
    mock.set_fail_on("ps");

    let err = service.list_groups().unwrap_err();
    assert!(matches!(err, GroupError::Orchestrator { .. }));
    assert!(err.to_string().contains("failed to get containers"));

    Ok(())
}

#[test]
fn test_malformed_config_never_reaches_orchestrator() -> Result<()> {
    let (_dir, service, mock) = service_with("groups:\n  all:\n    patterns: [unterminated\n")?;

    for result in [
        service.enable(&["all".to_string()]).map(|_| ()),
        service.disable(&["all".to_string()]).map(|_| ()),
        service.list_groups().map(|_| ()),
    ] {
        let err = result.unwrap_err();
        assert!(matches!(
            err,
            GroupError::Config(ConfigError::Malformed { .. })
        ));
    }
    assert!(mock.get_commands().is_empty());

    Ok(())
}

#[test]
fn test_empty_config_file_lists_nothing() -> Result<()> {
    let (_dir, service, mock) = service_with("")?;
    mock.add_service("api", ContainerState::Running);

    assert!(service.list_groups()?.is_empty());

    let report = service.enable(&["api".to_string()])?;
    assert!(report.is_noop());
    assert_eq!(report.diagnostics.len(), 1);

    Ok(())
}

#[test]
fn test_inventory_is_queried_fresh_each_call() -> Result<()> {
    let (_dir, service, mock) = service_with("groups:\n  web:\n    patterns: ['web*']\n")?;
    mock.add_service("web1", ContainerState::Stopped);

    let first = service.enable(&["web".to_string()])?;
    assert_eq!(first.containers, vec!["web1"]);

    mock.add_service("web2", ContainerState::Stopped);
    let second = service.enable(&["web".to_string()])?;
    assert_eq!(second.containers, vec!["web1", "web2"]);

    let ps_calls = mock
        .get_commands()
        .iter()
        .filter(|c| c.as_str() == "ps:all")
        .count();
    assert_eq!(ps_calls, 2);

    Ok(())
}
