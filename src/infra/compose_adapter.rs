use crate::domain::ComposeRuntime;
use crate::infra::config::Settings;
use anyhow::{Context, Result, bail};
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};
use tracing::debug;

/// Drives `docker compose` (or a compatible binary) against one compose file.
#[derive(Debug, Clone)]
pub struct ComposeAdapter {
    bin: String,
    compose_file: PathBuf,
}

impl ComposeAdapter {
    pub fn new(bin: impl Into<String>, compose_file: impl Into<PathBuf>) -> Self {
        Self {
            bin: bin.into(),
            compose_file: compose_file.into(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(&settings.compose_bin, &settings.compose_file)
    }

    fn command<I, S>(&self, args: I) -> Command
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let mut cmd = Command::new(&self.bin);
        cmd.arg("compose").arg("-f").arg(&self.compose_file).args(args);
        cmd
    }

    fn services(&self, extra: &[&str], context: &str) -> Result<Vec<String>> {
        let mut args = vec!["ps", "--services"];
        args.extend_from_slice(extra);
        debug!("{} compose {:?}", self.bin, args);

        let output = self
            .command(args)
            .stdin(Stdio::null())
            .output()
            .with_context(|| format!("{context} ({} compose)", self.bin))?;

        if !output.status.success() {
            bail!(
                "{} compose ps returned status {:?} ({context}): {}",
                self.bin,
                output.status.code(),
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        Ok(parse_service_list(&String::from_utf8_lossy(&output.stdout)))
    }

    fn bulk(&self, action: &str, names: &[String]) -> Result<()> {
        let mut args: Vec<OsString> = vec![action.into()];
        args.extend(names.iter().map(OsString::from));
        debug!("{} compose {} {}", self.bin, action, names.join(" "));

        let context = format!("{action} {}", names.join(", "));
        let status = self
            .command(args)
            .status()
            .with_context(|| format!("running {} compose {context}", self.bin))?;

        ensure_success(status, &self.bin, &context)
    }
}

impl ComposeRuntime for ComposeAdapter {
    fn list_all_services(&self) -> Result<Vec<String>> {
        self.services(&[], "listing services")
    }

    fn list_running_services(&self) -> Result<Vec<String>> {
        self.services(&["--filter", "status=running"], "listing running services")
    }

    fn start_services(&self, names: &[String]) -> Result<()> {
        self.bulk("start", names)
    }

    fn stop_services(&self, names: &[String]) -> Result<()> {
        self.bulk("stop", names)
    }
}

/// One service per line; surrounding whitespace and blank lines are dropped.
fn parse_service_list(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn ensure_success(status: ExitStatus, bin: &str, context: &str) -> Result<()> {
    if status.success() {
        return Ok(());
    }

    bail!("{bin} compose returned status {:?} ({context})", status.code())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_newline_delimited_services() {
        let out = "bitcoind\n  electrs \n\n\nethereum-localnet\n";
        assert_eq!(
            parse_service_list(out),
            vec!["bitcoind", "electrs", "ethereum-localnet"]
        );
    }

    #[test]
    fn empty_output_means_no_services() {
        assert!(parse_service_list("").is_empty());
        assert!(parse_service_list("\n \n").is_empty());
    }

    #[test]
    fn handles_crlf_output() {
        assert_eq!(parse_service_list("a\r\nb\r\n"), vec!["a", "b"]);
    }

    #[test]
    fn builds_compose_invocation() {
        let adapter = ComposeAdapter::new("docker", "/tmp/stack/docker-compose.yml");
        let cmd = adapter.command(["start", "redis", "postgres"]);

        assert_eq!(cmd.get_program(), "docker");
        let args: Vec<_> = cmd
            .get_args()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            args,
            vec![
                "compose",
                "-f",
                "/tmp/stack/docker-compose.yml",
                "start",
                "redis",
                "postgres"
            ]
        );
    }

    #[test]
    fn missing_binary_fails_queries() {
        let adapter = ComposeAdapter::new(
            "stackctl-test-no-such-binary",
            "/tmp/stack/docker-compose.yml",
        );

        let err = adapter.list_all_services().unwrap_err();
        assert!(format!("{err:#}").contains("listing services"));
        assert!(adapter.start_services(&["redis".to_string()]).is_err());
    }

    #[test]
    fn nonzero_exit_carries_stderr() {
        // `sh compose -f ...` tries to run a script named "compose" and fails.
        let adapter = ComposeAdapter::new("sh", "/nonexistent/docker-compose.yml");

        let msg = format!("{:#}", adapter.list_all_services().unwrap_err());
        assert!(msg.contains("sh compose ps returned status"), "{msg}");
        assert!(msg.contains("listing services"), "{msg}");
        assert!(msg.contains("No such file"), "{msg}");

        let msg = format!("{:#}", adapter.list_running_services().unwrap_err());
        assert!(msg.contains("listing running services"), "{msg}");
    }

    #[test]
    fn nonzero_exit_fails_bulk_actions() {
        let adapter = ComposeAdapter::new("sh", "/nonexistent/docker-compose.yml");

        let msg = format!(
            "{:#}",
            adapter.stop_services(&["redis".to_string()]).unwrap_err()
        );
        assert!(msg.contains("sh compose returned status"), "{msg}");
        assert!(msg.contains("stop redis"), "{msg}");
    }
}
