use anyhow::Result;
use clap::{Parser, Subcommand};
use stackctl::cli::{self, GroupsCommand};
use stackctl::infra::config::default_config_dir;
use stackctl::{Settings, SettingsOverrides};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "stackctl",
    version,
    about = "Start and stop groups of local compose services"
)]
struct Cli {
    /// Settings directory holding stackctl.toml (default: ~/.config/stackctl)
    #[arg(
        long,
        global = true,
        env = "STACKCTL_CONFIG_DIR",
        default_value_os_t = default_config_dir()
    )]
    config_dir: PathBuf,

    /// Compose file to operate on (default: ~/.stackctl/docker-compose.yml)
    #[arg(long, global = true, env = "STACKCTL_COMPOSE_FILE")]
    compose_file: Option<PathBuf>,

    /// Group definitions (default: container-groups.yml next to the compose file)
    #[arg(long, global = true, env = "STACKCTL_GROUPS_FILE")]
    groups_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage container groups (list, enable, disable, show)
    Groups(GroupsCommand),
    /// Show every compose service and whether it is running
    Status,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "stackctl=debug" } else { "stackctl=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(args.verbose);

    let settings = Settings::load(
        &args.config_dir,
        SettingsOverrides {
            compose_file: args.compose_file,
            groups_file: args.groups_file,
        },
    )?;

    match args.command {
        Commands::Groups(cmd) => cli::groups::run(cmd, &settings),
        Commands::Status => cli::status::run(&settings),
    }
}
