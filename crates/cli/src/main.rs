use clap::Parser;
use hostlist_domain::CliOverrides;
use tracing::{error, info, warn};

mod bootstrap;
mod di;

#[derive(Parser)]
#[command(name = "hostlist")]
#[command(version)]
#[command(about = "Reconcile a leaf switch's MAC table against ARP and DNS to list attached hosts")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Leaf (access) switch address
    #[arg(long, value_name = "HOST")]
    leaf: Option<String>,

    /// Router address for VLANs not routed on the leaf
    #[arg(long, value_name = "HOST")]
    router: Option<String>,

    /// Directory the report files are written to
    #[arg(short = 'o', long, value_name = "DIR")]
    output_dir: Option<String>,

    /// Print reports to stdout instead of writing files
    #[arg(long)]
    stdout: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        leaf_host: cli.leaf.clone(),
        router_host: cli.router.clone(),
        output_dir: cli.output_dir.clone(),
        stdout: cli.stdout,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config)?;

    info!(
        leaf = %config.leaf.host,
        router = %config.router.host,
        "Starting hostlist v{}",
        env!("CARGO_PKG_VERSION")
    );

    let devices = di::Devices::new(&config)?;
    let use_cases = di::UseCases::new(&config, &devices)?;

    let report = match use_cases.discover_hosts.execute().await {
        Ok(report) => report,
        Err(e) => {
            error!(error = %e, "Discovery run failed");
            std::process::exit(1);
        }
    };

    for failure in &report.failed_vlans {
        warn!(vlan = %failure.vlan, error = %failure.error, "VLAN skipped");
    }

    info!(
        hostname = %report.hostname,
        local_hosts = report.local_hosts,
        remote_hosts = report.remote_hosts,
        resolved = report.resolved_addresses,
        unresolved = report.unresolved.len(),
        named = report.named_count(),
        unnamed = report.unnamed_count(),
        failed_vlans = report.failed_vlans.len(),
        "Discovery complete"
    );

    Ok(())
}
