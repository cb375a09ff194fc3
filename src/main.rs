use clap::Parser;
use cluster_host_resolver::{
    candidate_hosts, ClientConfig, FixedInCluster, HostResolver, JsonConfig,
};
use tracing::Level;

/// Print the host a client should contact for the configured cluster.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Raw client configuration as a JSON string.
    config: String,
    /// Override the current context (optional)
    #[arg(long)]
    context: Option<String>,
    /// Behave as if running inside the cluster with this host (optional)
    #[arg(long)]
    in_cluster_host: Option<String>,
    /// List every candidate host instead of resolving one
    #[arg(long, conflicts_with_all = ["context", "in_cluster_host", "raw"])]
    candidates: bool,
    /// Also print the raw configuration
    #[arg(long)]
    raw: bool,
    /// Debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    // Parse CLI arguments.
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    let mut cfg = JsonConfig::new(args.config.as_str());

    if args.candidates {
        let raw = match cfg.raw_config() {
            Ok(raw) => raw,
            Err(e) => {
                eprintln!("Invalid configuration: {e}");
                std::process::exit(1);
            }
        };
        for host in candidate_hosts(&raw) {
            println!("{host}");
        }
        return;
    }

    if let Some(name) = args.context {
        cfg = cfg.with_current_context(name);
    }

    let resolver = match args.in_cluster_host {
        Some(host) => HostResolver::new(FixedInCluster(host)),
        None => HostResolver::default(),
    };

    // The configuration is only read if the in-cluster probe does not fire.
    match resolver.resolve(&cfg) {
        Ok(out) => {
            println!("{}", out.host);
            if args.raw {
                match serde_json::to_string_pretty(&out.raw) {
                    Ok(s) => println!("{s}"),
                    Err(e) => {
                        eprintln!("Could not render configuration: {e}");
                        std::process::exit(1);
                    }
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
