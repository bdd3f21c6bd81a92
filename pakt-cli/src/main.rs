//! CLI for the pakt engine control-plane API.

#![allow(
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::missing_docs_in_private_items
)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pakt::{ENV_API_DIR, ENV_API_SOCK, Provider, ProviderConfig};
use pakt_proto::Response;

#[derive(Parser)]
#[command(name = "paktctl", version, about = "Control-plane client for the pakt packet engine")]
struct Cli {
    /// Engine API socket path.
    #[arg(long, env = ENV_API_SOCK)]
    socket: PathBuf,

    /// Directory searched for *.api.json descriptors.
    #[arg(long, env = ENV_API_DIR)]
    api_dir: PathBuf,

    /// Client name shown in the engine's client table.
    #[arg(long, default_value = "paktctl")]
    name: String,

    /// Session namespace prefix.
    #[arg(long, default_value = "pakt")]
    prefix: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the engine version.
    Version,

    /// Execute one line of inband CLI text.
    Exec {
        /// CLI text to run.
        line: String,
    },

    /// List interfaces.
    #[command(visible_alias = "if")]
    Interfaces {
        /// Only interfaces whose name contains this substring.
        #[arg(long)]
        filter: Option<String>,
    },

    /// List bridge domains.
    #[command(visible_alias = "bd")]
    Bridges {
        /// Bridge domain to show (0 = all).
        #[arg(long, default_value_t = 0)]
        bd_id: u32,
    },

    /// List the operations advertised by the descriptor catalog.
    Catalog,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    if let Err(e) = Cli::parse().dispatch() {
        eprintln!("paktctl: {e:#}");
        std::process::exit(1);
    }
}

impl Cli {
    fn dispatch(self) -> Result<()> {
        let config = ProviderConfig::new(&self.api_dir, &self.socket);
        let mut api = Provider::new(self.name, self.prefix, config)
            .context("loading the descriptor catalog")?;

        // The catalog listing needs no live engine.
        if let Command::Catalog = self.command {
            for name in api.catalog().names() {
                println!("{name}");
            }
            return Ok(());
        }

        api.connect().context("connecting to the engine")?;
        let result = run(&mut api, self.command);
        let _ = api.disconnect();
        result
    }
}

fn run(api: &mut Provider, command: Command) -> Result<()> {
    match command {
        Command::Version => match api.show_version()? {
            Response::Version {
                program,
                version,
                build_date,
                ..
            } => println!("{program} {version} ({build_date})"),
            other => println!("{other:?}"),
        },
        Command::Exec { line } => {
            if let Some(output) = api.cli(&line)? {
                println!("{output}");
            }
        }
        Command::Interfaces { filter } => match api.sw_interface_dump(filter.as_deref())? {
            Response::InterfaceDetails(details) => {
                println!("{:<6} {:<24} {:<6} {:<6}", "IDX", "NAME", "ADMIN", "LINK");
                for d in details {
                    println!(
                        "{:<6} {:<24} {:<6} {:<6}",
                        d.sw_if_index,
                        d.interface_name,
                        state(d.admin_up_down),
                        state(d.link_up_down)
                    );
                }
            }
            other => println!("{other:?}"),
        },
        Command::Bridges { bd_id } => match api.bridge_domain_dump(bd_id)? {
            Response::BridgeDomainDetails(details) => {
                println!(
                    "{:<8} {:<6} {:<8} {:<6} {:<9} {:<9} {:<8}",
                    "BD", "LEARN", "FORWARD", "FLOOD", "UU-FLOOD", "ARP-TERM", "MEMBERS"
                );
                for d in details {
                    println!(
                        "{:<8} {:<6} {:<8} {:<6} {:<9} {:<9} {:<8}",
                        d.bd_id, d.learn, d.forward, d.flood, d.uu_flood, d.arp_term, d.n_sw_ifs
                    );
                }
            }
            other => println!("{other:?}"),
        },
        Command::Catalog => {}
    }
    Ok(())
}

/// Renders a 0/1 state flag.
const fn state(flag: u8) -> &'static str {
    if flag == 1 { "up" } else { "down" }
}
