//! mcp-audit - Known MCP registry CLI

use clap::{Parser, Subcommand};
use mcp_audit::{get_registry, McpRecord, Registry, RegistrySource};

#[derive(Parser)]
#[command(name = "mcp-audit")]
#[command(about = "MCP Audit - identify and assess known MCP integrations")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Identify an MCP from an observed package name or endpoint URL
    Lookup {
        /// Observed source string (package identifier or network destination)
        source: String,

        /// Display-name hint to fall back on
        #[arg(long)]
        name: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show detailed info for a known MCP
    Info {
        /// Registry id (e.g. github)
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List known MCPs (default: all)
    List {
        /// Only MCPs from this provider (case-insensitive)
        #[arg(long)]
        provider: Option<String>,

        /// Only MCPs at this risk level (exact label)
        #[arg(long)]
        risk: Option<String>,

        /// Only verified MCPs
        #[arg(long)]
        verified: bool,

        /// Only remote MCPs with a known endpoint
        #[arg(long)]
        remote: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show risk level definitions
    Risks {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show MCP type definitions
    Types {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the resolved registry source (for debugging)
    Paths,
}

fn main() {
    let cli = Cli::parse();
    let debug = cli.debug;

    match cli.command {
        Commands::Paths => {
            match RegistrySource::resolve() {
                RegistrySource::Bundled => println!("Registry source: bundled"),
                RegistrySource::File(path) => println!("Registry source: {}", path.display()),
            }
            if let Some(path) = RegistrySource::user_override_path() {
                println!("User override:   {} (exists: {})", path.display(), path.exists());
            }
        }
        Commands::Lookup { source, name, json } => {
            let registry = load_or_exit(debug);
            match registry.lookup(&source, name.as_deref()) {
                Some(mcp) => {
                    if json {
                        println!("{}", serde_json::to_string_pretty(mcp).unwrap());
                    } else {
                        print_record(mcp, registry);
                    }
                }
                None => {
                    eprintln!("No known MCP matches: {}", source);
                    std::process::exit(1);
                }
            }
        }
        Commands::Info { id, json } => {
            let registry = load_or_exit(debug);
            match registry.get(&id) {
                Some(mcp) => {
                    if json {
                        println!("{}", serde_json::to_string_pretty(mcp).unwrap());
                    } else {
                        print_record(mcp, registry);
                    }
                }
                None => {
                    eprintln!("MCP not found in registry: {}", id);
                    std::process::exit(1);
                }
            }
        }
        Commands::List { provider, risk, verified, remote, json } => {
            let registry = load_or_exit(debug);
            let records: Vec<&McpRecord> = registry
                .mcps
                .iter()
                .filter(|m| provider.as_deref().map_or(true, |p| m.provider.eq_ignore_ascii_case(p)))
                .filter(|m| risk.as_deref().map_or(true, |r| m.risk_level == r))
                .filter(|m| !verified || m.verified)
                .filter(|m| !remote || m.is_remote())
                .collect();

            if json {
                println!("{}", serde_json::to_string_pretty(&records).unwrap());
            } else {
                if records.is_empty() {
                    println!("No known MCPs match the given filters.");
                    return;
                }
                print_list_table(&records);
            }
        }
        Commands::Risks { json } => {
            let registry = load_or_exit(debug);
            if json {
                println!("{}", serde_json::to_string_pretty(&registry.risk_definitions).unwrap());
            } else {
                print_definitions("RISK", &registry.risk_definitions);
            }
        }
        Commands::Types { json } => {
            let registry = load_or_exit(debug);
            if json {
                println!("{}", serde_json::to_string_pretty(&registry.type_definitions).unwrap());
            } else {
                print_definitions("TYPE", &registry.type_definitions);
            }
        }
    }
}

fn load_or_exit(debug: bool) -> &'static Registry {
    match get_registry() {
        Ok(registry) => {
            if debug {
                eprintln!("[debug] Registry has {} MCPs", registry.mcps.len());
            }
            registry
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_record(mcp: &McpRecord, registry: &Registry) {
    const INDENT: &str = "        ";

    println!("{}", mcp.id);
    println!("{}Name:      {}", INDENT, mcp.name);
    println!("{}Package:   {}", INDENT, mcp.package);
    println!("{}Provider:  {}", INDENT, mcp.provider);
    println!(
        "{}Risk:      {} ({})",
        INDENT,
        mcp.risk_level,
        registry.risk_definition(&mcp.risk_level)
    );
    println!(
        "{}Type:      {} ({})",
        INDENT,
        mcp.mcp_type,
        registry.type_definition(&mcp.mcp_type)
    );
    if let Some(endpoint) = mcp.endpoint.as_deref().filter(|e| !e.is_empty()) {
        println!("{}Endpoint:  {}", INDENT, endpoint);
    }
    println!("{}Verified:  {}", INDENT, if mcp.verified { "yes" } else { "no" });
}

fn print_list_table(records: &[&McpRecord]) {
    const INDENT: &str = "        ";

    for mcp in records {
        println!("{}", mcp.id);
        println!("{}Name:      {}", INDENT, mcp.name);
        println!("{}Provider:  {}", INDENT, mcp.provider);
        println!("{}Risk:      {}", INDENT, mcp.risk_level);
        println!("{}Type:      {}", INDENT, mcp.mcp_type);
        if let Some(endpoint) = mcp.endpoint.as_deref().filter(|e| !e.is_empty()) {
            println!("{}Endpoint:  {}", INDENT, endpoint);
        }
        println!("{}Verified:  {}", INDENT, if mcp.verified { "yes" } else { "no" });
        println!();
    }
}

fn print_definitions(label: &str, definitions: &std::collections::HashMap<String, String>) {
    if definitions.is_empty() {
        println!("No definitions in registry.");
        return;
    }
    let mut entries: Vec<_> = definitions.iter().collect();
    entries.sort();

    println!("{:<14} {}", label, "DEFINITION");
    println!("{}", "-".repeat(80));
    for (key, description) in entries {
        println!("{:<14} {}", key, description);
    }
}
