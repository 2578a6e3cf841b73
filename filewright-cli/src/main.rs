use clap::{Parser, Subcommand};
use filewright_core::{FilewrightConfig, Tool, Transport};
use filewright_mcp::{FilewrightServer, serve_http};
use filewright_tools::{InMemoryToolRegistry, ToolRegistry};
use std::net::SocketAddr;
use std::path::PathBuf;

mod logging;

use logging::{LogFormat, init_tracing};

#[derive(Parser, Debug)]
#[command(name = "filewright", version)]
#[command(about = "Filewright - file-system tools over the Model Context Protocol")]
struct Cli {
    /// Log output format (logs are written to stderr)
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Json)]
    log_format: LogFormat,

    /// Log level filter; RUST_LOG overrides it
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// TOML configuration file
    #[arg(long, global = true, env = "FILEWRIGHT_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the MCP server
    Serve {
        /// Transport: stdio or http
        #[arg(long)]
        transport: Option<Transport>,
        /// Listen address for the http transport
        #[arg(long)]
        bind: Option<SocketAddr>,
    },
    /// Run one tool locally and print its output
    Call {
        /// Tool name, e.g. find_files
        tool: String,
        /// Tool arguments as a JSON object
        #[arg(default_value = "{}")]
        args: String,
    },
    /// List the registered tools
    Tools {
        /// Print names, descriptions and argument schemas as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_format, &cli.log_level);

    let mut config = match FilewrightConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load configuration");
            std::process::exit(1);
        }
    };

    match cli.command {
        Commands::Serve { transport, bind } => {
            if let Some(transport) = transport {
                config.server.transport = transport;
            }
            if let Some(bind) = bind {
                config.server.bind = bind;
            }

            let server = FilewrightServer::from_config(&config);
            let result = match config.server.transport {
                Transport::Stdio => server.serve_stdio().await,
                Transport::Http => serve_http(server, config.server.bind).await,
            };

            if let Err(e) = result {
                tracing::error!(error = %e, transport = %config.server.transport, "Server failed");
                std::process::exit(1);
            }
        }
        Commands::Call { tool, args } => {
            let registry = InMemoryToolRegistry::standard(&config);
            match registry.try_dispatch(&tool, args) {
                Ok(result) => match result.into_result() {
                    Ok(output) => println!("{}", output),
                    Err(reason) => {
                        tracing::error!(tool = %tool, category = reason.category(), "Tool failed");
                        eprintln!("{}", reason);
                        std::process::exit(1);
                    }
                },
                Err(e) => {
                    tracing::error!(tool = %tool, available = ?registry.tool_names(), "Unknown tool");
                    eprintln!("{}", e);
                    std::process::exit(1);
                }
            }
        }
        Commands::Tools { json } => {
            let registry = InMemoryToolRegistry::standard(&config);
            if json {
                let listing: Vec<serde_json::Value> = registry.tools().map(|tool| describe(tool.as_ref())).collect();
                match serde_json::to_string_pretty(&listing) {
                    Ok(text) => println!("{}", text),
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to serialize tool listing");
                        std::process::exit(1);
                    }
                }
            } else {
                for tool in registry.tools() {
                    println!("{:<18} {}", tool.name(), tool.description());
                }
            }
        }
    }
}

fn describe(tool: &dyn Tool) -> serde_json::Value {
    serde_json::json!({
        "name": tool.name(),
        "description": tool.description(),
        "input_schema": tool.input_schema(),
    })
}
