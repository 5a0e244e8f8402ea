use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod commands;

use commands::{cloudflare_account, cloudflare_deploy, serve};

#[derive(Parser)]
#[command(name = "leafscan")]
#[command(about = "LeafScan leaf disease detection service with CLI tools and web server")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:8080)
        #[arg(short, long, env = "BIND_ADDRESS", default_value = "0.0.0.0:3000")]
        bind_address: String,
    },
    /// Cloudflare tunnel helpers for exposing the service publicly
    #[command(subcommand)]
    Cloudflare(CloudflareCommands),
}

#[derive(Subcommand)]
pub enum CloudflareCommands {
    /// List the accounts accessible with the configured API token
    Account {
        /// Cloudflare API token with Workers permissions
        #[arg(long, env = "CLOUDFLARE_API_TOKEN", hide_env_values = true)]
        api_token: String,
    },
    /// Upload a Worker script that proxies traffic to this service
    Deploy {
        /// Cloudflare API token with Workers permissions
        #[arg(long, env = "CLOUDFLARE_API_TOKEN", hide_env_values = true)]
        api_token: String,

        /// Account to deploy into; defaults to the token's first account
        #[arg(long, env = "CLOUDFLARE_ACCOUNT_ID")]
        account_id: Option<String>,

        /// Path to the Worker script to upload
        #[arg(short, long)]
        script: String,

        /// Name of the Worker
        #[arg(short, long, default_value = "leafscan-tunnel")]
        name: String,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve { bind_address } => {
                serve(&bind_address).await?;
            }
            Commands::Cloudflare(CloudflareCommands::Account { api_token }) => {
                cloudflare_account(api_token).await?;
            }
            Commands::Cloudflare(CloudflareCommands::Deploy {
                api_token,
                account_id,
                script,
                name,
            }) => {
                cloudflare_deploy(api_token, account_id, &script, &name).await?;
            }
        }
        Ok(())
    }
}
