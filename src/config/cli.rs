use crate::adapters::sink::OutputFormat;
use crate::config::{AgentConfig, DeskConfig};
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "orderdesk")]
#[command(about = "Order desk: notify agents, quote delivery fees, place and cancel orders")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the delivery distance used for fee quotes
    #[arg(long)]
    pub distance: Option<u32>,

    /// Override the currency symbol shown with fees
    #[arg(long)]
    pub currency: Option<String>,

    /// Override the delivery agent roster
    #[arg(long, value_delimiter = ',')]
    pub agents: Vec<String>,

    /// Print notifications as JSON lines
    #[arg(long)]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,
}

impl CliConfig {
    /// Loads the config file (or defaults) and applies command line overrides.
    pub fn resolve(&self) -> Result<DeskConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path.display());
                DeskConfig::from_file(path)?
            }
            None => DeskConfig::default(),
        };

        // 應用命令列覆蓋設定
        if let Some(distance) = self.distance {
            config.desk.distance = distance;
        }
        if let Some(currency) = &self.currency {
            config.desk.currency = currency.clone();
        }
        if !self.agents.is_empty() {
            config.agents = self
                .agents
                .iter()
                .map(|name| AgentConfig {
                    name: name.trim().to_string(),
                })
                .collect();
        }

        Ok(config)
    }

    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}
