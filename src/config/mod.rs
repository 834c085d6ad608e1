#[cfg(feature = "cli")]
pub mod cli;

use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_list, validate_non_empty_string, Validate};
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_DISTANCE: u32 = 5;
pub const DEFAULT_CURRENCY: &str = "₹";
pub const DEFAULT_AGENTS: [&str; 2] = ["Agent A", "Agent B"];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DeskConfig {
    pub desk: DeskSection,
    pub agents: Vec<AgentConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DeskSection {
    /// Delivery distance used for every fee quote.
    pub distance: u32,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AgentConfig {
    pub name: String,
}

impl Default for DeskSection {
    fn default() -> Self {
        Self {
            distance: DEFAULT_DISTANCE,
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            desk: DeskSection::default(),
            agents: DEFAULT_AGENTS
                .iter()
                .map(|name| AgentConfig {
                    name: name.to_string(),
                })
                .collect(),
        }
    }
}

impl DeskConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn agent_names(&self) -> impl Iterator<Item = &str> {
        self.agents.iter().map(|agent| agent.name.as_str())
    }
}

impl Validate for DeskConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("desk.currency", &self.desk.currency)?;
        validate_non_empty_list("agents", &self.agents)?;
        for agent in &self.agents {
            validate_non_empty_string("agents.name", &agent.name)?;
        }
        Ok(())
    }
}
