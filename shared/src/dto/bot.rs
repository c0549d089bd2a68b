use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

fn default_pipeline() -> String {
    "traditional".to_string()
}

/// NLU configuration attached to a bot.
///
/// Only `pipeline` is typed; every other key the backend sends is kept in
/// `settings` and written back unchanged on update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NluConfigurationDto {
    #[serde(default = "default_pipeline")]
    pub pipeline: String,
    #[serde(flatten)]
    pub settings: Map<String, Value>,
}

impl Default for NluConfigurationDto {
    fn default() -> Self {
        Self {
            pipeline: default_pipeline(),
            settings: Map::new(),
        }
    }
}

/// Intents and entities exported from a bot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BotExportDto {
    #[serde(default)]
    pub intents: Vec<Value>,
    #[serde(default)]
    pub entities: Vec<Value>,
}

impl BotExportDto {
    pub fn is_empty(&self) -> bool {
        self.intents.is_empty() && self.entities.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotImportSummaryDto {
    pub num_intents_created: usize,
    pub num_entities_created: usize,
}
