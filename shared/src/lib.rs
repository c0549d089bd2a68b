pub mod dto {
    pub mod bot;
    pub mod common;
}

pub mod error;

// Re-export commonly used items
pub use error::{SharedError, Result};

// Re-export DTOs
pub use dto::{
    bot::{NluConfigurationDto, BotExportDto, BotImportSummaryDto},
    common::ErrorResponse,
};
