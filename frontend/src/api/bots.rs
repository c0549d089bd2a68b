use std::fmt::Display;

use gloo_net::http::Response;
use log::debug;
use serde::de::DeserializeOwned;
use shared::{
    BotExportDto, BotImportSummaryDto, ErrorResponse, NluConfigurationDto, Result, SharedError,
};

use crate::api::utils::{admin_get, admin_post, admin_put};
use crate::api::AdminResource;

/// Builds `<base>bots/<name>/<action>`, encoding the bot name.
pub fn bot_url(name: &str, action: &str) -> String {
    format!("{}/{}", AdminResource::Bots.item_url(name), action)
}

/// Picks the error for a non-success status, preferring the backend's detail message.
pub fn error_from_body(status: u16, body: Option<ErrorResponse>) -> SharedError {
    let message = match body {
        Some(body) => body.message(),
        None => format!("HTTP {}", status),
    };
    SharedError::from_status(status, message)
}

/// The request never produced a response.
pub fn transport_error(context: &str, err: impl Display) -> SharedError {
    SharedError::Network(format!("{}: {}", context, err))
}

/// A request or response body could not be (de)serialized.
pub fn decode_error(context: &str, err: impl Display) -> SharedError {
    SharedError::Conversion(format!("{}: {}", context, err))
}

async fn error_from_response(response: Response) -> SharedError {
    let status = response.status();
    let body = response.json::<ErrorResponse>().await.ok();
    error_from_body(status, body)
}

async fn parse_response<T: DeserializeOwned>(response: Response, what: &str) -> Result<T> {
    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    response
        .json::<T>()
        .await
        .map_err(|e| decode_error(&format!("Failed to parse {} response", what), e))
}

pub async fn get_nlu_config(name: &str) -> Result<NluConfigurationDto> {
    debug!("Fetching NLU config for bot: {}", name);

    let response = admin_get(&bot_url(name, "config"))
        .send()
        .await
        .map_err(|e| transport_error("Failed to fetch NLU config", e))?;

    let config: NluConfigurationDto = parse_response(response, "NLU config").await?;
    debug!("Bot {} uses pipeline {}", name, config.pipeline);
    Ok(config)
}

pub async fn update_nlu_config(name: &str, config: &NluConfigurationDto) -> Result<()> {
    debug!("Updating NLU config for bot: {}", name);

    let response = admin_put(&bot_url(name, "config"))
        .json(config)
        .map_err(|e| decode_error("Failed to serialize NLU config", e))?
        .send()
        .await
        .map_err(|e| transport_error("Failed to update NLU config", e))?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    debug!("Successfully updated NLU config for bot: {}", name);
    Ok(())
}

pub async fn export_bot(name: &str) -> Result<BotExportDto> {
    debug!("Exporting bot: {}", name);

    let response = admin_get(&bot_url(name, "export"))
        .send()
        .await
        .map_err(|e| transport_error("Failed to export bot", e))?;

    let export: BotExportDto = parse_response(response, "bot export").await?;
    debug!(
        "Exported {} intents and {} entities from bot {}",
        export.intents.len(),
        export.entities.len(),
        name
    );
    Ok(export)
}

pub async fn import_bot(name: &str, data: &BotExportDto) -> Result<BotImportSummaryDto> {
    debug!("Importing into bot: {}", name);

    let response = admin_post(&bot_url(name, "import"))
        .json(data)
        .map_err(|e| decode_error("Failed to serialize bot import", e))?
        .send()
        .await
        .map_err(|e| transport_error("Failed to import bot", e))?;

    let summary: BotImportSummaryDto = parse_response(response, "bot import").await?;
    debug!(
        "Imported {} intents and {} entities into bot {}",
        summary.num_intents_created, summary.num_entities_created, name
    );
    Ok(summary)
}
