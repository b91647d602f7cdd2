//! Command tree document loading
//!
//! The document is YAML. JSON is accepted as well, being valid YAML.

use slash_command_core::RawConfig;

use crate::{github::ContentsClient, inputs::ConfigSource, Error, Result};

/// Decode a YAML or JSON document into the raw command tree
///
/// # Errors
///
/// Returns `Error::Decode` if the text is not a YAML mapping of the expected
/// shape.
pub fn parse_config(text: &str) -> Result<RawConfig> {
    serde_yaml::from_str(text).map_err(|e| Error::Decode(format!("invalid configuration: {e}")))
}

/// Read and decode the document from its source
///
/// # Errors
///
/// Returns `Error::Fetch` when the document cannot be retrieved and
/// `Error::Decode` when it cannot be parsed.
pub async fn load_config(source: &ConfigSource) -> Result<RawConfig> {
    let text = match source {
        ConfigSource::File(path) => tokio::fs::read_to_string(path)
            .await
            .map_err(|e| Error::Fetch(format!("failed to read {}: {e}", path.display())))?,
        ConfigSource::Remote {
            api_url,
            repository,
            path,
            reference,
            token,
        } => {
            ContentsClient::new(api_url, token)?
                .fetch_file(repository, path, reference)
                .await?
        }
    };
    parse_config(&text)
}
