//! List available models.

use llamagate_client::Client;

use crate::output;

pub fn run(client: &Client) -> anyhow::Result<()> {
    let models = client.list_models()?;

    if models.is_empty() {
        output::notice("No models available.");
        return Ok(());
    }

    output::heading("Available models:");
    for model in &models {
        println!(
            "- {} ({}, modified: {})",
            model.name,
            output::human_size(model.size),
            model.modified_at
        );
    }
    Ok(())
}
