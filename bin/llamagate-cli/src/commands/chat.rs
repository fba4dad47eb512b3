//! Send a single chat message.

use llamagate_client::{ChatMessage, Client};

pub fn run(
    client: &Client,
    message: &str,
    model: &str,
    temperature: f32,
    max_tokens: u32,
) -> anyhow::Result<()> {
    let messages = [ChatMessage::user(message)];
    let result = client.chat(&messages, model, temperature, max_tokens)?;
    println!("{}", result.text);
    Ok(())
}
