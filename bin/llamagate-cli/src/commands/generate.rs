//! Generate text from a prompt.

use llamagate_client::Client;

pub fn run(
    client: &Client,
    prompt: &str,
    model: &str,
    temperature: f32,
    max_tokens: u32,
) -> anyhow::Result<()> {
    let result = client.generate(prompt, model, temperature, max_tokens)?;
    println!("{}", result.text);
    Ok(())
}
