//! One-shot CLI commands.

pub mod chat;
pub mod generate;
pub mod health;
pub mod models;

use anyhow::bail;

use llamagate_client::Client;

/// Build a client for `host` and verify the server answers its health
/// probe, so commands fail fast instead of mid-operation.
pub fn connect(host: &str) -> anyhow::Result<Client> {
    let client = Client::new(host);
    if !client.health() {
        bail!("server at {host} is not reachable; make sure it is running and try again");
    }
    Ok(client)
}
