//! Check whether the server is running.

use anyhow::bail;

use llamagate_client::Client;

use crate::output;

pub fn run(host: &str) -> anyhow::Result<()> {
    let client = Client::new(host);
    if client.health() {
        output::success("server is running");
        Ok(())
    } else {
        bail!("server at {host} is not running")
    }
}
