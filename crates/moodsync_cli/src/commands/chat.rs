//! One-shot chat relay from the command line.

use moodsync_llms::ChatRelay;

use crate::commands::{build_provider, resolve_provider_kind};
use crate::output;

pub async fn run(message: String, provider: Option<String>) -> anyhow::Result<()> {
    let kind = resolve_provider_kind(provider);
    let relay = ChatRelay::from_arc(build_provider(kind));

    let pb = output::spinner("Thinking...");
    let reply = relay.send(&message).await;
    pb.finish_and_clear();

    output::reply(&reply);
    Ok(())
}
