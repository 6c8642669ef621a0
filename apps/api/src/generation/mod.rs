// Generation engine: prompts → per-platform text + image → run board.
// All model calls go through llm_client, reached only via GenerationClient.

pub mod client;
pub mod handlers;
pub mod orchestrator;
pub mod prompts;

#[cfg(test)]
pub mod testing;
