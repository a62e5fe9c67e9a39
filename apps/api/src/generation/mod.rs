// Resume generation pipeline: prompt assembly, LLM call, output parsing,
// and the HTTP handlers that drive the whole flow.

pub mod generator;
pub mod handlers;
pub mod parser;
pub mod prompts;
