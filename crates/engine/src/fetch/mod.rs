mod fetcher;
mod orchestrator;
mod parser;

pub use fetcher::{BlocklistFetcher, FetchTransport, ReqwestTransport};
pub use orchestrator::{BlocklistOrchestrator, UpdatePhase};
pub use parser::{detect_format, parse_blocklist, ListFormat, ParsedList};
