pub mod dispatcher;
pub mod fallback;
pub mod parser;
pub mod prompt;
pub mod trend;

pub use dispatcher::SearchService;
pub use parser::parse_search_result;
pub use trend::MarketTrend;
