//! Dashboard module - display modes, symbol sinks, the refresh cycle, and the converter form.

mod converter;
mod mode;
mod refresh;
mod sinks;
mod state;
mod watchlist;

pub use converter::{parse_amount, ConversionOutcome, ConversionRequest, ConverterForm};
pub use mode::DisplayMode;
pub use refresh::{CellUpdate, Dashboard, TickReport};
pub use sinks::{DisplayCell, SinkMap, SinkSpec, SymbolSink};
pub use state::DashboardState;
pub use watchlist::{Watchlist, DEFAULT_CRYPTO_PAIRS, DEFAULT_STOCK_SYMBOLS};
