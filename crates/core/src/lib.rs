//! Finanzas Core - refresh cycle, display state, and currency conversion.
//!
//! This crate contains the dashboard logic independent of any UI toolkit.
//! Data comes in through the provider traits of `finanzas-market-data`;
//! what the UI renders comes out as text in [`dashboard::DisplayCell`]s.

pub mod constants;
pub mod dashboard;
pub mod errors;
pub mod fx;
pub mod scheduler;

pub use dashboard::{
    ConversionOutcome, ConversionRequest, ConverterForm, Dashboard, DashboardState, DisplayMode,
    TickReport, Watchlist,
};
pub use errors::{ConversionError, ValidationError};
pub use fx::RateProvider;
pub use scheduler::RefreshTimer;
