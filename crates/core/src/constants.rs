use std::time::Duration;

/// Decimal places kept in converted amounts
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Interval between the end of one refresh tick and the start of the next
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_millis(1000);

/// Cell text before the first tick reaches a symbol
pub const LOADING_PLACEHOLDER: &str = "Loading...";

/// Cell text when a symbol's value could not be fetched
pub const UNAVAILABLE_PLACEHOLDER: &str = "value unavailable";
