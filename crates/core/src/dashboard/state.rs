use super::mode::DisplayMode;
use super::refresh::TickReport;
use super::sinks::SinkMap;
use super::watchlist::Watchlist;
use crate::constants::LOADING_PLACEHOLDER;

/// Everything the UI shows, owned in one place and handed to each tick.
#[derive(Debug, Clone)]
pub struct DashboardState {
    mode: DisplayMode,
    sinks: SinkMap,
    last_tick: Option<TickReport>,
}

impl DashboardState {
    pub fn new(mode: DisplayMode, watchlist: &Watchlist) -> Self {
        Self {
            mode,
            sinks: SinkMap::build(watchlist.sink_specs(mode), LOADING_PLACEHOLDER),
            last_tick: None,
        }
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn sinks(&self) -> &SinkMap {
        &self.sinks
    }

    pub fn last_tick(&self) -> Option<&TickReport> {
        self.last_tick.as_ref()
    }

    /// Switches mode, dropping every sink of the previous mode.
    ///
    /// Selecting the active mode again also rebuilds its sinks.
    pub fn select_mode(&mut self, mode: DisplayMode, watchlist: &Watchlist) {
        log::debug!("Switching display mode {} -> {}", self.mode, mode);
        self.mode = mode;
        self.sinks = SinkMap::build(watchlist.sink_specs(mode), LOADING_PLACEHOLDER);
    }

    pub(crate) fn sinks_mut(&mut self) -> &mut SinkMap {
        &mut self.sinks
    }

    pub(crate) fn record_tick(&mut self, report: TickReport) {
        self.last_tick = Some(report);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switch_discards_previous_sinks() {
        let watchlist = Watchlist::default();
        let mut state = DashboardState::new(DisplayMode::Crypto, &watchlist);
        assert!(state.sinks().contains("BTC/USDT"));

        state.select_mode(DisplayMode::Stocks, &watchlist);

        assert_eq!(state.mode(), DisplayMode::Stocks);
        for pair in &watchlist.crypto_pairs {
            assert!(!state.sinks().contains(&pair.to_string()));
        }
        assert!(state.sinks().contains("AAPL"));
        assert_eq!(state.sinks().len(), watchlist.stocks.len());
    }

    #[test]
    fn test_new_sinks_start_loading() {
        let watchlist = Watchlist::default();
        let state = DashboardState::new(DisplayMode::Currencies, &watchlist);
        assert!(state
            .sinks()
            .iter()
            .all(|s| s.cell.text() == LOADING_PLACEHOLDER));
        assert!(state.last_tick().is_none());
    }
}
