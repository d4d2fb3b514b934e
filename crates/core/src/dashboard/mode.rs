use std::fmt;

/// Category of data currently on screen. Exactly one is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DisplayMode {
    #[default]
    Currencies,
    Stocks,
    Crypto,
}

impl DisplayMode {
    /// All modes in mode-bar order.
    pub const ALL: [DisplayMode; 3] = [Self::Currencies, Self::Stocks, Self::Crypto];

    pub fn label(self) -> &'static str {
        match self {
            Self::Currencies => "Currencies",
            Self::Stocks => "Stocks",
            Self::Crypto => "Crypto",
        }
    }

    /// Position in [`Self::ALL`].
    pub fn index(self) -> usize {
        match self {
            Self::Currencies => 0,
            Self::Stocks => 1,
            Self::Crypto => 2,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_currencies() {
        assert_eq!(DisplayMode::default(), DisplayMode::Currencies);
    }

    #[test]
    fn test_next_cycles_through_all() {
        let mut mode = DisplayMode::Currencies;
        let mut seen = Vec::new();
        for _ in 0..3 {
            seen.push(mode);
            mode = mode.next();
        }
        assert_eq!(seen, DisplayMode::ALL.to_vec());
        assert_eq!(mode, DisplayMode::Currencies);
    }
}
