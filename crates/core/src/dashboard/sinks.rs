use chrono::{DateTime, Utc};

/// A text cell the refresh cycle writes into and the UI renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayCell {
    text: String,
    updated_at: Option<DateTime<Utc>>,
}

impl DisplayCell {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            text: initial.into(),
            updated_at: None,
        }
    }

    pub fn write(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.updated_at = Some(Utc::now());
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// `None` until the first write after construction.
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }
}

/// What to build a sink for: the symbol used for lookups and the caption shown beside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkSpec {
    pub symbol: String,
    pub caption: String,
}

impl SinkSpec {
    pub fn new(symbol: impl Into<String>, caption: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            caption: caption.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolSink {
    pub symbol: String,
    pub caption: String,
    pub cell: DisplayCell,
}

/// Ordered symbol -> cell mapping for the active mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SinkMap {
    entries: Vec<SymbolSink>,
}

impl SinkMap {
    pub fn build(specs: Vec<SinkSpec>, placeholder: &str) -> Self {
        let entries = specs
            .into_iter()
            .map(|spec| SymbolSink {
                symbol: spec.symbol,
                caption: spec.caption,
                cell: DisplayCell::new(placeholder),
            })
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.entries.iter().any(|e| e.symbol == symbol)
    }

    pub fn get(&self, symbol: &str) -> Option<&DisplayCell> {
        self.entries
            .iter()
            .find(|e| e.symbol == symbol)
            .map(|e| &e.cell)
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.symbol.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &SymbolSink> {
        self.entries.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut SymbolSink> {
        self.entries.iter_mut()
    }
}
