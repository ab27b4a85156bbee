use std::collections::HashMap;

use super::{Symbol, SymbolFrequency};

/// Counts symbol occurrences, remembering the order in which each symbol
/// was seen first.
pub struct FrequencyCounter<S: Symbol> {
    positions: HashMap<S, usize>,
    symbol_frequencies: Vec<SymbolFrequency<S>>,
}

impl<S: Symbol> FrequencyCounter<S> {
    pub fn new() -> Self {
        Self {
            positions: HashMap::new(),
            symbol_frequencies: Vec::new(),
        }
    }

    pub fn increment_symbol(&mut self, symbol: S) {
        match self.positions.get(&symbol) {
            Some(&position) => self.symbol_frequencies[position].frequency += 1,
            None => {
                self.positions
                    .insert(symbol.clone(), self.symbol_frequencies.len());
                self.symbol_frequencies
                    .push(SymbolFrequency::new(symbol, 1));
            }
        }
    }

    pub fn frequency_of(&self, symbol: &S) -> usize {
        self.positions
            .get(symbol)
            .map_or(0, |&position| self.symbol_frequencies[position].frequency)
    }

    pub fn distinct_symbols(&self) -> usize {
        self.symbol_frequencies.len()
    }

    pub fn symbol_frequencies(&self) -> &[SymbolFrequency<S>] {
        &self.symbol_frequencies
    }

    pub fn into_symbol_frequencies(self) -> Vec<SymbolFrequency<S>> {
        self.symbol_frequencies
    }
}

impl<S: Symbol> Default for FrequencyCounter<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Symbol> FromIterator<S> for FrequencyCounter<S> {
    fn from_iter<T: IntoIterator<Item = S>>(symbols: T) -> Self {
        let mut counter = Self::new();
        for symbol in symbols {
            counter.increment_symbol(symbol);
        }
        counter
    }
}
