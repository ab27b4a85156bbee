use std::hash::Hash;

pub mod code;
mod coding_error;
pub mod frequency;
pub mod order;
pub mod tree;

pub use code::CodeTable;
pub use coding_error::CodingError;
pub use frequency::FrequencyCounter;
pub use tree::HuffmanTree;

/// Anything that can be counted and used as a key of a code table.
pub trait Symbol: Eq + Hash + Clone {}

impl<T: Eq + Hash + Clone> Symbol for T {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolFrequency<S> {
    pub symbol: S,
    pub frequency: usize,
}

impl<S> SymbolFrequency<S> {
    pub fn new(symbol: S, frequency: usize) -> Self {
        Self { symbol, frequency }
    }
}

impl<S> From<(S, usize)> for SymbolFrequency<S> {
    fn from(value: (S, usize)) -> Self {
        Self::new(value.0, value.1)
    }
}

/// Builds the code table for a sequence of symbols.
///
/// Fails with [`CodingError::InsufficientSymbols`] if the sequence holds
/// less than two distinct symbols.
///
/// ```
/// let codes = greedy_huffman::huffman::encode("111223".chars()).unwrap();
/// assert_eq!(codes[&'1'], "1");
/// assert_eq!(codes[&'2'], "01");
/// assert_eq!(codes[&'3'], "00");
/// ```
pub fn encode<S, I>(symbols: I) -> Result<CodeTable<S>, CodingError>
where
    S: Symbol,
    I: IntoIterator<Item = S>,
{
    let counter: FrequencyCounter<S> = symbols.into_iter().collect();
    log::debug!("counted {} distinct symbols", counter.distinct_symbols());
    encode_frequencies(&counter.into_symbol_frequencies())
}

/// Same as [`encode`], but starts from already counted frequencies.
/// Symbols with a frequency of zero receive no code.
pub fn encode_frequencies<S: Symbol>(
    symbol_frequencies: &[SymbolFrequency<S>],
) -> Result<CodeTable<S>, CodingError> {
    let sorted_frequencies = order::sorted_by_frequency(symbol_frequencies);
    let tree = HuffmanTree::new(&sorted_frequencies)?;
    let codes = tree.codes();
    log::debug!("extracted {} code words", codes.len());
    Ok(codes)
}
