use super::{Symbol, SymbolFrequency};

/// Orders symbols by ascending frequency, so the least frequent symbols are
/// merged first. Equal frequencies keep their relative order.
pub fn sort_by_frequency<S>(symbol_frequencies: &mut [SymbolFrequency<S>]) {
    symbol_frequencies.sort_by_key(|s| s.frequency);
}

pub fn sorted_by_frequency<S: Symbol>(
    symbol_frequencies: &[SymbolFrequency<S>],
) -> Vec<SymbolFrequency<S>> {
    let mut sorted = symbol_frequencies.to_vec();
    sort_by_frequency(&mut sorted);
    sorted
}

#[cfg(test)]
mod test {
    use super::{sort_by_frequency, sorted_by_frequency, SymbolFrequency};
    use crate::huffman::FrequencyCounter;

    #[test]
    fn test_sort_counted_symbols() {
        let counter: FrequencyCounter<char> = "112".chars().collect();
        let sorted = sorted_by_frequency(counter.symbol_frequencies());
        assert_eq!(sorted[0].symbol, '2');
        assert_eq!(sorted[1].symbol, '1');
    }

    #[test]
    fn test_sort_is_ascending() {
        let counter: FrequencyCounter<char> = "the quick brown fox jumps over the lazy dog"
            .chars()
            .collect();
        let sorted = sorted_by_frequency(counter.symbol_frequencies());
        assert_eq!(sorted.len(), counter.distinct_symbols());
        assert!(
            sorted.is_sorted_by_key(|s| s.frequency),
            "Frequencies must be sorted in ascending order"
        );
    }

    #[test]
    fn test_sort_keeps_order_of_ties() {
        let mut frequencies =
            [('d', 2), ('a', 1), ('c', 2), ('b', 1), ('e', 1)].map(SymbolFrequency::from);
        sort_by_frequency(&mut frequencies);
        let symbols: Vec<char> = frequencies.iter().map(|s| s.symbol).collect();
        assert_eq!(symbols, vec!['a', 'b', 'e', 'd', 'c']);
    }
}
