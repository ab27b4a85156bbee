use std::fmt::{Debug, Write};

use crate::{
    error::Error,
    huffman::{order::sorted_by_frequency, FrequencyCounter, HuffmanTree, Symbol},
    input::{Input, SymbolKind},
    logger, Result,
};

struct ReportEntry<S> {
    symbol: S,
    frequency: usize,
    code: String,
}

/// Counts, encodes and formats a single input according to the symbol kind.
pub fn create_report(input: &Input, symbol_kind: SymbolKind, show_tree: bool) -> Result<String> {
    match symbol_kind {
        SymbolKind::Characters => {
            create_symbol_report(&input.label, input.characters()?, show_tree)
        }
        SymbolKind::Bytes => create_symbol_report(&input.label, input.bytes(), show_tree),
        SymbolKind::Words => create_symbol_report(&input.label, input.words()?, show_tree),
    }
}

fn create_symbol_report<S: Symbol + Debug>(
    label: &str,
    symbols: Vec<S>,
    show_tree: bool,
) -> Result<String> {
    let counter: FrequencyCounter<S> = symbols.into_iter().collect();
    let sorted_frequencies = sorted_by_frequency(counter.symbol_frequencies());
    let tree = HuffmanTree::new(&sorted_frequencies)
        .map_err(|e| Error::HuffmanCodingFailed(label.to_owned(), e))?;
    let mut codes = tree.codes();

    let mut entries: Vec<ReportEntry<S>> = counter
        .into_symbol_frequencies()
        .into_iter()
        .filter_map(|sf| {
            codes.remove(&sf.symbol).map(|code| ReportEntry {
                symbol: sf.symbol,
                frequency: sf.frequency,
                code,
            })
        })
        .collect();
    entries.sort_by(|a, b| a.code.len().cmp(&b.code.len()).then_with(|| a.code.cmp(&b.code)));
    let encoded_length = encoded_length(&entries);
    logger::log_code_table_summary(label, entries.len(), encoded_length);

    let mut report = String::new();
    // writing into a String never fails
    let _ = write_report(&mut report, label, &entries, encoded_length);
    if show_tree {
        let _ = write!(report, "\n{}", tree);
    }
    Ok(report)
}

fn encoded_length<S>(entries: &[ReportEntry<S>]) -> usize {
    entries.iter().map(|e| e.frequency * e.code.len()).sum()
}

fn write_report<S: Debug>(
    report: &mut String,
    label: &str,
    entries: &[ReportEntry<S>],
    encoded_length: usize,
) -> std::fmt::Result {
    writeln!(report, "== {} ==", label)?;
    writeln!(report, "{:<16} {:>9}  code", "symbol", "frequency")?;
    for entry in entries {
        let symbol = format!("{:?}", entry.symbol);
        writeln!(report, "{:<16} {:>9}  {}", symbol, entry.frequency, entry.code)?;
    }
    writeln!(report, "encoded length: {} bits", encoded_length)
}
