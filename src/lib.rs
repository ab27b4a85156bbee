use std::{path::PathBuf, sync::mpsc};

pub use cli::CLIParser;
use error::Error;
pub use input::SymbolKind;
use input::Input;
use threadpool::ThreadPool;

mod cli;
mod error;
pub mod huffman;
mod input;
mod logger;
mod report;

pub type Result<T> = std::result::Result<T, error::Error>;

pub struct Arguments {
    input_files: Vec<PathBuf>,
    texts: Vec<String>,
    symbol_kind: SymbolKind,
    number_of_threads: usize,
    show_tree: bool,
}

fn collect_inputs(arguments: &Arguments) -> Result<Vec<Input>> {
    let mut inputs = arguments
        .input_files
        .iter()
        .map(|path| Input::from_file(path))
        .collect::<Result<Vec<Input>>>()?;
    inputs.extend(
        arguments
            .texts
            .iter()
            .enumerate()
            .map(|(index, text)| Input::from_text(index, text)),
    );
    if inputs.is_empty() {
        return Err(Error::NoInputProvided);
    }
    Ok(inputs)
}

/// Builds one code table report per input. Inputs are encoded in parallel,
/// the reports are returned in input order.
pub fn create_code_table_reports(arguments: &Arguments) -> Result<Vec<String>> {
    let inputs = collect_inputs(arguments)?;
    let threadpool = ThreadPool::new(arguments.number_of_threads.max(1));
    log::info!(
        "encoding {} inputs on {} threads",
        inputs.len(),
        threadpool.max_count()
    );

    let (sender, receiver) = mpsc::channel();
    for (index, input) in inputs.iter().cloned().enumerate() {
        let sender = sender.clone();
        let symbol_kind = arguments.symbol_kind;
        let show_tree = arguments.show_tree;
        threadpool.execute(move || {
            let report = report::create_report(&input, symbol_kind, show_tree);
            // the receiver outlives all workers
            let _ = sender.send((index, report));
        });
    }
    drop(sender);

    let mut reports: Vec<Option<Result<String>>> = inputs.iter().map(|_| None).collect();
    for (index, report) in receiver {
        reports[index] = Some(report);
    }
    reports
        .into_iter()
        .zip(inputs)
        .map(|(report, input)| {
            report.unwrap_or_else(|| Err(Error::WorkerTerminatedUnexpectedly(input.label)))
        })
        .collect()
}

pub fn print_code_tables(arguments: &Arguments) -> Result<()> {
    for report in create_code_table_reports(arguments)? {
        println!("{}", report);
    }
    Ok(())
}
