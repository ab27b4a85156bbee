use crate::input::SymbolKind;
use crate::Arguments;
use clap::{
    arg, crate_authors, crate_description, crate_name, crate_version, value_parser, Arg,
    ArgAction, ArgMatches, Command,
};
use std::ffi::OsString;
use std::path::PathBuf;
use std::{io, thread};

pub struct CLIParser {
    command: Command,
}

impl CLIParser {
    pub fn new() -> Self {
        let command = Self::create_base_command();
        let command = Self::register_arguments(command);
        CLIParser { command }
    }

    pub fn parse<I, T>(&mut self, itr: I) -> Arguments
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self
            .command
            .try_get_matches_from_mut(itr)
            .unwrap_or_else(|e| e.exit());
        Self::extract_arguments(&matches)
    }

    fn register_arguments(command: Command) -> Command {
        let command = Self::register_input_files_argument(command);
        let command = Self::register_texts_argument(command);
        let command = Self::register_symbol_kind_argument(command);
        let command = Self::register_threads_argument(command);
        Self::register_show_tree_argument(command)
    }

    fn register_input_files_argument(command: Command) -> Command {
        command.arg(Self::create_input_files_argument())
    }

    fn register_texts_argument(command: Command) -> Command {
        command.arg(Self::create_texts_argument())
    }

    fn register_symbol_kind_argument(command: Command) -> Command {
        command.arg(Self::create_symbol_kind_argument())
    }

    fn register_threads_argument(command: Command) -> Command {
        command.arg(Self::create_threads_argument())
    }

    fn register_show_tree_argument(command: Command) -> Command {
        command.arg(Self::create_show_tree_argument())
    }

    fn create_base_command() -> Command {
        Command::new(crate_name!())
            .version(crate_version!())
            .author(crate_authors!())
            .about(crate_description!())
    }

    fn create_input_files_argument() -> Arg {
        Arg::new("input_files")
            .help("Paths to the input files")
            .value_parser(value_parser!(PathBuf))
            .num_args(1..)
            .action(ArgAction::Append)
            .required(false)
    }

    fn create_texts_argument() -> Arg {
        arg!(texts: -x --text <TEXT> "Literal text to build a code for, may be repeated")
            .action(ArgAction::Append)
            .required(false)
    }

    fn create_symbol_kind_argument() -> Arg {
        arg!(symbol_kind: -s --symbols <KIND> "Kind of symbols the input is split into")
            .default_value("Characters")
            .value_parser(value_parser!(SymbolKind))
    }

    fn create_threads_argument() -> Arg {
        arg!(-t --threads <THREADS> "Number of Threads")
            .default_value(get_number_of_threads().unwrap_or(1).to_string())
            .required(false)
            .value_parser(value_parser!(usize))
    }

    fn create_show_tree_argument() -> Arg {
        arg!(show_tree: --tree "Print the merged tree below each code table")
    }

    fn extract_arguments(matches: &ArgMatches) -> Arguments {
        Arguments {
            input_files: Self::extract_input_files_argument(matches),
            texts: Self::extract_texts_argument(matches),
            symbol_kind: Self::extract_symbol_kind_argument(matches),
            number_of_threads: Self::extract_threads_argument(matches),
            show_tree: Self::extract_show_tree_argument(matches),
        }
    }

    fn extract_input_files_argument(matches: &ArgMatches) -> Vec<PathBuf> {
        matches
            .get_many::<PathBuf>("input_files")
            .map(|paths| paths.cloned().collect())
            .unwrap_or_default()
    }

    fn extract_texts_argument(matches: &ArgMatches) -> Vec<String> {
        matches
            .get_many::<String>("texts")
            .map(|texts| texts.cloned().collect())
            .unwrap_or_default()
    }

    fn extract_symbol_kind_argument(matches: &ArgMatches) -> SymbolKind {
        matches
            .get_one::<SymbolKind>("symbol_kind")
            .expect("Symbol kind must be provided, but was unset.")
            .to_owned()
    }

    fn extract_threads_argument(matches: &ArgMatches) -> usize {
        matches
            .get_one::<usize>("threads")
            .expect("Required argument threads not provided")
            .to_owned()
    }

    fn extract_show_tree_argument(matches: &ArgMatches) -> bool {
        matches.get_flag("show_tree")
    }
}

impl Default for CLIParser {
    fn default() -> Self {
        Self::new()
    }
}

fn get_number_of_threads() -> io::Result<usize> {
    Ok(thread::available_parallelism()?.get())
}
