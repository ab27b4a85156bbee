use std::env::args_os;
use std::process::ExitCode;

use greedy_huffman::{print_code_tables, CLIParser};

fn main() -> ExitCode {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    match print_code_tables(&arguments) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Building the code tables failed because of: {}", e);
            ExitCode::FAILURE
        }
    }
}
