#[ctor::ctor]
fn init() {
    if let Err(e) = log4rs::init_file("log4rs.yaml", Default::default()) {
        eprintln!("Logging disabled, unable to load log4rs.yaml: {}", e);
    }
}

pub fn log_code_table_summary(label: &str, distinct_symbols: usize, encoded_length: usize) {
    log::info!(
        "{}: {} distinct symbols, {} bits encoded",
        label,
        distinct_symbols,
        encoded_length
    );
}
