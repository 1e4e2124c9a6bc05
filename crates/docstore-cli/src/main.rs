use std::process;

fn main() {
    match docstore_cli::run() {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("docstore error: {err:#}");
            process::exit(1);
        }
    }
}
