use std::process;

fn main() {
    match helpdesk_cli::run() {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("helpdesk error: {err:#}");
            process::exit(1);
        }
    }
}
