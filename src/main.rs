fn main() {
    if let Err(e) = factoryctl_lib::cli::run_cli() {
        eprintln!("CLI Error: {:#}", e);
        std::process::exit(1);
    }
}
