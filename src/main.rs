use passforge::cli::runner;

fn main() {
    if let Err(e) = runner::run() {
        eprintln!("❌ Error: {e}");
        std::process::exit(1);
    }
}
