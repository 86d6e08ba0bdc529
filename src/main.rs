use clap::Parser;
use lists::cli::commands::Cli;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = lists::tui::run(&cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
