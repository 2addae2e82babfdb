use clap::Parser;
use folio_tui::cli::Cli;

fn main() -> color_eyre::eyre::Result<()> {
    folio_tui::run_main(Cli::parse())
}
