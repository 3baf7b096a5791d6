#[cfg(feature = "tui")]
mod browse_cmd;
mod cli;
mod copy_cmd;
mod export_cmd;
mod print_cmd;
mod search_cmd;
mod shared;
mod stats_cmd;
mod text_cmd;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    shared::init_logging(cli.verbose);
    let options = shared::session_options(cli.max_upload_mb);

    let result = match cli.command {
        cli::Commands::Text {
            ref file,
            raw,
            format,
        } => text_cmd::run(file, options, raw, format),
        cli::Commands::Search {
            ref file,
            ref query,
            index,
            format,
            context,
        } => search_cmd::run(file, options, query, index, format, context),
        cli::Commands::Stats { ref file, format } => stats_cmd::run(file, options, format),
        cli::Commands::Export {
            ref file,
            ref out_dir,
        } => export_cmd::run(file, options, out_dir.as_deref()),
        cli::Commands::Print {
            ref file,
            ref query,
            index,
            ref output,
        } => print_cmd::run(file, options, query.as_deref(), index, output.as_deref()),
        cli::Commands::Copy { ref file } => copy_cmd::run(file, options),
        cli::Commands::Browse { ref file } => browse(file, options),
    };

    if let Err(code) = result {
        std::process::exit(code);
    }
}

#[cfg(feature = "tui")]
fn browse(file: &std::path::Path, options: pdfscout::SessionOptions) -> Result<(), i32> {
    browse_cmd::run(file, options)
}

#[cfg(not(feature = "tui"))]
fn browse(_file: &std::path::Path, _options: pdfscout::SessionOptions) -> Result<(), i32> {
    eprintln!("Error: the interactive browser is not available; rebuild with --features tui");
    Err(1)
}
