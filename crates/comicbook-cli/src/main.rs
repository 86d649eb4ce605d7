mod cli;
mod extract_cmd;
mod formats_cmd;
mod info_cmd;
mod page_range;
mod pages_cmd;
mod shared;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        cli::Commands::Info {
            ref file,
            ref format,
        } => info_cmd::run(file, format),
        cli::Commands::Pages {
            ref file,
            ref pages,
            ref format,
        } => pages_cmd::run(file, pages.as_deref(), format),
        cli::Commands::Extract {
            ref file,
            ref pages,
            ref output_dir,
        } => extract_cmd::run(file, pages.as_deref(), output_dir.as_deref()),
        cli::Commands::Formats { ref format } => formats_cmd::run(format),
    };

    if let Err(code) = result {
        std::process::exit(code);
    }
}
