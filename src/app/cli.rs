use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(
    author,
    version,
    about = "Concatenate the source files under the current directory into one text file"
)]
pub struct Cli {
    /// Use a predefined set of options from presets.toml
    #[arg(long)]
    pub preset: Option<String>,

    /// Destination file (defaults to full_project_code.txt)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}
