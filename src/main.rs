use clap::Parser;

use spotlight::cli::Args;

fn main() -> anyhow::Result<()> {
    spotlight::run(Args::parse())
}
