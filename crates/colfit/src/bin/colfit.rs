use clap::Parser;
use colfit::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    colfit::run_stdio(&cli)?;
    Ok(())
}
