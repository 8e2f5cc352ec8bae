use clap::Parser;

use storefront_cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.init_logging();

    let output = storefront_cli::run(&cli)?;
    println!("{output}");
    Ok(())
}
