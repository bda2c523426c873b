use std::io::{self, BufWriter};

use clap::{CommandFactory, Parser};
use textlaser::{init_logging, run, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.lines.is_empty() {
        Cli::command().print_help()?;
        return Ok(());
    }

    init_logging(cli.verbose)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    run(&cli, &mut out)
}
