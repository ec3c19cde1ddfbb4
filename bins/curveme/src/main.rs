use clap::Parser;
use curveme::{cmd::MainCmd, tracing_util::init_tracing_subscriber};

fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    let cmd = MainCmd::parse();
    init_tracing_subscriber(cmd.verbose)?;
    cmd.run()?;

    Ok(())
}
