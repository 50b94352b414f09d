use clap::Parser;
use segmentcut::cli::Cli;

fn main() -> anyhow::Result<()> {
    trace_panics();
    let cli = Cli::parse();

    segmentcut::init_logging(&cli.log_level, &cli.log_path)?;

    if let Err(e) = segmentcut::start(cli) {
        tracing::error!("{:#}", e);
        return Err(e);
    }

    Ok(())
}

fn trace_panics() {
    let prev_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        tracing_panic::panic_hook(panic_info);
        prev_hook(panic_info);
    }));
}
