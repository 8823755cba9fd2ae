use clap::Parser;
use worksearch::cli::{run_query, Cli, Command};
use worksearch::logging;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    match cli.command {
        Some(Command::Query {
            text,
            format,
            verbose,
        }) => {
            logging::init_stderr(verbose);
            let output = runtime.block_on(run_query(config, &text, format))?;
            println!("{}", output);
        }
        Some(Command::Tui) | None => {
            logging::init_file_from_env();
            let _enter = runtime.enter();
            worksearch::ui::run(config)?;
        }
    }

    Ok(())
}
