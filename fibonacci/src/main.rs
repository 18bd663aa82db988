use anyhow::{Context, Result};

use fibonacci::{cli::Cli, output::WriterSink, reporting::ConsoleReporter, App};

fn main() -> Result<()> {
    let cli = Cli::from_args(std::env::args_os())?;

    let mut app = App::new(WriterSink::stdout(), ConsoleReporter::new());
    let config = app.configure(&cli);

    app.run(&config)
        .context("フィボナッチ数列の出力に失敗しました")?;

    Ok(())
}
