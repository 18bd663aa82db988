use anyhow::{Context, Result};

use fizzbuzz::{cli::Cli, output::WriterSink, reporting::ConsoleReporter, App};

fn main() -> Result<()> {
    let cli = Cli::from_args(std::env::args_os())?;

    let mut app = App::new(WriterSink::stdout(), ConsoleReporter::new());
    let config = app.configure(&cli);

    // ラベル生成や書き込みに失敗した場合は非ゼロで終了する
    app.run(&config).context("FizzBuzzの出力に失敗しました")?;

    Ok(())
}
