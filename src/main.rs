use anyhow::Result;
use mysql_probe::cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    mysql_probe::init_tracing(cli.verbose);
    mysql_probe::run(cli).await
}
