use crate::generator::workflow::launch;
use anyhow::Result;
use clap::Parser;

mod cli;
mod config;
mod generator;
mod llm;
mod writer;

#[tokio::main]
async fn main() -> Result<()> {
    // 在读取任何环境变量之前加载.env
    dotenv::dotenv().ok();

    let args = match cli::Args::try_parse() {
        Ok(args) => args,
        Err(err) => cli::exit_on_parse_error(err),
    };
    let config = args.into_config();

    launch(&config).await
}
