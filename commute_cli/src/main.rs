use clap::{Parser, Subcommand};

use mimalloc::MiMalloc;

use crate::{
    generate::GenerateSubcommands, interactive::InteractiveArgs, recommend::RecommendArgs,
};

mod client_args;
mod generate;
mod interactive;
mod parsers;
mod recommend;

#[cfg(test)]
mod test_utils;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask the server for the best departure time in a window
    #[command(visible_alias = "r")]
    Recommend {
        #[command(flatten)]
        args: RecommendArgs,
    },
    /// Send one request per line read from stdin
    Interactive {
        #[command(flatten)]
        args: InteractiveArgs,
    },
    #[command(visible_alias = "g")]
    Generate {
        #[command(subcommand)]
        commands: GenerateSubcommands,
    },
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Recommend { args } => recommend::run(args).await?,
        Commands::Interactive { args } => interactive::run(args).await?,
        Commands::Generate { commands } => generate::run(commands)?,
    }

    Ok(())
}
