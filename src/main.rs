use clap::Parser;

use nexus_lib::cli::Args;

#[tokio::main]
async fn main() {
    let args = Args::parse();
    nexus_lib::init_tracing();

    if let Err(e) = nexus_lib::run(args.into_config()).await {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}
