//! CLI entry point for building Redot asset packs

use clap::Parser;
use tilepack::io::cli::{Cli, PackBuilder, init_tracing};

#[tokio::main(flavor = "current_thread")]
async fn main() -> tilepack::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let builder = PackBuilder::new(cli);
    builder.run().await.map(|_| ())
}
