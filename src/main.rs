// src/main.rs

use clap::Parser;
use memos::cli::{Cli, Commands};
use memos::{commands, logging};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.debug);

    let result = match commands::resolve_db_path(cli.db) {
        Ok(db_path) => match cli.command {
            Commands::Serve { host, port } => commands::handle_serve(&db_path, &host, port).await,
            Commands::Init => commands::handle_init(&db_path),
            Commands::Add { text, date } => commands::handle_add(&db_path, text, date),
            Commands::List { num } => commands::handle_list(&db_path, num),
            Commands::Del { text, date, yes } => commands::handle_del(&db_path, text, date, yes),
        },
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
