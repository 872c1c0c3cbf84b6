//! # File Server - Entry Point
//! src/main.rs
//!
//! `file_server <port>`: sirve archivos del directorio actual.

use file_server::config::{CliCommand, Config};
use file_server::server::Server;
use log::error;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match Config::from_args(std::env::args_os()) {
        Ok(CliCommand::Run(config)) => config,
        Ok(CliCommand::Usage(usage)) => {
            // Argumentos de menos o de más: no es un error de salida
            println!("{}", usage);
            return;
        }
        Err(e) => e.exit(),
    };

    let server = match Server::bind(config) {
        Ok(server) => server,
        Err(e) => {
            error!("💥 Error fatal: {}", e);
            eprintln!("💥 Error fatal: {}", e);
            std::process::exit(1);
        }
    };

    server.run()
}
