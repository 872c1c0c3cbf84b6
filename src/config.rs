//! # Configuración del Servidor
//! src/config.rs
//!
//! La única configuración es el puerto, que llega como único argumento
//! posicional:
//!
//! ```bash
//! ./file_server 8080
//! ```
//!
//! Si faltan o sobran argumentos se imprime el uso por stdout y el proceso
//! termina con éxito (no es un error de salida).

use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;

/// Dirección en la que se enlaza siempre el socket (INADDR_ANY)
pub const BIND_HOST: &str = "0.0.0.0";

/// Configuración del servidor. Inmutable después del arranque.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "file_server")]
#[command(about = "Servidor HTTP/1.x minimo de archivos del directorio actual")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Puerto TCP en el que escucha el servidor (1-65535)
    #[arg(value_parser = clap::value_parser!(u16).range(1..))]
    pub port: u16,
}

/// Qué debe hacer `main` después de leer los argumentos
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Arrancar el servidor con esta configuración
    Run(Config),

    /// Imprimir este mensaje de uso y salir con código 0
    Usage(String),
}

impl Config {
    /// Crea una configuración con el puerto indicado
    pub fn new(port: u16) -> Self {
        Self { port }
    }

    /// Interpreta los argumentos del proceso (incluido `argv[0]`)
    ///
    /// Argumentos faltantes o de más producen `CliCommand::Usage`.
    /// Cualquier otro error de clap (puerto fuera de rango, `--help`,
    /// `--version`) se devuelve para que clap lo imprima y salga.
    ///
    /// # Ejemplo
    /// ```
    /// use file_server::config::{CliCommand, Config};
    ///
    /// let cmd = Config::from_args(["file_server", "8080"]).unwrap();
    /// assert_eq!(cmd, CliCommand::Run(Config::new(8080)));
    ///
    /// let cmd = Config::from_args(["file_server"]).unwrap();
    /// assert_eq!(cmd, CliCommand::Usage("Usage: file_server <port>".to_string()));
    /// ```
    pub fn from_args<I, T>(args: I) -> Result<CliCommand, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        let program = args
            .first()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_else(|| "file_server".to_string());

        match Config::try_parse_from(args) {
            Ok(config) => Ok(CliCommand::Run(config)),
            Err(e) => match e.kind() {
                ErrorKind::MissingRequiredArgument
                | ErrorKind::UnknownArgument
                | ErrorKind::TooManyValues
                | ErrorKind::WrongNumberOfValues => Ok(CliCommand::Usage(usage(&program))),
                _ => Err(e),
            },
        }
    }

    /// Dirección completa para bind (`0.0.0.0:port`)
    ///
    /// # Ejemplo
    /// ```
    /// use file_server::config::Config;
    ///
    /// assert_eq!(Config::new(8080).address(), "0.0.0.0:8080");
    /// ```
    pub fn address(&self) -> String {
        format!("{}:{}", BIND_HOST, self.port)
    }
}

/// Mensaje de uso: `Usage: <program> <port>`
pub fn usage(program: &str) -> String {
    format!("Usage: {} <port>", program)
}
