//! # Errores del Servidor
//! src/error.rs
//!
//! Errores fatales de arranque. Si no se puede crear o enlazar el socket
//! el proceso termina: no hay reintentos.
//!
//! Los errores por conexión (archivo inexistente, request malformado,
//! fallos de escritura) nunca llegan aquí; se resuelven dentro del
//! thread de cada conexión.

use std::io;

/// Fallos al preparar el socket de escucha
#[derive(thiserror::Error, Debug)]
pub enum ServerError {
    /// `socket(2)` falló
    #[error("Error opening socket: {0}")]
    Socket(#[source] io::Error),

    /// `setsockopt(SO_REUSEADDR)` falló
    #[error("Error setting socket option: {0}")]
    SetOption(#[source] io::Error),

    /// `bind(2)` falló (típicamente puerto en uso o sin permisos)
    #[error("Error binding to port {port}: {source}")]
    Bind {
        port: u16,
        #[source]
        source: io::Error,
    },

    /// `listen(2)` falló
    #[error("Error listening on socket: {0}")]
    Listen(#[source] io::Error),
}

impl ServerError {
    /// Error de SO subyacente
    pub fn io_error(&self) -> &io::Error {
        match self {
            ServerError::Socket(e)
            | ServerError::SetOption(e)
            | ServerError::Listen(e) => e,
            ServerError::Bind { source, .. } => source,
        }
    }
}
