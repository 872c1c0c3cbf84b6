//! # Módulo del Servidor
//! src/server/mod.rs
//!
//! Este módulo implementa el servidor TCP que:
//! 1. Enlaza el socket en `0.0.0.0:port` con backlog 10 (`listener`)
//! 2. Acepta conexiones de a una (`tcp::Server::run`)
//! 3. Despacha cada conexión a su propio thread (`tcp::Server::dispatch`)
//! 4. Resuelve el path y responde dentro de ese thread (`tcp::handle_connection`)

pub mod listener;
pub mod tcp;

// Re-exportar para facilitar el uso
pub use listener::{bind_listener, LISTEN_BACKLOG};
pub use tcp::{handle_connection, Server};
