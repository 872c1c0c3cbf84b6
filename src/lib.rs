//! # File Server
//! src/lib.rs
//!
//! Servidor HTTP/1.x mínimo que sirve archivos del directorio de trabajo.
//! Acepta conexiones TCP, lee una sola request line `GET`, abre el archivo
//! pedido y devuelve sus bytes (o una página 404 fija).
//!
//! ## Arquitectura
//!
//! - `config`: Puerto desde la línea de comandos
//! - `error`: Errores fatales de arranque
//! - `http`: Resolver (request -> path) y Responder (path -> bytes)
//! - `server`: Socket de escucha, loop de accept y un thread por conexión
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use file_server::config::Config;
//! use file_server::server::Server;
//!
//! let server = Server::bind(Config::new(8080)).expect("Error al iniciar servidor");
//! server.run();
//! ```
//!
//! ## Limitaciones conocidas
//!
//! - El path no se sanitiza: `GET /../x` o `GET //etc/passwd` salen del
//!   directorio de trabajo.
//! - No hay límite de threads ni timeouts; muchas conexiones lentas agotan
//!   los recursos del proceso.

pub mod config;
pub mod error;
pub mod http;
pub mod server;
