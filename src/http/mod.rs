//! # Módulo HTTP
//!
//! Subconjunto mínimo de HTTP/1.1 que entiende el servidor:
//!
//! - Solo `GET`, solo la primera línea del request
//! - Sin headers de entrada, sin keep-alive, sin `Content-Length`
//! - Respuesta 200 con header únicamente para archivos `.html`
//! - Respuesta 404 fija cuando el archivo no se puede abrir
//!
//! ### Formato de Request
//!
//! ```text
//! GET /path HTTP/1.1\r\n
//! ...
//! ```
//!
//! ### Formato de Response
//!
//! ```text
//! HTTP/1.1 200 OK\n
//! Content-type: text/html;\n
//! \n
//! <html>...
//! ```

pub mod request;   // Request Resolver
pub mod response;  // Responder
pub mod status;    // Status lines
pub mod transfer;  // sendfile / io::copy

pub use request::{resolve, RawRequest, ResolvedPath, DEFAULT_RESOURCE};
pub use response::{respond, OpenFile, Outcome, HTML_HEADER, NOT_FOUND_RESPONSE};
pub use status::StatusCode;
pub use transfer::FileSink;
