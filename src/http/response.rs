//! # Respuestas
//! src/http/response.rs
//!
//! El Responder abre el archivo resuelto y escribe una de dos cosas:
//!
//! ```text
//! HTTP/1.1 200 OK\n                 (solo si la extensión es "html")
//! Content-type: text/html;\n\n      (solo si la extensión es "html")
//! <bytes del archivo>
//! ```
//!
//! o el bloque fijo de 404 si el archivo no se pudo abrir.
//!
//! Los archivos que no son `.html` se envían sin ninguna línea de status ni
//! header, solo los bytes crudos. Las líneas usan `\n`, no `\r\n`.

use super::request::ResolvedPath;
use super::status::StatusCode;
use super::transfer::FileSink;
use log::{debug, warn};
use std::fs::File;
use std::io::{self, Seek, SeekFrom};
use std::path::Path;

/// Preámbulo que precede a los archivos `.html`
pub const HTML_HEADER: &[u8] = b"HTTP/1.1 200 OK\n\
Content-type: text/html;\n\n";

/// Respuesta completa cuando el archivo no se puede abrir
pub const NOT_FOUND_RESPONSE: &[u8] = b"HTTP/1.1 404 Not Found\n\
Content-Type: text/html; charset=UTF-8\n\n\
<!DOCTYPE html>\n\
<html><head><title>Error 404</title></head>\n\
<body style='background-color:#EEFFFF'>File Not Found :(</body></html>";

/// Resultado de responder a una conexión
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Se envió el archivo; `bytes` no cuenta el header
    Served { bytes: u64, html: bool },

    /// Se envió el bloque de 404
    NotFound,
}

impl Outcome {
    pub fn status(&self) -> StatusCode {
        match self {
            Outcome::Served { .. } => StatusCode::Ok,
            Outcome::NotFound => StatusCode::NotFound,
        }
    }
}

/// Archivo abierto en solo lectura con su tamaño ya calculado
///
/// Se cierra al hacer drop, justo después de enviarlo.
#[derive(Debug)]
pub struct OpenFile {
    file: File,
    len: u64,
}

impl OpenFile {
    /// Abre `path` relativo a `root`
    ///
    /// Un path vacío nunca se abre (sería el propio `root`).
    pub fn open_in(root: &Path, path: &ResolvedPath) -> io::Result<Self> {
        if path.is_empty() {
            return Err(io::Error::new(io::ErrorKind::NotFound, "empty path"));
        }

        let mut file = File::open(root.join(path.to_path_buf()))?;
        let len = file_size(&mut file)?;

        Ok(Self { file, len })
    }

    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Envía el archivo completo y lo cierra
    pub fn send_to<S: FileSink>(mut self, sink: &mut S) -> io::Result<u64> {
        sink.send_file(&mut self.file, self.len)
    }
}

/// Tamaño en bytes moviéndose al final y volviendo al inicio
///
/// No usa los metadatos de `stat`.
fn file_size(file: &mut File) -> io::Result<u64> {
    file.seek(SeekFrom::Start(0))?;
    let size = file.seek(SeekFrom::End(0))?;
    file.seek(SeekFrom::Start(0))?;
    Ok(size)
}

/// Escribe la respuesta para `path` en `sink`
///
/// Sin reintentos: si la escritura falla a mitad del archivo se retorna el
/// error y la conexión simplemente se cierra.
///
/// # Ejemplo
/// ```
/// use file_server::http::{respond, Outcome, ResolvedPath, NOT_FOUND_RESPONSE};
/// use std::path::Path;
///
/// let mut out = Vec::new();
/// let outcome = respond(&mut out, Path::new("."), &ResolvedPath::new("no-such-file.txt")).unwrap();
///
/// assert_eq!(outcome, Outcome::NotFound);
/// assert_eq!(out, NOT_FOUND_RESPONSE);
/// ```
pub fn respond<S: FileSink>(sink: &mut S, root: &Path, path: &ResolvedPath) -> io::Result<Outcome> {
    let file = match OpenFile::open_in(root, path) {
        Ok(file) => file,
        Err(e) => {
            warn!("No se pudo encontrar o abrir '{}': {}", path, e);
            sink.write_all(NOT_FOUND_RESPONSE)?;
            return Ok(Outcome::NotFound);
        }
    };

    debug!("Tamaño de '{}': {} bytes", path, file.len());

    let html = path.is_html();
    if html {
        sink.write_all(HTML_HEADER)?;
    }

    let bytes = file.send_to(sink)?;

    Ok(Outcome::Served { bytes, html })
}
