//! # Resolución de Requests
//! src/http/request.rs
//!
//! Convierte los bytes recibidos del cliente en el path de un archivo.
//! Solo importa la request line:
//!
//! ```text
//! GET /path HTTP/1.1\r\n
//! (headers ignorados)
//! ```
//!
//! No hay validación: un request malformado produce un path vacío o basura,
//! que luego falla al abrirse y termina en 404. Tampoco se decodifica
//! `%xx`, ni se quita la query string, ni se normaliza el path (`..` pasa
//! tal cual).

use regex::bytes::Regex;
use std::fmt;
use std::io::{self, Read};
use std::path::PathBuf;
use std::sync::OnceLock;

/// Capacidad del buffer de lectura
pub const REQUEST_BUFFER_SIZE: usize = 2048;

/// Máximo de bytes que se leen: se reserva el último byte del buffer
pub const MAX_REQUEST_LEN: usize = REQUEST_BUFFER_SIZE - 1;

/// Recurso que se sirve cuando se pide `/`
pub const DEFAULT_RESOURCE: &str = "index.html";

/// Prefijo de un request a la raíz sin más path
const ROOT_REQUEST_PREFIX: &[u8] = b"GET / ";

/// `GET`, blancos opcionales, `/`, blancos opcionales y luego la corrida
/// máxima de bytes que no son blancos (semántica de `%s` en scanf).
///
/// Un NUL dentro del token no lo corta: queda en el path y el open falla.
fn request_line_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?-u)\AGET\s*/\s*(\S+)").expect("request line pattern is valid")
    })
}

/// Bytes crudos de un request, llenados con una sola lectura
///
/// Lo que exceda la capacidad se descarta sin error.
#[derive(Clone)]
pub struct RawRequest {
    buffer: [u8; REQUEST_BUFFER_SIZE],
    len: usize,
}

impl RawRequest {
    /// Lee una sola vez del stream (como máximo `MAX_REQUEST_LEN` bytes)
    pub fn read_from<R: Read>(reader: &mut R) -> io::Result<Self> {
        let mut buffer = [0u8; REQUEST_BUFFER_SIZE];
        let len = reader.read(&mut buffer[..MAX_REQUEST_LEN])?;
        Ok(Self { buffer, len })
    }

    /// Construye un request desde bytes, truncando en silencio
    ///
    /// # Ejemplo
    /// ```
    /// use file_server::http::RawRequest;
    ///
    /// let raw = RawRequest::from_bytes(b"GET / HTTP/1.1\r\n\r\n");
    /// assert_eq!(raw.resolve().as_bytes(), b"index.html");
    /// ```
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let len = bytes.len().min(MAX_REQUEST_LEN);
        let mut buffer = [0u8; REQUEST_BUFFER_SIZE];
        buffer[..len].copy_from_slice(&bytes[..len]);
        Self { buffer, len }
    }

    /// Request vacío (el cliente cerró sin enviar nada)
    pub fn empty() -> Self {
        Self::from_bytes(&[])
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// `true` si es un request a `/` sin más path
    pub fn is_root_request(&self) -> bool {
        is_root_request(self.as_bytes())
    }

    /// Atajo para `resolve(self.as_bytes())`
    pub fn resolve(&self) -> ResolvedPath {
        resolve(self.as_bytes())
    }
}

impl fmt::Debug for RawRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawRequest")
            .field("len", &self.len)
            .field("text", &String::from_utf8_lossy(self.as_bytes()))
            .finish()
    }
}

/// Path pedido por el cliente, tal cual aparece en el request
///
/// Se guarda como bytes para no perder nombres que no son UTF-8.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolvedPath(Vec<u8>);

impl ResolvedPath {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Path relativo para el sistema de archivos
    #[cfg(unix)]
    pub fn to_path_buf(&self) -> PathBuf {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        PathBuf::from(OsStr::from_bytes(&self.0))
    }

    /// Path relativo para el sistema de archivos
    #[cfg(not(unix))]
    pub fn to_path_buf(&self) -> PathBuf {
        PathBuf::from(String::from_utf8_lossy(&self.0).into_owned())
    }

    /// `true` si lo que sigue al último `.` es exactamente `html`
    ///
    /// # Ejemplo
    /// ```
    /// use file_server::http::ResolvedPath;
    ///
    /// assert!(ResolvedPath::new("index.html").is_html());
    /// assert!(!ResolvedPath::new("INDEX.HTML").is_html());
    /// assert!(!ResolvedPath::new("page.htm").is_html());
    /// ```
    pub fn is_html(&self) -> bool {
        is_html(&self.0)
    }
}

impl fmt::Display for ResolvedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}

/// Extrae el path pedido de un request crudo
///
/// 1. Si empieza con `GET / ` se usa `index.html`.
/// 2. Si no, se toma el token que sigue a `GET /` hasta el primer blanco.
/// 3. Si nada coincide el resultado es un path vacío.
///
/// # Ejemplo
/// ```
/// use file_server::http::request::resolve;
///
/// assert_eq!(resolve(b"GET / HTTP/1.1\r\n\r\n").as_bytes(), b"index.html");
/// assert_eq!(resolve(b"GET /img/logo.png HTTP/1.1\r\n").as_bytes(), b"img/logo.png");
/// assert!(resolve(b"XYZ garbage\r\n\r\n").is_empty());
/// ```
pub fn resolve(raw: &[u8]) -> ResolvedPath {
    if is_root_request(raw) {
        return ResolvedPath::new(DEFAULT_RESOURCE);
    }

    request_line_pattern()
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .map(|token| ResolvedPath::new(token.as_bytes()))
        .unwrap_or_default()
}

/// Los primeros seis bytes son exactamente `GET / `
pub fn is_root_request(raw: &[u8]) -> bool {
    raw.starts_with(ROOT_REQUEST_PREFIX)
}

/// Compara la extensión (lo que sigue al último `.`) con `html`
pub fn is_html(path: &[u8]) -> bool {
    match path.iter().rposition(|&b| b == b'.') {
        Some(dot) => &path[dot + 1..] == b"html",
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Root ====================

    #[test]
    fn test_root_resolves_to_index() {
        assert_eq!(resolve(b"GET / HTTP/1.1\r\n\r\n").as_bytes(), b"index.html");
    }

    #[test]
    fn test_root_http10_resolves_to_index() {
        assert_eq!(resolve(b"GET / HTTP/1.0\r\nHost: x\r\n\r\n").as_bytes(), b"index.html");
    }

    #[test]
    fn test_root_request_detection() {
        assert!(RawRequest::from_bytes(b"GET / HTTP/1.1\r\n").is_root_request());
        assert!(!RawRequest::from_bytes(b"GET /index.html HTTP/1.1\r\n").is_root_request());
        assert!(!RawRequest::from_bytes(b"GET /\r\n").is_root_request());
    }

    #[test]
    fn test_root_prefix_only_needs_six_bytes() {
        assert_eq!(resolve(b"GET / ").as_bytes(), b"index.html");
    }

    // ==================== Tokens ====================

    #[test]
    fn test_simple_token() {
        assert_eq!(resolve(b"GET /missing.txt HTTP/1.1\r\n\r\n").as_bytes(), b"missing.txt");
    }

    #[test]
    fn test_nested_token() {
        assert_eq!(resolve(b"GET /css/site.css HTTP/1.1\r\n").as_bytes(), b"css/site.css");
    }

    #[test]
    fn test_no_percent_decoding() {
        assert_eq!(resolve(b"GET /a%20b.html HTTP/1.1\r\n").as_bytes(), b"a%20b.html");
    }

    #[test]
    fn test_query_string_kept() {
        assert_eq!(resolve(b"GET /page.html?x=1 HTTP/1.1\r\n").as_bytes(), b"page.html?x=1");
    }

    #[test]
    fn test_traversal_not_sanitized() {
        assert_eq!(resolve(b"GET /../secret HTTP/1.1\r\n").as_bytes(), b"../secret");
    }

    #[test]
    fn test_token_stops_at_tab() {
        assert_eq!(resolve(b"GET /file\tHTTP/1.1\r\n").as_bytes(), b"file");
    }

    #[test]
    fn test_nul_byte_stays_in_token() {
        let path = resolve(b"GET /a.txt\0junk HTTP/1.1\r\n");
        assert_eq!(path.as_bytes(), b"a.txt\0junk");
    }

    #[test]
    fn test_non_utf8_token_preserved() {
        assert_eq!(resolve(b"GET /caf\xe9.txt HTTP/1.1\r\n").as_bytes(), b"caf\xe9.txt");
    }

    #[test]
    fn test_missing_version_still_yields_token() {
        assert_eq!(resolve(b"GET /notes.txt").as_bytes(), b"notes.txt");
    }

    // ==================== Malformed ====================

    #[test]
    fn test_garbage_resolves_empty() {
        assert!(resolve(b"XYZ garbage\r\n\r\n").is_empty());
    }

    #[test]
    fn test_post_resolves_empty() {
        assert!(resolve(b"POST /form HTTP/1.1\r\n\r\n").is_empty());
    }

    #[test]
    fn test_empty_request_resolves_empty() {
        assert!(resolve(b"").is_empty());
    }

    #[test]
    fn test_pattern_is_anchored() {
        assert!(resolve(b"xGET /a.html HTTP/1.1\r\n").is_empty());
    }

    // ==================== is_html ====================

    #[test]
    fn test_is_html() {
        assert!(is_html(b"index.html"));
        assert!(is_html(b"docs/a.b.html"));
        assert!(!is_html(b"index.HTML"));
        assert!(!is_html(b"logo.png"));
        assert!(!is_html(b"html"));
        assert!(!is_html(b"index.html.bak"));
        assert!(!is_html(b""));
    }

    #[test]
    fn test_is_html_uses_last_dot_of_whole_path() {
        assert!(!is_html(b"site.html/readme"));
    }

    // ==================== RawRequest ====================

    #[test]
    fn test_raw_request_truncates_silently() {
        let big = vec![b'a'; REQUEST_BUFFER_SIZE * 2];
        let raw = RawRequest::from_bytes(&big);
        assert_eq!(raw.len(), MAX_REQUEST_LEN);
    }

    #[test]
    fn test_raw_request_single_read() {
        let data = b"GET /a.txt HTTP/1.1\r\n\r\n";
        let mut reader: &[u8] = data;
        let raw = RawRequest::read_from(&mut reader).unwrap();
        assert_eq!(raw.as_bytes(), data);
        assert_eq!(raw.resolve().as_bytes(), b"a.txt");
    }

    #[test]
    fn test_raw_request_long_token_truncated_at_buffer() {
        let mut data = b"GET /".to_vec();
        data.extend(std::iter::repeat(b'x').take(4000));
        let mut reader: &[u8] = &data;
        let raw = RawRequest::read_from(&mut reader).unwrap();

        let path = raw.resolve();
        assert_eq!(path.as_bytes().len(), MAX_REQUEST_LEN - 5);
    }

    #[test]
    fn test_empty_raw_request() {
        let raw = RawRequest::empty();
        assert!(raw.is_empty());
        assert!(raw.resolve().is_empty());
    }
}
