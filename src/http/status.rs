//! # Códigos de Estado HTTP
//!
//! El servidor solo produce dos respuestas: el archivo pedido (200) o la
//! página fija de error (404).

/// Versión que se anuncia en la status line
pub const HTTP_VERSION: &str = "HTTP/1.1";

/// Códigos de estado que puede emitir el servidor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK - El archivo existe y se envía
    Ok = 200,

    /// 404 Not Found - No se pudo abrir el archivo
    NotFound = 404,
}

impl StatusCode {
    /// Convierte el código a su valor numérico
    ///
    /// # Ejemplo
    /// ```
    /// use file_server::http::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// ```
    pub fn as_u16(&self) -> u16 {
        *self as u16
    }

    /// Texto de razón asociado al código
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NotFound => "Not Found",
        }
    }

    /// Status line terminada en `\n` (sin `\r`)
    ///
    /// # Ejemplo
    /// ```
    /// use file_server::http::StatusCode;
    /// assert_eq!(StatusCode::NotFound.status_line(), "HTTP/1.1 404 Not Found\n");
    /// ```
    pub fn status_line(&self) -> String {
        format!("{} {}\n", HTTP_VERSION, self)
    }
}

impl std::fmt::Display for StatusCode {
    /// Formato: "200 OK"
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.as_u16(), self.reason_phrase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_values() {
        assert_eq!(StatusCode::Ok.as_u16(), 200);
        assert_eq!(StatusCode::NotFound.as_u16(), 404);
    }

    #[test]
    fn test_display() {
        assert_eq!(StatusCode::Ok.to_string(), "200 OK");
        assert_eq!(StatusCode::NotFound.to_string(), "404 Not Found");
    }

    #[test]
    fn test_status_line_uses_bare_newline() {
        assert_eq!(StatusCode::Ok.status_line(), "HTTP/1.1 200 OK\n");
        assert!(!StatusCode::Ok.status_line().contains('\r'));
    }
}
