//! # Transferencia de archivos
//! src/http/transfer.rs
//!
//! En Linux el contenido del archivo se pasa del descriptor del archivo al
//! del socket con `sendfile(2)`, sin copiarlo a memoria de usuario. En el
//! resto de destinos se usa `io::copy`.

use std::fs::File;
use std::io::{self, Read, Write};
use std::net::TcpStream;

/// Destino al que el Responder puede volcar un archivo completo
pub trait FileSink: Write {
    /// Envía `len` bytes de `file` desde su posición actual
    ///
    /// Retorna cuántos bytes se enviaron realmente (menos que `len` si el
    /// archivo se acortó mientras tanto).
    fn send_file(&mut self, file: &mut File, len: u64) -> io::Result<u64> {
        io::copy(&mut file.take(len), self)
    }
}

impl FileSink for Vec<u8> {}

#[cfg(not(target_os = "linux"))]
impl FileSink for TcpStream {}

#[cfg(target_os = "linux")]
impl FileSink for TcpStream {
    fn send_file(&mut self, file: &mut File, len: u64) -> io::Result<u64> {
        use std::os::unix::io::AsRawFd;

        sendfile_all(self.as_raw_fd(), file.as_raw_fd(), len)
    }
}

/// Límite de bytes por llamada que acepta el kernel (0x7ffff000)
#[cfg(target_os = "linux")]
const MAX_SENDFILE_CHUNK: u64 = 0x7fff_f000;

/// Llama a `sendfile(2)` hasta completar `len` o agotar el archivo
#[cfg(target_os = "linux")]
fn sendfile_all(out_fd: libc::c_int, in_fd: libc::c_int, len: u64) -> io::Result<u64> {
    let mut sent: u64 = 0;

    while sent < len {
        let chunk = (len - sent).min(MAX_SENDFILE_CHUNK) as usize;

        // SAFETY: ambos descriptores pertenecen a objetos vivos durante la
        // llamada; offset nulo usa y avanza la posición del archivo.
        let n = unsafe { libc::sendfile(out_fd, in_fd, std::ptr::null_mut(), chunk) };

        if n < 0 {
            let err = io::Error::last_os_error();
            if err.kind() == io::ErrorKind::Interrupted {
                continue;
            }
            return Err(err);
        }

        if n == 0 {
            // EOF: el archivo es más corto de lo esperado
            break;
        }

        sent += n as u64;
    }

    Ok(sent)
}
