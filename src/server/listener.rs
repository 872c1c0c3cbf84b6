//! # Socket de escucha
//! src/server/listener.rs
//!
//! `std::net::TcpListener::bind` no deja elegir el backlog, así que el
//! socket se arma con `socket2`: `SO_REUSEADDR`, `bind` en `0.0.0.0` y
//! `listen` con backlog 10. El socket resultante se convierte en un
//! `TcpListener` normal para aceptar conexiones.

use crate::error::ServerError;
use socket2::{Domain, Socket, Type};
use std::net::{Ipv4Addr, SocketAddr, TcpListener};

/// Conexiones pendientes que el kernel encola antes de `accept`
pub const LISTEN_BACKLOG: i32 = 10;

/// Crea el socket de escucha en `0.0.0.0:port`
///
/// Cualquier fallo aquí es fatal para el proceso. `port` 0 pide un puerto
/// efímero (útil en tests).
pub fn bind_listener(port: u16) -> Result<TcpListener, ServerError> {
    let socket = Socket::new(Domain::IPV4, Type::STREAM, None).map_err(ServerError::Socket)?;

    socket
        .set_reuse_address(true)
        .map_err(ServerError::SetOption)?;

    let address = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));
    socket
        .bind(&address.into())
        .map_err(|source| ServerError::Bind { port, source })?;

    socket.listen(LISTEN_BACKLOG).map_err(ServerError::Listen)?;

    Ok(socket.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpStream;

    #[test]
    fn test_bind_ephemeral_port_on_any_address() {
        let listener = bind_listener(0).unwrap();
        let addr = listener.local_addr().unwrap();

        assert_ne!(addr.port(), 0);
        assert!(addr.ip().is_unspecified());
    }

    #[test]
    fn test_bound_listener_accepts() {
        let listener = bind_listener(0).unwrap();
        let port = listener.local_addr().unwrap().port();

        let mut client = TcpStream::connect(("127.0.0.1", port)).unwrap();
        client.write_all(b"ping").unwrap();

        let (mut stream, _) = listener.accept().unwrap();
        let mut buf = [0u8; 4];
        stream.read_exact(&mut buf).unwrap();
        assert_eq!(&buf, b"ping");
    }

    #[test]
    fn test_reuse_address_is_set() {
        let listener = bind_listener(0).unwrap();
        let socket = Socket::from(listener);

        assert!(socket.reuse_address().unwrap());
    }

    #[test]
    fn test_port_in_use_is_bind_error() {
        let first = bind_listener(0).unwrap();
        let port = first.local_addr().unwrap().port();

        let err = bind_listener(port).unwrap_err();

        assert!(matches!(err, ServerError::Bind { port: p, .. } if p == port));
        assert_eq!(err.io_error().kind(), std::io::ErrorKind::AddrInUse);
    }
}
