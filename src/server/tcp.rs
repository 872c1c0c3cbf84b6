//! # Servidor TCP Concurrente
//! src/server/tcp.rs
//!
//! El thread principal solo acepta conexiones. Cada conexión aceptada se
//! mueve a su propio thread, que lee el request, responde y cierra. Los
//! threads no comparten estado mutable entre sí ni con el loop de accept:
//! cada uno recibe su stream y una copia del document root.
//!
//! No hay límite de threads ni timeouts: un cliente que nunca envía nada
//! mantiene su thread bloqueado en `read` indefinidamente.

use super::listener::{bind_listener, LISTEN_BACKLOG};
use crate::config::Config;
use crate::error::ServerError;
use crate::http::{respond, Outcome, RawRequest, DEFAULT_RESOURCE};
use log::{debug, error, info, warn};
use std::io;
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::path::{Path, PathBuf};
use std::thread;

/// Servidor de archivos: un thread por conexión
pub struct Server {
    config: Config,
    root: PathBuf,
    listener: TcpListener,
}

impl Server {
    /// Enlaza el socket y sirve archivos del directorio de trabajo
    pub fn bind(config: Config) -> Result<Self, ServerError> {
        Self::with_root(config, ".")
    }

    /// Enlaza el socket y sirve archivos relativos a `root`
    pub fn with_root(config: Config, root: impl Into<PathBuf>) -> Result<Self, ServerError> {
        info!("[*] Iniciando servidor en {}", config.address());

        let listener = bind_listener(config.port)?;
        let root = root.into();

        match listener.local_addr() {
            Ok(addr) => info!("[+] Servidor escuchando en {} (backlog {})", addr, LISTEN_BACKLOG),
            Err(_) => info!("[+] Servidor escuchando en {} (backlog {})", config.address(), LISTEN_BACKLOG),
        }
        info!("[*] Modo concurrente: un thread por conexion, root {}", root.display());

        Ok(Self { config, root, listener })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Dirección real del socket (útil cuando se pidió el puerto 0)
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Loop de accept. No retorna.
    ///
    /// Un `accept` fallido se registra y el loop sigue.
    pub fn run(&self) -> ! {
        loop {
            match self.listener.accept() {
                Ok((stream, peer)) => self.dispatch(stream, peer),
                Err(e) => error!("   ❌ Error al aceptar conexión: {}", e),
            }
        }
    }

    /// Mueve la conexión a un thread nuevo y retorna de inmediato
    pub fn dispatch(&self, stream: TcpStream, peer: SocketAddr) {
        info!(" ✅ Nueva conexión desde: {} (spawning thread)", peer);

        let root = self.root.clone();
        let spawned = thread::Builder::new()
            .name(format!("conn-{}", peer))
            .spawn(move || match handle_connection(stream, &root) {
                Ok(outcome) => log_outcome(peer, outcome),
                Err(e) => warn!("   ❌ Error en thread ({}): {}", peer, e),
            });

        // El stream se perdió con el closure: la conexión queda cerrada
        if let Err(e) = spawned {
            error!("   ❌ No se pudo crear thread para {}: {}", peer, e);
        }
    }
}

/// Atiende una conexión completa: una lectura, una respuesta, cierre
///
/// Un error de lectura se trata como request vacío (termina en 404). Los
/// errores de escritura se retornan sin reintentar; el stream se cierra al
/// salir en cualquier caso.
pub fn handle_connection(mut stream: TcpStream, root: &Path) -> io::Result<Outcome> {
    let raw = match RawRequest::read_from(&mut stream) {
        Ok(raw) => raw,
        Err(e) => {
            warn!("   ❌ Error leyendo request: {}", e);
            RawRequest::empty()
        }
    };

    debug!("   {} bytes:\n{}", raw.len(), String::from_utf8_lossy(raw.as_bytes()));

    let path = raw.resolve();
    if raw.is_root_request() {
        info!("   No se especificó archivo, probando {}", DEFAULT_RESOURCE);
    } else {
        info!("   Archivo pedido: '{}'", path);
    }

    respond(&mut stream, root, &path)
}

fn log_outcome(peer: SocketAddr, outcome: Outcome) {
    match outcome {
        Outcome::Served { bytes, html } => info!(
            "   ✅ {} -> {} ({} bytes{})",
            peer,
            outcome.status(),
            bytes,
            if html { ", html" } else { "" }
        ),
        Outcome::NotFound => info!("   ✅ {} -> {}", peer, outcome.status()),
    }
}
