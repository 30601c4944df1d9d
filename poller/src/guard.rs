//! Makes sure only one run is active on the host at a time.
//!
//! On Linux the lock is a datagram socket bound to an abstract address, which the kernel
//! releases when the process exits, however it exits. Elsewhere an advisory lock on a file
//! in the temp directory is used instead. The file itself may outlive the run, only the lock
//! on it counts, and that is dropped by the OS together with the process.

pub const PROCESS_NAME: &str = "bf4_server_status";

#[derive(Debug, thiserror::Error)]
pub enum GuardError {
    #[error("already running")]
    AlreadyRunning,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Held for as long as the run should be considered active.
#[derive(Debug)]
pub struct InstanceGuard {
    _held: Held,
}

/// Only kept to be closed on drop
#[derive(Debug)]
#[allow(dead_code)]
enum Held {
    #[cfg(target_os = "linux")]
    Socket(std::os::unix::net::UnixDatagram),
    File(std::fs::File),
}

#[cfg(target_os = "linux")]
pub fn acquire(name: &str) -> Result<InstanceGuard, GuardError> {
    use std::os::linux::net::SocketAddrExt;

    let addr = std::os::unix::net::SocketAddr::from_abstract_name(name.as_bytes())?;
    match std::os::unix::net::UnixDatagram::bind_addr(&addr) {
        Ok(socket) => {
            tracing::debug!("Acquired instance lock {:?}", name);
            Ok(InstanceGuard {
                _held: Held::Socket(socket),
            })
        }
        Err(e) if e.kind() == std::io::ErrorKind::AddrInUse => Err(GuardError::AlreadyRunning),
        Err(e) => Err(GuardError::Io(e)),
    }
}

#[cfg(not(target_os = "linux"))]
pub fn acquire(name: &str) -> Result<InstanceGuard, GuardError> {
    acquire_file(&std::env::temp_dir().join(format!("{}.lock", name)))
}

/// Takes an exclusive advisory lock on `path`, creating the file if needed.
///
/// A file left behind by a run that was killed does not block, as its lock went away with it.
pub fn acquire_file(path: &std::path::Path) -> Result<InstanceGuard, GuardError> {
    let file = std::fs::OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .open(path)?;

    let mut lock = fd_lock::RwLock::new(file);
    match lock.try_write() {
        // The lock lives as long as the file stays open, not as long as the guard value
        Ok(held) => std::mem::forget(held),
        Err(e) if e.kind() == std::io::ErrorKind::WouldBlock => {
            return Err(GuardError::AlreadyRunning)
        }
        Err(e) => return Err(GuardError::Io(e)),
    }

    tracing::debug!("Acquired instance lock {:?}", path);
    Ok(InstanceGuard {
        _held: Held::File(lock.into_inner()),
    })
}
