//! Memory hygiene for generated secrets
//!
//! - [`SecretBuffer`]: a fixed-size heap buffer that is locked into RAM
//!   where the OS allows it and zeroed before it is released.
//! - [`disable_core_dumps`]: stop a crash from writing secrets to disk.
//! - [`zeroize_tail`]: wipe everything past the written part of a buffer.
//!
//! Locking and core dump prevention are best effort. Containers and
//! unprivileged users are often not allowed either; failures are logged
//! and generation carries on.

use std::sync::atomic::{AtomicBool, Ordering};

use zeroize::Zeroize;

static CORE_DUMPS_DISABLED: AtomicBool = AtomicBool::new(false);

/// Disable core dumps for the current process.
///
/// Idempotent. Returns `true` if core dumps are off after the call.
pub fn disable_core_dumps() -> bool {
    if CORE_DUMPS_DISABLED.swap(true, Ordering::SeqCst) {
        return true;
    }

    let disabled = platform::disable_core_dumps();
    if !disabled {
        // Allow a later call to retry
        CORE_DUMPS_DISABLED.store(false, Ordering::SeqCst);
    }
    disabled
}

/// Zero `buffer[from..]`. Does nothing if `from` is past the end.
pub fn zeroize_tail(buffer: &mut [u8], from: usize) {
    if let Some(tail) = buffer.get_mut(from..) {
        tail.zeroize();
    }
}

/// Heap buffer for secret output.
///
/// Zero-filled on creation, locked into memory when permitted, and zeroed
/// then unlocked on drop. The length never changes, so the allocation is
/// never moved or reallocated while it holds a secret.
///
/// # Example
/// ```
/// use keyphrase_core::memory::SecretBuffer;
///
/// let mut buf = SecretBuffer::new(16);
/// buf.as_mut_slice()[..5].copy_from_slice(b"hello");
/// assert_eq!(buf.len(), 16);
/// ```
pub struct SecretBuffer {
    data: Box<[u8]>,
    locked: bool,
}

impl SecretBuffer {
    pub fn new(len: usize) -> Self {
        let data = vec![0u8; len].into_boxed_slice();
        let locked = data.is_empty() || platform::lock(&data);
        if !locked {
            log::warn!("Failed to lock {len} bytes of secret memory; it may be swapped to disk");
        }
        Self { data, locked }
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Whether the memory is actually locked.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// The first `written` bytes as text, if they are valid UTF-8.
    pub fn as_str(&self, written: usize) -> Option<&str> {
        std::str::from_utf8(self.data.get(..written)?).ok()
    }
}

impl std::fmt::Debug for SecretBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretBuffer")
            .field("len", &self.data.len())
            .field("locked", &self.locked)
            .finish_non_exhaustive()
    }
}

impl Drop for SecretBuffer {
    fn drop(&mut self) {
        self.data.zeroize();
        if self.locked && !self.data.is_empty() {
            platform::unlock(&self.data);
        }
    }
}

#[cfg(unix)]
mod platform {
    pub fn disable_core_dumps() -> bool {
        let rlim = libc::rlimit {
            rlim_cur: 0,
            rlim_max: 0,
        };
        // SAFETY: setrlimit only reads the struct we pass in
        let result = unsafe { libc::setrlimit(libc::RLIMIT_CORE, &rlim) };
        if result != 0 {
            log::warn!(
                "Failed to disable core dumps: {}",
                std::io::Error::last_os_error()
            );
            return false;
        }
        true
    }

    pub fn lock(data: &[u8]) -> bool {
        // SAFETY: the pointer and length describe a live allocation
        let result = unsafe { libc::mlock(data.as_ptr() as *const libc::c_void, data.len()) };
        if result != 0 {
            log::debug!("mlock failed: {}", std::io::Error::last_os_error());
            return false;
        }
        true
    }

    pub fn unlock(data: &[u8]) {
        // SAFETY: same region that was passed to mlock
        unsafe {
            libc::munlock(data.as_ptr() as *const libc::c_void, data.len());
        }
    }
}

#[cfg(not(unix))]
mod platform {
    pub fn disable_core_dumps() -> bool {
        log::warn!("Core dump prevention is not supported on this platform");
        false
    }

    pub fn lock(_data: &[u8]) -> bool {
        false
    }

    pub fn unlock(_data: &[u8]) {}
}
