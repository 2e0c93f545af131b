use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

thread_local! {
    static CURRENT_THREAD_ID: u64 = os_thread_id();
}

#[cfg(any(target_os = "linux", target_os = "android"))]
fn os_thread_id() -> u64 {
    // SAFETY: gettid takes no arguments and cannot fail.
    let tid = unsafe { libc::syscall(libc::SYS_gettid) };
    u64::try_from(tid).unwrap_or(0)
}

#[cfg(target_vendor = "apple")]
fn os_thread_id() -> u64 {
    let mut tid: u64 = 0;
    // SAFETY: pthread_self is always a valid thread handle and tid outlives the call.
    match unsafe { libc::pthread_threadid_np(libc::pthread_self(), &mut tid) } {
        0 => tid,
        _ => 0,
    }
}

#[cfg(windows)]
fn os_thread_id() -> u64 {
    // SAFETY: GetCurrentThreadId takes no arguments and cannot fail.
    u64::from(unsafe { windows_sys::Win32::System::Threading::GetCurrentThreadId() })
}

/// Hosts without a numeric thread id get a process local id, starting at 1 so that 0 still means "unknown".
#[cfg(not(any(
    target_os = "linux",
    target_os = "android",
    target_vendor = "apple",
    windows
)))]
fn os_thread_id() -> u64 {
    use std::sync::atomic::{AtomicU64, Ordering};

    static NEXT_THREAD_ID: AtomicU64 = AtomicU64::new(1);
    NEXT_THREAD_ID.fetch_add(1, Ordering::Relaxed)
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
/// Identity of the process and thread that emitted a log message.
pub struct ProcessInfo {
    process_id: u64,
    thread_id: u64,
}

impl ProcessInfo {
    /// Captures the identity of the calling process and thread.
    /// The thread id is the one the operating system reports (`gettid` on Linux,
    /// `pthread_threadid_np` on Apple platforms, `GetCurrentThreadId` on Windows),
    /// read once per thread.
    pub fn current() -> Self {
        Self {
            process_id: u64::from(std::process::id()),
            thread_id: CURRENT_THREAD_ID.with(|id| *id),
        }
    }

    pub fn new(process_id: u64, thread_id: u64) -> Self {
        Self {
            process_id,
            thread_id,
        }
    }

    pub fn get_process_id(&self) -> u64 {
        self.process_id
    }

    pub fn get_thread_id(&self) -> u64 {
        self.thread_id
    }
}

impl Display for ProcessInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.process_id, self.thread_id)
    }
}
