//! Process-wide tokio runtime shared by the frontend and the weather service.

use std::sync::OnceLock;

// Static tokio runtime that lives for the duration of the application
static RUNTIME: OnceLock<tokio::runtime::Runtime> = OnceLock::new();

/// Initialize the tokio runtime (call once at application startup).
/// Later calls return the runtime created by the first.
pub fn init_runtime() -> std::io::Result<tokio::runtime::Handle> {
    if let Some(runtime) = RUNTIME.get() {
        return Ok(runtime.handle().clone());
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("skycast-tokio")
        .build()?;

    // Another thread may have won the race; theirs is kept
    let _ = RUNTIME.set(runtime);
    match RUNTIME.get() {
        Some(runtime) => Ok(runtime.handle().clone()),
        None => Err(std::io::Error::other("runtime was not stored")),
    }
}

/// Handle to the shared runtime, if it has been initialized
pub fn get_runtime() -> Option<tokio::runtime::Handle> {
    RUNTIME.get().map(|r| r.handle().clone())
}
