//! External tool invocation with bounded timeouts.
//!
//! One reusable primitive shared by every acquisition strategy and by the
//! emptiness probe: resolve the tool on the search path, spawn it, capture
//! stdout, and enforce a wall-clock deadline.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;
use std::time::Duration;

use wait_timeout::ChildExt;

/// Result of one external tool invocation. Spawn failures never escape;
/// every call resolves to one of these shapes.
#[derive(Debug)]
pub enum ToolOutput {
    /// The tool ran to completion within the deadline.
    Completed { code: i32, stdout: Vec<u8> },
    /// The tool is not on the search path. No process was spawned.
    Unavailable,
    /// The tool exceeded its deadline and was killed.
    TimedOut,
}

impl ToolOutput {
    /// Stdout of a zero-exit completion, if that is what this is.
    pub fn success_stdout(self) -> Option<Vec<u8>> {
        match self {
            ToolOutput::Completed { code: 0, stdout } => Some(stdout),
            _ => None,
        }
    }
}

/// Locate `tool` among the `PATH` entries, requiring an executable file.
/// No process is spawned.
pub fn resolve(tool: &str) -> Option<PathBuf> {
    let path_var = std::env::var_os("PATH")?;
    for dir in std::env::split_paths(&path_var) {
        if dir.as_os_str().is_empty() {
            continue;
        }
        let candidate = dir.join(tool);
        if is_executable(&candidate) {
            return Some(candidate);
        }
    }
    None
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Run `tool` with `args`, capturing stdout and killing the child if it
/// runs past `timeout`.
pub fn run(tool: &str, args: &[&str], timeout: Duration) -> ToolOutput {
    let Some(program) = resolve(tool) else {
        return ToolOutput::Unavailable;
    };

    let mut child = match Command::new(&program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
    {
        Ok(child) => child,
        Err(err) => {
            log::debug!("spawn of {} failed: {}", tool, err);
            return ToolOutput::Unavailable;
        }
    };

    // Drain stdout on a helper thread so a payload larger than the pipe
    // buffer cannot block the child past the deadline.
    let reader = child.stdout.take().map(|mut pipe| {
        thread::spawn(move || {
            let mut buf = Vec::new();
            let _ = pipe.read_to_end(&mut buf);
            buf
        })
    });

    match child.wait_timeout(timeout) {
        Ok(Some(status)) => {
            let stdout = reader.and_then(|handle| handle.join().ok()).unwrap_or_default();
            ToolOutput::Completed {
                code: status.code().unwrap_or(-1),
                stdout,
            }
        }
        Ok(None) => {
            let _ = child.kill();
            let _ = child.wait();
            // Not joined: a killed child's orphans may hold the pipe open
            // past the deadline; the drain thread finishes on its own.
            drop(reader);
            log::debug!("{} exceeded its {:?} deadline", tool, timeout);
            ToolOutput::TimedOut
        }
        Err(err) => {
            let _ = child.kill();
            let _ = child.wait();
            drop(reader);
            // Surface as a failed completion so the caller's fallback
            // logic still runs.
            log::debug!("wait on {} failed: {}", tool, err);
            ToolOutput::Completed {
                code: -1,
                stdout: Vec::new(),
            }
        }
    }
}
