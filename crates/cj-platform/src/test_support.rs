//! Shared test fixtures: fake external tools and process-env isolation.

use std::ffi::OsString;
use std::path::Path;
use std::sync::{Mutex, MutexGuard, OnceLock};

/// Vars a sandbox saves and restores. The display vars are cleared so the
/// native grab cannot reach a real clipboard during tests.
const SANDBOXED_VARS: [&str; 4] = ["PATH", "DISPLAY", "WAYLAND_DISPLAY", "XDG_SESSION_TYPE"];

pub(crate) fn env_lock() -> MutexGuard<'static, ()> {
    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    ENV_LOCK.get_or_init(|| Mutex::new(())).lock().unwrap()
}

/// Write an executable shell script standing in for an external tool.
pub(crate) fn write_exe(path: &Path, body: &str) {
    use std::os::unix::fs::PermissionsExt;
    std::fs::write(path, body).unwrap();
    let mut perm = std::fs::metadata(path).unwrap().permissions();
    perm.set_mode(0o755);
    std::fs::set_permissions(path, perm).unwrap();
}

/// Point `PATH` at a single directory of fake tools and clear the display
/// variables. Holds the env lock; restores everything on drop.
pub(crate) struct ToolSandbox {
    _lock: MutexGuard<'static, ()>,
    saved: Vec<(&'static str, Option<OsString>)>,
}

impl ToolSandbox {
    pub(crate) fn new(tool_dir: &Path) -> Self {
        let lock = env_lock();
        let saved = SANDBOXED_VARS
            .iter()
            .map(|&key| (key, std::env::var_os(key)))
            .collect();

        std::env::set_var("PATH", tool_dir);
        for key in &SANDBOXED_VARS[1..] {
            std::env::remove_var(key);
        }

        Self { _lock: lock, saved }
    }
}

impl Drop for ToolSandbox {
    fn drop(&mut self) {
        for (key, value) in self.saved.drain(..) {
            match value {
                Some(v) => std::env::set_var(key, v),
                None => std::env::remove_var(key),
            }
        }
    }
}

/// A small PNG generated through the codec, for fake tools to serve.
pub(crate) fn png_fixture(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([x as u8, y as u8, 0x40])
    });
    let mut buf = std::io::Cursor::new(Vec::new());
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut buf, image::ImageFormat::Png)
        .unwrap();
    buf.into_inner()
}
