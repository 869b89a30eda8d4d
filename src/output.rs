//! Output naming and error reporting.

use chrono::{DateTime, Local};
use cj_core::CaptureError;

const DEFAULT_PREFIX: &str = "clipjpg";
const JPEG_SUFFIXES: [&str; 2] = [".jpg", ".jpeg"];

/// Timestamped default filename: local time, microsecond precision, so
/// back-to-back captures never collide.
pub fn default_file_name(now: DateTime<Local>) -> String {
    format!("{DEFAULT_PREFIX}_{}.jpg", now.format("%Y%m%d_%H%M%S_%6f"))
}

/// Resolve the output path. An explicit name gets `.jpg` appended unless
/// it already ends with a JPEG suffix, compared case-insensitively over
/// the whole name. No name means the timestamped default.
pub fn resolve_output_path(output: Option<&str>) -> String {
    match output {
        Some(name) => {
            let lower = name.to_lowercase();
            if JPEG_SUFFIXES.iter().any(|suffix| lower.ends_with(suffix)) {
                name.to_string()
            } else {
                format!("{name}.jpg")
            }
        }
        None => default_file_name(Local::now()),
    }
}

/// The exact stderr line for each failure.
pub fn render_error(err: &CaptureError) -> String {
    match err {
        CaptureError::EmptyClipboard => "error : empty".to_string(),
        CaptureError::NoImageContent => "error: no image".to_string(),
        CaptureError::Save(detail) => format!("error: failed to save file: {detail}"),
        CaptureError::MissingDependency { tool } => missing_dependency_line(tool),
        CaptureError::Other(detail) => format!("error: {detail}"),
    }
}

fn missing_dependency_line(tool: &str) -> String {
    let hint = match tool {
        "xclip" => "Please install xclip (e.g., `sudo apt install xclip`).",
        "wl-paste" => "Please install wl-clipboard (e.g., `sudo apt install wl-clipboard`).",
        "powershell.exe" => "Ensure Windows interop is enabled for this WSL distribution.",
        _ => "Please install it and retry.",
    };
    format!("error: '{tool}' not found. {hint}")
}

#[cfg(test)]
mod tests {
    use super::{default_file_name, render_error, resolve_output_path};
    use cj_core::CaptureError;

    #[test]
    fn bare_name_gets_jpg_appended() {
        assert_eq!(resolve_output_path(Some("result")), "result.jpg");
    }

    #[test]
    fn existing_jpeg_suffix_is_kept_case_insensitively() {
        assert_eq!(resolve_output_path(Some("result.JPEG")), "result.JPEG");
        assert_eq!(resolve_output_path(Some("result.jpg")), "result.jpg");
        assert_eq!(resolve_output_path(Some("result.Jpg")), "result.Jpg");
    }

    #[test]
    fn foreign_suffix_is_appended_to_not_replaced() {
        assert_eq!(resolve_output_path(Some("shot.png")), "shot.png.jpg");
    }

    #[test]
    fn default_name_embeds_a_microsecond_timestamp() {
        let now = chrono::Local::now();
        let name = default_file_name(now);
        assert!(name.starts_with("clipjpg_"));
        assert!(name.ends_with(".jpg"));
        // clipjpg_YYYYMMDD_HHMMSS_ffffff.jpg
        assert_eq!(name.len(), "clipjpg_".len() + 8 + 1 + 6 + 1 + 6 + ".jpg".len());
    }

    #[test]
    fn error_lines_are_exact() {
        assert_eq!(render_error(&CaptureError::EmptyClipboard), "error : empty");
        assert_eq!(render_error(&CaptureError::NoImageContent), "error: no image");
        assert_eq!(
            render_error(&CaptureError::Save("disk full".into())),
            "error: failed to save file: disk full"
        );
        assert_eq!(
            render_error(&CaptureError::Other("boom".into())),
            "error: boom"
        );
    }

    #[test]
    fn missing_dependency_lines_carry_install_hints() {
        let line = render_error(&CaptureError::MissingDependency {
            tool: "xclip".into(),
        });
        assert_eq!(
            line,
            "error: 'xclip' not found. Please install xclip (e.g., `sudo apt install xclip`)."
        );

        let line = render_error(&CaptureError::MissingDependency {
            tool: "wl-paste".into(),
        });
        assert!(line.starts_with("error: 'wl-paste' not found."));
    }
}
