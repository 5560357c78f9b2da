/*!
 * Utility functions for srcdump
 */

use std::path::{Component, Path};

/// Render a relative path with `/` separators on every platform
pub fn path_label(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Bare name of a path, or its lossy display when it has none (e.g. `/`)
pub fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

/// Format a human-readable file size
pub fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{} bytes", size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_path_label() {
        let path: PathBuf = ["src", "nested", "mod.rs"].iter().collect();
        assert_eq!(path_label(&path), "src/nested/mod.rs");
        assert_eq!(path_label(Path::new("./a.txt")), "a.txt");
        assert_eq!(path_label(Path::new("a.txt")), "a.txt");
    }

    #[test]
    fn test_base_name() {
        assert_eq!(base_name(Path::new("/home/user/project")), "project");
        assert_eq!(base_name(Path::new("/")), "/");
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(512), "512 bytes");
        assert_eq!(format_file_size(2048), "2.00 KB");
        assert_eq!(format_file_size(3 * 1024 * 1024), "3.00 MB");
    }
}
