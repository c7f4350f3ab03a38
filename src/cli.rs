// src/cli.rs - Command-line argument parsing

use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Default, Parser)]
#[command(name = "wren")]
#[command(version = "0.1.0")]
#[command(about = "A small Emacs-flavored terminal text editor")]
pub struct CliArgs {
    /// File to open; omit it to start on the help buffer
    pub file: Option<PathBuf>,
}

impl CliArgs {
    /// Check if the provided path is a directory (following symlinks).
    pub fn is_directory(&self) -> bool {
        if let Some(path) = &self.file {
            std::fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false)
        } else {
            false
        }
    }
}

pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_no_args() {
        let args = CliArgs::parse_from(["wren"]);
        assert!(args.file.is_none());
        assert!(!args.is_directory());
    }

    #[test]
    fn test_parse_file_arg() {
        let args = CliArgs::parse_from(["wren", "notes.txt"]);
        assert_eq!(args.file, Some(PathBuf::from("notes.txt")));
    }

    #[test]
    fn test_directory_detection() {
        let dir = TempDir::new().unwrap();
        let args = CliArgs {
            file: Some(dir.path().to_path_buf()),
        };
        assert!(args.is_directory());

        let missing = CliArgs {
            file: Some(PathBuf::from("/nonexistent/path")),
        };
        assert!(!missing.is_directory());
    }
}
