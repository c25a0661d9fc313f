//! Pure classification of source files into destination subdirectories

use std::path::{Path, PathBuf};

/// Destination subdirectory used for files without an extension.
///
/// Joining an empty path segment is a no-op on `Path`, which would silently
/// drop extensionless files into the destination root, so a literal sentinel
/// name is used instead.
pub const NO_EXTENSION_DIR: &str = "noext";

/// Extension key for a source file.
///
/// The key is the text after the final dot of the file name, lowercased, with
/// stray leading or trailing dots stripped. It is empty when the name carries
/// no extension; dotfiles like `.bashrc` and trailing-dot names like `name.`
/// both yield the empty key.
pub fn extension_key(source_file: &Path) -> String {
    source_file
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .map(|ext| ext.trim_matches('.').to_string())
        .unwrap_or_default()
}

/// Destination subdirectory for one source file.
///
/// Appends the extension key (or [`NO_EXTENSION_DIR`] for an empty key) to
/// the destination root as a single path segment. Pure and deterministic;
/// performs no I/O and never fails. The result depends only on the file's
/// name, never on its location in the source tree.
pub fn destination_subdir(source_file: &Path, destination_root: &Path) -> PathBuf {
    let key = extension_key(source_file);
    if key.is_empty() {
        destination_root.join(NO_EXTENSION_DIR)
    } else {
        destination_root.join(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_extension() {
        assert_eq!(extension_key(Path::new("notes.txt")), "txt");
    }

    #[test]
    fn test_extension_is_lowercased() {
        assert_eq!(extension_key(Path::new("photo.JPG")), "jpg");
        assert_eq!(extension_key(Path::new("Mixed.TxT")), "txt");
    }

    #[test]
    fn test_last_dot_wins() {
        assert_eq!(extension_key(Path::new("archive.tar.gz")), "gz");
    }

    #[test]
    fn test_no_extension() {
        assert_eq!(extension_key(Path::new("Makefile")), "");
    }

    #[test]
    fn test_dotfile_has_no_extension() {
        assert_eq!(extension_key(Path::new(".bashrc")), "");
    }

    #[test]
    fn test_dotfile_with_extension() {
        assert_eq!(extension_key(Path::new(".config.yml")), "yml");
    }

    #[test]
    fn test_trailing_dot_yields_empty_key() {
        assert_eq!(extension_key(Path::new("name.")), "");
    }

    #[test]
    fn test_key_ignores_parent_directories() {
        assert_eq!(extension_key(Path::new("a/b.c/d/report.pdf")), "pdf");
    }

    #[test]
    fn test_destination_subdir_with_extension() {
        let subdir = destination_subdir(Path::new("src/notes.txt"), Path::new("dest"));
        assert_eq!(subdir, PathBuf::from("dest/txt"));
    }

    #[test]
    fn test_destination_subdir_without_extension() {
        let subdir = destination_subdir(Path::new("src/Makefile"), Path::new("dest"));
        assert_eq!(subdir, PathBuf::from("dest").join(NO_EXTENSION_DIR));
    }

    #[test]
    fn test_destination_subdir_depends_only_on_file_name() {
        let shallow = destination_subdir(Path::new("a.log"), Path::new("dest"));
        let deep = destination_subdir(Path::new("x/y/z/a.log"), Path::new("dest"));
        assert_eq!(shallow, deep);
    }
}
