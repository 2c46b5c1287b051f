use std::borrow::Cow;
use std::path::{Component, Path, PathBuf};

/// Slug used when the working directory is the home directory itself.
pub const FALLBACK_SLUG: &str = "home";

/// Lexically normalize a path: drop `.` components, resolve `..` against the
/// preceding component, collapse duplicate separators. Purely textual, no
/// filesystem access.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` at the root stays at the root; `..` at the start of a
                // relative path is kept as-is
                if !normalized.pop() && !normalized.has_root() {
                    normalized.push(Component::ParentDir.as_os_str());
                }
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

/// Derives the project slug for a working directory
///
/// Paths under `home` use the home-relative remainder without its leading
/// separator; everything else keeps the full path. Every separator becomes a
/// hyphen, so paths outside home yield a leading hyphen. An empty result
/// (the home directory itself) falls back to [`FALLBACK_SLUG`].
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use claude_session_tools::project_slug;
///
/// let home = Path::new("/home/alice");
/// assert_eq!(project_slug(Path::new("/home/alice/Prj/claude-server"), home), "Prj-claude-server");
/// assert_eq!(project_slug(Path::new("/tmp/scratch"), home), "-tmp-scratch");
/// assert_eq!(project_slug(home, home), "home");
/// ```
pub fn project_slug(cwd: &Path, home: &Path) -> String {
    let normalized = normalize_path(cwd);
    let relative = match normalized.strip_prefix(home) {
        Ok(rel) => rel,
        Err(_) => normalized.as_path(),
    };

    let slug = relative.to_string_lossy().replace(std::path::MAIN_SEPARATOR, "-");
    if slug.is_empty() { FALLBACK_SLUG.to_string() } else { slug }
}

/// Formats a path with ~ substitution for the home directory
pub fn format_path_with_tilde(path: &Path, home: &Path) -> String {
    let path_str = path.to_string_lossy();
    let home_str = home.to_string_lossy();
    if !home_str.is_empty() && path_str.starts_with(home_str.as_ref()) {
        return path_str.replacen(home_str.as_ref(), "~", 1);
    }

    // Avoid double allocation when converting Cow to String
    match path_str {
        Cow::Borrowed(s) => s.to_string(),
        Cow::Owned(s) => s,
    }
}
