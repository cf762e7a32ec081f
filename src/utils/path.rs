//! Turn user-supplied paths (`--file`, `--out`, `--config`) into absolute ones.

use std::path::PathBuf;

/// Expand a leading `~` and resolve relative paths against the working
/// directory. Falls back to the path as given when neither is available.
pub fn absolutize(path: &str) -> PathBuf {
    let p = match path.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with(['/', '\\']) => {
            match dirs::home_dir() {
                Some(home) => home.join(rest.trim_start_matches(['/', '\\'])),
                None => PathBuf::from(path),
            }
        }
        _ => PathBuf::from(path),
    };

    if p.is_absolute() {
        return p;
    }

    match std::env::current_dir() {
        Ok(cwd) => cwd.join(p),
        Err(_) => p,
    }
}
