use std::path::{Path, PathBuf};

/// Expand `~`, `$VAR` and `${VAR}` in a path.
///
/// Falls back to the input unchanged when a variable is undefined.
pub fn expand_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    shellexpand::full(raw.as_ref())
        .map(|s| PathBuf::from(s.into_owned()))
        .unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_tilde_when_expand_then_starts_with_home() {
        let home = std::env::var("HOME").expect("HOME should be set");
        let expanded = expand_path(Path::new("~/paysplit.toml"));
        assert!(expanded.starts_with(&home), "{}", expanded.display());
    }

    #[test]
    fn given_undefined_var_when_expand_then_unchanged() {
        let p = Path::new("$PAYSPLIT_SURELY_UNDEFINED_VAR/x.toml");
        assert_eq!(expand_path(p), p.to_path_buf());
    }
}
