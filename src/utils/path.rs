//! Path utilities: expand ~ in user-supplied database paths.

use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_paths_pass_through() {
        assert_eq!(expand_tilde("/tmp/clientes.sqlite"), PathBuf::from("/tmp/clientes.sqlite"));
        assert_eq!(expand_tilde("clientes.sqlite"), PathBuf::from("clientes.sqlite"));
    }

    #[test]
    fn tilde_prefix_is_expanded() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~/clientes.sqlite"), home.join("clientes.sqlite"));
        }
    }
}
