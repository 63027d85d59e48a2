//! Conventional file locations inside the bot repository.

use std::path::{Path, PathBuf};

/// Path to the action registry, `<root>/cmd/actions/actions.go`.
pub fn registry_path(root: &Path) -> PathBuf {
    actions_dir(root).join("actions.go")
}

/// Path of the generated file for an action, `<root>/cmd/actions/<name>.go`.
pub fn action_path(root: &Path, name: &str) -> PathBuf {
    actions_dir(root).join(format!("{name}.go"))
}

fn actions_dir(root: &Path) -> PathBuf {
    root.join("cmd").join("actions")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_path() {
        assert_eq!(
            registry_path(Path::new(".")),
            Path::new("./cmd/actions/actions.go")
        );
    }

    #[test]
    fn test_action_path() {
        assert_eq!(
            action_path(Path::new("/bot"), "foo"),
            Path::new("/bot/cmd/actions/foo.go")
        );
    }
}
