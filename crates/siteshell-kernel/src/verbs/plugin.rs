//! plugin — list, activate, deactivate installed plugins.

use siteshell_types::ShellError;

use crate::backend::{SiteBackend, StoreError};

const MENU: &str = "Available plugin commands:
  list          - List plugins
  activate      - Activate a plugin
  deactivate    - Deactivate a plugin
";

pub async fn run(args: &[String], backend: &dyn SiteBackend) -> Result<String, ShellError> {
    let Some((action, rest)) = args.split_first() else {
        return Ok(MENU.to_string());
    };

    match action.as_str() {
        "list" => {
            let mut out = String::from("Installed plugins:\n\n");
            for plugin in backend.list_plugins().await {
                let status = if plugin.active { "active" } else { "inactive" };
                out.push_str(&format!(
                    "{} ({}) - {}\n",
                    plugin.name, plugin.version, status
                ));
            }
            Ok(out)
        }

        "activate" => {
            let Some(name) = rest.first() else {
                return Ok("Usage: plugin activate <plugin-name>\n".to_string());
            };
            match backend.activate_plugin(name).await {
                Ok(()) => Ok("Plugin activated successfully.\n".to_string()),
                Err(StoreError::NotFound(_)) => Ok("Plugin not found.\n".to_string()),
                Err(err) => Err(ShellError::Domain(err.to_string())),
            }
        }

        "deactivate" => {
            let Some(name) = rest.first() else {
                return Ok("Usage: plugin deactivate <plugin-name>\n".to_string());
            };
            match backend.deactivate_plugin(name).await {
                Ok(()) => Ok("Plugin deactivated successfully.\n".to_string()),
                Err(StoreError::NotFound(_)) => Ok("Plugin not found.\n".to_string()),
                Err(err) => Err(ShellError::Domain(err.to_string())),
            }
        }

        other => Ok(format!("Unknown plugin command: {other}\n")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryBackend;

    fn args(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn no_subverb_prints_menu() {
        let backend = MemoryBackend::new();
        let out = run(&[], &backend).await.unwrap();
        assert!(out.starts_with("Available plugin commands:\n"));
        assert!(out.contains("  deactivate    - Deactivate a plugin\n"));
    }

    #[tokio::test]
    async fn list_formats_one_plugin_per_line() {
        let backend = MemoryBackend::new();
        backend.insert_plugin("Hello Dolly", "1.7.2", false).await;
        backend.insert_plugin("Classic Editor", "1.6.3", true).await;

        let out = run(&args(&["list"]), &backend).await.unwrap();
        assert_eq!(
            out,
            "Installed plugins:\n\nHello Dolly (1.7.2) - inactive\nClassic Editor (1.6.3) - active\n"
        );
    }

    #[tokio::test]
    async fn activate_without_name_is_a_usage_line() {
        let backend = MemoryBackend::new();
        let out = run(&args(&["activate"]), &backend).await.unwrap();
        assert_eq!(out, "Usage: plugin activate <plugin-name>\n");
    }

    #[tokio::test]
    async fn activate_missing_plugin_is_soft() {
        let backend = MemoryBackend::new();
        let out = run(&args(&["activate", "nope"]), &backend).await.unwrap();
        assert_eq!(out, "Plugin not found.\n");
    }

    #[tokio::test]
    async fn unknown_subverb_names_the_subverb() {
        let backend = MemoryBackend::new();
        let out = run(&args(&["install"]), &backend).await.unwrap();
        assert_eq!(out, "Unknown plugin command: install\n");
    }
}
