//! theme — list installed themes, switch the active one.

use siteshell_types::ShellError;

use crate::backend::{SiteBackend, StoreError};

const MENU: &str = "Available theme commands:
  list          - List themes
  activate      - Activate a theme
";

pub async fn run(args: &[String], backend: &dyn SiteBackend) -> Result<String, ShellError> {
    let Some((action, rest)) = args.split_first() else {
        return Ok(MENU.to_string());
    };

    match action.as_str() {
        "list" => {
            let mut out = String::from("Installed themes:\n\n");
            for theme in backend.list_themes().await {
                let status = if theme.active { "active" } else { "inactive" };
                out.push_str(&format!("{} ({}) - {}\n", theme.name, theme.version, status));
            }
            Ok(out)
        }

        "activate" => {
            let Some(name) = rest.first() else {
                return Ok("Usage: theme activate <theme-name>\n".to_string());
            };
            match backend.activate_theme(name).await {
                Ok(()) => Ok("Theme activated successfully.\n".to_string()),
                Err(StoreError::NotFound(_)) => Ok("Theme not found.\n".to_string()),
                Err(err) => Err(ShellError::Domain(err.to_string())),
            }
        }

        other => Ok(format!("Unknown theme command: {other}\n")),
    }
}
