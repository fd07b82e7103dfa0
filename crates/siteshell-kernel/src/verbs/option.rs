//! option — read, write, and delete site options.
//!
//! Values are plain strings; the original's `print_r` of array options
//! has no counterpart here.

use siteshell_types::ShellError;

use crate::backend::SiteBackend;

const MENU: &str = "Available option commands:
  get           - Get option value
  update        - Update option value
  delete        - Delete option
";

pub async fn run(args: &[String], backend: &dyn SiteBackend) -> Result<String, ShellError> {
    let Some((action, rest)) = args.split_first() else {
        return Ok(MENU.to_string());
    };

    match action.as_str() {
        "get" => {
            let Some(name) = rest.first() else {
                return Ok("Usage: option get <option-name>\n".to_string());
            };
            match backend.get_option(name).await {
                Some(value) => Ok(format!("{value}\n")),
                None => Ok("Option not found.\n".to_string()),
            }
        }

        "update" => {
            if rest.len() < 2 {
                return Ok("Usage: option update <option-name> <value>\n".to_string());
            }
            backend.update_option(&rest[0], &rest[1]).await;
            Ok("Option updated successfully.\n".to_string())
        }

        "delete" => {
            let Some(name) = rest.first() else {
                return Ok("Usage: option delete <option-name>\n".to_string());
            };
            if backend.delete_option(name).await {
                Ok("Option deleted successfully.\n".to_string())
            } else {
                Ok("Option not found or error deleting.\n".to_string())
            }
        }

        other => Ok(format!("Unknown option command: {other}\n")),
    }
}
