//! user — list, create, and delete users.

use siteshell_types::ShellError;

use crate::backend::{NewUser, SiteBackend, StoreError};

const MENU: &str = "Available user commands:
  list          - List users
  create        - Create a new user
  delete        - Delete a user
";

/// Role assigned when `user create` omits the optional fourth argument.
pub const DEFAULT_ROLE: &str = "subscriber";

pub async fn run(args: &[String], backend: &dyn SiteBackend) -> Result<String, ShellError> {
    let Some((action, rest)) = args.split_first() else {
        return Ok(MENU.to_string());
    };

    match action.as_str() {
        "list" => {
            let mut out = String::from("Users:\n\n");
            for user in backend.list_users().await {
                out.push_str(&format!(
                    "{} ({}) - {}\n",
                    user.login,
                    user.email,
                    user.roles.join(", ")
                ));
            }
            Ok(out)
        }

        "create" => {
            if rest.len() < 3 {
                return Ok("Usage: user create <username> <email> <password> [role]\n".to_string());
            }
            let user = NewUser {
                login: rest[0].clone(),
                email: rest[1].clone(),
                password: rest[2].clone(),
                role: rest
                    .get(3)
                    .cloned()
                    .unwrap_or_else(|| DEFAULT_ROLE.to_string()),
            };
            match backend.create_user(user).await {
                Ok(_) => Ok("User created successfully.\n".to_string()),
                Err(err) => Err(ShellError::Domain(format!("Error creating user: {err}"))),
            }
        }

        "delete" => {
            let Some(login) = rest.first() else {
                return Ok("Usage: user delete <username>\n".to_string());
            };
            match backend.delete_user(login).await {
                Ok(()) => Ok("User deleted successfully.\n".to_string()),
                Err(StoreError::NotFound(_)) => Ok("User not found.\n".to_string()),
                Err(err) => Err(ShellError::Domain(err.to_string())),
            }
        }

        other => Ok(format!("Unknown user command: {other}\n")),
    }
}
