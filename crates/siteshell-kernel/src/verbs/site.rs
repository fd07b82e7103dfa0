//! site — show site metadata.

use siteshell_types::ShellError;

use crate::backend::SiteBackend;

const MENU: &str = "Available site commands:
  info          - Show site information
  url           - Show site URL
";

pub async fn run(args: &[String], backend: &dyn SiteBackend) -> Result<String, ShellError> {
    let Some((action, _rest)) = args.split_first() else {
        return Ok(MENU.to_string());
    };

    match action.as_str() {
        "info" => {
            let site = backend.site_info().await;
            Ok(format!(
                "Site Information:\n\n\
                 Site Title: {}\n\
                 Description: {}\n\
                 URL: {}\n\
                 Admin Email: {}\n\
                 Language: {}\n\
                 Software Version: {}\n",
                site.title, site.description, site.url, site.admin_email, site.language,
                site.version
            ))
        }

        "url" => {
            let site = backend.site_info().await;
            Ok(format!("{}\n", site.url))
        }

        other => Ok(format!("Unknown site command: {other}\n")),
    }
}
