//! help — the command reference.

const HELP_TEXT: &str = "\
Available commands:

System:
  clear/cls         Clear the screen

plugin
  list              List installed plugins
  activate          Activate a plugin
  deactivate        Deactivate a plugin

theme
  list              List installed themes
  activate          Activate a theme

user
  list              List users
  create            Create a new user
  delete            Delete a user

post
  list              List posts
  create            Create a new post
  delete            Delete a post

option
  get               Get option value
  update            Update option value
  delete            Delete option

site
  info              Show site information
  url               Show site URL
";

/// The full help text shown by the `help` verb.
pub fn text() -> &'static str {
    HELP_TEXT
}
