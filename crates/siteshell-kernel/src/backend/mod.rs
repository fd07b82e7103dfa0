//! Domain collaborators behind the verb handlers.
//!
//! The shell itself knows nothing about how plugins, themes, users,
//! posts, or options are stored. Verb handlers go through the
//! [`SiteBackend`] trait; the standalone binary and the tests use the
//! in-memory implementation, an embedding host supplies its own.

mod memory;

use async_trait::async_trait;
use thiserror::Error;

pub use memory::MemoryBackend;

/// Result type for backend operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Backend operation errors.
///
/// `NotFound` is usually rendered as soft output ("Plugin not found."),
/// while create failures surface as failure-kind results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("{0}")]
    Invalid(String),
}

/// An installed plugin as reported by `plugin list`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginInfo {
    pub name: String,
    pub version: String,
    pub active: bool,
}

/// An installed theme as reported by `theme list`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeInfo {
    pub name: String,
    pub version: String,
    pub active: bool,
}

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: u64,
    pub login: String,
    pub email: String,
    pub roles: Vec<String>,
}

/// Fields for `user create`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub login: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

/// A content entry as reported by `post list`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRecord {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub status: String,
}

/// Fields for `post create`. New posts are published immediately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
}

/// Site metadata shown by `site info`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteInfo {
    pub title: String,
    pub description: String,
    pub url: String,
    pub admin_email: String,
    pub language: String,
    pub version: String,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            title: "Example Site".to_string(),
            description: "Just another site".to_string(),
            url: "https://example.test".to_string(),
            admin_email: "admin@example.test".to_string(),
            language: "en-US".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// The domain operations the verb surface needs. Nothing more.
#[async_trait]
pub trait SiteBackend: Send + Sync {
    /// List installed plugins in listing order.
    async fn list_plugins(&self) -> Vec<PluginInfo>;

    /// Activate a plugin, matched by name case-insensitively.
    async fn activate_plugin(&self, name: &str) -> StoreResult<()>;

    /// Deactivate a plugin, matched by name case-insensitively.
    async fn deactivate_plugin(&self, name: &str) -> StoreResult<()>;

    /// List installed themes in listing order.
    async fn list_themes(&self) -> Vec<ThemeInfo>;

    /// Switch the active theme, matched by name exactly.
    async fn activate_theme(&self, name: &str) -> StoreResult<()>;

    /// List users in listing order.
    async fn list_users(&self) -> Vec<UserRecord>;

    /// Create a user, returning its id.
    async fn create_user(&self, user: NewUser) -> StoreResult<u64>;

    /// Delete a user by login name.
    async fn delete_user(&self, login: &str) -> StoreResult<()>;

    /// List posts in listing order.
    async fn list_posts(&self) -> Vec<PostRecord>;

    /// Create a post, returning its id.
    async fn create_post(&self, post: NewPost) -> StoreResult<u64>;

    /// Delete a post by id.
    async fn delete_post(&self, id: u64) -> StoreResult<()>;

    /// Read an option value, if set.
    async fn get_option(&self, name: &str) -> Option<String>;

    /// Create or overwrite an option value.
    async fn update_option(&self, name: &str, value: &str);

    /// Delete an option. Returns false when it was not set.
    async fn delete_option(&self, name: &str) -> bool;

    /// Site metadata.
    async fn site_info(&self) -> SiteInfo;
}
