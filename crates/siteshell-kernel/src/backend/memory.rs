//! In-memory site backend.
//!
//! Holds all domain state behind one `RwLock`. Used by the standalone
//! binary (seeded via [`MemoryBackend::demo`]) and throughout the
//! tests; no operation holds the lock across an await point.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{
    NewPost, NewUser, PluginInfo, PostRecord, SiteBackend, SiteInfo, StoreError, StoreResult,
    ThemeInfo, UserRecord,
};

#[derive(Debug, Clone)]
struct ThemeRow {
    name: String,
    version: String,
}

#[derive(Debug)]
struct State {
    plugins: Vec<PluginInfo>,
    themes: Vec<ThemeRow>,
    active_theme: Option<String>,
    users: Vec<UserRecord>,
    next_user_id: u64,
    posts: Vec<PostRecord>,
    next_post_id: u64,
    options: HashMap<String, String>,
    site: SiteInfo,
}

impl Default for State {
    fn default() -> Self {
        Self {
            plugins: Vec::new(),
            themes: Vec::new(),
            active_theme: None,
            users: Vec::new(),
            next_user_id: 1,
            posts: Vec::new(),
            next_post_id: 1,
            options: HashMap::new(),
            site: SiteInfo::default(),
        }
    }
}

/// A `SiteBackend` backed by in-process state.
pub struct MemoryBackend {
    state: RwLock<State>,
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBackend {
    /// Create an empty backend with default site metadata.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(State::default()),
        }
    }

    /// Create a backend with the given site metadata.
    pub fn with_site(site: SiteInfo) -> Self {
        Self {
            state: RwLock::new(State {
                site,
                ..State::default()
            }),
        }
    }

    /// Create a backend seeded with a small demo site, so the
    /// standalone binary has something to list and mutate.
    pub fn demo() -> Self {
        let mut state = State {
            site: SiteInfo {
                title: "Demo Site".to_string(),
                description: "siteshell demo data".to_string(),
                ..SiteInfo::default()
            },
            ..State::default()
        };
        state.plugins = vec![
            PluginInfo {
                name: "Hello Dolly".to_string(),
                version: "1.7.2".to_string(),
                active: false,
            },
            PluginInfo {
                name: "Classic Editor".to_string(),
                version: "1.6.3".to_string(),
                active: true,
            },
        ];
        state.themes = vec![
            ThemeRow {
                name: "twentytwentyfour".to_string(),
                version: "1.0".to_string(),
            },
            ThemeRow {
                name: "twentytwentythree".to_string(),
                version: "1.3".to_string(),
            },
        ];
        state.active_theme = Some("twentytwentyfour".to_string());
        state.users = vec![UserRecord {
            id: 1,
            login: "admin".to_string(),
            email: "admin@example.test".to_string(),
            roles: vec!["administrator".to_string()],
        }];
        state.next_user_id = 2;
        state.posts = vec![PostRecord {
            id: 1,
            title: "Hello world!".to_string(),
            content: "Welcome to the demo site.".to_string(),
            status: "publish".to_string(),
        }];
        state.next_post_id = 2;
        state
            .options
            .insert("blogname".to_string(), "Demo Site".to_string());
        Self {
            state: RwLock::new(state),
        }
    }

    /// Seed a plugin (test and embedding convenience).
    pub async fn insert_plugin(&self, name: &str, version: &str, active: bool) {
        self.state.write().await.plugins.push(PluginInfo {
            name: name.to_string(),
            version: version.to_string(),
            active,
        });
    }

    /// Seed a theme (test and embedding convenience).
    pub async fn insert_theme(&self, name: &str, version: &str, active: bool) {
        let mut state = self.state.write().await;
        state.themes.push(ThemeRow {
            name: name.to_string(),
            version: version.to_string(),
        });
        if active {
            state.active_theme = Some(name.to_string());
        }
    }
}

#[async_trait]
impl SiteBackend for MemoryBackend {
    async fn list_plugins(&self) -> Vec<PluginInfo> {
        self.state.read().await.plugins.clone()
    }

    async fn activate_plugin(&self, name: &str) -> StoreResult<()> {
        let mut state = self.state.write().await;
        match state
            .plugins
            .iter_mut()
            .find(|p| p.name.eq_ignore_ascii_case(name))
        {
            Some(plugin) => {
                plugin.active = true;
                Ok(())
            }
            None => Err(StoreError::NotFound(name.to_string())),
        }
    }

    async fn deactivate_plugin(&self, name: &str) -> StoreResult<()> {
        let mut state = self.state.write().await;
        match state
            .plugins
            .iter_mut()
            .find(|p| p.name.eq_ignore_ascii_case(name))
        {
            Some(plugin) => {
                plugin.active = false;
                Ok(())
            }
            None => Err(StoreError::NotFound(name.to_string())),
        }
    }

    async fn list_themes(&self) -> Vec<ThemeInfo> {
        let state = self.state.read().await;
        state
            .themes
            .iter()
            .map(|t| ThemeInfo {
                name: t.name.clone(),
                version: t.version.clone(),
                active: state.active_theme.as_deref() == Some(t.name.as_str()),
            })
            .collect()
    }

    async fn activate_theme(&self, name: &str) -> StoreResult<()> {
        let mut state = self.state.write().await;
        if state.themes.iter().any(|t| t.name == name) {
            state.active_theme = Some(name.to_string());
            Ok(())
        } else {
            Err(StoreError::NotFound(name.to_string()))
        }
    }

    async fn list_users(&self) -> Vec<UserRecord> {
        self.state.read().await.users.clone()
    }

    async fn create_user(&self, user: NewUser) -> StoreResult<u64> {
        let mut state = self.state.write().await;
        if user.login.is_empty() {
            return Err(StoreError::Invalid("empty username".to_string()));
        }
        if state
            .users
            .iter()
            .any(|u| u.login.eq_ignore_ascii_case(&user.login))
        {
            return Err(StoreError::Invalid(format!(
                "username already exists: {}",
                user.login
            )));
        }
        let id = state.next_user_id;
        state.next_user_id += 1;
        state.users.push(UserRecord {
            id,
            login: user.login,
            email: user.email,
            roles: vec![user.role],
        });
        Ok(id)
    }

    async fn delete_user(&self, login: &str) -> StoreResult<()> {
        let mut state = self.state.write().await;
        let before = state.users.len();
        state.users.retain(|u| u.login != login);
        if state.users.len() == before {
            Err(StoreError::NotFound(login.to_string()))
        } else {
            Ok(())
        }
    }

    async fn list_posts(&self) -> Vec<PostRecord> {
        self.state.read().await.posts.clone()
    }

    async fn create_post(&self, post: NewPost) -> StoreResult<u64> {
        let mut state = self.state.write().await;
        if post.title.is_empty() {
            return Err(StoreError::Invalid("empty post title".to_string()));
        }
        let id = state.next_post_id;
        state.next_post_id += 1;
        state.posts.push(PostRecord {
            id,
            title: post.title,
            content: post.content,
            status: "publish".to_string(),
        });
        Ok(id)
    }

    async fn delete_post(&self, id: u64) -> StoreResult<()> {
        let mut state = self.state.write().await;
        let before = state.posts.len();
        state.posts.retain(|p| p.id != id);
        if state.posts.len() == before {
            Err(StoreError::NotFound(format!("post {id}")))
        } else {
            Ok(())
        }
    }

    async fn get_option(&self, name: &str) -> Option<String> {
        self.state.read().await.options.get(name).cloned()
    }

    async fn update_option(&self, name: &str, value: &str) {
        self.state
            .write()
            .await
            .options
            .insert(name.to_string(), value.to_string());
    }

    async fn delete_option(&self, name: &str) -> bool {
        self.state.write().await.options.remove(name).is_some()
    }

    async fn site_info(&self) -> SiteInfo {
        self.state.read().await.site.clone()
    }
}
