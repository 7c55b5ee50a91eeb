//! Client-side session state backed by a small key-value store.

use crate::database::models::PublicUser;
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// Scoped key-value storage for session data.
pub trait SessionStore: Send {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
    fn remove(&mut self, key: &str);
}

/// Process-local store; forgets everything on drop.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_owned(), value);
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Store persisted as a JSON object in a single file.
///
/// Writes happen on every mutation. A failed write is logged and the
/// in-memory copy stays authoritative for the rest of the process.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl FileStore {
    /// Opens `path`, loading existing entries if the file is present.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let entries = if path.exists() {
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("failed to read session file {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("corrupt session file {}", path.display()))?
        } else {
            HashMap::new()
        };

        Ok(Self { path, entries })
    }

    fn persist(&self) {
        let result = serde_json::to_string(&self.entries)
            .map_err(anyhow::Error::from)
            .and_then(|raw| fs::write(&self.path, raw).map_err(anyhow::Error::from));

        if let Err(e) = result {
            tracing::warn!("Failed to persist session to {}: {}", self.path.display(), e);
        }
    }
}

impl SessionStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_owned(), value);
        self.persist();
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
        self.persist();
    }
}

type InvalidationCallback = Box<dyn FnMut() + Send>;

/// The authenticated state of one API consumer.
pub struct Session {
    store: Box<dyn SessionStore>,
    token: Option<String>,
    user: Option<PublicUser>,
    on_invalidate: Option<InvalidationCallback>,
}

impl Session {
    /// Creates a session over `store`, restoring a previously persisted
    /// token and user when both are present and readable.
    pub fn new(store: impl SessionStore + 'static) -> Self {
        let stored_token = store.get(TOKEN_KEY);
        let stored_user = store
            .get(USER_KEY)
            .and_then(|raw| serde_json::from_str::<PublicUser>(&raw).ok());

        let (token, user) = match (stored_token, stored_user) {
            (Some(token), Some(user)) => (Some(token), Some(user)),
            _ => (None, None),
        };

        Self {
            store: Box::new(store),
            token,
            user,
            on_invalidate: None,
        }
    }

    /// Registers the callback run whenever the server rejects the session.
    pub fn with_invalidation_callback(mut self, callback: impl FnMut() + Send + 'static) -> Self {
        self.on_invalidate = Some(Box::new(callback));
        self
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&PublicUser> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Records a freshly issued token and its user, in memory and in the store.
    pub fn establish(&mut self, token: String, user: PublicUser) {
        self.store.set(TOKEN_KEY, token.clone());
        match serde_json::to_string(&user) {
            Ok(raw) => self.store.set(USER_KEY, raw),
            Err(e) => tracing::warn!("Failed to serialize session user: {}", e),
        }
        self.token = Some(token);
        self.user = Some(user);
    }

    /// Explicit sign-out.
    pub fn logout(&mut self) {
        self.clear();
    }

    /// Clears the session after the server refused it and notifies the owner.
    pub fn invalidate(&mut self) {
        self.clear();
        if let Some(callback) = self.on_invalidate.as_mut() {
            callback();
        }
    }

    fn clear(&mut self) {
        self.token = None;
        self.user = None;
        self.store.remove(TOKEN_KEY);
        self.store.remove(USER_KEY);
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .field("user", &self.user)
            .finish()
    }
}
