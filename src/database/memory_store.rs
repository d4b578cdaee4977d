// In-memory store for users and posts

use std::sync::{Arc, Mutex, MutexGuard};

use thiserror::Error;

use super::models::{Post, User};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("user with name {0} already exists")]
    DuplicateUser(String),

    #[error("user not found")]
    UserNotFound,

    #[error("post with id {0} not found")]
    PostNotFound(u64),

    #[error("incorrect password")]
    IncorrectPassword,

    #[error("failed to hash password: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    #[error("password worker failed: {0}")]
    PasswordWorker(#[from] tokio::task::JoinError),

    #[error("store lock poisoned")]
    LockPoisoned,
}

/// Storage seam for the web layer. Ids are assigned by the store.
pub trait AppStore: Send {
    fn num_users(&self) -> u64;

    fn add_user(&mut self, user: User) -> Result<User, StoreError>;

    fn update_user(&mut self, user: User) -> Result<(), StoreError>;

    fn get_user_by_id(&self, id: u64) -> Result<User, StoreError>;

    fn get_user_by_name(&self, name: &str) -> Result<User, StoreError>;

    fn get_users(&self) -> Result<Vec<User>, StoreError>;

    fn num_posts(&self) -> u64;

    fn add_post(&mut self, post: Post) -> Result<Post, StoreError>;

    fn get_posts(&self) -> Result<Vec<Post>, StoreError>;

    fn delete_post_by_id(&mut self, id: u64) -> Result<(), StoreError>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    next_user_id: u64,
    next_post_id: u64,
    users: Vec<User>,
    posts: Vec<Post>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AppStore for MemoryStore {
    fn num_users(&self) -> u64 {
        self.users.len() as u64
    }

    fn add_user(&mut self, mut user: User) -> Result<User, StoreError> {
        if self.users.iter().any(|u| u.name() == user.name()) {
            return Err(StoreError::DuplicateUser(user.name().to_owned()));
        }

        user.id = self.next_user_id;
        self.next_user_id += 1;

        self.users.push(user.clone());
        Ok(user)
    }

    fn update_user(&mut self, user: User) -> Result<(), StoreError> {
        let slot: &mut User = self
            .users
            .iter_mut()
            .find(|u| u.name() == user.name())
            .ok_or(StoreError::UserNotFound)?;
        *slot = user;
        Ok(())
    }

    fn get_user_by_id(&self, id: u64) -> Result<User, StoreError> {
        self.users
            .iter()
            .find(|u| u.id() == id)
            .cloned()
            .ok_or(StoreError::UserNotFound)
    }

    fn get_user_by_name(&self, name: &str) -> Result<User, StoreError> {
        self.users
            .iter()
            .find(|u| u.name() == name)
            .cloned()
            .ok_or(StoreError::UserNotFound)
    }

    fn get_users(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.users.clone())
    }

    fn num_posts(&self) -> u64 {
        self.posts.len() as u64
    }

    fn add_post(&mut self, mut post: Post) -> Result<Post, StoreError> {
        post.id = self.next_post_id;
        self.next_post_id += 1;

        self.posts.push(post.clone());
        Ok(post)
    }

    fn get_posts(&self) -> Result<Vec<Post>, StoreError> {
        Ok(self.posts.clone())
    }

    fn delete_post_by_id(&mut self, id: u64) -> Result<(), StoreError> {
        let idx: usize = self
            .posts
            .iter()
            .position(|p| p.id() == id)
            .ok_or(StoreError::PostNotFound(id))?;
        // keep insertion order for the timeline
        self.posts.remove(idx);
        Ok(())
    }
}

/// Cloneable handle shared by every request
#[derive(Clone)]
pub struct SharedStore(Arc<Mutex<dyn AppStore>>);

impl SharedStore {
    pub fn new(store: impl AppStore + 'static) -> Self {
        Self(Arc::new(Mutex::new(store)))
    }

    pub fn lock(&self) -> Result<MutexGuard<'_, dyn AppStore + 'static>, StoreError> {
        self.0.lock().map_err(|_| StoreError::LockPoisoned)
    }
}

impl std::fmt::Debug for SharedStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedStore").finish_non_exhaustive()
    }
}
