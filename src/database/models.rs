// Domain records kept by the store

use serde::Serialize;

use super::StoreError;

#[derive(Debug, Copy, Clone, Serialize, PartialEq, Eq)]
pub enum UserRole {
    User,
    Admin,
}

#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub(crate) id: u64,
    name: String,
    #[serde(skip)]
    password_hash: String,
    role: UserRole,
    /// Verified badge, granted by admins
    blue: bool,
    bio: String,
}

/// Hashes on the blocking pool; bcrypt would otherwise stall a runtime worker
pub async fn hash_password(password: &str, cost: u32) -> Result<String, StoreError> {
    let password: String = password.to_owned();
    let hash: String = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost)).await??;
    Ok(hash)
}

/// Verifies on the blocking pool. A malformed hash counts as a mismatch.
pub async fn verify_password(password: &str, hash: &str) -> Result<bool, StoreError> {
    let (password, hash): (String, String) = (password.to_owned(), hash.to_owned());
    let matches: bool =
        tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash).unwrap_or(false))
            .await?;
    Ok(matches)
}

impl User {
    /// Builds an unsaved user, hashing inline; the store assigns the id on insert
    pub fn new(
        name: &str,
        password: &str,
        role: UserRole,
        blue: bool,
        cost: u32,
    ) -> Result<Self, StoreError> {
        Ok(Self::with_hash(name, bcrypt::hash(password, cost)?, role, blue))
    }

    /// Builds an unsaved user from an already computed bcrypt hash
    pub fn with_hash(name: &str, password_hash: String, role: UserRole, blue: bool) -> Self {
        Self {
            id: 0,
            name: name.to_owned(),
            password_hash,
            role,
            blue,
            bio: String::new(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> UserRole {
        self.role
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    pub fn blue(&self) -> bool {
        self.blue
    }

    pub fn bio(&self) -> &str {
        &self.bio
    }

    pub fn set_bio(&mut self, bio: &str) {
        self.bio = bio.to_owned();
    }

    pub fn set_blue(&mut self, blue: bool) {
        self.blue = blue;
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn set_password_hash(&mut self, password_hash: String) {
        self.password_hash = password_hash;
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Post {
    pub(crate) id: u64,
    author_id: u64,
    contents: String,
    /// Unix seconds
    timestamp: i64,
}

impl Post {
    pub fn new(author: &User, contents: &str) -> Self {
        Self::with_timestamp(author, contents, chrono::Utc::now().timestamp())
    }

    pub fn with_timestamp(author: &User, contents: &str, timestamp: i64) -> Self {
        Self {
            id: 0,
            author_id: author.id,
            contents: contents.to_owned(),
            timestamp,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn author_id(&self) -> u64 {
        self.author_id
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COST: u32 = 4;

    #[tokio::test]
    async fn password_is_hashed_and_verified() {
        let user = User::new("alice", "wonderland", UserRole::User, false, COST).unwrap();

        assert_ne!(user.password_hash(), "wonderland");
        assert!(verify_password("wonderland", user.password_hash()).await.unwrap());
        assert!(!verify_password("looking-glass", user.password_hash()).await.unwrap());
    }

    #[tokio::test]
    async fn replacing_the_hash_rotates_the_password() {
        let mut user = User::new("alice", "old", UserRole::User, false, COST).unwrap();

        user.set_password_hash(hash_password("new", COST).await.unwrap());

        assert!(verify_password("new", user.password_hash()).await.unwrap());
        assert!(!verify_password("old", user.password_hash()).await.unwrap());
    }

    #[tokio::test]
    async fn malformed_hash_never_matches() {
        assert!(!verify_password("pw", "not-a-bcrypt-hash").await.unwrap());
    }

    #[test]
    fn serialized_user_omits_password_hash() {
        let user = User::new("bob", "secret", UserRole::Admin, true, COST).unwrap();
        let json = serde_json::to_value(&user).unwrap();

        assert!(json.get("password_hash").is_none());
        assert_eq!(json["role"], "Admin");
        assert_eq!(json["blue"], true);
    }
}
