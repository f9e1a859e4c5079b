//! User model and the store seam request handlers depend on.
//!
//! Handlers only ever look a user up by username, so the store is a
//! single-method trait. The shipped implementation is an in-memory
//! map seeded at startup; a database-backed store can replace it
//! without touching any handler.

use std::collections::HashMap;

/// A registered user. The password is stored as an Argon2id PHC hash,
/// never in plaintext.
#[derive(Debug, Clone)]
pub struct User {
    pub username: String,
    pub password_hash: String,
}

/// Lookup-by-username abstraction over whatever holds the users.
pub trait UserStore: Send + Sync {
    /// Find a user by their unique username.
    fn find_by_username(&self, username: &str) -> Option<User>;
}

/// In-memory user store, read-only after construction.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: HashMap<String, User>,
}

impl InMemoryUserStore {
    /// Build a store holding exactly one seeded user.
    pub fn with_user(username: &str, password_hash: String) -> Self {
        let mut users = HashMap::new();
        users.insert(
            username.to_string(),
            User {
                username: username.to_string(),
                password_hash,
            },
        );
        Self { users }
    }
}

impl UserStore for InMemoryUserStore {
    fn find_by_username(&self, username: &str) -> Option<User> {
        self.users.get(username).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_user_is_found() {
        let store = InMemoryUserStore::with_user("alice", "$argon2id$fake".to_string());

        let user = store.find_by_username("alice").expect("seeded user should exist");
        assert_eq!(user.username, "alice");
        assert_eq!(user.password_hash, "$argon2id$fake");
    }

    #[test]
    fn test_unknown_user_is_absent() {
        let store = InMemoryUserStore::with_user("alice", "hash".to_string());

        assert!(store.find_by_username("bob").is_none());
        // Lookup is exact, not case-insensitive.
        assert!(store.find_by_username("Alice").is_none());
    }

    #[test]
    fn test_empty_store_finds_nothing() {
        let store = InMemoryUserStore::default();
        assert!(store.find_by_username("anyone").is_none());
    }
}
