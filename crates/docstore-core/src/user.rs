use std::collections::BTreeSet;

use tracing::info;

/// Session user. Roles are recorded but no storage operation consults them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    username: String,
    password_hash: String,
    roles: BTreeSet<String>,
    authenticated: bool,
}

impl User {
    pub fn new<I, S>(username: impl Into<String>, password_hash: impl Into<String>, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            username: username.into(),
            password_hash: password_hash.into(),
            roles: roles.into_iter().map(Into::into).collect(),
            authenticated: false,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn roles(&self) -> &BTreeSet<String> {
        &self.roles
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn set_authenticated(&mut self, authenticated: bool) {
        self.authenticated = authenticated;
    }

    pub fn has_permission(&self, permission: &str) -> bool {
        self.roles.contains(permission)
    }
}

/// The single accepted login and what it is granted.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
    pub password_hash: String,
    pub roles: Vec<String>,
}

impl Default for Credentials {
    fn default() -> Self {
        Self {
            username: "user".to_string(),
            password: "password".to_string(),
            password_hash: "passwordHash".to_string(),
            roles: vec!["READ_DOCUMENT".to_string()],
        }
    }
}

/// Plain string comparison against `credentials`.
pub fn authenticate(username: &str, password: &str, credentials: &Credentials) -> Option<User> {
    if username != credentials.username || password != credentials.password {
        info!(username, "login rejected");
        return None;
    }

    let mut user = User::new(
        username,
        credentials.password_hash.as_str(),
        credentials.roles.iter().cloned(),
    );
    user.set_authenticated(true);
    info!(username, "login accepted");
    Some(user)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_login_is_accepted() {
        let user = authenticate("user", "password", &Credentials::default()).unwrap();

        assert!(user.is_authenticated());
        assert_eq!(user.username(), "user");
        assert_eq!(user.password_hash(), "passwordHash");
        assert!(user.has_permission("READ_DOCUMENT"));
        assert!(!user.has_permission("WRITE_DOCUMENT"));
    }

    #[test]
    fn wrong_password_is_rejected() {
        assert!(authenticate("user", "hunter2", &Credentials::default()).is_none());
        assert!(authenticate("User", "password", &Credentials::default()).is_none());
    }

    #[test]
    fn new_user_starts_unauthenticated() {
        let user = User::new("guest", "x", ["READ_DOCUMENT", "READ_DOCUMENT"]);
        assert!(!user.is_authenticated());
        assert_eq!(user.roles().len(), 1);
    }
}
