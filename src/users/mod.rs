//! Plain-text credential file: one `username,password` per line.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Registration {
    Created,
    AlreadyExists,
}

pub(crate) struct UserStore {
    path: PathBuf,
    users: BTreeMap<String, String>,
}

impl UserStore {
    /// A missing file means no users yet. Lines without a comma are skipped.
    pub(crate) fn load(path: PathBuf) -> Result<Self> {
        let content = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => String::new(),
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read users: {}", path.display()))
            }
        };

        let mut users = BTreeMap::new();
        for (i, line) in content.lines().enumerate() {
            let mut fields = line.split(',');
            match (fields.next(), fields.next()) {
                (Some(name), Some(password)) => {
                    users.insert(name.to_string(), password.to_string());
                }
                _ if line.is_empty() => {}
                _ => tracing::warn!(line = i + 1, "skipping malformed user record"),
            }
        }
        Ok(Self { path, users })
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn len(&self) -> usize {
        self.users.len()
    }

    pub(crate) fn verify(&self, username: &str, password: &str) -> bool {
        self.users.get(username).is_some_and(|p| p == password)
    }

    /// Adds the user in memory, then rewrites the file. A write failure is
    /// returned but the user stays registered for this session.
    pub(crate) fn register(&mut self, username: &str, password: &str) -> Result<Registration> {
        if self.users.contains_key(username) {
            return Ok(Registration::AlreadyExists);
        }
        self.users.insert(username.to_string(), password.to_string());
        self.save()?;
        Ok(Registration::Created)
    }

    fn save(&self) -> Result<()> {
        let content: String = self
            .users
            .iter()
            .map(|(name, password)| format!("{name},{password}\n"))
            .collect();
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to save users: {}", self.path.display()))
    }
}
