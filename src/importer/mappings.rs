//! Lookup tables accumulated across import phases

use crate::importer::models::TeamId;
use std::collections::HashMap;

/// Player login → team name, kept in the order logins were first recorded.
///
/// Recording a login twice replaces its team but keeps its original position.
#[derive(Debug, Default, Clone)]
pub struct LoginTeamMap {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl LoginTeamMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `login → team` and returns the team it replaced, if any.
    pub fn insert(&mut self, login: String, team: String) -> Option<String> {
        match self.index.get(&login) {
            Some(&position) => Some(std::mem::replace(&mut self.entries[position].1, team)),
            None => {
                self.index.insert(login.clone(), self.entries.len());
                self.entries.push((login, team));
                None
            }
        }
    }

    pub fn team_of(&self, login: &str) -> Option<&str> {
        self.index
            .get(login)
            .map(|&position| self.entries[position].1.as_str())
    }

    /// Iterates `(login, team)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(login, team)| (login.as_str(), team.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Team name → id assigned by the service.
#[derive(Debug, Default, Clone)]
pub struct TeamIdMap {
    ids: HashMap<String, TeamId>,
}

impl TeamIdMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `name → id` and returns the id it replaced, if any.
    pub fn insert(&mut self, name: String, id: TeamId) -> Option<TeamId> {
        self.ids.insert(name, id)
    }

    pub fn get(&self, name: &str) -> Option<TeamId> {
        self.ids.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
