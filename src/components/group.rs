//! Group membership components.
//!
//! An entity may belong to several named groups at once (for instance
//! `"controllable"` and `"all"`). Membership is fixed after setup.
//! [`CollidesWith`] names the group a mover is resolved against.

use bevy_ecs::prelude::Component;
use smallvec::SmallVec;

#[derive(Component, Clone, Debug, Default, PartialEq, Eq)]
pub struct Groups(pub SmallVec<[String; 4]>);

impl Groups {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut groups = Self::default();
        for name in names {
            groups.add(name);
        }
        groups
    }

    /// Adds a group name, ignoring duplicates.
    pub fn add(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.contains(&name) {
            self.0.push(name);
        }
    }

    pub fn contains(&self, name: impl AsRef<str>) -> bool {
        self.0.iter().any(|g| g == name.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// Obstacle group a mover is resolved against.
#[derive(Component, Clone, Debug, PartialEq, Eq)]
pub struct CollidesWith(pub String);

impl CollidesWith {
    pub fn name(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_are_ignored() {
        let groups = Groups::new(["all", "controllable", "all"]);
        assert_eq!(groups.iter().collect::<Vec<_>>(), vec!["all", "controllable"]);
        assert!(groups.contains("controllable"));
        assert!(!groups.contains("obstacle"));
    }
}
