use serde::Deserialize;
use serde::Serialize;

use std::collections::HashMap;
use std::collections::HashSet;
use std::path::Path;

const DEFAULT_CATALOG: &str = include_str!("../activities.toml");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ActivityCatalog {
    activities: HashMap<String, Activity>,
}

#[derive(Debug, Clone)]
pub struct ActivityRegistry {
    activities: HashMap<String, Activity>,
}

#[derive(Debug)]
pub enum SignupError {
    UnknownActivity,
    AlreadyRegistered,
}

#[derive(Debug)]
pub enum UnregisterError {
    UnknownActivity,
    NotRegistered,
}

#[derive(Debug)]
pub enum CatalogError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    DuplicateParticipant { activity: String, email: String },
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::Io(err) => write!(f, "failed to read catalog: {err}"),
            CatalogError::Parse(err) => write!(f, "failed to parse catalog: {err}"),
            CatalogError::DuplicateParticipant { activity, email } => {
                write!(f, "duplicate participant '{email}' in activity '{activity}'")
            }
        }
    }
}

impl std::error::Error for CatalogError {}

impl ActivityRegistry {
    pub fn with_defaults() -> Self {
        Self::from_toml(DEFAULT_CATALOG).expect("built-in activity catalog is valid")
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path).map_err(CatalogError::Io)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, CatalogError> {
        let catalog: ActivityCatalog = toml::from_str(contents).map_err(CatalogError::Parse)?;
        for (name, activity) in &catalog.activities {
            let mut seen = HashSet::new();
            for email in &activity.participants {
                if !seen.insert(email.as_str()) {
                    return Err(CatalogError::DuplicateParticipant {
                        activity: name.clone(),
                        email: email.clone(),
                    });
                }
            }
        }
        Ok(Self {
            activities: catalog.activities,
        })
    }

    pub fn activities(&self) -> &HashMap<String, Activity> {
        &self.activities
    }

    pub fn signup(&mut self, name: &str, email: &str) -> Result<(), SignupError> {
        let activity = self
            .activities
            .get_mut(name)
            .ok_or(SignupError::UnknownActivity)?;
        if activity
            .participants
            .iter()
            .any(|participant| participant == email)
        {
            return Err(SignupError::AlreadyRegistered);
        }
        activity.participants.push(email.to_string());
        Ok(())
    }

    pub fn unregister(&mut self, name: &str, email: &str) -> Result<(), UnregisterError> {
        let activity = self
            .activities
            .get_mut(name)
            .ok_or(UnregisterError::UnknownActivity)?;
        let index = activity
            .participants
            .iter()
            .position(|participant| participant == email)
            .ok_or(UnregisterError::NotRegistered)?;
        activity.participants.remove(index);
        Ok(())
    }
}
