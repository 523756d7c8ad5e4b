use thiserror::Error;
use uuid::Uuid;

use crate::models::{NewWebsite, Website, WebsiteUpdate};
use crate::validation::{validate_new_website, validate_update};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("{0}")]
    Validation(String),

    #[error("Website {0} not found")]
    NotFound(Uuid),
}

/// Set of registered websites, kept in registration order
#[derive(Debug)]
pub struct Registry {
    websites: Vec<Website>,
    default_interval_ms: u64,
}

impl Registry {
    pub fn new(default_interval_ms: u64) -> Self {
        Self { websites: Vec::new(), default_interval_ms }
    }

    /// Validate and register a website, rejecting bad input before any mutation
    pub fn add(&mut self, new: NewWebsite) -> Result<Website, RegistryError> {
        validate_new_website(&new).map_err(RegistryError::Validation)?;

        let website = Website::new(new, self.default_interval_ms);
        self.websites.push(website.clone());
        Ok(website)
    }

    pub fn get(&self, id: Uuid) -> Option<&Website> {
        self.websites.iter().find(|w| w.id == id)
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.get(id).is_some()
    }

    pub fn list(&self) -> &[Website] {
        &self.websites
    }

    pub fn active(&self) -> impl Iterator<Item = &Website> {
        self.websites.iter().filter(|w| w.is_active)
    }

    pub fn update(&mut self, id: Uuid, update: WebsiteUpdate) -> Result<Website, RegistryError> {
        validate_update(&update).map_err(RegistryError::Validation)?;

        let website =
            self.websites.iter_mut().find(|w| w.id == id).ok_or(RegistryError::NotFound(id))?;
        website.apply(update);
        Ok(website.clone())
    }

    pub fn remove(&mut self, id: Uuid) -> Result<Website, RegistryError> {
        let index =
            self.websites.iter().position(|w| w.id == id).ok_or(RegistryError::NotFound(id))?;
        Ok(self.websites.remove(index))
    }
}
