//! Developer (studio) CRUD. Studio names are unique.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::error::entity::NotFoundError;
use crate::model::Developer;
use crate::service::CatalogError;
use crate::store::port::DeveloperStore;

/// Attributes of a developer as supplied by the caller.
#[derive(Debug, Clone)]
pub struct DeveloperInput {
    pub studio_name: String,
    pub country: String,
    pub founded_year: i32,
}

pub struct DeveloperService {
    developers: Arc<dyn DeveloperStore>,
}

impl DeveloperService {
    pub fn new(developers: Arc<dyn DeveloperStore>) -> Self {
        Self { developers }
    }

    pub fn list(&self) -> Result<Vec<Developer>, CatalogError> {
        Ok(self.developers.list()?)
    }

    pub fn get(&self, id: Uuid) -> Result<Developer, CatalogError> {
        self.developers
            .find_by_id(&id)?
            .ok_or_else(|| NotFoundError::new("developer").into())
    }

    pub fn create(&self, input: DeveloperInput) -> Result<Developer, CatalogError> {
        let input = validate(input)?;
        self.ensure_studio_free(&input.studio_name, None)?;

        let developer = self.developers.save(Developer {
            id: Uuid::new_v4(),
            studio_name: input.studio_name,
            country: input.country,
            founded_year: input.founded_year,
        })?;
        info!(developer_id = %developer.id, "developer created");

        Ok(developer)
    }

    pub fn update(&self, id: Uuid, input: DeveloperInput) -> Result<Developer, CatalogError> {
        let mut developer = self.get(id)?;
        let input = validate(input)?;
        self.ensure_studio_free(&input.studio_name, Some(id))?;

        developer.studio_name = input.studio_name;
        developer.country = input.country;
        developer.founded_year = input.founded_year;
        Ok(self.developers.update(developer)?)
    }

    pub fn delete(&self, id: Uuid) -> Result<(), CatalogError> {
        if !self.developers.delete(&id)? {
            return Err(NotFoundError::new("developer").into());
        }
        info!(developer_id = %id, "developer deleted");
        Ok(())
    }

    fn ensure_studio_free(&self, name: &str, except: Option<Uuid>) -> Result<(), CatalogError> {
        if let Some(existing) = self.developers.find_by_studio_name(name)? {
            if Some(existing.id) != except {
                return Err(CatalogError::Duplicate {
                    entity: "developer",
                    value: name.to_string(),
                });
            }
        }
        Ok(())
    }
}

fn validate(mut input: DeveloperInput) -> Result<DeveloperInput, CatalogError> {
    input.studio_name = input.studio_name.trim().to_string();
    input.country = input.country.trim().to_string();

    if input.studio_name.is_empty() {
        return Err(CatalogError::Validation("studio name is required".into()));
    }
    if input.country.is_empty() {
        return Err(CatalogError::Validation("country is required".into()));
    }
    Ok(input)
}
