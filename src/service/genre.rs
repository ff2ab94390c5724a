//! Genre CRUD. Names are unique across the catalogue.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::error::entity::NotFoundError;
use crate::model::Genre;
use crate::service::CatalogError;
use crate::store::port::GenreStore;

pub struct GenreService {
    genres: Arc<dyn GenreStore>,
}

impl GenreService {
    pub fn new(genres: Arc<dyn GenreStore>) -> Self {
        Self { genres }
    }

    pub fn list(&self) -> Result<Vec<Genre>, CatalogError> {
        Ok(self.genres.list()?)
    }

    pub fn get(&self, id: Uuid) -> Result<Genre, CatalogError> {
        self.genres
            .find_by_id(&id)?
            .ok_or_else(|| NotFoundError::new("genre").into())
    }

    pub fn create(&self, name: &str) -> Result<Genre, CatalogError> {
        let name = non_blank(name)?;
        self.ensure_name_free(&name, None)?;

        let genre = self.genres.save(Genre {
            id: Uuid::new_v4(),
            name,
        })?;
        info!(genre_id = %genre.id, "genre created");

        Ok(genre)
    }

    pub fn update(&self, id: Uuid, name: &str) -> Result<Genre, CatalogError> {
        let mut genre = self.get(id)?;
        let name = non_blank(name)?;
        self.ensure_name_free(&name, Some(id))?;

        genre.name = name;
        Ok(self.genres.update(genre)?)
    }

    pub fn delete(&self, id: Uuid) -> Result<(), CatalogError> {
        if !self.genres.delete(&id)? {
            return Err(NotFoundError::new("genre").into());
        }
        info!(genre_id = %id, "genre deleted");
        Ok(())
    }

    fn ensure_name_free(&self, name: &str, except: Option<Uuid>) -> Result<(), CatalogError> {
        if let Some(existing) = self.genres.find_by_name(name)? {
            if Some(existing.id) != except {
                return Err(CatalogError::Duplicate {
                    entity: "genre",
                    value: name.to_string(),
                });
            }
        }
        Ok(())
    }
}

fn non_blank(name: &str) -> Result<String, CatalogError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CatalogError::Validation("genre name is required".into()));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryGenreStore;

    fn service() -> GenreService {
        GenreService::new(Arc::new(MemoryGenreStore::new()))
    }

    #[test]
    fn create_get_update_delete_roundtrip() {
        let service = service();

        let genre = service.create("Platformer").unwrap();
        assert_eq!(service.get(genre.id).unwrap().name, "Platformer");

        let renamed = service.update(genre.id, "Precision Platformer").unwrap();
        assert_eq!(renamed.name, "Precision Platformer");

        service.delete(genre.id).unwrap();
        assert!(matches!(
            service.get(genre.id),
            Err(CatalogError::NotFound(_))
        ));
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let service = service();
        service.create("RPG").unwrap();

        let again = service.create("RPG");
        assert!(matches!(again, Err(CatalogError::Duplicate { .. })));
    }

    #[test]
    fn rename_to_own_name_is_allowed() {
        let service = service();
        let genre = service.create("RPG").unwrap();

        assert!(service.update(genre.id, "RPG").is_ok());
    }

    #[test]
    fn rename_to_taken_name_is_rejected() {
        let service = service();
        service.create("RPG").unwrap();
        let other = service.create("Shooter").unwrap();

        let result = service.update(other.id, "RPG");
        assert!(matches!(result, Err(CatalogError::Duplicate { .. })));
    }

    #[test]
    fn blank_names_are_rejected() {
        let service = service();
        assert!(matches!(
            service.create("   "),
            Err(CatalogError::Validation(_))
        ));
    }

    #[test]
    fn delete_missing_genre_is_not_found() {
        let service = service();
        assert!(matches!(
            service.delete(Uuid::new_v4()),
            Err(CatalogError::NotFound(_))
        ));
    }
}
