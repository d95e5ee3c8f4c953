//! Countdown event CRUD with field validation.

use std::sync::Arc;

use tracing::info;

use navdeck_core::error::AppError;
use navdeck_core::result::AppResult;
use navdeck_database::repositories::CountdownRepository;
use navdeck_entity::countdown::{CountdownEvent, CountdownFields};

use super::date::parse_target_date;

/// Manages countdown events.
#[derive(Debug, Clone)]
pub struct CountdownService {
    /// Countdown repository.
    repo: Arc<CountdownRepository>,
}

impl CountdownService {
    /// Creates a new countdown service.
    pub fn new(repo: Arc<CountdownRepository>) -> Self {
        Self { repo }
    }

    /// Lists active events in display order.
    pub async fn list_active(&self) -> AppResult<Vec<CountdownEvent>> {
        self.repo.list_active().await
    }

    /// Lists every event, including deleted ones.
    pub async fn list_all(&self) -> AppResult<Vec<CountdownEvent>> {
        self.repo.list_all().await
    }

    /// Fetches one event.
    pub async fn get(&self, id: i64) -> AppResult<CountdownEvent> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Creates an event at the end of the list and returns its ID.
    pub async fn create(&self, fields: CountdownFields) -> AppResult<i64> {
        let fields = validate(fields)?;
        let id = self.repo.create(&fields).await?;
        info!(countdown_id = id, "Countdown event created");
        Ok(id)
    }

    /// Replaces the editable fields of an event.
    pub async fn update(&self, id: i64, fields: CountdownFields) -> AppResult<()> {
        let fields = validate(fields)?;
        if !self.repo.update(id, &fields).await? {
            return Err(not_found(id));
        }
        Ok(())
    }

    /// Soft-deletes an event.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        if !self.repo.deactivate(id).await? {
            return Err(not_found(id));
        }
        info!(countdown_id = id, "Countdown event deactivated");
        Ok(())
    }

    /// Flips the active flag and returns the new value.
    pub async fn toggle(&self, id: i64) -> AppResult<bool> {
        let active = self.repo.toggle(id).await?.ok_or_else(|| not_found(id))?;
        info!(countdown_id = id, active, "Countdown event toggled");
        Ok(active)
    }
}

fn not_found(id: i64) -> AppError {
    AppError::not_found(format!("Countdown event {id} not found"))
}

fn validate(mut fields: CountdownFields) -> AppResult<CountdownFields> {
    fields.title = fields.title.trim().to_string();
    fields.target_date = fields.target_date.trim().to_string();

    if fields.title.is_empty() || fields.target_date.is_empty() {
        return Err(AppError::validation("Title and target date are required"));
    }
    if parse_target_date(&fields.target_date).is_none() {
        return Err(AppError::validation(format!(
            "Target date '{}' is not a valid date",
            fields.target_date
        )));
    }

    fields.description = fields.description.filter(|d| !d.trim().is_empty());
    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use navdeck_core::error::ErrorKind;

    use crate::test_support::migrated_db;

    async fn service() -> CountdownService {
        let db = migrated_db().await;
        CountdownService::new(Arc::new(CountdownRepository::new(db.into_pool())))
    }

    fn fields(title: &str, date: &str) -> CountdownFields {
        CountdownFields {
            title: title.to_string(),
            description: None,
            target_date: date.to_string(),
            icon: None,
        }
    }

    #[tokio::test]
    async fn test_create_validates_date() {
        let service = service().await;
        let err = service.create(fields("Trip", "soon")).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        let err = service.create(fields("", "2030-01-01")).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);

        let id = service.create(fields("Trip", "2030-01-01T09:00")).await.unwrap();
        assert_eq!(service.get(id).await.unwrap().target_date, "2030-01-01T09:00");
    }

    #[tokio::test]
    async fn test_delete_is_soft_and_toggle_restores() {
        let service = service().await;
        let id = service.create(fields("Trip", "2030-01-01")).await.unwrap();

        service.delete(id).await.unwrap();
        assert!(service.list_active().await.unwrap().is_empty());
        assert_eq!(service.list_all().await.unwrap().len(), 1);

        assert!(service.toggle(id).await.unwrap());
        assert_eq!(service.list_active().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_missing_event_is_not_found() {
        let service = service().await;
        assert_eq!(
            service.toggle(99).await.unwrap_err().kind,
            ErrorKind::NotFound
        );
        assert_eq!(
            service.delete(99).await.unwrap_err().kind,
            ErrorKind::NotFound
        );
    }
}
