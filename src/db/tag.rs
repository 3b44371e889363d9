use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use entity::place::{ActiveModel as PlaceActive, Entity as Place, Model as PlaceModel};
use entity::subject::{ActiveModel as SubjectActive, Entity as Subject, Model as SubjectModel};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, SqlErr};

impl DatabaseService {
    /// Insert and let the unique index arbitrate; a lost race maps to
    /// AlreadyExists instead of leaking a raw constraint error.
    pub async fn create_place(&self, name: String) -> Result<PlaceModel, AppError> {
        let res = Place::insert(PlaceActive {
            name: Set(name.clone()),
            ..Default::default()
        })
        .exec(&self.database_connection)
        .await;
        match res {
            Ok(res) => Ok(PlaceModel { id: res.last_insert_id, name }),
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(AppError::AlreadyExists)
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn find_place_by_name(&self, name: &str) -> Result<Option<PlaceModel>, AppError> {
        Ok(Place::find()
            .filter(entity::place::Column::Name.eq(name))
            .one(&self.database_connection)
            .await?)
    }

    /// Tagging a post with an unseen place name just creates it. Losing a
    /// creation race is fine: somebody else made the row, fetch it.
    pub async fn get_or_create_place(&self, name: &str) -> Result<PlaceModel, AppError> {
        if let Some(place) = self.find_place_by_name(name).await? {
            return Ok(place);
        }
        match self.create_place(name.to_string()).await {
            Ok(place) => Ok(place),
            Err(AppError::AlreadyExists) => self
                .find_place_by_name(name)
                .await?
                .ok_or(AppError::NotFound),
            Err(e) => Err(e),
        }
    }

    pub async fn list_places(&self) -> Result<Vec<PlaceModel>, AppError> {
        Ok(Place::find()
            .order_by_asc(entity::place::Column::Name)
            .all(&self.database_connection)
            .await?)
    }

    pub async fn create_subject(&self, name: String) -> Result<SubjectModel, AppError> {
        let res = Subject::insert(SubjectActive {
            name: Set(name.clone()),
            ..Default::default()
        })
        .exec(&self.database_connection)
        .await;
        match res {
            Ok(res) => Ok(SubjectModel { id: res.last_insert_id, name }),
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(AppError::AlreadyExists)
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn find_subject_by_name(&self, name: &str) -> Result<Option<SubjectModel>, AppError> {
        Ok(Subject::find()
            .filter(entity::subject::Column::Name.eq(name))
            .one(&self.database_connection)
            .await?)
    }

    pub async fn get_or_create_subject(&self, name: &str) -> Result<SubjectModel, AppError> {
        if let Some(subject) = self.find_subject_by_name(name).await? {
            return Ok(subject);
        }
        match self.create_subject(name.to_string()).await {
            Ok(subject) => Ok(subject),
            Err(AppError::AlreadyExists) => self
                .find_subject_by_name(name)
                .await?
                .ok_or(AppError::NotFound),
            Err(e) => Err(e),
        }
    }

    pub async fn list_subjects(&self) -> Result<Vec<SubjectModel>, AppError> {
        Ok(Subject::find()
            .order_by_asc(entity::subject::Column::Name)
            .all(&self.database_connection)
            .await?)
    }
}
