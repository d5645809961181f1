use chrono::NaiveDate;
use log::{debug, error};

use crate::{
    CreateError, DeleteError, Exercise, Name, ReadError, SyncError, UpdateError, Workout,
    WorkoutID, WorkoutRepository, WorkoutService,
};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R>
where
    R: WorkoutRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub async fn sync(&self) -> Result<(), SyncError> {
        self.repository.sync_workouts().await?;
        Ok(())
    }
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func.await;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::NoConnection) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: WorkoutRepository> WorkoutService for Service<R> {
    async fn get_workouts(&self) -> Result<Vec<Workout>, ReadError> {
        log_on_error!(
            self.repository.read_workouts(),
            ReadError,
            "get",
            "workouts"
        )
    }

    async fn create_workout(
        &self,
        name: Name,
        date: NaiveDate,
        exercises: Vec<Exercise>,
        duration: u32,
    ) -> Result<Workout, CreateError> {
        log_on_error!(
            self.repository.create_workout(name, date, exercises, duration),
            CreateError,
            "create",
            "workout"
        )
    }

    async fn modify_workout(
        &self,
        id: WorkoutID,
        name: Option<Name>,
        exercises: Option<Vec<Exercise>>,
        duration: Option<u32>,
        completed: Option<bool>,
    ) -> Result<Workout, UpdateError> {
        log_on_error!(
            self.repository
                .modify_workout(id, name, exercises, duration, completed),
            UpdateError,
            "modify",
            "workout"
        )
    }

    async fn delete_workout(&self, id: WorkoutID) -> Result<WorkoutID, DeleteError> {
        log_on_error!(
            self.repository.delete_workout(id),
            DeleteError,
            "delete",
            "workout"
        )
    }
}
