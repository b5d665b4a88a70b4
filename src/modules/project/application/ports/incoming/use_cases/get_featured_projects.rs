use async_trait::async_trait;

use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::incoming::use_cases::GetProjectsError;

#[async_trait]
pub trait GetFeaturedProjectsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Project>, GetProjectsError>;
}
