use async_trait::async_trait;

use crate::modules::blog::application::domain::entities::{
    BlogPost, BlogPostAdminView, NewBlogPost,
};
use crate::modules::blog::application::ports::incoming::use_cases::{
    CreatePostError, CreatePostUseCase, DeletePostError, DeletePostUseCase, GetAdminPostsError,
    GetAdminPostsUseCase, GetPostBySlugError, GetPostBySlugUseCase, GetPublishedPostsError,
    GetPublishedPostsUseCase, TogglePublishError, TogglePublishUseCase, UploadDocxCommand,
    UploadDocxError, UploadDocxResult, UploadDocxUseCase,
};
use crate::modules::contact::application::domain::entities::{
    ContactMessage, NewContactMessage,
};
use crate::modules::contact::application::ports::incoming::use_cases::{
    CreateContactMessageError, CreateContactMessageUseCase, GetContactMessagesError,
    GetContactMessagesUseCase, MarkContactMessageReadError, MarkContactMessageReadUseCase,
};
use crate::modules::education::application::domain::entities::{Education, NewEducation};
use crate::modules::education::application::ports::incoming::use_cases::{
    CreateEducationError, CreateEducationUseCase, GetEducationError, GetEducationUseCase,
};
use crate::modules::experience::application::domain::entities::{Experience, NewExperience};
use crate::modules::experience::application::ports::incoming::use_cases::{
    CreateExperienceError, CreateExperienceUseCase, GetExperienceError, GetExperienceUseCase,
};
use crate::modules::project::application::domain::entities::{NewProject, Project};
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectError, CreateProjectUseCase, GetFeaturedProjectsUseCase, GetProjectsError,
    GetProjectsUseCase,
};

// ============================================================================
// Defaults: empty reads, failing writes
// ============================================================================

#[derive(Default, Clone)]
pub struct EmptyListStub;

#[async_trait]
impl GetEducationUseCase for EmptyListStub {
    async fn execute(&self) -> Result<Vec<Education>, GetEducationError> {
        Ok(vec![])
    }
}

#[async_trait]
impl GetExperienceUseCase for EmptyListStub {
    async fn execute(&self) -> Result<Vec<Experience>, GetExperienceError> {
        Ok(vec![])
    }
}

#[async_trait]
impl GetContactMessagesUseCase for EmptyListStub {
    async fn execute(&self) -> Result<Vec<ContactMessage>, GetContactMessagesError> {
        Ok(vec![])
    }
}

#[async_trait]
impl GetPublishedPostsUseCase for EmptyListStub {
    async fn execute(&self) -> Result<Vec<BlogPost>, GetPublishedPostsError> {
        Ok(vec![])
    }
}

#[async_trait]
impl GetAdminPostsUseCase for EmptyListStub {
    async fn execute(&self) -> Result<Vec<BlogPostAdminView>, GetAdminPostsError> {
        Ok(vec![])
    }
}

const NOT_USED: &str = "not used in this test";

#[derive(Default, Clone)]
pub struct UnusedWriteStub;

#[async_trait]
impl CreateEducationUseCase for UnusedWriteStub {
    async fn execute(&self, _new: NewEducation) -> Result<Education, CreateEducationError> {
        Err(CreateEducationError::RepositoryError(NOT_USED.to_string()))
    }
}

#[async_trait]
impl CreateExperienceUseCase for UnusedWriteStub {
    async fn execute(&self, _new: NewExperience) -> Result<Experience, CreateExperienceError> {
        Err(CreateExperienceError::RepositoryError(NOT_USED.to_string()))
    }
}

#[async_trait]
impl CreateProjectUseCase for UnusedWriteStub {
    async fn execute(&self, _new: NewProject) -> Result<Project, CreateProjectError> {
        Err(CreateProjectError::RepositoryError(NOT_USED.to_string()))
    }
}

#[async_trait]
impl CreateContactMessageUseCase for UnusedWriteStub {
    async fn execute(
        &self,
        _new: NewContactMessage,
    ) -> Result<ContactMessage, CreateContactMessageError> {
        Err(CreateContactMessageError::RepositoryError(NOT_USED.to_string()))
    }
}

#[async_trait]
impl CreatePostUseCase for UnusedWriteStub {
    async fn execute(&self, _new: NewBlogPost) -> Result<BlogPost, CreatePostError> {
        Err(CreatePostError::RepositoryError(NOT_USED.to_string()))
    }
}

#[async_trait]
impl UploadDocxUseCase for UnusedWriteStub {
    async fn execute(
        &self,
        _command: UploadDocxCommand,
    ) -> Result<UploadDocxResult, UploadDocxError> {
        Err(UploadDocxError::RepositoryError(NOT_USED.to_string()))
    }
}

#[derive(Default, Clone)]
pub struct NotFoundStub;

#[async_trait]
impl MarkContactMessageReadUseCase for NotFoundStub {
    async fn execute(&self, _id: i32) -> Result<ContactMessage, MarkContactMessageReadError> {
        Err(MarkContactMessageReadError::NotFound)
    }
}

#[async_trait]
impl GetPostBySlugUseCase for NotFoundStub {
    async fn execute(&self, _slug: &str) -> Result<BlogPost, GetPostBySlugError> {
        Err(GetPostBySlugError::NotFound)
    }
}

#[async_trait]
impl TogglePublishUseCase for NotFoundStub {
    async fn execute(&self, _id: i32) -> Result<BlogPost, TogglePublishError> {
        Err(TogglePublishError::NotFound)
    }
}

#[async_trait]
impl DeletePostUseCase for NotFoundStub {
    async fn execute(&self, _id: i32) -> Result<BlogPost, DeletePostError> {
        Err(DeletePostError::NotFound)
    }
}

// ============================================================================
// Projects
// ============================================================================

#[derive(Clone)]
pub struct StubGetProjectsUseCase {
    result: Result<Vec<Project>, GetProjectsError>,
}

impl StubGetProjectsUseCase {
    pub fn success(data: Vec<Project>) -> Self {
        Self { result: Ok(data) }
    }

    pub fn repo_error(msg: &str) -> Self {
        Self {
            result: Err(GetProjectsError::RepositoryError(msg.to_string())),
        }
    }
}

#[async_trait]
impl GetProjectsUseCase for StubGetProjectsUseCase {
    async fn execute(&self) -> Result<Vec<Project>, GetProjectsError> {
        self.result.clone()
    }
}

#[async_trait]
impl GetFeaturedProjectsUseCase for StubGetProjectsUseCase {
    async fn execute(&self) -> Result<Vec<Project>, GetProjectsError> {
        self.result.clone()
    }
}

// ============================================================================
// Blog
// ============================================================================

pub struct StubGetPublishedPostsUseCase {
    pub result: Result<Vec<BlogPost>, GetPublishedPostsError>,
}

#[async_trait]
impl GetPublishedPostsUseCase for StubGetPublishedPostsUseCase {
    async fn execute(&self) -> Result<Vec<BlogPost>, GetPublishedPostsError> {
        self.result.clone()
    }
}

pub struct StubGetAdminPostsUseCase {
    pub result: Result<Vec<BlogPostAdminView>, GetAdminPostsError>,
}

#[async_trait]
impl GetAdminPostsUseCase for StubGetAdminPostsUseCase {
    async fn execute(&self) -> Result<Vec<BlogPostAdminView>, GetAdminPostsError> {
        self.result.clone()
    }
}

pub struct StubGetPostBySlugUseCase {
    pub result: Result<BlogPost, GetPostBySlugError>,
}

#[async_trait]
impl GetPostBySlugUseCase for StubGetPostBySlugUseCase {
    async fn execute(&self, _slug: &str) -> Result<BlogPost, GetPostBySlugError> {
        self.result.clone()
    }
}

pub struct StubCreatePostUseCase {
    pub result: Result<BlogPost, CreatePostError>,
}

#[async_trait]
impl CreatePostUseCase for StubCreatePostUseCase {
    async fn execute(&self, _new: NewBlogPost) -> Result<BlogPost, CreatePostError> {
        self.result.clone()
    }
}

pub struct StubTogglePublishUseCase {
    pub result: Result<BlogPost, TogglePublishError>,
}

#[async_trait]
impl TogglePublishUseCase for StubTogglePublishUseCase {
    async fn execute(&self, _id: i32) -> Result<BlogPost, TogglePublishError> {
        self.result.clone()
    }
}

pub struct StubDeletePostUseCase {
    pub result: Result<BlogPost, DeletePostError>,
}

#[async_trait]
impl DeletePostUseCase for StubDeletePostUseCase {
    async fn execute(&self, _id: i32) -> Result<BlogPost, DeletePostError> {
        self.result.clone()
    }
}

pub struct StubUploadDocxUseCase {
    pub result: Result<UploadDocxResult, UploadDocxError>,
}

#[async_trait]
impl UploadDocxUseCase for StubUploadDocxUseCase {
    async fn execute(
        &self,
        _command: UploadDocxCommand,
    ) -> Result<UploadDocxResult, UploadDocxError> {
        self.result.clone()
    }
}
