use actix_web::web;
use std::sync::Arc;

use crate::modules::blog::application::blog_use_cases::BlogUseCases;
use crate::modules::blog::application::domain::upload_policy::UploadPolicy;
use crate::modules::blog::application::ports::incoming::use_cases::{
    CreatePostUseCase, DeletePostUseCase, GetAdminPostsUseCase, GetPostBySlugUseCase,
    GetPublishedPostsUseCase, TogglePublishUseCase, UploadDocxUseCase,
};
use crate::modules::contact::application::contact_use_cases::ContactUseCases;
use crate::modules::contact::application::ports::incoming::use_cases::CreateContactMessageUseCase;
use crate::modules::education::application::education_use_cases::EducationUseCases;
use crate::modules::education::application::ports::incoming::use_cases::{
    CreateEducationUseCase, GetEducationUseCase,
};
use crate::modules::experience::application::experience_use_cases::ExperienceUseCases;
use crate::modules::experience::application::ports::incoming::use_cases::{
    CreateExperienceUseCase, GetExperienceUseCase,
};
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectUseCase, GetFeaturedProjectsUseCase, GetProjectsUseCase,
};
use crate::modules::project::application::project_use_cases::ProjectUseCases;
use crate::tests::support::stubs::{
    EmptyListStub, NotFoundStub, StubGetProjectsUseCase, UnusedWriteStub,
};
use crate::AppState;

/// Builds an [`AppState`] whose use cases are all stubs. Reads return
/// empty lists, lookups by key return not-found and writes fail, unless
/// a test swaps one in through a `with_*` method.
pub struct TestAppStateBuilder {
    education: EducationUseCases,
    experience: ExperienceUseCases,
    project: ProjectUseCases,
    blog: BlogUseCases,
    contact: ContactUseCases,
    upload_policy: UploadPolicy,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            education: EducationUseCases {
                get_list: Arc::new(EmptyListStub),
                create: Arc::new(UnusedWriteStub),
            },
            experience: ExperienceUseCases {
                get_list: Arc::new(EmptyListStub),
                create: Arc::new(UnusedWriteStub),
            },
            project: ProjectUseCases {
                get_list: Arc::new(StubGetProjectsUseCase::success(vec![])),
                get_featured: Arc::new(StubGetProjectsUseCase::success(vec![])),
                create: Arc::new(UnusedWriteStub),
            },
            blog: BlogUseCases {
                get_published: Arc::new(EmptyListStub),
                get_admin: Arc::new(EmptyListStub),
                get_by_slug: Arc::new(NotFoundStub),
                create: Arc::new(UnusedWriteStub),
                upload_docx: Arc::new(UnusedWriteStub),
                toggle_publish: Arc::new(NotFoundStub),
                delete: Arc::new(NotFoundStub),
            },
            contact: ContactUseCases {
                get_list: Arc::new(EmptyListStub),
                create: Arc::new(UnusedWriteStub),
                mark_read: Arc::new(NotFoundStub),
            },
            upload_policy: UploadPolicy::default(),
        }
    }
}

impl TestAppStateBuilder {
    // Education

    pub fn with_get_education(mut self, uc: impl GetEducationUseCase + 'static) -> Self {
        self.education.get_list = Arc::new(uc);
        self
    }

    pub fn with_create_education(mut self, uc: impl CreateEducationUseCase + 'static) -> Self {
        self.education.create = Arc::new(uc);
        self
    }

    // Experience

    pub fn with_get_experience(mut self, uc: impl GetExperienceUseCase + 'static) -> Self {
        self.experience.get_list = Arc::new(uc);
        self
    }

    pub fn with_create_experience(mut self, uc: impl CreateExperienceUseCase + 'static) -> Self {
        self.experience.create = Arc::new(uc);
        self
    }

    // Projects

    pub fn with_get_projects(mut self, uc: impl GetProjectsUseCase + 'static) -> Self {
        self.project.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_featured_projects(
        mut self,
        uc: impl GetFeaturedProjectsUseCase + 'static,
    ) -> Self {
        self.project.get_featured = Arc::new(uc);
        self
    }

    pub fn with_create_project(mut self, uc: impl CreateProjectUseCase + 'static) -> Self {
        self.project.create = Arc::new(uc);
        self
    }

    // Contact

    pub fn with_create_contact_message(
        mut self,
        uc: impl CreateContactMessageUseCase + 'static,
    ) -> Self {
        self.contact.create = Arc::new(uc);
        self
    }

    // Blog

    pub fn with_get_published_posts(
        mut self,
        uc: impl GetPublishedPostsUseCase + 'static,
    ) -> Self {
        self.blog.get_published = Arc::new(uc);
        self
    }

    pub fn with_get_admin_posts(mut self, uc: impl GetAdminPostsUseCase + 'static) -> Self {
        self.blog.get_admin = Arc::new(uc);
        self
    }

    pub fn with_get_post_by_slug(mut self, uc: impl GetPostBySlugUseCase + 'static) -> Self {
        self.blog.get_by_slug = Arc::new(uc);
        self
    }

    pub fn with_create_post(mut self, uc: impl CreatePostUseCase + 'static) -> Self {
        self.blog.create = Arc::new(uc);
        self
    }

    pub fn with_upload_docx(mut self, uc: impl UploadDocxUseCase + 'static) -> Self {
        self.blog.upload_docx = Arc::new(uc);
        self
    }

    pub fn with_toggle_publish(mut self, uc: impl TogglePublishUseCase + 'static) -> Self {
        self.blog.toggle_publish = Arc::new(uc);
        self
    }

    pub fn with_delete_post(mut self, uc: impl DeletePostUseCase + 'static) -> Self {
        self.blog.delete = Arc::new(uc);
        self
    }

    pub fn with_upload_policy(mut self, policy: UploadPolicy) -> Self {
        self.upload_policy = policy;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            education: self.education,
            experience: self.experience,
            project: self.project,
            blog: self.blog,
            contact: self.contact,
            upload_policy: self.upload_policy,
        })
    }
}
