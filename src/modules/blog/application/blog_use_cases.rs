use std::sync::Arc;

use crate::modules::blog::application::ports::incoming::use_cases::{
    CreatePostUseCase, DeletePostUseCase, GetAdminPostsUseCase, GetPostBySlugUseCase,
    GetPublishedPostsUseCase, TogglePublishUseCase, UploadDocxUseCase,
};
use crate::modules::blog::application::ports::outgoing::{
    BlogPostQuery, BlogPostRepository, DocumentExtractor, UploadedFileStore,
};
use crate::modules::blog::application::service::{
    CreatePostService, DeletePostService, GetAdminPostsService, GetPostBySlugService,
    GetPublishedPostsService, TogglePublishService, UploadDocxService,
};

#[derive(Clone)]
pub struct BlogUseCases {
    pub get_published: Arc<dyn GetPublishedPostsUseCase + Send + Sync>,
    pub get_admin: Arc<dyn GetAdminPostsUseCase + Send + Sync>,
    pub get_by_slug: Arc<dyn GetPostBySlugUseCase + Send + Sync>,
    pub create: Arc<dyn CreatePostUseCase + Send + Sync>,
    pub upload_docx: Arc<dyn UploadDocxUseCase + Send + Sync>,
    pub toggle_publish: Arc<dyn TogglePublishUseCase + Send + Sync>,
    pub delete: Arc<dyn DeletePostUseCase + Send + Sync>,
}

impl BlogUseCases {
    pub fn new<Q, R>(
        query: Q,
        repository: R,
        files: Arc<dyn UploadedFileStore + Send + Sync>,
        extractor: Arc<dyn DocumentExtractor + Send + Sync>,
    ) -> Self
    where
        Q: BlogPostQuery + Clone + 'static,
        R: BlogPostRepository + Clone + 'static,
    {
        Self {
            get_published: Arc::new(GetPublishedPostsService::new(query.clone())),
            get_admin: Arc::new(GetAdminPostsService::new(query.clone(), files.clone())),
            get_by_slug: Arc::new(GetPostBySlugService::new(query.clone())),
            create: Arc::new(CreatePostService::new(repository.clone())),
            upload_docx: Arc::new(UploadDocxService::new(
                query,
                repository.clone(),
                files.clone(),
                extractor,
            )),
            toggle_publish: Arc::new(TogglePublishService::new(repository.clone())),
            delete: Arc::new(DeletePostService::new(repository, files)),
        }
    }
}
