use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use crate::modules::blog::application::domain::derivation::{
    derive_excerpt, derive_title, slug_with_suffix, slugify, upload_tags,
};
use crate::modules::blog::application::domain::entities::NewBlogPost;
use crate::modules::blog::application::ports::incoming::use_cases::{
    UploadDocxCommand, UploadDocxError, UploadDocxResult, UploadDocxUseCase,
};
use crate::modules::blog::application::ports::outgoing::{
    BlogPostQuery, BlogPostRepository, BlogPostRepositoryError, DocumentExtractor,
    ExtractionError, StoredFile, UploadedFileStore,
};

/// Upper bound on `-n` suffixes tried before giving up on a slug.
const MAX_SLUG_ATTEMPTS: u32 = 100;

/// Stores the original, extracts its text and saves it as a draft post.
/// Any failure after the file is written removes the file again.
pub struct UploadDocxService<Q, R>
where
    Q: BlogPostQuery,
    R: BlogPostRepository,
{
    query: Q,
    repository: R,
    files: Arc<dyn UploadedFileStore + Send + Sync>,
    extractor: Arc<dyn DocumentExtractor + Send + Sync>,
}

impl<Q, R> UploadDocxService<Q, R>
where
    Q: BlogPostQuery,
    R: BlogPostRepository,
{
    pub fn new(
        query: Q,
        repository: R,
        files: Arc<dyn UploadedFileStore + Send + Sync>,
        extractor: Arc<dyn DocumentExtractor + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repository,
            files,
            extractor,
        }
    }

    async fn create_from_stored(
        &self,
        command: &UploadDocxCommand,
        stored: &StoredFile,
    ) -> Result<UploadDocxResult, UploadDocxError> {
        let extractor = Arc::clone(&self.extractor);
        let bytes = command.bytes().to_vec();
        let text = tokio::task::spawn_blocking(move || extractor.extract_text(&bytes))
            .await
            .map_err(|e| UploadDocxError::ExtractionFailed(format!("extraction task failed: {e}")))?
            .map_err(|e| match e {
                ExtractionError::TooLarge { .. } => UploadDocxError::DocumentTooLarge(e.to_string()),
                other => UploadDocxError::ExtractionFailed(other.to_string()),
            })?;

        if text.trim().is_empty() {
            return Err(UploadDocxError::EmptyDocument);
        }

        let title = derive_title(&text, command.file_name());
        let excerpt = derive_excerpt(&text, title.from_text);
        let base_slug = slugify(&title.title);

        for attempt in 1..=MAX_SLUG_ATTEMPTS {
            let slug = if attempt == 1 {
                base_slug.clone()
            } else {
                slug_with_suffix(&base_slug, attempt)
            };

            let taken = self
                .query
                .slug_exists(&slug)
                .await
                .map_err(|e| UploadDocxError::RepositoryError(e.to_string()))?;
            if taken {
                continue;
            }

            let new = NewBlogPost {
                title: title.title.clone(),
                slug,
                content: text.clone(),
                excerpt: excerpt.clone(),
                published: false,
                tags: upload_tags(),
                file_path: Some(stored.path.clone()),
                original_filename: Some(stored.original_name.clone()),
            };

            match self.repository.create_post(new).await {
                Ok(post) => {
                    return Ok(UploadDocxResult {
                        post,
                        extracted_length: text.chars().count(),
                    })
                }
                // Lost a race for this slug; try the next suffix.
                Err(BlogPostRepositoryError::SlugAlreadyExists) => continue,
                Err(e) => return Err(UploadDocxError::RepositoryError(e.to_string())),
            }
        }

        Err(UploadDocxError::RepositoryError(format!(
            "no free slug for '{}' after {} attempts",
            base_slug, MAX_SLUG_ATTEMPTS
        )))
    }

    async fn discard(&self, path: &str) {
        if let Err(e) = self.files.remove(path).await {
            warn!(path, error = %e, "failed to remove uploaded file after failed upload");
        }
    }
}

#[async_trait]
impl<Q, R> UploadDocxUseCase for UploadDocxService<Q, R>
where
    Q: BlogPostQuery + Send + Sync,
    R: BlogPostRepository + Send + Sync,
{
    async fn execute(&self, command: UploadDocxCommand) -> Result<UploadDocxResult, UploadDocxError> {
        let stored = self
            .files
            .save(command.file_name(), command.bytes())
            .await
            .map_err(|e| UploadDocxError::StorageFailed(e.to_string()))?;

        match self.create_from_stored(&command, &stored).await {
            Ok(result) => {
                info!(
                    id = result.post.id,
                    slug = %result.post.slug,
                    extracted_length = result.extracted_length,
                    "draft post created from upload"
                );
                Ok(result)
            }
            Err(e) => {
                self.discard(&stored.path).await;
                Err(e)
            }
        }
    }
}
