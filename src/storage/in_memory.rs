use tokio::sync::RwLock;

use crate::modules::blog::application::domain::entities::BlogPost;
use crate::modules::contact::application::domain::entities::ContactMessage;
use crate::modules::education::application::domain::entities::Education;
use crate::modules::experience::application::domain::entities::Experience;
use crate::modules::project::application::domain::entities::Project;
use crate::storage::seed;

/// Items of one entity type plus the id counter for the next insert.
#[derive(Debug)]
pub struct Collection<T> {
    items: Vec<T>,
    next_id: i32,
}

impl<T: Clone> Collection<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// Items built by `build(id, value)` with ids 1..=n.
    pub fn seeded<S>(values: Vec<S>, build: impl Fn(i32, S) -> T) -> Self {
        let mut collection = Self::new();
        for value in values {
            collection.insert_with(|id| build(id, value));
        }
        collection
    }

    pub fn snapshot(&self) -> Vec<T> {
        self.items.clone()
    }

    pub fn filtered(&self, keep: impl Fn(&T) -> bool) -> Vec<T> {
        self.items.iter().filter(|item| keep(item)).cloned().collect()
    }

    pub fn insert_with(&mut self, build: impl FnOnce(i32) -> T) -> T {
        let id = self.next_id;
        self.next_id += 1;

        let item = build(id);
        self.items.push(item.clone());
        item
    }

    pub fn find(&self, matches: impl Fn(&T) -> bool) -> Option<&T> {
        self.items.iter().find(|item| matches(item))
    }

    pub fn find_mut(&mut self, matches: impl Fn(&T) -> bool) -> Option<&mut T> {
        self.items.iter_mut().find(|item| matches(item))
    }

    pub fn remove(&mut self, matches: impl Fn(&T) -> bool) -> Option<T> {
        let index = self.items.iter().position(|item| matches(item))?;
        Some(self.items.remove(index))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Clone> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Process-local storage shared by every `*Memory` adapter.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    pub education: RwLock<Collection<Education>>,
    pub experience: RwLock<Collection<Experience>>,
    pub projects: RwLock<Collection<Project>>,
    pub blog_posts: RwLock<Collection<BlogPost>>,
    pub contact_messages: RwLock<Collection<ContactMessage>>,
}

impl InMemoryStore {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn seeded() -> Self {
        Self {
            education: RwLock::new(Collection::seeded(seed::education(), |id, new| {
                new.into_education(id)
            })),
            experience: RwLock::new(Collection::seeded(seed::experience(), |id, new| {
                new.into_experience(id)
            })),
            projects: RwLock::new(Collection::seeded(seed::projects(), |id, new| {
                new.into_project(id)
            })),
            blog_posts: RwLock::new(Collection::seeded(
                seed::blog_posts(),
                |id, (new, created_at)| new.into_post(id, created_at),
            )),
            contact_messages: RwLock::new(Collection::new()),
        }
    }
}
