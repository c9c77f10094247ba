//! In-memory blog store.
//!
//! A mutex-guarded map from key to [`Blog`]. The mutex is the whole
//! concurrency story: each operation acquires it for its duration and the
//! guard's scope releases it on every exit path, so concurrent request
//! handlers may share one store behind an `Arc` without further ceremony.
//! Writes to the same key are last-write-wins. Nothing is persisted — the
//! map is born empty and dies with the process.

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Mutex;

use uuid::Uuid;

use crate::blog::Blog;
use crate::error::StoreError;
use crate::slug;

/// How store keys are derived on [`MemStore::add`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Keying {
    /// Server-generated random 128-bit identifier, independent of the title.
    Uuid,
    /// Deterministic slug of the title. Colliding titles collide on key.
    Slug,
}

impl FromStr for Keying {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "uuid" => Ok(Self::Uuid),
            "slug" => Ok(Self::Slug),
            _ => Err(()),
        }
    }
}

/// The in-memory store. Owns every [`Blog`] exclusively.
pub struct MemStore {
    keying: Keying,
    blogs: Mutex<HashMap<String, Blog>>,
}

impl MemStore {
    /// Creates an empty store with the given keying mode.
    pub fn new(keying: Keying) -> Self {
        Self {
            keying,
            blogs: Mutex::new(HashMap::new()),
        }
    }

    pub fn keying(&self) -> Keying {
        self.keying
    }

    /// Inserts a blog and returns the key it was filed under.
    ///
    /// The key is derived per the keying mode and written into `blog.id`;
    /// whatever id the caller supplied is discarded. In slug mode an existing
    /// record under the same key is overwritten — Add does not treat a
    /// collision as a conflict.
    pub fn add(&self, mut blog: Blog) -> Result<String, StoreError> {
        let key = match self.keying {
            Keying::Uuid => Uuid::new_v4().to_string(),
            Keying::Slug => slug::slugify(&blog.title),
        };
        blog.id = key.clone();

        let mut blogs = self.blogs.lock().expect("store mutex poisoned");
        blogs.insert(key.clone(), blog);
        Ok(key)
    }

    /// Returns the blog filed under `key`, or [`StoreError::NotFound`].
    pub fn get(&self, key: &str) -> Result<Blog, StoreError> {
        let blogs = self.blogs.lock().expect("store mutex poisoned");
        blogs.get(key).cloned().ok_or(StoreError::NotFound)
    }

    /// Returns a snapshot of the full mapping. No ordering guarantee.
    pub fn list(&self) -> HashMap<String, Blog> {
        let blogs = self.blogs.lock().expect("store mutex poisoned");
        blogs.clone()
    }

    /// Replaces the record at `key` wholesale. Fields are not merged.
    ///
    /// Fails with [`StoreError::NotFound`] if the key is absent, leaving the
    /// store unchanged. The replacement's `id` is forced to the key so the
    /// key/id invariant survives careless callers.
    pub fn update(&self, key: &str, mut blog: Blog) -> Result<(), StoreError> {
        let mut blogs = self.blogs.lock().expect("store mutex poisoned");
        if !blogs.contains_key(key) {
            return Err(StoreError::NotFound);
        }
        blog.id = key.to_owned();
        blogs.insert(key.to_owned(), blog);
        Ok(())
    }

    /// Deletes the record at `key`. Idempotent: a miss is still a success.
    pub fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut blogs = self.blogs.lock().expect("store mutex poisoned");
        blogs.remove(key);
        Ok(())
    }

    /// Whether `key` has the textual shape this store's keys take: canonical
    /// hyphenated uuid in uuid mode, lowercase hyphenated slug in slug mode.
    pub fn valid_key(&self, key: &str) -> bool {
        match self.keying {
            Keying::Uuid => Uuid::try_parse(key).is_ok(),
            Keying::Slug => slug::is_valid_slug(key),
        }
    }
}
