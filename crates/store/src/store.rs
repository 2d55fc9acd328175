//! The flat-file JSON store.
//!
//! One file per resource, each holding one pretty-printed JSON array.
//! Reads seed the file with defaults when it is absent; a file that exists
//! but fails to parse is an error, never grounds for re-seeding. Writes go
//! to a temp file in the same directory and are renamed over the target, so
//! a crash mid-write leaves the previous contents intact.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use atelier_core::error::CoreError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::RwLock;

use crate::models::inquiry::ProjectInquiry;
use crate::models::notification::Notification;
use crate::models::project::Project;
use crate::models::testimonial::Testimonial;
use crate::seed;

/// Failures in the backing store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed JSON in {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl From<StoreError> for CoreError {
    fn from(err: StoreError) -> Self {
        CoreError::Storage(err.to_string())
    }
}

/// One resource collection bound to one JSON file.
///
/// The lock serializes read-modify-write cycles in-process, so two
/// concurrent mutations to the same resource cannot lose an update.
/// Writers in other processes remain uncoordinated.
pub struct Collection<T> {
    name: &'static str,
    path: PathBuf,
    seed: fn() -> Vec<T>,
    lock: RwLock<()>,
}

impl<T> Collection<T>
where
    T: Serialize + DeserializeOwned + Clone,
{
    fn new(dir: &Path, name: &'static str, seed: fn() -> Vec<T>) -> Self {
        Collection {
            name,
            path: dir.join(format!("{name}.json")),
            seed,
            lock: RwLock::new(()),
        }
    }

    /// Load the whole collection, seeding the file on first access.
    pub async fn load(&self) -> Result<Vec<T>, StoreError> {
        {
            let _guard = self.lock.read().await;
            if let Some(items) = self.try_read().await? {
                return Ok(items);
            }
        }
        // File absent: retake the lock exclusively so only one task seeds.
        let _guard = self.lock.write().await;
        self.read_or_seed().await
    }

    /// Run a read-modify-write cycle under the collection's write lock.
    ///
    /// The closure mutates the array in place; if it returns an error the
    /// file is left untouched, so a failed lookup can never dirty the
    /// collection.
    pub async fn update<R, F>(&self, apply: F) -> Result<R, CoreError>
    where
        F: FnOnce(&mut Vec<T>) -> Result<R, CoreError>,
    {
        let _guard = self.lock.write().await;
        let mut items = self.read_or_seed().await?;
        let out = apply(&mut items)?;
        self.persist(&items).await?;
        Ok(out)
    }

    /// Read the file, writing the seed defaults if it is absent.
    /// Caller must hold the write lock.
    async fn read_or_seed(&self) -> Result<Vec<T>, StoreError> {
        if let Some(items) = self.try_read().await? {
            return Ok(items);
        }
        let seeded = (self.seed)();
        self.persist(&seeded).await?;
        tracing::debug!(
            resource = self.name,
            count = seeded.len(),
            "Seeded collection with defaults"
        );
        Ok(seeded)
    }

    /// `Ok(None)` when the backing file does not exist yet.
    async fn try_read(&self) -> Result<Option<Vec<T>>, StoreError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|source| StoreError::Malformed {
                    path: self.path.clone(),
                    source,
                }),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }

    /// Serialize to a temp file in the same directory, then rename it over
    /// the target.
    async fn persist(&self, items: &[T]) -> Result<(), StoreError> {
        let json =
            serde_json::to_string_pretty(items).map_err(|source| StoreError::Malformed {
                path: self.path.clone(),
                source,
            })?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json)
            .await
            .map_err(|source| StoreError::Io {
                path: tmp.clone(),
                source,
            })?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|source| StoreError::Io {
                path: self.path.clone(),
                source,
            })?;
        tracing::debug!(resource = self.name, count = items.len(), "Persisted collection");
        Ok(())
    }
}

/// Handle to the data directory and its four resource collections.
pub struct JsonStore {
    pub projects: Collection<Project>,
    pub testimonials: Collection<Testimonial>,
    pub inquiries: Collection<ProjectInquiry>,
    pub notifications: Collection<Notification>,
}

impl JsonStore {
    /// Open the data directory (creating it if needed) and bind the four
    /// resource collections. Files themselves are created lazily on first
    /// access.
    pub async fn open(data_dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let dir = data_dir.as_ref();
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|source| StoreError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
        Ok(JsonStore {
            projects: Collection::new(dir, "projects", seed::projects),
            testimonials: Collection::new(dir, "testimonials", seed::testimonials),
            inquiries: Collection::new(dir, "inquiries", seed::inquiries),
            notifications: Collection::new(dir, "notifications", seed::notifications),
        })
    }

    /// Cheap liveness probe: the projects collection parses (seeding it on
    /// first call).
    pub async fn health_check(&self) -> Result<(), StoreError> {
        self.projects.load().await.map(|_| ())
    }

    /// Append an inquiry and its derived notification.
    ///
    /// Inquiries are written first; if the notification write fails, the
    /// inquiries file is restored to its prior contents so the two files
    /// cannot drift apart. Lock order is inquiries, then notifications --
    /// keep it that way everywhere.
    pub async fn append_inquiry_with_notification(
        &self,
        inquiry: ProjectInquiry,
        notification: Notification,
    ) -> Result<(), CoreError> {
        let _inquiries_guard = self.inquiries.lock.write().await;
        let _notifications_guard = self.notifications.lock.write().await;

        let mut inquiries = self.inquiries.read_or_seed().await?;
        let prior = inquiries.clone();
        inquiries.push(inquiry);
        self.inquiries.persist(&inquiries).await?;

        let appended = async {
            let mut notifications = self.notifications.read_or_seed().await?;
            notifications.push(notification);
            self.notifications.persist(&notifications).await
        }
        .await;

        if let Err(err) = appended {
            if let Err(rollback) = self.inquiries.persist(&prior).await {
                tracing::error!(
                    error = %rollback,
                    "Rollback of inquiries after failed notification write also failed"
                );
            }
            return Err(err.into());
        }
        Ok(())
    }
}
