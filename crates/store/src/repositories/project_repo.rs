//! Repository for the `projects` collection.

use atelier_core::error::CoreError;
use atelier_core::ids;
use chrono::Utc;
use validator::Validate;

use crate::models::project::{CreateProject, DeleteProject, Project, ProjectStatus, UpdateProject};
use crate::JsonStore;

pub struct ProjectRepo;

impl ProjectRepo {
    /// List all projects in stored order.
    pub async fn list(store: &JsonStore) -> Result<Vec<Project>, CoreError> {
        Ok(store.projects.load().await?)
    }

    /// Append a new project with server-stamped id and timestamps.
    pub async fn create(store: &JsonStore, input: CreateProject) -> Result<Project, CoreError> {
        input
            .validate()
            .map_err(|err| CoreError::Validation(err.to_string()))?;

        let now = Utc::now();
        let project = Project {
            id: ids::next_string_id(),
            title: input.title,
            description: input.description,
            status: input.status.unwrap_or(ProjectStatus::Upcoming),
            technologies: input.technologies,
            url: input.url,
            github_url: input.github_url,
            image_url: input.image_url,
            featured: input.featured.unwrap_or(false),
            created_at: now,
            updated_at: now,
        };

        let created = project.clone();
        store
            .projects
            .update(move |items| {
                items.push(project);
                Ok(())
            })
            .await?;
        Ok(created)
    }

    /// Merge the payload onto the stored record. Absent fields are
    /// preserved.
    pub async fn update(store: &JsonStore, input: UpdateProject) -> Result<Project, CoreError> {
        store
            .projects
            .update(move |items| {
                let project = items
                    .iter_mut()
                    .find(|p| p.id == input.id)
                    .ok_or_else(|| CoreError::not_found("Project", &input.id))?;

                if let Some(title) = input.title {
                    project.title = title;
                }
                if let Some(description) = input.description {
                    project.description = description;
                }
                if let Some(status) = input.status {
                    project.status = status;
                }
                if let Some(technologies) = input.technologies {
                    project.technologies = technologies;
                }
                if let Some(url) = input.url {
                    project.url = Some(url);
                }
                if let Some(github_url) = input.github_url {
                    project.github_url = Some(github_url);
                }
                if let Some(image_url) = input.image_url {
                    project.image_url = Some(image_url);
                }
                if let Some(featured) = input.featured {
                    project.featured = featured;
                }
                project.updated_at = Utc::now();
                Ok(project.clone())
            })
            .await
    }

    /// Hard delete; returns the removed record.
    pub async fn delete(store: &JsonStore, input: DeleteProject) -> Result<Project, CoreError> {
        store
            .projects
            .update(move |items| {
                let index = items
                    .iter()
                    .position(|p| p.id == input.id)
                    .ok_or_else(|| CoreError::not_found("Project", &input.id))?;
                Ok(items.remove(index))
            })
            .await
    }
}
