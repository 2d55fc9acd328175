//! Repository for the `testimonials` collection.

use atelier_core::error::CoreError;
use atelier_core::ids;
use chrono::Utc;
use validator::Validate;

use crate::models::testimonial::{
    CreateTestimonial, DeleteTestimonial, Testimonial, TestimonialStatus, UpdateTestimonial,
};
use crate::JsonStore;

pub struct TestimonialRepo;

impl TestimonialRepo {
    /// List all testimonials in stored order.
    pub async fn list(store: &JsonStore) -> Result<Vec<Testimonial>, CoreError> {
        Ok(store.testimonials.load().await?)
    }

    /// Append a new testimonial. Admin creations start `approved`; public
    /// submissions start `pending` and wait for moderation.
    pub async fn create(
        store: &JsonStore,
        input: CreateTestimonial,
        approved: bool,
    ) -> Result<Testimonial, CoreError> {
        input
            .validate()
            .map_err(|err| CoreError::Validation(err.to_string()))?;

        let now = Utc::now();
        let testimonial = Testimonial {
            id: ids::next_string_id(),
            name: input.name,
            position: input.position,
            company: input.company,
            content: input.content,
            rating: input.rating,
            avatar_url: input.avatar_url,
            status: if approved {
                TestimonialStatus::Approved
            } else {
                TestimonialStatus::Pending
            },
            created_at: now,
            updated_at: now,
        };

        let created = testimonial.clone();
        store
            .testimonials
            .update(move |items| {
                items.push(testimonial);
                Ok(())
            })
            .await?;
        Ok(created)
    }

    /// Merge the payload onto the stored record; `status` transitions are
    /// how the dashboard moderates. Absent fields are preserved.
    pub async fn update(
        store: &JsonStore,
        input: UpdateTestimonial,
    ) -> Result<Testimonial, CoreError> {
        if let Some(rating) = input.rating {
            if !(1..=5).contains(&rating) {
                return Err(CoreError::Validation(
                    "rating must be between 1 and 5".to_string(),
                ));
            }
        }

        store
            .testimonials
            .update(move |items| {
                let testimonial = items
                    .iter_mut()
                    .find(|t| t.id == input.id)
                    .ok_or_else(|| CoreError::not_found("Testimonial", &input.id))?;

                if let Some(name) = input.name {
                    testimonial.name = name;
                }
                if let Some(position) = input.position {
                    testimonial.position = position;
                }
                if let Some(company) = input.company {
                    testimonial.company = company;
                }
                if let Some(content) = input.content {
                    testimonial.content = content;
                }
                if let Some(rating) = input.rating {
                    testimonial.rating = rating;
                }
                if let Some(avatar_url) = input.avatar_url {
                    testimonial.avatar_url = Some(avatar_url);
                }
                if let Some(status) = input.status {
                    testimonial.status = status;
                }
                testimonial.updated_at = Utc::now();
                Ok(testimonial.clone())
            })
            .await
    }

    /// Hard delete; returns the removed record.
    pub async fn delete(
        store: &JsonStore,
        input: DeleteTestimonial,
    ) -> Result<Testimonial, CoreError> {
        store
            .testimonials
            .update(move |items| {
                let index = items
                    .iter()
                    .position(|t| t.id == input.id)
                    .ok_or_else(|| CoreError::not_found("Testimonial", &input.id))?;
                Ok(items.remove(index))
            })
            .await
    }
}
