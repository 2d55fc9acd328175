//! Typed CRUD operations over the [`JsonStore`](crate::JsonStore), one
//! repository per resource. Lookups are linear scans by id; updates are
//! explicit field-by-field merges (absent fields preserve stored values)
//! and stamp `updatedAt`.

mod inquiry_repo;
mod notification_repo;
mod project_repo;
mod testimonial_repo;

pub use inquiry_repo::InquiryRepo;
pub use notification_repo::NotificationRepo;
pub use project_repo::ProjectRepo;
pub use testimonial_repo::TestimonialRepo;
