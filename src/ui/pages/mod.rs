//! Application pages module
//!
//! - Recruitment page (home)
//! - Not found page

mod landing;
mod not_found;

pub use landing::RecruitmentPage;
pub use not_found::NotFoundPage;
