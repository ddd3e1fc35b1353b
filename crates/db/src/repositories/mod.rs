//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod content_repo;
pub mod hero_repo;
pub mod landing_repo;
pub mod portfolio_repo;
pub mod service_repo;

pub use content_repo::ContentRepo;
pub use hero_repo::HeroRepo;
pub use landing_repo::LandingRepo;
pub use portfolio_repo::PortfolioRepo;
pub use service_repo::ServiceRepo;
