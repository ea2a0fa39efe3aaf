//! Typed access to each collection, one repository per schema.

mod contact_message_repo;
mod profile_repo;
mod project_repo;

pub use contact_message_repo::ContactMessageRepo;
pub use profile_repo::ProfileRepo;
pub use project_repo::ProjectRepo;
