//! Idempotent population of the default profile and projects.
//!
//! Each collection is checked and filled independently: the count-then-insert
//! is not transactional, so two concurrent seed calls can both see an empty
//! collection and insert twice.

use folio_core::content::{demo_profile, demo_projects};
use serde::Serialize;

use crate::repositories::{ProfileRepo, ProjectRepo};
use crate::store::{StoreError, StoreHandle};

/// What a seeding run inserted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedSummary {
    /// Whether the default profile was created.
    pub profile: bool,
    /// Number of demo projects created.
    pub projects: u32,
}

/// Insert the demo profile and projects into whichever of the two
/// collections is empty. Running it again changes nothing.
pub async fn seed_content(store: &StoreHandle) -> Result<SeedSummary, StoreError> {
    store.get()?;

    let mut summary = SeedSummary::default();

    if ProfileRepo::count(store).await? == 0 {
        ProfileRepo::create(store, &demo_profile()).await?;
        summary.profile = true;
        tracing::info!("Seeded default profile");
    } else {
        tracing::debug!("Profile collection not empty, skipping");
    }

    if ProjectRepo::count(store).await? == 0 {
        for project in demo_projects() {
            ProjectRepo::create(store, &project).await?;
            summary.projects += 1;
        }
        tracing::info!(count = summary.projects, "Seeded demo projects");
    } else {
        tracing::debug!("Project collection not empty, skipping");
    }

    Ok(summary)
}
