//! Profile reads and full-document saves.

use std::sync::Arc;

use bytes::Bytes;
use tracing::info;
use validator::Validate;

use facdev_core::error::AppError;
use facdev_core::traits::storage::ObjectStore;
use facdev_datastore::repositories::profile::ProfileRepository;
use facdev_entity::profile::{Profile, ProfileUpdate};
use facdev_storage::paths;

use crate::context::SessionContext;

/// Manages faculty profiles and their photos.
#[derive(Clone)]
pub struct ProfileService {
    /// Profile repository.
    profile_repo: Arc<ProfileRepository>,
    /// Object storage for profile photos.
    storage: Arc<dyn ObjectStore>,
}

impl std::fmt::Debug for ProfileService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileService").finish()
    }
}

impl ProfileService {
    /// Creates a new profile service.
    pub fn new(profile_repo: Arc<ProfileRepository>, storage: Arc<dyn ObjectStore>) -> Self {
        Self {
            profile_repo,
            storage,
        }
    }

    /// Fetches the current user's profile, if one has been saved.
    pub async fn get(&self, ctx: &SessionContext) -> Result<Option<Profile>, AppError> {
        self.profile_repo.find(&ctx.user_id).await
    }

    /// Saves the current user's profile as a full replacement.
    ///
    /// A new photo overwrites the single photo slot for the user; when
    /// none is supplied the previously stored photo URL is kept.
    pub async fn save(
        &self,
        ctx: &SessionContext,
        update: ProfileUpdate,
        photo: Option<Bytes>,
    ) -> Result<Profile, AppError> {
        update
            .validate()
            .map_err(|e| AppError::validation(e.to_string()))?;

        let photo_url = match photo {
            Some(bytes) => {
                let path = paths::profile_photo_path(&ctx.user_id);
                self.storage.put(&path, bytes).await?;
                Some(self.storage.public_url(&path).await?)
            }
            None => self
                .profile_repo
                .find(&ctx.user_id)
                .await?
                .and_then(|profile| profile.photo_url),
        };

        let profile = Profile::from_update(ctx.user_id.clone(), update, photo_url);
        self.profile_repo.upsert(&profile).await?;

        info!(user_id = %ctx.user_id, "Profile saved");
        Ok(profile)
    }
}
