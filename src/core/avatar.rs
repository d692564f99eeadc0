//! Gravatar-style avatar URLs derived from an email address.

use crate::core::constants::{AVATAR_DEFAULT_IMAGE, AVATAR_RATING, AVATAR_SIZE};
use sha2::{Digest, Sha256};

const GRAVATAR_BASE: &str = "//www.gravatar.com/avatar/";

#[derive(Clone, Debug)]
pub struct AvatarOptions {
    pub size: String,
    pub rating: String,
    pub default_image: String,
}

impl Default for AvatarOptions {
    fn default() -> Self {
        AvatarOptions {
            size: AVATAR_SIZE.to_string(),
            rating: AVATAR_RATING.to_string(),
            default_image: AVATAR_DEFAULT_IMAGE.to_string(),
        }
    }
}

/// Returns the protocol-relative avatar URL for `email`.
///
/// The address is trimmed and lowercased before hashing, so case or
/// surrounding whitespace never changes the result.
///
/// The hash is SHA-256, which Gravatar accepts alongside its legacy MD5
/// form. URLs therefore differ from MD5-based Gravatar links for the same
/// address while resolving to the same image.
pub fn gravatar_url(email: &str, options: &AvatarOptions) -> String {
    let normalized = email.trim().to_lowercase();
    let digest = hex::encode(Sha256::digest(normalized.as_bytes()));
    format!(
        "{}{}?s={}&r={}&d={}",
        GRAVATAR_BASE, digest, options.size, options.rating, options.default_image
    )
}
