//! Object identifier generation
//!
//! Xcode identifies every record in a `project.pbxproj` with a 24-character
//! uppercase hexadecimal token. New tokens are minted from a v4 UUID, so each
//! run of the tool produces fresh identifiers.

use std::fmt;
use uuid::Uuid;

/// Length of a pbxproj object identifier in hex characters
pub const OBJECT_ID_LEN: usize = 24;

/// A 24-character uppercase hexadecimal pbxproj object identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectId(String);

impl ObjectId {
    /// Generates a fresh identifier from a random v4 UUID
    ///
    /// The 32-character simple hex form is truncated to 24 characters and
    /// uppercased, matching the token format Xcode itself emits.
    pub fn generate() -> Self {
        let hex = Uuid::new_v4().simple().to_string();
        ObjectId(hex[..OBJECT_ID_LEN].to_ascii_uppercase())
    }

    /// Returns the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The three identifiers minted for one patch run
#[derive(Debug, Clone)]
pub struct GeneratedIds {
    /// File reference for Fresh.storekit
    pub storekit_ref: ObjectId,
    /// File reference for DivinePrayers.entitlements
    pub entitlements_ref: ObjectId,
    /// Build-file entry placing Fresh.storekit in the Resources phase
    pub storekit_build: ObjectId,
}

impl GeneratedIds {
    /// Mints a fresh identifier set
    pub fn generate() -> Self {
        GeneratedIds {
            storekit_ref: ObjectId::generate(),
            entitlements_ref: ObjectId::generate(),
            storekit_build: ObjectId::generate(),
        }
    }
}
