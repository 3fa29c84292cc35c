//! Records served by the admin API.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::id::RecordId;
use crate::resource::ResourceKind;

/// A record type that belongs to exactly one resource collection.
///
/// The associated [`ResourceKind`] picks the endpoints, the filter column and
/// the cache namespace used for the record type.
pub trait Record: DeserializeOwned + Clone + fmt::Debug + Send + Sync + 'static {
    /// Collection this record type is listed from.
    const KIND: ResourceKind;

    /// Stable identifier of the record.
    fn id(&self) -> &RecordId;

    /// Whether the record is currently active (not blocked).
    fn is_active(&self) -> bool;

    /// Raw creation timestamp as sent by the server.
    fn created_at(&self) -> &str;
}

// =============================================================================
// CARD
// =============================================================================

/// Social profile link attached to a card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Social {
    /// Platform name (e.g. "facebook").
    pub platform: String,
    /// Profile URL.
    pub url: String,
}

/// Owner summary embedded in a card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardOwner {
    /// Owner user id (may be blank in partial payloads).
    pub id: String,
    /// Login name.
    pub user_name: String,
    /// Display name.
    pub full_name: String,
    /// Contact email, if shared.
    pub email: Option<String>,
}

/// An identity card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Card identifier.
    pub id: RecordId,
    /// Owning user id.
    #[serde(default)]
    pub user_id: String,
    /// Gender as entered on the card.
    #[serde(default)]
    pub gender: String,
    /// Date of birth.
    #[serde(default)]
    pub dob: String,
    /// Nationality.
    #[serde(default)]
    pub nationality: String,
    /// Phone number.
    #[serde(default)]
    pub phone: String,
    /// Postal address.
    #[serde(default)]
    pub address: String,
    /// Card category.
    #[serde(default)]
    pub card_type: String,
    /// Linked social profiles.
    #[serde(default)]
    pub social: Vec<Social>,
    /// Whether the card is active.
    #[serde(default)]
    pub is_active: bool,
    /// Soft-delete flag; the admin list only returns `false`.
    #[serde(default)]
    pub is_deleted: bool,
    /// Creation timestamp (RFC 3339).
    #[serde(default)]
    pub created_at: String,
    /// Last update timestamp (RFC 3339).
    #[serde(default)]
    pub updated_at: String,
    /// Owner summary; absent owners render as blank cells.
    #[serde(default)]
    pub user: Option<CardOwner>,
}

impl Card {
    /// Owner display name, or an empty string.
    #[must_use]
    pub fn owner_full_name(&self) -> &str {
        self.user.as_ref().map_or("", |u| u.full_name.as_str())
    }

    /// Owner login name, or an empty string.
    #[must_use]
    pub fn owner_user_name(&self) -> &str {
        self.user.as_ref().map_or("", |u| u.user_name.as_str())
    }
}

impl Record for Card {
    const KIND: ResourceKind = ResourceKind::Cards;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn created_at(&self) -> &str {
        &self.created_at
    }
}

// =============================================================================
// USER
// =============================================================================

/// Avatar shown when a user has not uploaded one.
pub const DEFAULT_AVATAR_URL: &str = "https://ui-avatars.com/api/?name=User&background=random";

/// A user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// User identifier.
    pub id: RecordId,
    /// Login name.
    #[serde(default)]
    pub user_name: String,
    /// Display name.
    #[serde(default)]
    pub full_name: String,
    /// Contact email.
    #[serde(default)]
    pub email: Option<String>,
    /// Avatar image URL.
    #[serde(default)]
    pub avatar: Option<String>,
    /// Active accounts can sign in; inactive ones are blocked.
    #[serde(default)]
    pub is_active: bool,
    /// Creation timestamp (RFC 3339).
    #[serde(default)]
    pub created_at: String,
}

impl User {
    /// Avatar URL, falling back to the generated placeholder.
    #[must_use]
    pub fn avatar_url(&self) -> &str {
        self.avatar
            .as_deref()
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_AVATAR_URL)
    }
}

impl Record for User {
    const KIND: ResourceKind = ResourceKind::Users;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn created_at(&self) -> &str {
        &self.created_at
    }
}
