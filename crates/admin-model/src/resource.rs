//! Resource collections exposed by the admin API.
//!
//! Each collection has its own list/delete/update endpoints. The card routes
//! are the documented ones; the user routes mirror them under `/user`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// A resource collection managed by the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    /// Identity cards owned by users.
    Cards,
    /// User accounts.
    Users,
}

impl ResourceKind {
    /// All known collections, in navigation order.
    pub const ALL: [Self; 2] = [Self::Cards, Self::Users];

    /// Cache and log name of the collection.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cards => "cards",
            Self::Users => "users",
        }
    }

    /// Singular label used in notifications ("Card deleted successfully!").
    #[must_use]
    pub const fn singular_label(self) -> &'static str {
        match self {
            Self::Cards => "Card",
            Self::Users => "User",
        }
    }

    /// Title shown above the table.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Cards => "Cards Table",
            Self::Users => "Users",
        }
    }

    /// Path of the paginated admin list endpoint.
    #[must_use]
    pub const fn list_path(self) -> &'static str {
        match self {
            Self::Cards => "/card/get-cards-by-admin",
            Self::Users => "/user/get-users-by-admin",
        }
    }

    /// Route of the delete endpoint. The record id is appended to it as one
    /// escaped path segment.
    #[must_use]
    pub const fn delete_route(self) -> &'static str {
        match self {
            Self::Cards => "/card/delete-card-by-admin",
            Self::Users => "/user/delete-user-by-admin",
        }
    }

    /// Route of the update endpoint used for status toggles. The record id is
    /// appended to it as one escaped path segment.
    #[must_use]
    pub const fn update_route(self) -> &'static str {
        match self {
            Self::Cards => "/card/update-card",
            Self::Users => "/user/update-user",
        }
    }

    /// Extra query parameters always sent with list requests.
    #[must_use]
    pub const fn fixed_list_params(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Cards => &[("is_deleted", "false")],
            Self::Users => &[],
        }
    }

    /// Column whose filter text is forwarded to the server.
    #[must_use]
    pub const fn filter_column(self) -> &'static str {
        match self {
            Self::Cards => "full_name",
            Self::Users => "email",
        }
    }

    /// Key under which the non-canonical list envelope nests the page.
    #[must_use]
    pub const fn envelope_key(self) -> &'static str {
        self.name()
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ResourceKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cards" | "card" => Ok(Self::Cards),
            "users" | "user" => Ok(Self::Users),
            other => Err(ModelError::UnknownResource(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_routes_match_admin_api() {
        assert_eq!(ResourceKind::Cards.list_path(), "/card/get-cards-by-admin");
        assert_eq!(
            ResourceKind::Cards.delete_route(),
            "/card/delete-card-by-admin"
        );
        assert_eq!(ResourceKind::Cards.update_route(), "/card/update-card");
        assert_eq!(
            ResourceKind::Cards.fixed_list_params(),
            &[("is_deleted", "false")]
        );
    }

    #[test]
    fn parses_singular_and_plural_names() {
        assert_eq!("cards".parse::<ResourceKind>(), Ok(ResourceKind::Cards));
        assert_eq!("User".parse::<ResourceKind>(), Ok(ResourceKind::Users));
        assert!("orders".parse::<ResourceKind>().is_err());
    }
}
