//! # Domain Entities
//!
//! Catalogue and identity entities. These are owned by the stores and move
//! through the services; request/response DTOs live next to the handlers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Closed set of roles used for access decisions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Role {
    #[serde(rename = "USER")]
    User,
    #[serde(rename = "ADMIN")]
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Admin => "ADMIN",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "USER" => Some(Role::User),
            "ADMIN" => Some(Role::Admin),
            _ => None,
        }
    }
}

/// A registered account.
///
/// The password hash never leaves the process; it is excluded from
/// serialization entirely.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub name: String,
    /// Unique lookup key; compared case-sensitively.
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub role: Role,
}

/// A video game in the catalogue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: Uuid,
    pub title: String,
    pub genre_id: Uuid,
    pub developer_id: Uuid,
    pub platform: String,
    pub release_date: NaiveDate,
    pub pegi_rating: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// A game genre. Names are unique.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Genre {
    pub id: Uuid,
    pub name: String,
}

/// A game development studio. Studio names are unique.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Developer {
    pub id: Uuid,
    pub studio_name: String,
    pub country: String,
    pub founded_year: i32,
}

/// Lowest and highest accepted rating scores, inclusive.
pub const MIN_SCORE: i32 = 1;
pub const MAX_SCORE: i32 = 10;

/// A user's rating of a game.
///
/// At most one rating may exist per (user, game) pair; the rating store
/// enforces this on insert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    pub id: Uuid,
    pub user_id: Uuid,
    pub game_id: Uuid,
    pub score: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_to_wire_names() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), r#""ADMIN""#);

        let role: Role = serde_json::from_str(r#""USER""#).unwrap();
        assert_eq!(role, Role::User);
    }

    #[test]
    fn role_string_conversion() {
        assert_eq!(Role::User.as_str(), "USER");
        assert_eq!(Role::Admin.as_str(), "ADMIN");

        assert_eq!(Role::parse("admin"), Some(Role::Admin));
        assert_eq!(Role::parse("USER"), Some(Role::User));
        assert_eq!(Role::parse("ROOT"), None);
    }

    #[test]
    fn user_serialization_omits_password_hash() {
        let user = User {
            id: Uuid::new_v4(),
            name: "Ana".into(),
            email: "ana@example.com".into(),
            password_hash: "$2b$12$secret".into(),
            role: Role::User,
        };

        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("passwordHash"));
        assert!(!json.contains("secret"));
        assert!(json.contains("ana@example.com"));
    }

    #[test]
    fn rating_omits_missing_comment() {
        let rating = Rating {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            game_id: Uuid::new_v4(),
            score: 7,
            comment: None,
        };

        let json = serde_json::to_string(&rating).unwrap();
        assert!(!json.contains("comment"));
    }
}
