//! Domain records shared by the store and the client.
//!
//! Field names serialize in camelCase and timestamps as Unix milliseconds,
//! which is the layout of the persisted JSON documents.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{RecipeId, ReviewId, UserId};

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

/// A signed-in identity. The id is derived from the email, see
/// [`crate::identity::derive_user_id`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
}

// ---------------------------------------------------------------------------
// Review
// ---------------------------------------------------------------------------

/// A rating with a comment, owned by exactly one recipe. Never edited.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: ReviewId,
    pub user_id: UserId,
    pub username: String,
    /// 1 to 5 inclusive.
    pub rating: u8,
    pub comment: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

impl Review {
    pub fn new(reviewer: &User, rating: u8, comment: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id: ReviewId::new(),
            user_id: reviewer.id.clone(),
            username: reviewer.username.clone(),
            rating,
            comment,
            created_at,
        }
    }
}

// ---------------------------------------------------------------------------
// Recipe
// ---------------------------------------------------------------------------

/// Ingredient swap suggestion shown alongside a recipe.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Substitution {
    pub original: String,
    pub replacement: String,
}

/// Fields a user fills in when posting a recipe.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDraft {
    pub title: String,
    pub ingredients: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub substitutions: Vec<Substitution>,
    /// Free text, one step per line.
    pub instructions: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dietary: Vec<String>,
    /// Minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooking_time: Option<u32>,
}

/// A posted recipe. Everything but `reviews` is fixed at creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    pub ingredients: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub substitutions: Vec<Substitution>,
    pub instructions: String,
    /// Not checked against any stored user.
    pub author_id: UserId,
    pub author_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dietary: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooking_time: Option<u32>,
    /// Newest first.
    #[serde(default)]
    pub reviews: Vec<Review>,
}

impl Recipe {
    /// Build a new recipe from a draft, stamped with a fresh id and the
    /// author's identity. Starts with no reviews.
    pub fn from_draft(draft: RecipeDraft, author: &User, created_at: DateTime<Utc>) -> Self {
        let RecipeDraft {
            title,
            ingredients,
            substitutions,
            instructions,
            image_url,
            cuisine,
            dietary,
            cooking_time,
        } = draft;

        Self {
            id: RecipeId::new(),
            title,
            ingredients,
            substitutions,
            instructions,
            author_id: author.id.clone(),
            author_name: author.username.clone(),
            image_url,
            created_at,
            cuisine,
            dietary,
            cooking_time,
            reviews: Vec::new(),
        }
    }

    /// Copy of this recipe with `review` prepended.
    pub fn with_review(&self, review: Review) -> Self {
        let mut reviews = Vec::with_capacity(self.reviews.len() + 1);
        reviews.push(review);
        reviews.extend(self.reviews.iter().cloned());
        Self {
            reviews,
            ..self.clone()
        }
    }
}
