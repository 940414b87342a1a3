//! Vocabulary representations: roles, ratings and `{title, slug}` terms.

use collections_db::models::role::Role;
use collections_db::models::term::{Rating, Term};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleRepr {
    pub slug: String,
    pub title: String,
    pub title_plural: String,
    pub past_tense: String,
}

impl From<Role> for RoleRepr {
    fn from(role: Role) -> Self {
        Self {
            slug: role.slug,
            title: role.title,
            title_plural: role.title_plural,
            past_tense: role.past_tense,
        }
    }
}

/// Genre, media type or work image type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermRepr {
    pub title: String,
    pub slug: String,
}

impl From<Term> for TermRepr {
    fn from(term: Term) -> Self {
        Self {
            title: term.title,
            slug: term.slug,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RatingRepr {
    pub title: String,
    pub slug: String,
    pub image: Option<String>,
}

impl From<Rating> for RatingRepr {
    fn from(rating: Rating) -> Self {
        Self {
            title: rating.title,
            slug: rating.slug,
            image: rating.image,
        }
    }
}
