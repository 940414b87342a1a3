//! Concrete subtype tags for the polymorphic `works` and `creators` tables.
//!
//! The tag is stored verbatim in the `kind` column and must match the
//! CHECK constraints in the `create_works` / `create_creators` migrations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const KIND_FILM: &str = "film";
pub const KIND_GAME: &str = "game";
pub const KIND_ARTWORK: &str = "artwork";
pub const KIND_MOVING_IMAGE: &str = "moving_image";

pub const KIND_PERSON: &str = "person";
pub const KIND_ORGANIZATION: &str = "organization";

/// Concrete type of a work record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkKind {
    Film,
    Game,
    Artwork,
    /// A moving-image work that is neither a film nor a game.
    MovingImage,
}

impl WorkKind {
    pub const ALL: [WorkKind; 4] = [
        WorkKind::Film,
        WorkKind::Game,
        WorkKind::Artwork,
        WorkKind::MovingImage,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            WorkKind::Film => KIND_FILM,
            WorkKind::Game => KIND_GAME,
            WorkKind::Artwork => KIND_ARTWORK,
            WorkKind::MovingImage => KIND_MOVING_IMAGE,
        }
    }

    /// Whether rows of this kind carry a `moving_image_works` extension row.
    pub fn is_moving_image(self) -> bool {
        matches!(
            self,
            WorkKind::Film | WorkKind::Game | WorkKind::MovingImage
        )
    }
}

impl fmt::Display for WorkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            KIND_FILM => Ok(WorkKind::Film),
            KIND_GAME => Ok(WorkKind::Game),
            KIND_ARTWORK => Ok(WorkKind::Artwork),
            KIND_MOVING_IMAGE => Ok(WorkKind::MovingImage),
            other => Err(format!("Unknown work kind '{other}'")),
        }
    }
}

/// Concrete type of a creator record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreatorKind {
    Person,
    Organization,
}

impl CreatorKind {
    pub const ALL: [CreatorKind; 2] = [CreatorKind::Person, CreatorKind::Organization];

    pub fn as_str(self) -> &'static str {
        match self {
            CreatorKind::Person => KIND_PERSON,
            CreatorKind::Organization => KIND_ORGANIZATION,
        }
    }
}

impl fmt::Display for CreatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CreatorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            KIND_PERSON => Ok(CreatorKind::Person),
            KIND_ORGANIZATION => Ok(CreatorKind::Organization),
            other => Err(format!("Unknown creator kind '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn work_kind_parses_its_own_tag() {
        for kind in WorkKind::ALL {
            assert_eq!(kind.as_str().parse::<WorkKind>(), Ok(kind));
        }
    }

    #[test]
    fn creator_kind_parses_its_own_tag() {
        for kind in CreatorKind::ALL {
            assert_eq!(kind.as_str().parse::<CreatorKind>(), Ok(kind));
        }
    }

    #[test]
    fn unknown_tag_is_rejected() {
        assert!("sculpture".parse::<WorkKind>().is_err());
        assert!("Person".parse::<CreatorKind>().is_err());
    }

    #[test]
    fn only_artwork_lacks_moving_image_extension() {
        assert!(WorkKind::Film.is_moving_image());
        assert!(WorkKind::Game.is_moving_image());
        assert!(WorkKind::MovingImage.is_moving_image());
        assert!(!WorkKind::Artwork.is_moving_image());
    }
}
