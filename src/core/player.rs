//! Player identification and the player that owns a mat.
//!
//! ## PlayerId
//!
//! Type-safe player identifier, the value cards report from `owner()`.
//!
//! ## Player
//!
//! Owns exactly one `PlayerMat` for the lifetime of a game.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::mat::PlayerMat;

/// Player identifier supporting 1-255 players.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A player and their mat.
///
/// ## Example
///
/// ```
/// use king_mat::{Card, MagicCard, Player, PlayerId};
///
/// let mut player = Player::new(PlayerId::new(0), "Yugi");
/// player.play(MagicCard::new("Dark Hole"));
///
/// let played = &player.mat().magic_zone()[0];
/// assert_eq!(played.owner(), Some(PlayerId::new(0)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    mat: PlayerMat,
}

impl Player {
    /// Create a player with an empty default mat.
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self::with_mat(id, name, PlayerMat::new())
    }

    /// Create a player with a pre-built mat.
    pub fn with_mat(id: PlayerId, name: impl Into<String>, mat: PlayerMat) -> Self {
        Self {
            id,
            name: name.into(),
            mat,
        }
    }

    #[must_use]
    pub fn mat(&self) -> &PlayerMat {
        &self.mat
    }

    pub fn mat_mut(&mut self) -> &mut PlayerMat {
        &mut self.mat
    }

    /// Claim `card` for this player and play it onto their mat.
    pub fn play<C: Card>(&mut self, mut card: C) {
        card.set_owner(Some(self.id));
        card.play_to(&mut self.mat);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardPosition, MagicCard, MonsterCard};

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0, PlayerId(0));
        assert_ne!(p0, p1);
        assert_eq!(format!("{}", p0), "Player 0");
    }

    #[test]
    fn test_new_player_has_empty_mat() {
        let player = Player::new(PlayerId::new(1), "Kaiba");
        assert_eq!(player.name, "Kaiba");
        assert_eq!(player.mat(), &PlayerMat::new());
    }

    #[test]
    fn test_play_sets_owner_and_routes_card() {
        let mut player = Player::new(PlayerId::new(1), "Kaiba");

        player.play(MonsterCard::new(3000, 2500, CardPosition::Attack));
        player.play(MagicCard::new("Monster Reborn"));

        assert_eq!(player.mat().monster_zone().len(), 1);
        assert_eq!(player.mat().magic_zone().len(), 1);
        assert_eq!(
            player.mat().monster_zone()[0].owner(),
            Some(PlayerId::new(1))
        );
        assert_eq!(player.mat().magic_zone()[0].owner(), Some(PlayerId::new(1)));
    }

    #[test]
    fn test_mat_mut() {
        let mut player = Player::new(PlayerId::new(0), "Joey");
        player.mat_mut().add_magic_card(MagicCard::new("Scapegoat"));
        assert_eq!(player.mat().magic_zone().len(), 1);
    }

    #[test]
    fn test_player_serialization() {
        let mut player = Player::new(PlayerId::new(0), "Mai");
        player.play(MagicCard::new("Harpie's Feather Duster"));

        let json = serde_json::to_string(&player).unwrap();
        let deserialized: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(player, deserialized);
    }
}
