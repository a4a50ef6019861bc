//! The player mat.

pub mod player_mat;

pub use player_mat::PlayerMat;
