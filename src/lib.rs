pub mod board;
pub mod collision;
pub mod compute;
pub mod entities;
pub mod horde;
pub mod input;
pub mod scores;
pub mod ufo;
