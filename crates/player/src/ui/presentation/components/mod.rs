//! Shared UI components

mod avatar;
mod header;
mod notice;

pub use avatar::{avatar_emoji, AvatarPicker, AVATARS};
pub use header::Header;
pub use notice::Notice;
