pub mod animation;
pub mod colors;
pub mod format;
pub mod timing;
