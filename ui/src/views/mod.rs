mod home;
pub use home::Home;

mod player;
pub use player::Player;
