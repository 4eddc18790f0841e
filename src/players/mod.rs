pub mod human;
pub mod random;
pub mod recall;
pub mod registry;

pub use human::HumanPlayer;
pub use random::RandomPlayer;
pub use recall::RecallPlayer;
pub use registry::{create_player_from_spec, label_for_spec};
