pub mod card;
pub mod splash;

pub use card::Card;
pub use splash::Splash;
