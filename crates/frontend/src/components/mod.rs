pub mod busy;
pub mod text_field;
pub mod user_card;

pub use busy::Busy;
pub use text_field::TextField;
pub use user_card::UserCard;
