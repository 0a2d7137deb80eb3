pub mod activity_input;
pub mod board_input;
pub mod card_input;
pub mod collection_input;
pub mod column_input;
pub mod user_input;
