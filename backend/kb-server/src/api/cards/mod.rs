pub mod cards;
pub mod move_card_request;
