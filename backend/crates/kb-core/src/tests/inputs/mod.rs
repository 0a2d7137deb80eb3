mod board_input;
mod card_input;
