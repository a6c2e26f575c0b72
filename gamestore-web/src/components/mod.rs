pub mod footer;
pub mod game_card;
pub mod game_catalog;
pub mod game_filters;
pub mod header;
pub mod shopping_cart;
