pub mod availability;
pub mod catalog;
pub mod prices;
pub mod prices_archive;
pub mod search;
