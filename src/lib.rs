pub mod calendar;
pub mod db;
pub mod error;
pub mod utils;

#[cfg(test)]
mod testing;
