pub mod indiecampers;
pub mod mongo;
pub mod prod_db;
