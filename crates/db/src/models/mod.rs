pub mod favorite;
pub mod game;
pub mod schedule;
pub mod staff;
pub mod team;
pub mod todo;
pub mod user;
