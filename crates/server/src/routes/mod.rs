pub mod client;
pub mod genre;
pub mod health;
pub mod movie;
pub mod movie_copy;
pub mod movie_rent;
pub mod root;
