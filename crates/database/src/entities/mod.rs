pub mod clients;
pub mod genres;
pub mod movie_copies;
pub mod movie_rent_details;
pub mod movie_rents;
pub mod movies;
