pub mod rent;
pub mod rent_detail;
pub mod stock;
