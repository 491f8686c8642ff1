pub mod dataset;
pub mod load;
