pub mod classification;
pub mod decimal;
pub mod sentiment;
pub mod summary;
pub mod trade;
