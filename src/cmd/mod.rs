pub mod batch;
pub mod bounds;
pub mod score;
