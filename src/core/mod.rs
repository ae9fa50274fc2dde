pub mod dist;
pub mod generator;
pub mod table;
