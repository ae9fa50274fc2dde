pub mod adventurer;
pub mod foes;
pub mod gear;
pub mod location;
pub mod names;
pub mod trinket;
