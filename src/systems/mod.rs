pub mod collision;
pub mod forces;
pub mod integrate;
