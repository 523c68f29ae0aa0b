pub mod evaluate;
pub mod status;
