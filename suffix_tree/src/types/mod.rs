pub mod arena;
pub mod node;
pub mod text;
