pub mod r#gen;
pub mod interactive;
