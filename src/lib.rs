pub mod cases;
pub mod codegen;
pub mod extract;
