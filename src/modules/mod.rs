pub mod export;
pub mod fit;
pub mod parse;
pub mod stroke;
pub mod worker;
