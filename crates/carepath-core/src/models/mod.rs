pub mod evaluation;
pub mod intake;
pub mod routing;
pub mod vocabulary;
