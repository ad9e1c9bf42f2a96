pub mod publish;
pub mod resolve;
pub mod run;
