pub mod init;
pub mod open;
pub mod run;
pub mod sections;
pub mod stack;
