pub mod query;
pub mod run;
pub mod seed;
pub mod show;
