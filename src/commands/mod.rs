pub mod add;
pub mod clone;
pub mod configure;
pub mod list;
pub mod repos;
pub mod run;
