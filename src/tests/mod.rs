mod common;
mod property;
