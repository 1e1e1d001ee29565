use super::*;

mod fetch;
mod report;
