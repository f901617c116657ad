mod common;
mod enhancement;
