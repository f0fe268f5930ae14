//! Main module for workout notation functionality

pub mod ast;
pub mod catalog;
pub mod host;
pub mod lexing;
pub mod parsing;
pub mod token;
pub mod validation;
