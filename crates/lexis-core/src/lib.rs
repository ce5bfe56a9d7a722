//! Word stemming and sparse term vectors
//!
//! The [`snowball`] module holds a small affix-stripping automaton and the
//! Hungarian rule program that runs on it; [`stemmer`] puts every supported
//! language behind one [`Stemmer`](stemmer::Stemmer) trait; [`vector`] turns
//! stemmed documents into sparse term vectors.

pub mod config;
pub mod error;
pub mod logging;
pub mod snowball;
pub mod stemmer;
pub mod text;
pub mod vector;
