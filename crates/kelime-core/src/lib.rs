//! Shared types and utilities for kelime Turkish NLP.
//!
//! This crate holds the language-level building blocks that the analysis
//! crates sit on top of. Everything here is pure data and pure functions;
//! no I/O, no global state.
//!
//! # Architecture
//!
//! - [`alphabet`] -- Turkish letter table and grapheme-level queries
//! - [`attributes`] -- Phonetic and root attributes with compact bitsets
//! - [`phonetics`] -- Attribute calculation over surface sequences
//! - [`pos`] -- Primary and secondary part-of-speech categories

pub mod alphabet;
pub mod attributes;
pub mod phonetics;
pub mod pos;
