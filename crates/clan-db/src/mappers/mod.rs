//! Entity to model mappers
//!
//! `From<Model> for Entity` converts database rows to domain objects. Hook
//! rows carry an integer event code and use `TryFrom` instead.

mod clan;
mod game;
mod hook;
mod membership;
mod player;
