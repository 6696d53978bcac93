//! Use cases

pub mod chat_session;
