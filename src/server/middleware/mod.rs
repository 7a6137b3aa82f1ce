//! Request authentication: the auth cookie and the permission guard.

pub mod auth;
pub mod session;

#[cfg(test)]
mod test;
