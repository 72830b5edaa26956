//! Types used throughout the library, for the moment only [errors](err).

pub mod err;
