//! Terminal plumbing for the `publist` binary: message printing, the list
//! view, and the interactive session loop. Nothing here is part of the
//! library API.

pub(crate) mod print;
pub(crate) mod session;
pub(crate) mod styles;
