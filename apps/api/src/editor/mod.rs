// Collection editor and builder sessions: typed edit operations applied to an
// in-memory draft, with validation and at-most-one in-flight save per session.

pub mod collection;
pub mod draft;
pub mod handlers;
pub mod ops;
pub mod session;
pub mod tags;
pub mod validation;
