//! Shared crawl state
//!
//! This module contains the visited registry: the single piece of shared
//! mutable state that makes concurrent crawling safe. All access is
//! serialized behind one lock.

mod registry;

pub use registry::{VisitStatus, VisitedRegistry};
