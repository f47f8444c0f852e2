use std::{fmt, hash::Hash};

/// Edge weight type (latency between two routers)
pub type Latency = f64;

/// Separator used when formatting a path, e.g. `A->B->C`
pub const PATH_SEPARATOR: &str = "->";

/// Anything that can identify a router inside a [`RouterGraph`].
///
/// [`RouterGraph`]: crate::graph::RouterGraph
pub trait RouterId: Clone + Eq + Hash + fmt::Debug + fmt::Display {}

impl<T: Clone + Eq + Hash + fmt::Debug + fmt::Display> RouterId for T {}
