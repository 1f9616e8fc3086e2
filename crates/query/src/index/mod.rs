mod composite;
mod implicit;
mod inner;
mod ordered;

pub use composite::{CompositeIndex, HashCompositeIndex, OrderedCompositeIndex};
pub use implicit::ImplicitIndex;
pub use inner::{HashInner, InnerIndex, OrderedInner};
pub use ordered::OrderedIndex;
