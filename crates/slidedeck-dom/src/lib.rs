//! Arena-based document tree the deck controller manipulates.
//!
//! Stands in for a browser DOM: ordered selector queries, element creation,
//! class/attribute/style mutation and removal. Hosts that render to a real
//! page mirror this tree; tests inspect it directly.

pub mod dom;
pub mod selector;

pub use dom::{Attribute, Document, ElementData, Node, NodeKind, TagName};
pub use selector::{Combinator, ComplexSelector, Selector};
pub use slidedeck_types::NodeId;
