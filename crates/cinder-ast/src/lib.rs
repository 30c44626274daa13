//! # Cinder AST
//!
//! Node hierarchy for the Cinder front-end.
//!
//! Every tree element implements [`Node`] and is owned through a
//! [`NodeBox`]. The set of node kinds is open: downstream crates add their
//! own variants by implementing the trait. Each variant reports a kind tag
//! through [`Node::class_name`].
//!
//! [`Program`] is the root of one compilation unit and owns its top-level
//! children in source order.
//!
//! ## Example
//!
//! ```
//! use cinder_ast::{Node, Program};
//!
//! let mut unit = Program::new();
//! unit.push(Program::new());
//!
//! assert_eq!(unit.class_name(), "Program");
//! assert_eq!(unit.body_size(), 1);
//! assert_eq!(unit.iter().next().map(|n| n.class_name()), Some("Program"));
//! ```
//!
//! The node trait itself has no values, so the abstract base can never be
//! constructed:
//!
//! ```compile_fail
//! use cinder_ast::Node;
//!
//! let node = Node::new();
//! ```

mod error;
mod node;
mod program;

pub use error::{AstError, AstResult};
pub use node::{Expression, Node, NodeBox};
pub use program::Program;
