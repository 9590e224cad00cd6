//! `mdconf` reads and writes MDConf, a small configuration format that borrows
//! markdown headers for nesting and uses `+ key: value` lines for settings.
//!
//! ## Format
//!
//! ```text
//! // comments start with two slashes
//! + name: demo
//!
//! # server
//! + host: localhost
//! + banner: first line\
//! second line
//!
//! ### tls
//! + cert: \ leading space is kept
//! ```
//!
//! - A header with `N` leading `#` characters opens a section at level `N`.
//!   It belongs to the closest open section with a lower level, so levels
//!   may be skipped.
//! - A backslash escapes the next character. A value that ends in an
//!   unescaped backslash continues on the following line.
//! - Any other line is ignored. Values are plain strings.
//!
//! ## Processing Pipeline
//!
//! ```text
//! text
//!   → LineSource (line reader with pushback)
//!   → parser (recursive state machine, one call per open section)
//!   → Section tree ⇄ lookup_* / set_* / add_* path operations
//!   → render (inverse of the parser)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use mdconf::parse;
//! use mdconf::render;
//!
//! let mut root = parse("# server\n+ port: 8080\n")?;
//! assert_eq!(root.lookup_value(&["server", "port"])?, "8080");
//!
//! root.set_value(&["server", "port"], "9090")?;
//! root.add_section(&["server"], "tls")?.set_value_local("enabled", "yes");
//!
//! assert_eq!(
//! 	render(&root),
//! 	"# server\n+ port: 9090\n\n## tls\n+ enabled: yes\n\n\n\n"
//! );
//! # Ok::<(), mdconf::MdConfError>(())
//! ```

pub use config::*;
pub use error::*;
pub use escape::escape_value;
pub use escape::unescape;
pub use parser::*;
pub use render::*;
pub use section::*;

pub mod config;
#[allow(unused_assignments)]
mod error;
mod escape;
pub mod handle;
mod parser;
mod query;
pub(crate) mod reader;
mod render;
mod section;

#[cfg(test)]
mod __fixtures;
