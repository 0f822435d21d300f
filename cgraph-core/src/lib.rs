//! cgraph-core: colored-graph core library - An indented tree description parser and Graphviz DOT renderer
//!
//! # Example
//!
//! ```
//! use cgraph_core::{parse, render};
//!
//! let input = r#"
//! [p:firebrick, b:black]
//! b Robot
//!     p Battery
//!     b Computer board
//! "#;
//!
//! let description = parse(input).unwrap();
//! assert_eq!(description.forest.len(), 3);
//! let dot = render(&description);
//! println!("{}", dot);
//! ```
//!
//! # Themed rendering
//!
//! ```
//! use cgraph_core::{parse, render_with_config, Config, Theme};
//!
//! let input = "black Robot";
//! let description = parse(input).unwrap();
//! let config = Config::default().with_theme(Theme::dark());
//! let dot = render_with_config(&description, config);
//! assert!(dot.contains("bgcolor"));
//! ```

pub mod ast;
pub mod color;
pub mod parser;
pub mod renderer;
pub mod theme;

pub use ast::*;
pub use color::{is_supported, Color};
pub use parser::{parse, parse_with_options, ParseError, ParseOptions};
pub use renderer::{render, render_with_config, Config};
pub use theme::{NodeShape, RankDir, Theme};
