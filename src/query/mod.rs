//! Boolean query evaluation
//!
//! Queries are OR-sequences of AND-groups, with `-word` negation:
//!
//! ```text
//! query  ::= andseq [or andseq]*
//! andseq ::= word [and andseq]
//! ```
//!
//! Adjacent words are an implicit AND. Precedence from highest to lowest:
//! `-` (not), `and`, `or`. Matching URLs are ranked by term frequency.

mod eval;
mod parser;

pub use eval::{evaluate_query, Hit};
pub use parser::{is_searchable, parse_query};
