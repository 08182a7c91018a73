//! Grammar rules.
//!
//! Each module extends [`Parser`](crate::Parser) with the rules for one
//! family of constructs.
//!
//! - `expr.rs`: precedence climbing, literals, prefix, infix, grouping, calls
//! - `stmt.rs`: `let`, `return`, `if`, `fn`

mod expr;
mod stmt;
