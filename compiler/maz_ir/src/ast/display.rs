//! Source-like rendering of syntax trees.
//!
//! Infix and prefix expressions are always parenthesised, so the rendered
//! text re-parses to the same tree regardless of operator precedence.

use std::fmt::{self, Display, Formatter};

use super::{ElseIf, FunctionDefinition, IfStatement, Node, Program};

fn write_list<T: Display>(f: &mut Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

fn write_block(f: &mut Formatter<'_>, statements: &[Node]) -> fmt::Result {
    f.write_str("{")?;
    for stmt in statements {
        write!(f, " {stmt}")?;
    }
    f.write_str(" }")
}

impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, stmt) in self.statements.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{stmt}")?;
        }
        Ok(())
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Node::Integer(value) => write!(f, "{value}"),
            Node::Boolean(value) => write!(f, "{value}"),
            Node::Str(value) => write!(f, "\"{value}\""),
            Node::Identifier(name) => f.write_str(name),
            Node::Prefix { op, operand } => write!(f, "({}{operand})", op.as_symbol()),
            Node::Infix { left, op, right } => {
                write!(f, "({left} {} {right})", op.as_symbol())
            }
            Node::Let { name, value } => write!(f, "let {name} = {value};"),
            Node::Return { value } => write!(f, "return {value};"),
            Node::If(stmt) => stmt.fmt(f),
            Node::Function(def) => def.fmt(f),
            Node::Call { callee, arguments } => {
                write!(f, "{callee}(")?;
                write_list(f, arguments)?;
                f.write_str(")")
            }
            Node::SyntaxError(err) => err.fmt(f),
        }
    }
}

impl Display for IfStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "if {} ", self.condition)?;
        write_block(f, &self.consequence)?;
        for alternative in &self.alternatives {
            write!(f, "{alternative}")?;
        }
        if !self.otherwise.is_empty() {
            f.write_str(" else ")?;
            write_block(f, &self.otherwise)?;
        }
        Ok(())
    }
}

impl Display for ElseIf {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, " else if {} ", self.condition)?;
        write_block(f, &self.body)
    }
}

impl Display for FunctionDefinition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("fn")?;
        if let Some(name) = &self.name {
            write!(f, " {name}")?;
        }
        f.write_str("(")?;
        write_list(f, &self.parameters)?;
        f.write_str(") ")?;
        write_block(f, &self.body)
    }
}
