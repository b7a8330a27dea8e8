//! Best-effort static type classification for argument expressions.
//!
//! Inference is deliberately shallow: literals, names whose binding carries a
//! type fact, and calls to locally-defined functions with a declared return
//! annotation. Everything else is [`StaticType::Unknown`], and the engine only
//! ever acts on positive evidence, never on the absence of it.

use rustpython_ast::{Constant, Expr, ExprCall, ExprConstant, ExprName, ExprUnaryOp, UnaryOp};

use crate::semantic::{BindingKind, SemanticModel};

#[derive(Debug, Clone, Copy, PartialEq, Eq, is_macro::Is)]
pub enum StaticType {
    Str,
    Bytes,
    Int,
    Bool,
    NoneType,
    Unknown,
}

/// The type of a literal constant.
pub fn literal_type(constant: &Constant) -> StaticType {
    match constant {
        Constant::Str(_) => StaticType::Str,
        Constant::Bytes(_) => StaticType::Bytes,
        Constant::Int(_) => StaticType::Int,
        Constant::Bool(_) => StaticType::Bool,
        Constant::None => StaticType::NoneType,
        _ => StaticType::Unknown,
    }
}

/// The type named by an annotation expression. Only plain builtin names (and
/// `None`) are recognized; anything else is [`StaticType::Unknown`].
pub fn annotation_type(expr: &Expr) -> StaticType {
    match expr {
        Expr::Name(ExprName { id, .. }) => match id.as_str() {
            "str" => StaticType::Str,
            "bytes" => StaticType::Bytes,
            "int" => StaticType::Int,
            "bool" => StaticType::Bool,
            _ => StaticType::Unknown,
        },
        Expr::Constant(ExprConstant {
            value: Constant::None,
            ..
        }) => StaticType::NoneType,
        _ => StaticType::Unknown,
    }
}

/// The static type of an arbitrary expression, given the bindings visible at
/// its lexical position.
pub fn static_type<'a>(expr: &'a Expr, semantic: &SemanticModel<'a>) -> StaticType {
    match expr {
        Expr::Constant(ExprConstant { value, .. }) => literal_type(value),
        // Numeric sign does not change int-ness (`-1`, `+fd`).
        Expr::UnaryOp(ExprUnaryOp {
            op: UnaryOp::USub | UnaryOp::UAdd,
            operand,
            ..
        }) => {
            if static_type(operand, semantic) == StaticType::Int {
                StaticType::Int
            } else {
                StaticType::Unknown
            }
        }
        Expr::Name(ExprName { id, .. }) => match semantic.lookup(id.as_str()) {
            Some(BindingKind::Assignment(ty) | BindingKind::Annotation(ty)) => *ty,
            _ => StaticType::Unknown,
        },
        Expr::Call(ExprCall { func, .. }) => match func.as_ref() {
            Expr::Name(ExprName { id, .. }) => match semantic.lookup(id.as_str()) {
                Some(BindingKind::FunctionDef(ty)) => *ty,
                _ => StaticType::Unknown,
            },
            _ => StaticType::Unknown,
        },
        _ => StaticType::Unknown,
    }
}

/// Returns `true` if the expression looks like a file descriptor, i.e. if it
/// is provably an integer.
pub fn is_int<'a>(expr: &'a Expr, semantic: &SemanticModel<'a>) -> bool {
    static_type(expr, semantic) == StaticType::Int
}

/// Returns `true` if the expression is provably a byte string.
pub fn is_bytes<'a>(expr: &'a Expr, semantic: &SemanticModel<'a>) -> bool {
    static_type(expr, semantic) == StaticType::Bytes
}

#[cfg(test)]
mod tests {
    use rustpython_ast::Constant;

    use super::{annotation_type, literal_type, StaticType};
    use crate::test::parse_expression;

    #[test]
    fn literal_types() {
        assert_eq!(literal_type(&Constant::Str("foo".to_string())), StaticType::Str);
        assert_eq!(literal_type(&Constant::Bytes(vec![0x66])), StaticType::Bytes);
        assert_eq!(literal_type(&Constant::Bool(true)), StaticType::Bool);
        assert_eq!(literal_type(&Constant::None), StaticType::NoneType);
    }

    #[test]
    fn annotation_types() {
        assert_eq!(annotation_type(&parse_expression("int")), StaticType::Int);
        assert_eq!(annotation_type(&parse_expression("bytes")), StaticType::Bytes);
        assert_eq!(annotation_type(&parse_expression("None")), StaticType::NoneType);
        assert_eq!(
            annotation_type(&parse_expression("list[int]")),
            StaticType::Unknown
        );
    }
}
