use log::debug;
use rustc_hash::FxHashMap;
use rustpython_ast::{Expr, ExprAttribute, ExprName};

use crate::analyze::typing::StaticType;
use crate::qualified_name::QualifiedName;

/// What a name in scope is bound to.
///
/// Import bindings carry the fully-qualified path they alias; every other
/// binding kind exists so that shadowing suppresses matches and so that
/// best-effort typing has a fact to consult.
#[derive(Debug, Clone, is_macro::Is)]
pub enum BindingKind<'a> {
    /// `import os` or `import os.path` (binds the first segment), and
    /// `import os.path as osp` (binds the alias to the full path).
    Import(QualifiedName<'a>),
    /// `from os import path as p` binds `p` to `os.path`.
    FromImport(QualifiedName<'a>),
    /// An assignment, recording the inferred static type of the value.
    Assignment(StaticType),
    /// An annotated declaration or function parameter.
    Annotation(StaticType),
    /// A function definition, recording its declared return type.
    FunctionDef(StaticType),
    /// Any other binding: class defs, loop and `with` targets, exception
    /// names, comprehension targets. Enough to shadow, never typed.
    Other,
}

/// Id of a scope within a single file's scope tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeId(u32);

impl ScopeId {
    /// The id of the module scope.
    pub const fn module() -> Self {
        Self(0)
    }

    fn index(self) -> usize {
        self.0 as usize
    }
}

/// A single lexical scope: a map from bound name to its most recent binding.
/// Re-binding a name overwrites the previous binding (last-wins).
#[derive(Debug, Default)]
struct Scope<'a> {
    parent: Option<ScopeId>,
    bindings: FxHashMap<&'a str, BindingKind<'a>>,
}

/// Scope state for a single file's traversal.
///
/// Scopes are pushed when the traversal enters a function, lambda, class
/// body, or comprehension, and popped on exit. Lookups walk the scope chain
/// outward, innermost first, and see only bindings created before the lookup
/// (the traversal is a single top-to-bottom pass, so there are no forward
/// references).
#[derive(Debug)]
pub struct SemanticModel<'a> {
    scopes: Vec<Scope<'a>>,
    current: ScopeId,
}

impl<'a> SemanticModel<'a> {
    pub fn new() -> Self {
        Self {
            scopes: vec![Scope::default()],
            current: ScopeId::module(),
        }
    }

    pub fn push_scope(&mut self) {
        let parent = self.current;
        self.scopes.push(Scope {
            parent: Some(parent),
            bindings: FxHashMap::default(),
        });
        self.current = ScopeId(u32::try_from(self.scopes.len() - 1).unwrap_or(u32::MAX));
    }

    pub fn pop_scope(&mut self) {
        let parent = self.scopes[self.current.index()].parent;
        // The module scope is never popped.
        if let Some(parent) = parent {
            self.current = parent;
        }
    }

    /// Bind `name` in the current scope, shadowing any previous binding.
    pub fn bind(&mut self, name: &'a str, kind: BindingKind<'a>) {
        debug!("binding `{name}` to {kind:?}");
        self.scopes[self.current.index()].bindings.insert(name, kind);
    }

    /// Look `name` up through the scope chain, innermost first.
    pub fn lookup(&self, name: &str) -> Option<&BindingKind<'a>> {
        let mut scope = Some(self.current);
        while let Some(id) = scope {
            let current = &self.scopes[id.index()];
            if let Some(binding) = current.bindings.get(name) {
                return Some(binding);
            }
            scope = current.parent;
        }
        None
    }

    /// Resolve a callee expression to its fully-qualified path, chasing
    /// attribute accesses through import bindings.
    ///
    /// Returns `None` when the expression cannot be resolved to a static
    /// qualified path: a non-name callee, or a name whose binding is not an
    /// import (a local variable or function shadowing the name). An unbound
    /// name falls back to the builtin namespace.
    pub fn resolve_qualified_name(&self, expr: &'a Expr) -> Option<QualifiedName<'a>> {
        match expr {
            Expr::Name(ExprName { id, .. }) => match self.lookup(id.as_str()) {
                Some(BindingKind::Import(qualified_name))
                | Some(BindingKind::FromImport(qualified_name)) => Some(qualified_name.clone()),
                Some(_) => None,
                None => Some(QualifiedName::builtin(id.as_str())),
            },
            Expr::Attribute(ExprAttribute { value, attr, .. }) => self
                .resolve_qualified_name(value)
                .map(|qualified_name| qualified_name.append_member(attr.as_str())),
            _ => None,
        }
    }
}

impl Default for SemanticModel<'_> {
    fn default() -> Self {
        Self::new()
    }
}
