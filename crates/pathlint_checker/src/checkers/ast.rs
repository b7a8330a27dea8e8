//! The AST checker: a single top-to-bottom traversal that feeds import and
//! assignment statements into the semantic model and runs every call
//! expression through the match table. Diagnostics come out keyed by source
//! position, so the stream is deterministic for a given input.

use rustpython_ast::{
    self as ast, Alias, Arguments, Comprehension, ExceptHandler, Expr, Stmt, Suite,
};

use pathlint_diagnostics::Diagnostic;

use crate::analyze::typing::{annotation_type, static_type, StaticType};
use crate::checkers::use_pathlib;
use crate::qualified_name::QualifiedName;
use crate::semantic::{BindingKind, SemanticModel};
use crate::settings::CheckerSettings;

pub(crate) struct Checker<'a> {
    settings: &'a CheckerSettings,
    semantic: SemanticModel<'a>,
    diagnostics: Vec<Diagnostic>,
}

/// Generate diagnostics for a parsed module.
pub(crate) fn check_ast<'a>(
    python_ast: &'a Suite,
    settings: &'a CheckerSettings,
) -> Vec<Diagnostic> {
    let mut checker = Checker {
        settings,
        semantic: SemanticModel::new(),
        diagnostics: vec![],
    };
    checker.visit_body(python_ast);

    // The traversal is lexical, but nested function bodies interleave with
    // the statements around them; key the final stream by source position.
    let mut diagnostics = checker.diagnostics;
    diagnostics.sort_by_key(|diagnostic| diagnostic.range.start());
    diagnostics
}

impl<'a> Checker<'a> {
    pub(crate) fn semantic(&self) -> &SemanticModel<'a> {
        &self.semantic
    }

    pub(crate) fn settings(&self) -> &CheckerSettings {
        self.settings
    }

    pub(crate) fn report_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    fn visit_body(&mut self, body: &'a [Stmt]) {
        for stmt in body {
            self.visit_stmt(stmt);
        }
    }

    fn visit_stmt(&mut self, stmt: &'a Stmt) {
        match stmt {
            Stmt::Import(import) => {
                for alias in &import.names {
                    self.bind_import(alias);
                }
            }
            Stmt::ImportFrom(import_from) => self.bind_import_from(import_from),
            Stmt::FunctionDef(def) => self.visit_function_def(
                def.name.as_str(),
                &def.args,
                def.returns.as_deref(),
                &def.decorator_list,
                &def.body,
            ),
            Stmt::AsyncFunctionDef(def) => self.visit_function_def(
                def.name.as_str(),
                &def.args,
                def.returns.as_deref(),
                &def.decorator_list,
                &def.body,
            ),
            Stmt::ClassDef(def) => {
                for expr in &def.decorator_list {
                    self.visit_expr(expr);
                }
                for expr in &def.bases {
                    self.visit_expr(expr);
                }
                for keyword in &def.keywords {
                    self.visit_expr(&keyword.value);
                }
                self.semantic.bind(def.name.as_str(), BindingKind::Other);
                self.semantic.push_scope();
                self.visit_body(&def.body);
                self.semantic.pop_scope();
            }
            Stmt::Assign(assign) => {
                self.visit_expr(&assign.value);
                let ty = static_type(&assign.value, &self.semantic);
                for target in &assign.targets {
                    self.bind_target(target, BindingKind::Assignment(ty));
                }
            }
            Stmt::AugAssign(aug) => {
                self.visit_expr(&aug.value);
                self.bind_target(&aug.target, BindingKind::Assignment(StaticType::Unknown));
            }
            Stmt::AnnAssign(ann) => {
                if let Some(value) = &ann.value {
                    self.visit_expr(value);
                }
                let ty = annotation_type(&ann.annotation);
                self.bind_target(&ann.target, BindingKind::Annotation(ty));
            }
            Stmt::Return(ret) => {
                if let Some(value) = &ret.value {
                    self.visit_expr(value);
                }
            }
            Stmt::Delete(delete) => {
                for expr in &delete.targets {
                    self.visit_expr(expr);
                }
            }
            Stmt::For(node) => {
                self.visit_expr(&node.iter);
                self.bind_target(&node.target, BindingKind::Other);
                self.visit_body(&node.body);
                self.visit_body(&node.orelse);
            }
            Stmt::AsyncFor(node) => {
                self.visit_expr(&node.iter);
                self.bind_target(&node.target, BindingKind::Other);
                self.visit_body(&node.body);
                self.visit_body(&node.orelse);
            }
            Stmt::While(node) => {
                self.visit_expr(&node.test);
                self.visit_body(&node.body);
                self.visit_body(&node.orelse);
            }
            Stmt::If(node) => {
                self.visit_expr(&node.test);
                self.visit_body(&node.body);
                self.visit_body(&node.orelse);
            }
            Stmt::With(node) => self.visit_with(&node.items, &node.body),
            Stmt::AsyncWith(node) => self.visit_with(&node.items, &node.body),
            Stmt::Raise(node) => {
                if let Some(exc) = &node.exc {
                    self.visit_expr(exc);
                }
                if let Some(cause) = &node.cause {
                    self.visit_expr(cause);
                }
            }
            Stmt::Try(node) => {
                self.visit_try(&node.body, &node.handlers, &node.orelse, &node.finalbody);
            }
            Stmt::TryStar(node) => {
                self.visit_try(&node.body, &node.handlers, &node.orelse, &node.finalbody);
            }
            Stmt::Assert(node) => {
                self.visit_expr(&node.test);
                if let Some(msg) = &node.msg {
                    self.visit_expr(msg);
                }
            }
            Stmt::Expr(node) => self.visit_expr(&node.value),
            Stmt::Match(node) => {
                self.visit_expr(&node.subject);
                for case in &node.cases {
                    if let Some(guard) = &case.guard {
                        self.visit_expr(guard);
                    }
                    self.visit_body(&case.body);
                }
            }
            _ => {}
        }
    }

    /// `import os.path` binds `os`; `import os.path as osp` binds `osp` to
    /// the full dotted path. Submodule members are reached by attribute
    /// chase during resolution.
    fn bind_import(&mut self, alias: &'a Alias) {
        let name = alias.name.as_str();
        match &alias.asname {
            Some(asname) => self.semantic.bind(
                asname.as_str(),
                BindingKind::Import(QualifiedName::from_dotted_name(name)),
            ),
            None => {
                let first = name.split('.').next().unwrap_or(name);
                self.semantic.bind(
                    first,
                    BindingKind::Import(QualifiedName::from_dotted_name(first)),
                );
            }
        }
    }

    fn bind_import_from(&mut self, import_from: &'a ast::StmtImportFrom) {
        let level = import_from.level.as_ref().map_or(0, ast::Int::to_u32);
        for alias in &import_from.names {
            if alias.name.as_str() == "*" {
                continue;
            }
            let binding_name = alias.asname.as_ref().unwrap_or(&alias.name).as_str();
            match (&import_from.module, level) {
                (Some(module), 0) => {
                    let qualified_name = QualifiedName::from_dotted_name(module.as_str())
                        .append_member(alias.name.as_str());
                    self.semantic
                        .bind(binding_name, BindingKind::FromImport(qualified_name));
                }
                // Relative imports are not resolvable within a single file;
                // the name still shadows.
                _ => self.semantic.bind(binding_name, BindingKind::Other),
            }
        }
    }

    fn visit_function_def(
        &mut self,
        name: &'a str,
        args: &'a Arguments,
        returns: Option<&'a Expr>,
        decorator_list: &'a [Expr],
        body: &'a [Stmt],
    ) {
        for expr in decorator_list {
            self.visit_expr(expr);
        }
        // Parameter defaults evaluate in the enclosing scope.
        for arg in args.posonlyargs.iter().chain(&args.args).chain(&args.kwonlyargs) {
            if let Some(default) = &arg.default {
                self.visit_expr(default);
            }
        }

        let return_type = returns.map_or(StaticType::Unknown, annotation_type);
        self.semantic.bind(name, BindingKind::FunctionDef(return_type));

        self.semantic.push_scope();
        for arg in args.posonlyargs.iter().chain(&args.args).chain(&args.kwonlyargs) {
            let ty = arg
                .def
                .annotation
                .as_deref()
                .map_or(StaticType::Unknown, annotation_type);
            self.semantic
                .bind(arg.def.arg.as_str(), BindingKind::Annotation(ty));
        }
        if let Some(vararg) = &args.vararg {
            self.semantic.bind(vararg.arg.as_str(), BindingKind::Other);
        }
        if let Some(kwarg) = &args.kwarg {
            self.semantic.bind(kwarg.arg.as_str(), BindingKind::Other);
        }
        self.visit_body(body);
        self.semantic.pop_scope();
    }

    fn visit_with(&mut self, items: &'a [ast::WithItem], body: &'a [Stmt]) {
        for item in items {
            self.visit_expr(&item.context_expr);
            if let Some(vars) = &item.optional_vars {
                self.bind_target(vars, BindingKind::Other);
            }
        }
        self.visit_body(body);
    }

    fn visit_try(
        &mut self,
        body: &'a [Stmt],
        handlers: &'a [ExceptHandler],
        orelse: &'a [Stmt],
        finalbody: &'a [Stmt],
    ) {
        self.visit_body(body);
        for handler in handlers {
            let ExceptHandler::ExceptHandler(handler) = handler;
            if let Some(type_) = &handler.type_ {
                self.visit_expr(type_);
            }
            if let Some(name) = &handler.name {
                self.semantic.bind(name.as_str(), BindingKind::Other);
            }
            self.visit_body(&handler.body);
        }
        self.visit_body(orelse);
        self.visit_body(finalbody);
    }

    /// Bind the names a target introduces. Attribute and subscript targets
    /// introduce no local binding, but their bases are still loads.
    fn bind_target(&mut self, target: &'a Expr, kind: BindingKind<'a>) {
        match target {
            Expr::Name(name) => self.semantic.bind(name.id.as_str(), kind),
            Expr::Tuple(tuple) => {
                for elt in &tuple.elts {
                    self.bind_target(elt, BindingKind::Other);
                }
            }
            Expr::List(list) => {
                for elt in &list.elts {
                    self.bind_target(elt, BindingKind::Other);
                }
            }
            Expr::Starred(starred) => self.bind_target(&starred.value, BindingKind::Other),
            _ => self.visit_expr(target),
        }
    }

    fn visit_expr(&mut self, expr: &'a Expr) {
        match expr {
            Expr::Call(call) => {
                use_pathlib::replaceable_by_pathlib(self, call);
                self.visit_expr(&call.func);
                for arg in &call.args {
                    self.visit_expr(arg);
                }
                for keyword in &call.keywords {
                    self.visit_expr(&keyword.value);
                }
            }
            Expr::BoolOp(node) => {
                for value in &node.values {
                    self.visit_expr(value);
                }
            }
            Expr::NamedExpr(node) => {
                self.visit_expr(&node.value);
                let ty = static_type(&node.value, &self.semantic);
                self.bind_target(&node.target, BindingKind::Assignment(ty));
            }
            Expr::BinOp(node) => {
                self.visit_expr(&node.left);
                self.visit_expr(&node.right);
            }
            Expr::UnaryOp(node) => self.visit_expr(&node.operand),
            Expr::Lambda(node) => {
                for arg in node
                    .args
                    .posonlyargs
                    .iter()
                    .chain(&node.args.args)
                    .chain(&node.args.kwonlyargs)
                {
                    if let Some(default) = &arg.default {
                        self.visit_expr(default);
                    }
                }
                self.semantic.push_scope();
                for arg in node
                    .args
                    .posonlyargs
                    .iter()
                    .chain(&node.args.args)
                    .chain(&node.args.kwonlyargs)
                {
                    self.semantic.bind(arg.def.arg.as_str(), BindingKind::Other);
                }
                if let Some(vararg) = &node.args.vararg {
                    self.semantic.bind(vararg.arg.as_str(), BindingKind::Other);
                }
                if let Some(kwarg) = &node.args.kwarg {
                    self.semantic.bind(kwarg.arg.as_str(), BindingKind::Other);
                }
                self.visit_expr(&node.body);
                self.semantic.pop_scope();
            }
            Expr::IfExp(node) => {
                self.visit_expr(&node.test);
                self.visit_expr(&node.body);
                self.visit_expr(&node.orelse);
            }
            Expr::Dict(node) => {
                for key in node.keys.iter().flatten() {
                    self.visit_expr(key);
                }
                for value in &node.values {
                    self.visit_expr(value);
                }
            }
            Expr::Set(node) => {
                for elt in &node.elts {
                    self.visit_expr(elt);
                }
            }
            Expr::ListComp(node) => self.visit_comprehension(&node.generators, &[&*node.elt]),
            Expr::SetComp(node) => self.visit_comprehension(&node.generators, &[&*node.elt]),
            Expr::DictComp(node) => {
                self.visit_comprehension(&node.generators, &[&*node.key, &*node.value]);
            }
            Expr::GeneratorExp(node) => self.visit_comprehension(&node.generators, &[&*node.elt]),
            Expr::Await(node) => self.visit_expr(&node.value),
            Expr::Yield(node) => {
                if let Some(value) = &node.value {
                    self.visit_expr(value);
                }
            }
            Expr::YieldFrom(node) => self.visit_expr(&node.value),
            Expr::Compare(node) => {
                self.visit_expr(&node.left);
                for comparator in &node.comparators {
                    self.visit_expr(comparator);
                }
            }
            Expr::FormattedValue(node) => {
                self.visit_expr(&node.value);
                if let Some(format_spec) = &node.format_spec {
                    self.visit_expr(format_spec);
                }
            }
            Expr::JoinedStr(node) => {
                for value in &node.values {
                    self.visit_expr(value);
                }
            }
            Expr::Attribute(node) => self.visit_expr(&node.value),
            Expr::Subscript(node) => {
                self.visit_expr(&node.value);
                self.visit_expr(&node.slice);
            }
            Expr::Starred(node) => self.visit_expr(&node.value),
            Expr::List(node) => {
                for elt in &node.elts {
                    self.visit_expr(elt);
                }
            }
            Expr::Tuple(node) => {
                for elt in &node.elts {
                    self.visit_expr(elt);
                }
            }
            Expr::Slice(node) => {
                if let Some(lower) = &node.lower {
                    self.visit_expr(lower);
                }
                if let Some(upper) = &node.upper {
                    self.visit_expr(upper);
                }
                if let Some(step) = &node.step {
                    self.visit_expr(step);
                }
            }
            Expr::Constant(_) | Expr::Name(_) => {}
        }
    }

    /// Comprehension targets bind in their own scope; the first `iter` is
    /// evaluated before any target exists, matching evaluation order.
    fn visit_comprehension(&mut self, generators: &'a [Comprehension], elts: &[&'a Expr]) {
        self.semantic.push_scope();
        for comprehension in generators {
            self.visit_expr(&comprehension.iter);
            self.bind_target(&comprehension.target, BindingKind::Other);
            for if_ in &comprehension.ifs {
                self.visit_expr(if_);
            }
        }
        for elt in elts {
            self.visit_expr(elt);
        }
        self.semantic.pop_scope();
    }
}
