//! Resolution of kit component references from a parsed module.
//!
//! Two independent passes run over the top-level statements of a program:
//!
//! - the static pass collects the local bindings of every `import` declaration
//!   whose source refers to the kit;
//! - the dynamic pass looks at `export default { components: { ... } }` and
//!   collects the last path segment of every `() => import("...")` factory whose
//!   source refers to the kit.
//!
//! A module that does not have the shape the dynamic pass looks for simply
//! contributes nothing.

use oxc_ast::ast::*;

use super::kit_alias::KitAliases;

/// Property of the default-exported options object that registers components
pub const COMPONENTS_PROPERTY: &str = "components";

/// Extracts kit component names from programs
#[derive(Debug, Clone)]
pub struct KitResolver<'k> {
    aliases: &'k KitAliases,
}

impl<'k> KitResolver<'k> {
    pub fn new(aliases: &'k KitAliases) -> Self {
        Self { aliases }
    }

    /// References found in a component file's script: dynamic pass first
    pub fn resolve_component(&self, program: &Program<'_>) -> Vec<String> {
        let mut names = self.dynamic_imports(program);
        names.extend(self.static_imports(program));
        names
    }

    /// References found in a plain script file: static pass first
    pub fn resolve_script(&self, program: &Program<'_>) -> Vec<String> {
        let mut names = self.static_imports(program);
        names.extend(self.dynamic_imports(program));
        names
    }

    /// Local binding names of all specifiers of top-level kit imports
    pub fn static_imports(&self, program: &Program<'_>) -> Vec<String> {
        let mut names = Vec::new();

        for stmt in &program.body {
            let Statement::ImportDeclaration(decl) = stmt else {
                continue;
            };
            if !self.aliases.matches(decl.source.value.as_str()) {
                continue;
            }
            let Some(specifiers) = &decl.specifiers else {
                continue;
            };

            for specifier in specifiers {
                let local = match specifier {
                    ImportDeclarationSpecifier::ImportSpecifier(spec) => &spec.local,
                    ImportDeclarationSpecifier::ImportDefaultSpecifier(spec) => &spec.local,
                    ImportDeclarationSpecifier::ImportNamespaceSpecifier(spec) => &spec.local,
                };
                names.push(local.name.to_string());
            }
        }

        names
    }

    /// Last path segments of kit imports lazily loaded from the `components` map
    pub fn dynamic_imports(&self, program: &Program<'_>) -> Vec<String> {
        let Some(components) = components_map(program) else {
            return Vec::new();
        };

        components
            .properties
            .iter()
            .filter_map(|property| match property {
                ObjectPropertyKind::ObjectProperty(prop) => lazy_import_source(&prop.value),
                ObjectPropertyKind::SpreadProperty(_) => None,
            })
            .filter(|source| self.aliases.matches(source))
            .map(|source| last_segment(source).to_string())
            .collect()
    }
}

/// The object literal registered under `components` in the default export
fn components_map<'p, 'a>(program: &'p Program<'a>) -> Option<&'p ObjectExpression<'a>> {
    let export = program.body.iter().find_map(|stmt| match stmt {
        Statement::ExportDefaultDeclaration(decl) => Some(decl),
        _ => None,
    })?;

    let options = match &export.declaration {
        ExportDefaultDeclarationKind::ObjectExpression(object) => object,
        _ => return None,
    };

    let components = options.properties.iter().find_map(|property| match property {
        ObjectPropertyKind::ObjectProperty(prop) => match &prop.key {
            PropertyKey::StaticIdentifier(ident) if ident.name == COMPONENTS_PROPERTY => {
                Some(&prop.value)
            }
            _ => None,
        },
        ObjectPropertyKind::SpreadProperty(_) => None,
    })?;

    match components {
        Expression::ObjectExpression(object) => Some(&**object),
        _ => None,
    }
}

/// Source string of `() => import("...")`, if `value` is such a factory
fn lazy_import_source<'p>(value: &'p Expression<'_>) -> Option<&'p str> {
    let Expression::ArrowFunctionExpression(arrow) = value else {
        return None;
    };
    if !arrow.expression || !arrow.params.items.is_empty() || arrow.params.rest.is_some() {
        return None;
    }

    let body = match arrow.body.statements.first() {
        Some(Statement::ExpressionStatement(stmt)) => stmt.expression.without_parentheses(),
        _ => return None,
    };

    match body {
        Expression::ImportExpression(import) => match &import.source {
            Expression::StringLiteral(literal) => Some(literal.value.as_str()),
            _ => None,
        },
        _ => None,
    }
}

/// The part of an import source after its last `/`
pub fn last_segment(source: &str) -> &str {
    source.rsplit('/').next().unwrap_or(source)
}
