//! Stub templates and placeholder substitution.
//!
//! Rendering is literal find-and-replace over a fixed set of placeholder
//! tokens. The substitution contract is the enumerated table built by the
//! [`TemplateContext`] constructors — no placeholder strings are scattered
//! through the rest of the codebase.

use crate::domain::name::QualifiedName;

/// Placeholder tokens recognized in stub templates.
///
/// Templates may use any subset; tokens absent from a template are silently
/// ignored, and unknown `{{…}}` sequences in a template are left as-is.
pub mod placeholders {
    /// Namespace of the artifact being generated.
    pub const NAMESPACE: &str = "{{NAMESPACE}}";
    /// Simple class name of the artifact being generated.
    pub const CLASS_NAME: &str = "{{CLASS_NAME}}";
    /// Fully qualified name of the implemented interface.
    pub const INTERFACE_NAMESPACE: &str = "{{INTERFACE_NAMESPACE}}";
    /// Simple name of the implemented interface.
    pub const INTERFACE_NAME: &str = "{{INTERFACE_NAME}}";
    /// Fully qualified name of the backing model.
    pub const MODEL_CLASS: &str = "{{MODEL_CLASS}}";
    /// Simple name of the backing model.
    pub const MODEL_NAME: &str = "{{MODEL_NAME}}";
    /// Lowercase member-variable name for the backing model.
    pub const VARIABLE_NAME: &str = "{{VARIABLE_NAME}}";
    /// The rendered binding lines inside the configuration stub.
    pub const BINDING_LINES: &str = "{{BINDING_LINES}}";
}

// ── StubTemplate ──────────────────────────────────────────────────────────────

/// A stub template body.
///
/// Knows nothing about files or persistence; rendering is referentially
/// transparent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StubTemplate {
    body: String,
}

impl StubTemplate {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Render the template with the given substitution table.
    pub fn render(&self, context: &TemplateContext) -> String {
        context.apply(&self.body)
    }
}

// ── TemplateContext ───────────────────────────────────────────────────────────

/// An ordered placeholder → replacement table, built per artifact from
/// resolved qualified names and discarded after rendering.
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    substitutions: Vec<(&'static str, String)>,
}

impl TemplateContext {
    /// Substitution table for an interface artifact.
    pub fn for_interface(interface: &QualifiedName) -> Self {
        Self {
            substitutions: vec![
                (placeholders::NAMESPACE, interface.namespace()),
                (placeholders::CLASS_NAME, interface.simple_name().into()),
            ],
        }
    }

    /// Substitution table for a repository artifact.
    ///
    /// References the interface resolved earlier in the run and the model
    /// resolved at the start of it.
    pub fn for_repository(
        repository: &QualifiedName,
        interface: &QualifiedName,
        model: &QualifiedName,
    ) -> Self {
        Self {
            substitutions: vec![
                (placeholders::NAMESPACE, repository.namespace()),
                (placeholders::CLASS_NAME, repository.simple_name().into()),
                (placeholders::INTERFACE_NAMESPACE, interface.to_string()),
                (placeholders::INTERFACE_NAME, interface.simple_name().into()),
                (placeholders::MODEL_CLASS, model.to_string()),
                (placeholders::MODEL_NAME, model.simple_name().into()),
                (placeholders::VARIABLE_NAME, repository.variable_name()),
            ],
        }
    }

    /// Substitution table for the binding configuration artifact.
    pub fn for_bindings(rendered_lines: impl Into<String>) -> Self {
        Self {
            substitutions: vec![(placeholders::BINDING_LINES, rendered_lines.into())],
        }
    }

    /// Replace every occurrence of every table entry in `template`.
    fn apply(&self, template: &str) -> String {
        let mut rendered = template.to_string();
        for (token, value) in &self.substitutions {
            rendered = rendered.replace(token, value);
        }
        rendered
    }
}

// ── StubSet ───────────────────────────────────────────────────────────────────

/// The three stub templates a scaffold run needs.
///
/// Built by the adapters crate (compiled-in defaults); the core never embeds
/// template content.
#[derive(Debug, Clone)]
pub struct StubSet {
    pub interface: StubTemplate,
    pub repository: StubTemplate,
    pub bindings: StubTemplate,
}
