//! Raw name → qualified name resolution.
//!
//! The resolver turns a user-supplied token like `Order` or
//! `Billing/Invoice` into a fully qualified name under the root namespace
//! for the requested artifact kind. Qualification is a fixed-point
//! computation: a name that already carries its root is returned unchanged,
//! so `resolve(resolve(n))` always equals `resolve(n)`.

use tracing::trace;

use crate::domain::error::DomainError;
use crate::domain::name::{ArtifactKind, NAMESPACE_SEPARATOR, NamespaceRoots, QualifiedName};

/// Suffix appended to interface-kind names once qualification converges.
pub const INTERFACE_SUFFIX: &str = "Interface";

/// Upper bound on qualification passes.
///
/// One prepend is enough for any well-formed root; the bound exists so a
/// root that fails its own prefix check surfaces as an error instead of
/// looping.
const MAX_QUALIFY_PASSES: usize = 8;

/// Resolves raw resource names into [`QualifiedName`]s.
///
/// Pure: a function of (raw name, kind, configured roots) only.
#[derive(Debug, Clone)]
pub struct NameResolver {
    roots: NamespaceRoots,
}

impl NameResolver {
    pub fn new(roots: NamespaceRoots) -> Self {
        Self { roots }
    }

    pub fn roots(&self) -> &NamespaceRoots {
        &self.roots
    }

    /// Resolve `raw` into a qualified name for `kind`.
    ///
    /// Steps, in order:
    /// 1. Trim whitespace and leading separators; empty input is
    ///    [`DomainError::EmptyName`].
    /// 2. Normalize `/` path separators to the namespace separator.
    /// 3. Prepend the kind's root namespace until the prefix check passes
    ///    (bounded loop, see [`MAX_QUALIFY_PASSES`]).
    /// 4. For interface-kind names, append [`INTERFACE_SUFFIX`] unless the
    ///    simple name already carries it — the suffix check keeps
    ///    resolution idempotent.
    pub fn resolve(&self, raw: &str, kind: ArtifactKind) -> Result<QualifiedName, DomainError> {
        let trimmed = raw
            .trim()
            .trim_start_matches([NAMESPACE_SEPARATOR, '/'])
            .to_string();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyName);
        }

        let root = self.roots.root_for(kind);
        let mut candidate = trimmed.replace('/', "\\");

        for pass in 0..MAX_QUALIFY_PASSES {
            if Self::carries_root(&candidate, root) {
                trace!(%candidate, %kind, pass, "qualification converged");
                let name = QualifiedName::parse(&candidate)?;
                return Ok(match kind {
                    ArtifactKind::Interface if !name.has_suffix(INTERFACE_SUFFIX) => {
                        name.with_suffix(INTERFACE_SUFFIX)
                    }
                    _ => name,
                });
            }
            candidate = format!("{root}{NAMESPACE_SEPARATOR}{candidate}");
        }

        Err(DomainError::QualificationDiverged {
            name: raw.trim().to_string(),
            root: root.to_string(),
        })
    }

    /// Segment-aware prefix check: `Interfaces\Order` carries the root
    /// `Interfaces`, but `InterfacesLegacy\Order` does not.
    fn carries_root(candidate: &str, root: &str) -> bool {
        match candidate.strip_prefix(root) {
            Some("") => true,
            Some(rest) => rest.starts_with(NAMESPACE_SEPARATOR),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> NameResolver {
        NameResolver::new(NamespaceRoots::default())
    }

    // ── qualification ─────────────────────────────────────────────────────

    #[test]
    fn bare_name_gains_root_and_interface_suffix() {
        let name = resolver().resolve("Order", ArtifactKind::Interface).unwrap();
        assert_eq!(name.to_string(), "Interfaces\\OrderInterface");
    }

    #[test]
    fn repository_kind_gains_root_without_suffix() {
        let name = resolver()
            .resolve("Order", ArtifactKind::Repository)
            .unwrap();
        assert_eq!(name.to_string(), "Repositories\\Order");
    }

    #[test]
    fn model_kind_uses_models_root() {
        let name = resolver().resolve("Order", ArtifactKind::Model).unwrap();
        assert_eq!(name.to_string(), "Models\\Order");
    }

    #[test]
    fn path_separators_become_namespace_segments() {
        let name = resolver()
            .resolve("Billing/Invoice", ArtifactKind::Interface)
            .unwrap();
        assert_eq!(name.to_string(), "Interfaces\\Billing\\InvoiceInterface");
    }

    #[test]
    fn leading_separators_are_stripped() {
        let name = resolver()
            .resolve("/Order", ArtifactKind::Repository)
            .unwrap();
        assert_eq!(name.to_string(), "Repositories\\Order");

        let name = resolver()
            .resolve("\\Order", ArtifactKind::Repository)
            .unwrap();
        assert_eq!(name.to_string(), "Repositories\\Order");
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let name = resolver()
            .resolve("  Order  ", ArtifactKind::Repository)
            .unwrap();
        assert_eq!(name.to_string(), "Repositories\\Order");
    }

    // ── fixed point ───────────────────────────────────────────────────────

    #[test]
    fn already_qualified_name_is_unchanged() {
        let name = resolver()
            .resolve("Repositories\\Order", ArtifactKind::Repository)
            .unwrap();
        assert_eq!(name.to_string(), "Repositories\\Order");
    }

    #[test]
    fn resolve_is_idempotent_for_all_kinds() {
        let resolver = resolver();
        for kind in [
            ArtifactKind::Interface,
            ArtifactKind::Repository,
            ArtifactKind::Model,
        ] {
            for raw in ["Order", "Billing/Invoice", "Repositories\\Order"] {
                let once = resolver.resolve(raw, kind).unwrap();
                let twice = resolver.resolve(&once.to_string(), kind).unwrap();
                assert_eq!(once, twice, "resolve not idempotent for {raw} as {kind}");
            }
        }
    }

    #[test]
    fn interface_suffix_is_not_duplicated() {
        let name = resolver()
            .resolve("Interfaces\\OrderInterface", ArtifactKind::Interface)
            .unwrap();
        assert_eq!(name.to_string(), "Interfaces\\OrderInterface");
    }

    // ── prefix check ──────────────────────────────────────────────────────

    #[test]
    fn lookalike_root_prefix_is_still_qualified() {
        let name = resolver()
            .resolve("InterfacesLegacy\\Order", ArtifactKind::Interface)
            .unwrap();
        assert_eq!(
            name.to_string(),
            "Interfaces\\InterfacesLegacy\\OrderInterface"
        );
    }

    // ── errors ────────────────────────────────────────────────────────────

    #[test]
    fn empty_name_is_an_error() {
        assert_eq!(
            resolver().resolve("", ArtifactKind::Interface),
            Err(DomainError::EmptyName)
        );
        assert_eq!(
            resolver().resolve("   ", ArtifactKind::Repository),
            Err(DomainError::EmptyName)
        );
    }

    #[test]
    fn malformed_root_errors_instead_of_looping() {
        // A root ending in the separator converges onto a name with an
        // empty segment, which the parser rejects. Either way the loop is
        // bounded and the caller sees an error.
        let resolver = NameResolver::new(NamespaceRoots {
            interfaces: "Broken\\".into(),
            ..NamespaceRoots::default()
        });
        assert!(resolver.resolve("Order", ArtifactKind::Interface).is_err());
    }
}
