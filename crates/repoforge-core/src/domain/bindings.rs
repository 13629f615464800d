//! The interface → repository registration table.
//!
//! An ordered map with unique keys: merging a binding for an existing
//! interface overwrites its repository in place, new interfaces append.
//! The table is the in-memory view of the persisted configuration artifact
//! and is loaded fresh each run — the file is the source of truth.

use crate::domain::error::DomainError;
use crate::domain::name::QualifiedName;

/// One rendered binding line, indented to sit inside the `return [` block.
const ENTRY_INDENT: &str = "    ";

/// Ordered interface → repository bindings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationTable {
    entries: Vec<(String, String)>,
}

impl RegistrationTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The bound repository for `interface`, if any.
    pub fn get(&self, interface: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == interface)
            .map(|(_, value)| value.as_str())
    }

    /// Iterate bindings in table order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Insert or overwrite the binding `interface -> repository`.
    ///
    /// Last write wins: an existing key keeps its position and gets the new
    /// repository; a new key appends. Pre-existing entries never move.
    pub fn merge(&mut self, interface: impl Into<String>, repository: impl Into<String>) {
        let interface = interface.into();
        let repository = repository.into();
        match self.entries.iter_mut().find(|(key, _)| *key == interface) {
            Some(entry) => entry.1 = repository,
            None => self.entries.push((interface, repository)),
        }
    }

    // ── persisted form ────────────────────────────────────────────────────

    /// Parse the persisted configuration body back into a table.
    ///
    /// Accepts exactly the shape the store writes: a `<?php` header, a
    /// `return [` block of `\Interface::class => \Repository::class,`
    /// lines, and a closing `];`. Anything else is a
    /// [`DomainError::MalformedBindings`].
    pub fn parse(content: &str) -> Result<Self, DomainError> {
        #[derive(PartialEq)]
        enum Section {
            Header,
            Entries,
            Done,
        }

        let mut section = Section::Header;
        let mut table = Self::new();

        for (index, raw_line) in content.lines().enumerate() {
            let line = raw_line.trim();
            if line.is_empty() {
                continue;
            }

            let malformed = |line_content: &str| DomainError::MalformedBindings {
                line: index + 1,
                content: line_content.to_string(),
            };

            match section {
                Section::Header => {
                    if line == "<?php" {
                        continue;
                    }
                    if line == "return [" {
                        section = Section::Entries;
                        continue;
                    }
                    return Err(malformed(line));
                }
                Section::Entries => {
                    if line == "];" {
                        section = Section::Done;
                        continue;
                    }
                    let (interface, repository) =
                        parse_entry(line).ok_or_else(|| malformed(line))?;
                    table.merge(interface, repository);
                }
                Section::Done => return Err(malformed(line)),
            }
        }

        if section != Section::Done {
            return Err(DomainError::MalformedBindings {
                line: content.lines().count(),
                content: "unterminated binding table".into(),
            });
        }

        Ok(table)
    }

    /// Render the repeatable entry lines for the configuration stub.
    ///
    /// One line per binding, in table order; deterministic for a given
    /// table.
    pub fn render_lines(&self) -> String {
        let mut lines = String::new();
        for (interface, repository) in self.entries() {
            lines.push_str(ENTRY_INDENT);
            lines.push_str(&format!("\\{interface}::class => \\{repository}::class,\n"));
        }
        lines
    }
}

/// Parse one `\Interface::class => \Repository::class,` entry line.
///
/// Both sides must be well-formed qualified names; the leading `\` and the
/// trailing comma are each tolerated when absent.
fn parse_entry(line: &str) -> Option<(String, String)> {
    let line = line.strip_suffix(',').unwrap_or(line);
    let (left, right) = line.split_once("=>")?;
    Some((parse_class_ref(left)?, parse_class_ref(right)?))
}

fn parse_class_ref(text: &str) -> Option<String> {
    let text = text.trim().strip_suffix("::class")?;
    let text = text.strip_prefix('\\').unwrap_or(text);
    QualifiedName::parse(text).ok().map(|name| name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_with(entries: &[(&str, &str)]) -> RegistrationTable {
        let mut table = RegistrationTable::new();
        for (interface, repository) in entries {
            table.merge(*interface, *repository);
        }
        table
    }

    // ── merge semantics ───────────────────────────────────────────────────

    #[test]
    fn merge_appends_new_keys_in_order() {
        let table = table_with(&[("I1", "R1"), ("I2", "R2")]);
        let entries: Vec<_> = table.entries().collect();
        assert_eq!(entries, vec![("I1", "R1"), ("I2", "R2")]);
    }

    #[test]
    fn merge_is_a_map_not_a_log() {
        let table = table_with(&[("I", "R1"), ("I", "R2")]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("I"), Some("R2"));
    }

    #[test]
    fn merge_overwrites_in_place_keeping_position() {
        let table = table_with(&[("I1", "R1"), ("I2", "R2"), ("I1", "R9")]);
        let entries: Vec<_> = table.entries().collect();
        assert_eq!(entries, vec![("I1", "R9"), ("I2", "R2")]);
    }

    #[test]
    fn merge_preserves_unrelated_entries() {
        let mut table = table_with(&[("I1", "R1"), ("I2", "R2")]);
        table.merge("I3", "R3");
        assert_eq!(table.len(), 3);
        assert_eq!(table.get("I1"), Some("R1"));
        assert_eq!(table.get("I2"), Some("R2"));
        assert_eq!(table.get("I3"), Some("R3"));
    }

    // ── persisted form ────────────────────────────────────────────────────

    #[test]
    fn parse_reads_the_rendered_shape() {
        let content = "<?php\n\nreturn [\n    \\Interfaces\\OrderInterface::class => \\Repositories\\Order::class,\n];\n";
        let table = RegistrationTable::parse(content).unwrap();
        assert_eq!(
            table.get("Interfaces\\OrderInterface"),
            Some("Repositories\\Order")
        );
    }

    #[test]
    fn parse_of_empty_block_yields_empty_table() {
        let table = RegistrationTable::parse("<?php\n\nreturn [\n];\n").unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn parse_preserves_entry_order() {
        let content = "<?php\nreturn [\n\
            \\Interfaces\\AInterface::class => \\Repositories\\A::class,\n\
            \\Interfaces\\BInterface::class => \\Repositories\\B::class,\n];\n";
        let table = RegistrationTable::parse(content).unwrap();
        let keys: Vec<_> = table.entries().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["Interfaces\\AInterface", "Interfaces\\BInterface"]);
    }

    #[test]
    fn parse_rejects_garbage_lines() {
        let err = RegistrationTable::parse("<?php\nreturn [\nnot a binding\n];\n").unwrap_err();
        assert!(matches!(
            err,
            DomainError::MalformedBindings { line: 3, .. }
        ));
    }

    #[test]
    fn parse_rejects_unterminated_table() {
        let err = RegistrationTable::parse("<?php\nreturn [\n").unwrap_err();
        assert!(matches!(err, DomainError::MalformedBindings { .. }));
    }

    #[test]
    fn parse_rejects_content_after_terminator() {
        let err =
            RegistrationTable::parse("<?php\nreturn [\n];\nextra\n").unwrap_err();
        assert!(matches!(err, DomainError::MalformedBindings { line: 4, .. }));
    }

    #[test]
    fn render_lines_round_trips_through_parse() {
        let table = table_with(&[
            ("Interfaces\\OrderInterface", "Repositories\\Order"),
            ("Interfaces\\UserInterface", "Repositories\\User"),
        ]);
        let content = format!("<?php\n\nreturn [\n{}];\n", table.render_lines());
        assert_eq!(RegistrationTable::parse(&content).unwrap(), table);
    }

    #[test]
    fn render_lines_is_deterministic() {
        let table = table_with(&[("I1", "R1"), ("I2", "R2")]);
        assert_eq!(table.render_lines(), table.render_lines());
    }
}
