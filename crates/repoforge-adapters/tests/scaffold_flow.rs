//! End-to-end scaffold flow against the in-memory filesystem.

use std::path::{Path, PathBuf};
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use repoforge_adapters::{MemoryFilesystem, RecordingModelGenerator, stubs};
use repoforge_core::{
    application::{
        ArtifactWriter, RegistrationStore, ScaffoldPaths, ScaffoldService,
        ports::{Filesystem, Prompter},
    },
    domain::{NameResolver, NamespaceRoots},
    error::RepoforgeResult,
};

/// Prompter with a fixed answer and a call counter.
#[derive(Clone)]
struct FixedPrompter {
    answer: bool,
    calls: Arc<AtomicUsize>,
}

impl FixedPrompter {
    fn new(answer: bool) -> Self {
        Self {
            answer,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Prompter for FixedPrompter {
    fn confirm(&self, _question: &str) -> RepoforgeResult<bool> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.answer)
    }
}

fn bindings_path() -> PathBuf {
    Path::new("config").join("repositories.php")
}

fn service(
    fs: &MemoryFilesystem,
    prompter: FixedPrompter,
    generator: RecordingModelGenerator,
) -> ScaffoldService {
    let stub_set = stubs::builtin();
    ScaffoldService::new(
        NameResolver::new(NamespaceRoots::default()),
        stub_set.clone(),
        ScaffoldPaths {
            app_root: "app".into(),
            bindings_file: bindings_path(),
            extension: "php".into(),
        },
        ArtifactWriter::new(Box::new(fs.clone())),
        RegistrationStore::new(Box::new(fs.clone()), stub_set.bindings),
        Box::new(prompter),
        Box::new(generator),
    )
}

#[test]
fn first_run_generates_artifacts_and_registers_binding() {
    let fs = MemoryFilesystem::new();
    let service = service(&fs, FixedPrompter::new(false), RecordingModelGenerator::new());

    let report = service.scaffold("Order").unwrap();

    assert_eq!(report.interface.to_string(), "Interfaces\\OrderInterface");
    assert_eq!(report.repository.to_string(), "Repositories\\Order");
    assert!(report.interface_write.was_written());
    assert!(report.repository_write.was_written());
    assert!(report.registered);

    let interface = fs
        .file_content(Path::new("app/Interfaces/OrderInterface.php"))
        .unwrap();
    assert!(interface.contains("namespace Interfaces;"));
    assert!(interface.contains("interface OrderInterface"));

    let repository = fs
        .file_content(Path::new("app/Repositories/Order.php"))
        .unwrap();
    assert!(repository.contains("class Order implements OrderInterface"));
    assert!(repository.contains("use Interfaces\\OrderInterface;"));
    assert!(repository.contains("use Models\\Order;"));

    let table = fs.file_content(&bindings_path()).unwrap();
    assert!(
        table.contains("\\Interfaces\\OrderInterface::class => \\Repositories\\Order::class,")
    );
}

#[test]
fn second_run_skips_writes_and_leaves_table_untouched() {
    let fs = MemoryFilesystem::new();
    let service = service(&fs, FixedPrompter::new(false), RecordingModelGenerator::new());

    service.scaffold("Order").unwrap();
    let table_before = fs.file_content(&bindings_path()).unwrap();

    // Simulate a hand edit: repeated runs must never clobber it.
    fs.write_file(
        Path::new("app/Repositories/Order.php"),
        "<?php // hand-edited\n",
    )
    .unwrap();

    let report = service.scaffold("Order").unwrap();
    assert!(!report.interface_write.was_written());
    assert!(!report.repository_write.was_written());
    assert!(!report.registered);

    assert_eq!(
        fs.file_content(Path::new("app/Repositories/Order.php")).unwrap(),
        "<?php // hand-edited\n"
    );
    assert_eq!(fs.file_content(&bindings_path()).unwrap(), table_before);
}

#[test]
fn scaffolding_a_second_resource_preserves_prior_bindings() {
    let fs = MemoryFilesystem::new();
    let service = service(&fs, FixedPrompter::new(false), RecordingModelGenerator::new());

    service.scaffold("Order").unwrap();
    service.scaffold("User").unwrap();

    let table = fs.file_content(&bindings_path()).unwrap();
    let order_at = table
        .find("\\Interfaces\\OrderInterface::class => \\Repositories\\Order::class,")
        .expect("order binding present");
    let user_at = table
        .find("\\Interfaces\\UserInterface::class => \\Repositories\\User::class,")
        .expect("user binding present");
    assert!(order_at < user_at, "prior entries keep their position");
}

#[test]
fn nested_resource_names_map_to_nested_paths() {
    let fs = MemoryFilesystem::new();
    let service = service(&fs, FixedPrompter::new(false), RecordingModelGenerator::new());

    let report = service.scaffold("Billing/Invoice").unwrap();
    assert_eq!(
        report.interface.to_string(),
        "Interfaces\\Billing\\InvoiceInterface"
    );
    assert!(fs.exists(Path::new("app/Interfaces/Billing/InvoiceInterface.php")));
    assert!(fs.exists(Path::new("app/Repositories/Billing/Invoice.php")));
}

#[test]
fn accepted_prompt_delegates_model_creation() {
    let fs = MemoryFilesystem::new();
    let prompter = FixedPrompter::new(true);
    let generator = RecordingModelGenerator::new();
    let service = service(&fs, prompter.clone(), generator.clone());

    let report = service.scaffold("Order").unwrap();
    assert!(report.model_delegated);
    assert_eq!(prompter.calls(), 1);
    assert_eq!(generator.calls(), vec!["Order"]);
}

#[test]
fn existing_model_artifact_suppresses_the_prompt() {
    let fs = MemoryFilesystem::new();
    fs.create_dir_all(Path::new("app/Models")).unwrap();
    fs.write_file(Path::new("app/Models/Order.php"), "<?php\n")
        .unwrap();

    let prompter = FixedPrompter::new(true);
    let generator = RecordingModelGenerator::new();
    let service = service(&fs, prompter.clone(), generator.clone());

    let report = service.scaffold("Order").unwrap();
    assert!(!report.model_delegated);
    assert_eq!(prompter.calls(), 0);
    assert!(generator.calls().is_empty());
}

#[test]
fn corrupted_binding_table_fails_the_run() {
    let fs = MemoryFilesystem::new();
    fs.create_dir_all(Path::new("config")).unwrap();
    fs.write_file(&bindings_path(), "this is not a binding table\n")
        .unwrap();

    let service = service(&fs, FixedPrompter::new(false), RecordingModelGenerator::new());
    assert!(service.scaffold("Order").is_err());

    // The artifacts written before the failure are left in place.
    assert!(fs.exists(Path::new("app/Interfaces/OrderInterface.php")));
    assert!(fs.exists(Path::new("app/Repositories/Order.php")));
}
