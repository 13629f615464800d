//! Built-in stub templates.
//!
//! These are the templates that ship with the tool. The core crate stays
//! content-free: it receives a [`StubSet`] and never embeds template text.
//!
//! Placeholder tokens are documented in
//! `repoforge_core::domain::template::placeholders`.

use repoforge_core::domain::{StubSet, StubTemplate};

/// Stub for generated interface artifacts.
const INTERFACE_STUB: &str = r#"<?php

namespace {{NAMESPACE}};

interface {{CLASS_NAME}}
{
    public function all();

    public function find($id);

    public function create(array $attributes);

    public function update($id, array $attributes);

    public function delete($id);
}
"#;

/// Stub for generated repository artifacts.
const REPOSITORY_STUB: &str = r#"<?php

namespace {{NAMESPACE}};

use {{INTERFACE_NAMESPACE}};
use {{MODEL_CLASS}};

class {{CLASS_NAME}} implements {{INTERFACE_NAME}}
{
    /**
     * @var {{MODEL_NAME}}
     */
    protected ${{VARIABLE_NAME}};

    public function __construct({{MODEL_NAME}} ${{VARIABLE_NAME}})
    {
        $this->{{VARIABLE_NAME}} = ${{VARIABLE_NAME}};
    }

    public function all()
    {
        return $this->{{VARIABLE_NAME}}->all();
    }

    public function find($id)
    {
        return $this->{{VARIABLE_NAME}}->findOrFail($id);
    }

    public function create(array $attributes)
    {
        return $this->{{VARIABLE_NAME}}->create($attributes);
    }

    public function update($id, array $attributes)
    {
        $record = $this->find($id);
        $record->update($attributes);

        return $record;
    }

    public function delete($id)
    {
        return $this->find($id)->delete();
    }
}
"#;

/// Stub for the persisted binding table. The entry lines are rendered by
/// the registration store, one repeatable line per binding.
const BINDINGS_STUB: &str = "<?php\n\nreturn [\n{{BINDING_LINES}}];\n";

/// The stub set shipped with the tool.
pub fn builtin() -> StubSet {
    StubSet {
        interface: StubTemplate::new(INTERFACE_STUB),
        repository: StubTemplate::new(REPOSITORY_STUB),
        bindings: StubTemplate::new(BINDINGS_STUB),
    }
}
