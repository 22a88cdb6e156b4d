//! The fixed Tera templates for each render stage.
//!
//! Templates are written line by line with `concat!` so that every tab and
//! newline in the generated Go source is visible here. None of them ends in
//! literal text; the blank line that follows a stage is written by the
//! renderer (see [`STAGE_SEPARATOR`]), and the dependency template puts its
//! trailing blank line inside the loop body.
//!
//! Context variables:
//!
//! | Variable | Type | Used by |
//! |----------|------|---------|
//! | `options.package` | string | package |
//! | `options.imports` | array of strings | imports |
//! | `options.receiver_name` | string | deps |
//! | `options.type_name` | string | type, deps |
//! | `dependencies` | array of `{ name, type_expr, body }` | type, deps |

/// Written after the package, imports and type stages.
pub const STAGE_SEPARATOR: &str = "\n\n";

/// `package <name>`
pub const PACKAGE_TEMPLATE: &str = "package {{ options.package }}";

/// A single inline import, or a parenthesised block for two or more.
pub const IMPORTS_TEMPLATE: &str = concat!(
    "import {% if options.imports | length == 1 %}\"{{ options.imports | first }}\"{% else %}(\n",
    "{% for path in options.imports %}\t\"{{ path }}\"\n",
    "{% endfor %}){% endif %}",
);

/// The container struct with one field per dependency.
pub const TYPE_TEMPLATE: &str = concat!(
    "type {{ options.type_name }} struct{{ \"{\" }}{% if dependencies %}\n",
    "{% for dep in dependencies %}\t{{ dep.name }} {{ dep.type_expr }}\n",
    "{% endfor %}{% endif %}}",
);

/// A create method and a memoizing accessor per dependency.
pub const DEPS_TEMPLATE: &str = concat!(
    "{% for dep in dependencies %}",
    "func ({{ options.receiver_name }} *{{ options.type_name }}) New{{ dep.name | ucfirst }}() {{ dep.type_expr }} {{ dep.body }}\n",
    "\n",
    "\n",
    "func ({{ options.receiver_name }} *{{ options.type_name }}) {{ dep.name | ucfirst }}() {{ dep.type_expr }} {\n",
    "\tif {{ options.receiver_name }}.{{ dep.name | lcfirst }} == nil {\n",
    "\t\t{{ options.receiver_name }}.{{ dep.name | lcfirst }} = {{ options.receiver_name }}.New{{ dep.name | ucfirst }}()\n",
    "\t}\n",
    "\treturn {{ options.receiver_name }}.{{ dep.name | lcfirst }}\n",
    "}\n",
    "\n",
    "{% endfor %}",
);
