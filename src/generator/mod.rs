//! Container configuration and render entry points.
//!
//! A [`Generator`] describes the container to emit: the Go package, imports,
//! the receiver variable used in methods, the container type name, and an
//! ordered list of [`Dependency`] records. Configuration is built with
//! chained setters and then rendered with [`Generator::generate`] (stdout),
//! [`Generator::generate_to`] (any [`Write`] sink) or
//! [`Generator::render_to_string`].
//!
//! Nothing here validates the configuration. Type expressions, constructor
//! bodies and import paths are opaque text; duplicate dependency names are
//! allowed and rendered as given. The only check happens at render time: a
//! dependency with an empty name is rejected because no method names can be
//! derived from it.
//!
//! # Examples
//!
//! ```rust
//! use godic_gen::generator::Generator;
//!
//! # fn example() -> Result<(), godic_gen::core::GodicError> {
//! let mut generator = Generator::new();
//! generator
//!     .add_imports(["fmt", "os"])
//!     .set_receiver_name("cnt")
//!     .set_type_name("DIContainer")
//!     .add_dependency("a", "*A", "{\n\treturn &A{}\n}")
//!     .add_dependency("b", "*B", "{\n\treturn &B{cnt.A()}\n}");
//!
//! let source = generator.render_to_string()?;
//! assert!(source.contains("func (cnt *DIContainer) NewB() *B {\n\treturn &B{cnt.A()}\n}"));
//! # Ok(())
//! # }
//! ```

use std::io::{self, Write};

use serde::Serialize;

use crate::core::GodicError;
use crate::templating::ContainerRenderer;
use crate::templating::filters::{lower_first, upper_first};

/// Default Go package of the generated file.
pub const DEFAULT_PACKAGE: &str = "main";

/// Default receiver variable name in generated methods.
pub const DEFAULT_RECEIVER_NAME: &str = "c";

/// Default container type name.
pub const DEFAULT_TYPE_NAME: &str = "Container";

/// Prefix of every generated create method.
pub const CREATE_METHOD_PREFIX: &str = "New";

/// File-level options of the generated container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratorOptions {
    /// Package clause of the generated file
    pub package: String,
    /// Import paths, in emission order
    pub imports: Vec<String>,
    /// Receiver variable name in generated methods
    pub receiver_name: String,
    /// Name of the generated container struct
    pub type_name: String,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            package: DEFAULT_PACKAGE.to_string(),
            imports: Vec::new(),
            receiver_name: DEFAULT_RECEIVER_NAME.to_string(),
            type_name: DEFAULT_TYPE_NAME.to_string(),
        }
    }
}

/// A dependency the container can construct and memoize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dependency {
    name: String,
    type_expr: String,
    body: String,
}

impl Dependency {
    /// Create a dependency record.
    ///
    /// * `name` - base identifier, e.g. `configOption`
    /// * `type_expr` - Go type of the field and of both methods, e.g. `*Config`
    /// * `body` - full body of the create method including braces
    pub fn new(
        name: impl Into<String>,
        type_expr: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            type_expr: type_expr.into(),
            body: body.into(),
        }
    }

    /// Base name as given.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Type expression, emitted verbatim.
    #[must_use]
    pub fn type_expr(&self) -> &str {
        &self.type_expr
    }

    /// Create method body, emitted verbatim.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Private field name checked by the accessor (`Value` -> `value`).
    ///
    /// Returns `None` for an empty name.
    #[must_use]
    pub fn field_name(&self) -> Option<String> {
        lower_first(&self.name)
    }

    /// Accessor method name (`value` -> `Value`).
    #[must_use]
    pub fn accessor_method_name(&self) -> Option<String> {
        upper_first(&self.name)
    }

    /// Create method name (`value` -> `NewValue`).
    #[must_use]
    pub fn create_method_name(&self) -> Option<String> {
        upper_first(&self.name).map(|name| format!("{CREATE_METHOD_PREFIX}{name}"))
    }
}

/// Builder and renderer for a dependency injection container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Generator {
    options: GeneratorOptions,
    dependencies: Vec<Dependency>,
}

impl Generator {
    /// Create a generator with the default options and no dependencies.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the package of the generated file.
    pub fn set_package(&mut self, package: impl Into<String>) -> &mut Self {
        self.options.package = package.into();
        self
    }

    /// Append import paths, keeping existing ones and their order.
    pub fn add_imports<I, S>(&mut self, imports: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.imports.extend(imports.into_iter().map(Into::into));
        self
    }

    /// Override the receiver variable name of the generated methods.
    pub fn set_receiver_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.options.receiver_name = name.into();
        self
    }

    /// Override the container type name.
    pub fn set_type_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.options.type_name = name.into();
        self
    }

    /// Register a dependency.
    ///
    /// Each dependency produces a struct field, a `New<Name>` create method
    /// whose body is `body`, and a `<Name>` accessor that calls the create
    /// method on first use. The body may call other accessors through the
    /// receiver variable.
    pub fn add_dependency(
        &mut self,
        name: impl Into<String>,
        type_expr: impl Into<String>,
        body: impl Into<String>,
    ) -> &mut Self {
        self.push_dependency(Dependency::new(name, type_expr, body))
    }

    /// Register an already constructed [`Dependency`].
    ///
    /// Registering two dependencies whose accessor names coincide (`db` and
    /// `Db`, or the same name twice) is allowed but logs a warning, since the
    /// generated methods will collide.
    pub fn push_dependency(&mut self, dependency: Dependency) -> &mut Self {
        let accessor = dependency.accessor_method_name();

        if let Some(accessor) = &accessor {
            let clash = self
                .dependencies
                .iter()
                .find(|existing| existing.accessor_method_name().as_ref() == Some(accessor));
            if let Some(existing) = clash {
                tracing::warn!(
                    "Dependency '{}' collides with '{}' on accessor {}(); generated methods will clash",
                    dependency.name,
                    existing.name,
                    accessor
                );
            }
        }

        tracing::debug!(
            "Adding dependency '{}' of type {} ({} / {})",
            dependency.name,
            dependency.type_expr,
            dependency.create_method_name().as_deref().unwrap_or("<empty>"),
            accessor.as_deref().unwrap_or("<empty>")
        );
        self.dependencies.push(dependency);
        self
    }

    /// File-level options.
    #[must_use]
    pub const fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Registered dependencies, in emission order.
    #[must_use]
    pub fn dependencies(&self) -> &[Dependency] {
        &self.dependencies
    }

    /// Write the generated container to standard output.
    ///
    /// # Errors
    ///
    /// See [`generate_to`](Self::generate_to).
    pub fn generate(&self) -> Result<(), GodicError> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.generate_to(&mut handle)?;
        handle.flush()?;
        Ok(())
    }

    /// Write the generated container to `writer`.
    ///
    /// # Errors
    ///
    /// - [`GodicError::EmptyIdentifier`] if a dependency name is empty
    /// - [`GodicError::RenderFailed`] if rendering or writing fails
    /// - [`GodicError::TemplateSyntax`] if the built-in templates are broken
    pub fn generate_to<W: Write>(&self, mut writer: W) -> Result<(), GodicError> {
        ContainerRenderer::new()?.render_to(self, &mut writer)
    }

    /// Render the generated container into a `String`.
    ///
    /// # Errors
    ///
    /// See [`generate_to`](Self::generate_to).
    pub fn render_to_string(&self) -> Result<String, GodicError> {
        ContainerRenderer::new()?.render_to_string(self)
    }
}
