//! Container rendering engine with Tera.
//!
//! This module provides the [`ContainerRenderer`] struct that wraps a Tera
//! instance holding the four fixed stage templates and the casing filters.

use std::fmt;
use std::io::Write;

use tera::{Context as TeraContext, Tera};

use super::filters;
use super::templates::{
    DEPS_TEMPLATE, IMPORTS_TEMPLATE, PACKAGE_TEMPLATE, STAGE_SEPARATOR, TYPE_TEMPLATE,
};
use crate::core::GodicError;
use crate::generator::Generator;

/// The ordered stages of a container render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStage {
    /// `package` clause, always emitted
    Package,
    /// `import` clause, emitted when there is at least one import
    Imports,
    /// Container struct declaration, always emitted
    Type,
    /// Create/accessor method pairs, emitted when there is at least one dependency
    Deps,
}

impl RenderStage {
    /// All stages in emission order.
    pub const ALL: [Self; 4] = [Self::Package, Self::Imports, Self::Type, Self::Deps];

    /// Name under which the stage template is registered with Tera.
    #[must_use]
    pub const fn template_name(self) -> &'static str {
        match self {
            Self::Package => "package",
            Self::Imports => "imports",
            Self::Type => "type",
            Self::Deps => "deps",
        }
    }

    const fn source(self) -> &'static str {
        match self {
            Self::Package => PACKAGE_TEMPLATE,
            Self::Imports => IMPORTS_TEMPLATE,
            Self::Type => TYPE_TEMPLATE,
            Self::Deps => DEPS_TEMPLATE,
        }
    }

    /// Whether this stage produces output for `generator`.
    fn applies_to(self, generator: &Generator) -> bool {
        match self {
            Self::Package | Self::Type => true,
            Self::Imports => !generator.options().imports.is_empty(),
            Self::Deps => !generator.dependencies().is_empty(),
        }
    }

    /// Whether the renderer writes [`STAGE_SEPARATOR`] after this stage.
    const fn has_separator(self) -> bool {
        !matches!(self, Self::Deps)
    }
}

impl fmt::Display for RenderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.template_name())
    }
}

/// Renders a [`Generator`] configuration into Go source.
///
/// The renderer owns a Tera instance with the built-in templates already
/// parsed. It only reads the configuration, so rendering the same generator
/// twice yields identical output.
///
/// # Examples
///
/// ```rust
/// use godic_gen::generator::Generator;
/// use godic_gen::templating::ContainerRenderer;
///
/// # fn example() -> Result<(), godic_gen::core::GodicError> {
/// let mut generator = Generator::new();
/// generator.add_dependency("value", "int", "{ return 10 }");
///
/// let renderer = ContainerRenderer::new()?;
/// let mut out = Vec::new();
/// renderer.render_to(&generator, &mut out)?;
/// assert!(String::from_utf8_lossy(&out).contains("func (c *Container) Value() int {"));
/// # Ok(())
/// # }
/// ```
pub struct ContainerRenderer {
    tera: Tera,
}

impl ContainerRenderer {
    /// Create a renderer with the stage templates and casing filters registered.
    ///
    /// # Errors
    ///
    /// Returns [`GodicError::TemplateSyntax`] if a built-in template fails to
    /// parse. That can only happen if the templates shipped with this crate are
    /// broken.
    pub fn new() -> Result<Self, GodicError> {
        let mut tera = Tera::default();

        // Generated code is not HTML
        tera.autoescape_on(vec![]);

        tera.register_filter(filters::UCFIRST, filters::create_ucfirst_filter());
        tera.register_filter(filters::LCFIRST, filters::create_lcfirst_filter());

        for stage in RenderStage::ALL {
            tera.add_raw_template(stage.template_name(), stage.source()).map_err(|e| {
                GodicError::TemplateSyntax {
                    template: stage.template_name().to_string(),
                    message: super::format_tera_error(&e),
                }
            })?;
        }

        Ok(Self {
            tera,
        })
    }

    /// Render every applicable stage of `generator` into `writer`, in order.
    ///
    /// Output is written stage by stage; if an error is returned, whatever was
    /// already written to `writer` must be discarded.
    ///
    /// # Errors
    ///
    /// - [`GodicError::EmptyIdentifier`] if any dependency has an empty name
    ///   (checked before anything is written)
    /// - [`GodicError::RenderFailed`] if Tera fails to render a stage or the
    ///   writer fails
    pub fn render_to(&self, generator: &Generator, writer: &mut dyn Write) -> Result<(), GodicError> {
        if let Some(index) = generator.dependencies().iter().position(|dep| dep.field_name().is_none()) {
            return Err(GodicError::EmptyIdentifier {
                index,
            });
        }

        let context = Self::build_context(generator);

        for stage in RenderStage::ALL {
            if !stage.applies_to(generator) {
                tracing::debug!("Skipping {} stage", stage);
                continue;
            }

            tracing::debug!("Rendering {} stage", stage);
            self.render_stage(stage, &context, writer)?;
        }

        tracing::debug!(
            "Rendered container {} with {} dependencies",
            generator.options().type_name,
            generator.dependencies().len()
        );

        Ok(())
    }

    /// Render `generator` into a `String`.
    ///
    /// # Errors
    ///
    /// Same as [`render_to`](Self::render_to).
    pub fn render_to_string(&self, generator: &Generator) -> Result<String, GodicError> {
        let mut buffer = Vec::new();
        self.render_to(generator, &mut buffer)?;

        // Templates and inputs are all UTF-8
        String::from_utf8(buffer).map_err(|e| GodicError::Other {
            message: format!("Rendered output is not valid UTF-8: {e}"),
        })
    }

    fn render_stage(
        &self,
        stage: RenderStage,
        context: &TeraContext,
        writer: &mut dyn Write,
    ) -> Result<(), GodicError> {
        let failed = |message: String| GodicError::RenderFailed {
            stage: stage.to_string(),
            message,
        };

        self.tera
            .render_to(stage.template_name(), context, &mut *writer)
            .map_err(|e| failed(super::format_tera_error(&e)))?;

        if stage.has_separator() {
            writer.write_all(STAGE_SEPARATOR.as_bytes()).map_err(|e| failed(e.to_string()))?;
        }

        Ok(())
    }

    fn build_context(generator: &Generator) -> TeraContext {
        let mut context = TeraContext::new();
        context.insert("options", generator.options());
        context.insert("dependencies", generator.dependencies());
        context
    }
}
