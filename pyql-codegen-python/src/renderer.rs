//! Recursive rendering of schema nodes to Python source fragments.

use pyql_codegen::{CodeBuilder, DependencySet, Diagnostic, TypeMapper};
use pyql_ir::{FieldDefinition, Node, ObjectDefinition, UnionDefinition};

use crate::{
    PythonTypeMapper, RenderConfig,
    ast::{Class, TypeAlias, subscript},
    is_python_keyword, normalize,
};

const TYPING: &str = "typing";
const PHASE: &str = "render";

/// Python spelling of the null type, used when a field type renders to nothing.
const NONE_TYPE: &str = "None";

/// Result of rendering one node: the source text, if any, and the imports
/// that text needs.
///
/// `text: None` is a normal outcome: scalar definitions, for example, need
/// no code of their own.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rendered {
    pub text: Option<String>,
    pub imports: DependencySet,
}

impl Rendered {
    /// Nothing to emit.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Emit `text` without imports.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            imports: DependencySet::new(),
        }
    }

    /// Add the imports the text requires.
    pub fn with_imports(mut self, imports: &DependencySet) -> Self {
        self.imports.merge(imports);
        self
    }
}

/// Result of rendering a sequence of sibling nodes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderedList {
    /// Non-empty fragments, in input order.
    pub fragments: Vec<String>,
    /// Imports of every rendered node.
    pub imports: DependencySet,
}

/// Renders schema nodes to Python, one kind-specific rule per [`Node`] variant.
///
/// Rendering never fails. Kinds without a rule are skipped and reported as
/// warning [`Diagnostic`]s, available through [`Renderer::diagnostics`].
#[derive(Debug)]
pub struct Renderer<'a> {
    config: &'a RenderConfig,
    mapper: PythonTypeMapper,
    /// Names of the definitions being rendered, outermost first.
    path: Vec<String>,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Renderer<'a> {
    pub fn new(config: &'a RenderConfig) -> Self {
        Self {
            config,
            mapper: PythonTypeMapper::with_overrides(config.scalars().clone()),
            path: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Diagnostics recorded so far.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Consume the renderer, returning its diagnostics.
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    /// Render a single node.
    pub fn render(&mut self, node: &Node) -> Rendered {
        let node = normalize(node);
        match node.as_ref() {
            // Scalars are only referenced, never declared
            Node::ScalarDefinition(_) => Rendered::empty(),
            Node::NonNull(inner) => self.render(inner),
            Node::List(inner) => self.render_generic("List", inner),
            Node::Optional(inner) => self.render_generic("Optional", inner),
            Node::NamedType(named) => Rendered::text(self.mapper.map_name(&named.name)),
            Node::Field(field) => self.render_field(field),
            Node::Union(union) => self.render_union(union),
            Node::Object(object) => self.render_object(object),
            Node::Enum(_) | Node::Interface(_) | Node::InputObject(_) => {
                self.skip_unsupported(&node)
            }
        }
    }

    /// Render sibling nodes in order, dropping those that render to nothing.
    pub fn render_all<'n>(&mut self, nodes: impl IntoIterator<Item = &'n Node>) -> RenderedList {
        let mut list = RenderedList::default();
        for node in nodes {
            let rendered = self.render(node);
            list.imports.merge(&rendered.imports);
            if let Some(text) = rendered.text {
                list.fragments.push(text);
            }
        }
        list
    }

    /// `List[T]` / `Optional[T]`. An element that renders to nothing leaves
    /// nothing to wrap.
    fn render_generic(&mut self, generic: &str, inner: &Node) -> Rendered {
        let inner = self.render(inner);
        match inner.text {
            Some(text) => Rendered::text(subscript(generic, &[text]))
                .with_imports(&inner.imports)
                .with_imports(&DependencySet::single(TYPING, generic)),
            None => Rendered::empty().with_imports(&inner.imports),
        }
    }

    fn render_field(&mut self, field: &FieldDefinition) -> Rendered {
        self.check_name(&field.name);
        self.path.push(field.name.clone());
        let ty = self.render(&field.field_type);
        self.path.pop();

        let text = ty.text.unwrap_or_else(|| NONE_TYPE.to_string());
        Rendered::text(format!("{}: {}", field.name, text)).with_imports(&ty.imports)
    }

    /// `Name = Union[...]`. Members go through the type mapper like any
    /// other reference, so object members are quoted forward references.
    ///
    /// `Union[]` does not load, so a union with no renderable member is
    /// skipped with a warning.
    fn render_union(&mut self, union: &UnionDefinition) -> Rendered {
        self.check_name(&union.name);
        self.path.push(union.name.clone());
        let members = self.render_all(&union.members);
        self.path.pop();

        if members.fragments.is_empty() {
            let diagnostic = Diagnostic::warning(
                PHASE,
                format!("union '{}' has no renderable members, skipped", union.name),
            );
            self.diagnostics.push(diagnostic.at(self.location(&union.name)));
            return Rendered::empty().with_imports(&members.imports);
        }

        let alias = TypeAlias::new(&union.name, subscript("Union", &members.fragments));
        Rendered::text(alias.build().trim_end())
            .with_imports(&members.imports)
            .with_imports(&DependencySet::single(TYPING, "Union"))
    }

    fn render_object(&mut self, object: &ObjectDefinition) -> Rendered {
        self.check_name(&object.name);
        self.path.push(object.name.clone());
        let fields = self.render_all(&object.fields);
        self.path.pop();

        let class = self
            .config
            .base_class_name()
            .into_iter()
            .fold(Class::new(&object.name), Class::base);
        let class = fields.fragments.into_iter().fold(class, Class::line);

        Rendered::text(class.render(CodeBuilder::python()).build().trim_end())
            .with_imports(&fields.imports)
    }

    fn skip_unsupported(&mut self, node: &Node) -> Rendered {
        let name = node.name().unwrap_or_default();
        let diagnostic = Diagnostic::warning(
            PHASE,
            format!("no Python rendering for {} '{}', skipped", node.kind(), name),
        );
        self.diagnostics.push(diagnostic.at(self.location(name)));
        Rendered::empty()
    }

    /// Warn about names that cannot be Python identifiers. The code is
    /// still emitted.
    fn check_name(&mut self, name: &str) {
        if is_python_keyword(name) {
            let diagnostic = Diagnostic::warning(
                PHASE,
                format!("'{}' is a Python keyword; the generated module will not import", name),
            );
            self.diagnostics.push(diagnostic.at(self.location(name)));
        }
    }

    fn location(&self, name: &str) -> String {
        self.path
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(name))
            .collect::<Vec<_>>()
            .join(".")
    }
}
