//! Method and class method declarations.

use clsgen_codegen::{CodeFragment, Renderable};

use crate::{Annotations, DocString, Error, MethodArgument, Result, Value};

/// Keyword that selects the body rendering mode of a method.
pub const CODE_MODE: &str = "CodeMode";

const EXPRESSION: &str = "expression";

/// Whether a method operates on an instance or on the class itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MethodKind {
    #[default]
    Instance,
    Class,
}

impl MethodKind {
    /// The declaration keyword starting the signature line.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Instance => "Method",
            Self::Class => "ClassMethod",
        }
    }
}

/// Implementation of a method.
#[derive(Debug, Clone, PartialEq)]
pub enum MethodBody {
    /// Statements written one per line inside `{ }`.
    Block(Vec<String>),
    /// A single expression written right after the signature.
    Expression(String),
}

impl MethodBody {
    fn statements(&self) -> Vec<&str> {
        match self {
            Self::Block(lines) => lines.iter().map(String::as_str).collect(),
            Self::Expression(expr) => vec![expr.as_str()],
        }
    }
}

impl Default for MethodBody {
    fn default() -> Self {
        Self::Block(Vec::new())
    }
}

/// A method member, rendered either as `Method` or as `ClassMethod`
/// depending on the [`Component`](crate::Component) variant holding it.
#[derive(Debug, Clone, PartialEq)]
pub struct Method {
    pub name: String,
    pub arguments: Vec<MethodArgument>,
    pub return_type: Option<String>,
    pub body: MethodBody,
    pub keywords: Annotations,
    pub doc: DocString,
}

impl Method {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: Vec::new(),
            return_type: None,
            body: MethodBody::default(),
            keywords: Annotations::new(),
            doc: DocString::new(),
        }
    }

    pub fn argument(mut self, argument: MethodArgument) -> Self {
        self.arguments.push(argument);
        self
    }

    pub fn arguments(mut self, arguments: impl IntoIterator<Item = MethodArgument>) -> Self {
        self.arguments.extend(arguments);
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    /// Append a statement to a block body.
    ///
    /// An expression body is turned into a block starting with that expression.
    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.push_statement(line);
        self
    }

    /// Append several statements to a block body.
    pub fn body(mut self, lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        for line in lines {
            self.push_statement(line);
        }
        self
    }

    /// Use a single expression as the body and switch to expression mode.
    pub fn expression(mut self, expr: impl Into<String>) -> Self {
        self.body = MethodBody::Expression(expr.into());
        self.keywords.set(CODE_MODE, Value::raw(EXPRESSION));
        self
    }

    pub fn keyword(mut self, name: impl Into<String>) -> Self {
        self.keywords.set_flag(name);
        self
    }

    pub fn keyword_value(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.keywords.set(name, value);
        self
    }

    pub fn doc(mut self, doc: impl Into<DocString>) -> Self {
        self.doc = doc.into();
        self
    }

    pub fn push_statement(&mut self, line: impl Into<String>) {
        if let MethodBody::Expression(expr) = &mut self.body {
            let first = std::mem::take(expr);
            self.body = MethodBody::Block(vec![first]);
        }
        if let MethodBody::Block(lines) = &mut self.body {
            lines.push(line.into());
        }
    }

    /// Whether the `CodeMode` keyword selects single-expression rendering.
    pub fn is_expression_mode(&self) -> bool {
        matches!(
            self.keywords.get(CODE_MODE),
            Some(Some(value)) if value.as_str().is_some_and(|s| s.eq_ignore_ascii_case(EXPRESSION))
        )
    }

    /// Check that the body fits the rendering mode.
    ///
    /// Expression mode needs exactly one statement.
    pub fn check(&self) -> Result<()> {
        let statements = self.body.statements().len();
        if self.is_expression_mode() && statements != 1 {
            return Err(Error::ExpressionBody {
                method: self.name.clone(),
                statements,
            });
        }
        Ok(())
    }

    /// The signature line for the given kind.
    pub fn signature(&self, kind: MethodKind) -> String {
        let args = self
            .arguments
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");

        let mut line = format!("{} {}({})", kind.keyword(), self.name, args);
        if let Some(ret) = &self.return_type {
            line.push_str(&format!(" As {}", ret));
        }
        if let Some(keywords) = self.keywords.keyword_bracket() {
            line.push(' ');
            line.push_str(&keywords);
        }
        line
    }

    /// Render as the given kind of method.
    pub fn fragments(&self, kind: MethodKind) -> Vec<CodeFragment> {
        let mut fragments = self.doc.to_fragments();
        fragments.push(CodeFragment::Line(self.signature(kind)));

        let statements = self.body.statements();
        if self.is_expression_mode() {
            fragments.extend(statements.into_iter().map(CodeFragment::line));
        } else {
            fragments.push(CodeFragment::block(
                "{",
                statements.into_iter().map(CodeFragment::line).collect(),
                Some("}".to_string()),
            ));
        }
        fragments
    }
}

impl Renderable for Method {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.fragments(MethodKind::Instance)
    }
}

#[cfg(test)]
mod tests {
    use clsgen_codegen::CodeBuilder;

    use super::*;

    fn render(method: &Method, kind: MethodKind) -> String {
        let mut builder = CodeBuilder::objectscript();
        for fragment in method.fragments(kind) {
            builder.apply_fragment(fragment);
        }
        builder.build()
    }

    #[test]
    fn test_block_mode() {
        let method = Method::new("Run").body(["A", "B"]);
        assert_eq!(
            render(&method, MethodKind::Instance),
            "Method Run()\n{\n\tA\n\tB\n}\n"
        );
    }

    #[test]
    fn test_empty_block() {
        let method = Method::new("Noop");
        assert_eq!(render(&method, MethodKind::Instance), "Method Noop()\n{\n}\n");
    }

    #[test]
    fn test_expression_mode() {
        let method = Method::new("AddPet")
            .argument(MethodArgument::typed("pInput", "Ens.Request"))
            .argument(MethodArgument::typed("pOutput", "Ens.Response").output())
            .returns("%Status")
            .expression("X");
        assert_eq!(
            render(&method, MethodKind::Instance),
            "Method AddPet(pInput As Ens.Request, Output pOutput As Ens.Response) As %Status [ CodeMode = expression ]\nX\n"
        );
    }

    #[test]
    fn test_expression_mode_from_text_keyword() {
        let method = Method::new("Two")
            .keyword_value(CODE_MODE, "Expression")
            .body_line("1 + 1");
        assert!(method.is_expression_mode());
        assert!(method.check().is_ok());
        assert_eq!(
            render(&method, MethodKind::Class),
            "ClassMethod Two() [ CodeMode = \"Expression\" ]\n1 + 1\n"
        );
    }

    #[test]
    fn test_other_code_mode_is_block() {
        let method = Method::new("Gen")
            .keyword_value(CODE_MODE, Value::raw("objectgenerator"))
            .body_line("quit $$$OK");
        assert!(!method.is_expression_mode());
        assert!(render(&method, MethodKind::Instance).contains("{\n\tquit $$$OK\n}"));
    }

    #[test]
    fn test_expression_body_in_block_mode() {
        let mut method = Method::new("Value");
        method.body = MethodBody::Expression("quit 1".to_string());
        assert_eq!(
            render(&method, MethodKind::Instance),
            "Method Value()\n{\n\tquit 1\n}\n"
        );
    }

    #[test]
    fn test_check_rejects_multi_statement_expression() {
        let method = Method::new("Bad")
            .keyword_value(CODE_MODE, Value::raw("expression"))
            .body(["A", "B"]);
        let err = method.check().unwrap_err();
        assert!(matches!(
            err,
            Error::ExpressionBody { ref method, statements: 2 } if method == "Bad"
        ));
    }

    #[test]
    fn test_body_line_after_expression_becomes_block() {
        let method = Method::new("M").expression("A").body_line("B");
        assert_eq!(
            method.body,
            MethodBody::Block(vec!["A".to_string(), "B".to_string()])
        );
    }

    #[test]
    fn test_statements_are_verbatim() {
        let method = Method::new("Test").body([
            "set pOutput = ##class(Ens.Response).%New()",
            "return $$$OK",
        ]);
        let out = render(&method, MethodKind::Class);
        assert!(out.contains("\tset pOutput = ##class(Ens.Response).%New()\n\treturn $$$OK\n"));
    }
}
