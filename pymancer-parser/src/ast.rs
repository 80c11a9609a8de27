// PyMancer AST Definitions
// Statement and expression trees built from single-line parses

/// Byte range into the full program source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        miette::SourceSpan::new(span.start.into(), span.len())
    }
}

/// A whole spell: top-level statements in source order
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub statements: Vec<Statement>,
    pub span: Span,
}

/// One statement, tagged with the 1-based source line it came from
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub kind: StatementKind,
    pub line: usize,
    pub span: Span,
}

impl Statement {
    /// `if` and `for` headers own a body line; everything else stands alone
    pub fn is_block_header(&self) -> bool {
        matches!(self.kind, StatementKind::If(_) | StatementKind::For(_))
    }

    /// The single body statement of a header, if one was attached
    pub fn body(&self) -> Option<&Statement> {
        match &self.kind {
            StatementKind::If(if_statement) => if_statement.body.as_deref(),
            StatementKind::For(for_statement) => for_statement.body.as_deref(),
            _ => None,
        }
    }

    /// Short name of the statement form, for logs and tree dumps
    pub fn form_name(&self) -> &'static str {
        match self.kind {
            StatementKind::MethodCall(_) => "method-call",
            StatementKind::Print(_) => "print",
            StatementKind::Assignment(_) => "assignment",
            StatementKind::If(_) => "if",
            StatementKind::For(_) => "for",
        }
    }

    pub(crate) fn attach_body(&mut self, body: Statement) {
        match &mut self.kind {
            StatementKind::If(if_statement) => if_statement.body = Some(Box::new(body)),
            StatementKind::For(for_statement) => for_statement.body = Some(Box::new(body)),
            _ => {}
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum StatementKind {
    MethodCall(MethodCall),
    Print(PrintCall),
    Assignment(Assignment),
    If(IfStatement),
    For(ForStatement),
}

/// `receiver.method(argument)`
#[derive(Debug, Clone, PartialEq)]
pub struct MethodCall {
    pub receiver: Identifier,
    pub method: Identifier,
    pub argument: Expression,
    pub span: Span,
}

/// `print(argument)`; an empty argument list prints an empty line
#[derive(Debug, Clone, PartialEq)]
pub struct PrintCall {
    pub argument: Option<Expression>,
    pub span: Span,
}

/// `target = value`
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub target: Identifier,
    pub value: Expression,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStatement {
    pub condition: Condition,
    pub body: Option<Box<Statement>>,
    pub span: Span,
}

/// `for variable in iterable:`
#[derive(Debug, Clone, PartialEq)]
pub struct ForStatement {
    pub variable: Identifier,
    pub iterable: Identifier,
    pub body: Option<Box<Statement>>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub name: String,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    pub kind: ExpressionKind,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExpressionKind {
    Identifier(Identifier),
    Boolean(BooleanLiteral),
    Integer(IntegerLiteral),
    String(StringLiteral),
    List(ListLiteral),
    Len(LenCall),
}

#[derive(Debug, Clone, PartialEq)]
pub struct BooleanLiteral {
    pub value: bool,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntegerLiteral {
    pub value: i64,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteStyle {
    Single,
    Double,
}

/// String literal contents are taken verbatim; there are no escape sequences
#[derive(Debug, Clone, PartialEq)]
pub struct StringLiteral {
    pub value: String,
    pub quote: QuoteStyle,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListLiteral {
    pub elements: Vec<Expression>,
    pub span: Span,
}

/// Builtin `len(argument)`
#[derive(Debug, Clone, PartialEq)]
pub struct LenCall {
    pub argument: Box<Expression>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub kind: ConditionKind,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConditionKind {
    /// Two or more terms joined by `and`, kept flat in source order
    And(Vec<Condition>),
    /// `element in collection`
    Membership {
        element: Expression,
        collection: Expression,
    },
    /// `left == right`
    Equality { left: Expression, right: Expression },
    /// A lone identifier or boolean literal
    Bare(Expression),
}
