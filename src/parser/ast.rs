// AST (Abstract Syntax Tree) definitions for the expression language

/// Binary arithmetic operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// Operator as written in source and in the canonical prefix form.
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    /// Binding level: 0 for `+ -`, 1 for `* /` (tighter).
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Add | Operator::Sub => 0,
            Operator::Mul | Operator::Div => 1,
        }
    }
}

/// Function parameter: `name: type_name`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub type_name: String,
}

impl Param {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Param {
            name: name.into(),
            type_name: type_name.into(),
        }
    }
}

/// One `pattern -> { value }` arm of a match
#[derive(Debug, Clone, PartialEq)]
pub struct MatchBranch {
    pub pattern: Expr,
    pub value: Expr,
}

/// Expression nodes. Every node owns its children; trees are never shared.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    String(String),
    Symbol(String),
    Operation {
        op: Operator,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    FnCall {
        name: String,
        args: Vec<Expr>,
    },
    FnDecl {
        name: String,
        params: Vec<Param>,
        ret_type: String,
        body: Box<Expr>,
    },
    Match {
        scrutinee: Box<Expr>,
        branches: Vec<MatchBranch>,
    },
}

impl Expr {
    pub fn number(value: f64) -> Self {
        Expr::Number(value)
    }

    pub fn string(text: impl Into<String>) -> Self {
        Expr::String(text.into())
    }

    pub fn symbol(name: impl Into<String>) -> Self {
        Expr::Symbol(name.into())
    }

    pub fn operation(op: Operator, left: Expr, right: Expr) -> Self {
        Expr::Operation {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn call(name: impl Into<String>, args: Vec<Expr>) -> Self {
        Expr::FnCall {
            name: name.into(),
            args,
        }
    }

    pub fn decl(
        name: impl Into<String>,
        params: Vec<Param>,
        ret_type: impl Into<String>,
        body: Expr,
    ) -> Self {
        Expr::FnDecl {
            name: name.into(),
            params,
            ret_type: ret_type.into(),
            body: Box::new(body),
        }
    }

    pub fn matching(scrutinee: Expr, branches: Vec<(Expr, Expr)>) -> Self {
        Expr::Match {
            scrutinee: Box::new(scrutinee),
            branches: branches
                .into_iter()
                .map(|(pattern, value)| MatchBranch { pattern, value })
                .collect(),
        }
    }

    /// Short variant name, used by the outline view
    pub fn kind_name(&self) -> &'static str {
        match self {
            Expr::Number(_) => "Number",
            Expr::String(_) => "String",
            Expr::Symbol(_) => "Symbol",
            Expr::Operation { .. } => "Operation",
            Expr::FnCall { .. } => "FnCall",
            Expr::FnDecl { .. } => "FnDecl",
            Expr::Match { .. } => "Match",
        }
    }
}

/// Top-level program structure
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub exprs: Vec<Expr>, // Top-level expressions in source order
}

impl Program {
    pub fn new() -> Self {
        Program::default()
    }

    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }
}
