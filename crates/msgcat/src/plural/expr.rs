//! Parser and evaluator for gettext-style plural expressions.
//!
//! A plural expression is C-like arithmetic over the count `n`, for example
//! `n%10==1 && n%100!=11 ? 0 : n%10>=2 && n%10<=4 && (n%100<10 || n%100>=20) ? 1 : 2`.
//! Supports the ternary operator, `||`, `&&`, equality, relational,
//! additive and multiplicative operators, unary `!`, parentheses, integer
//! literals, and the variable `n`. A boolean-valued expression selects
//! between forms 1 and 0, matching the two-form rules most western
//! European locales ship.

use winnow::ascii::{digit1, multispace0};
use winnow::combinator::{alt, delimited, opt, preceded, repeat, terminated};
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;

use crate::error::PluralRuleError;

/// How far to sample counts when estimating how many forms an expression
/// distinguishes. Rules branch on residues mod 10 and mod 100, which all
/// repeat well inside this range.
const FORM_SAMPLE_LIMIT: u64 = 1031;

/// A parsed plural expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Expr {
    /// The count variable `n`.
    N,
    /// An integer literal.
    Literal(u64),
    /// Logical negation.
    Not(Box<Expr>),
    /// A binary operation.
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    /// `cond ? then : otherwise`.
    Ternary {
        cond: Box<Expr>,
        then: Box<Expr>,
        otherwise: Box<Expr>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BinaryOp {
    Or,
    And,
    Eq,
    Ne,
    Le,
    Ge,
    Lt,
    Gt,
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

impl Expr {
    /// Evaluate for a count, yielding the raw C-style value where
    /// booleans are 1 or 0.
    ///
    /// Division and remainder by zero evaluate to 0 instead of panicking,
    /// so every expression is total over all counts.
    fn eval(&self, n: u64) -> i64 {
        match self {
            Expr::N => n as i64,
            Expr::Literal(value) => *value as i64,
            Expr::Not(inner) => i64::from(inner.eval(n) == 0),
            Expr::Binary { op, lhs, rhs } => {
                let l = lhs.eval(n);
                let r = rhs.eval(n);
                match op {
                    BinaryOp::Or => i64::from(l != 0 || r != 0),
                    BinaryOp::And => i64::from(l != 0 && r != 0),
                    BinaryOp::Eq => i64::from(l == r),
                    BinaryOp::Ne => i64::from(l != r),
                    BinaryOp::Le => i64::from(l <= r),
                    BinaryOp::Ge => i64::from(l >= r),
                    BinaryOp::Lt => i64::from(l < r),
                    BinaryOp::Gt => i64::from(l > r),
                    BinaryOp::Add => l.wrapping_add(r),
                    BinaryOp::Sub => l.wrapping_sub(r),
                    BinaryOp::Mul => l.wrapping_mul(r),
                    BinaryOp::Div => l.checked_div(r).unwrap_or(0),
                    BinaryOp::Rem => l.checked_rem(r).unwrap_or(0),
                }
            }
            Expr::Ternary {
                cond,
                then,
                otherwise,
            } => {
                if cond.eval(n) != 0 {
                    then.eval(n)
                } else {
                    otherwise.eval(n)
                }
            }
        }
    }

    /// Plural-form index for a count. Negative results clamp to 0.
    pub(crate) fn index(&self, n: u64) -> usize {
        usize::try_from(self.eval(n)).unwrap_or(0)
    }

    /// Estimate how many distinct forms this expression can select by
    /// sampling counts up to [`FORM_SAMPLE_LIMIT`].
    pub(crate) fn count_forms(&self) -> usize {
        (0..=FORM_SAMPLE_LIMIT)
            .map(|n| self.index(n))
            .max()
            .map_or(1, |max| max + 1)
    }
}

/// Parse a bare plural expression, as served in a catalog's `plural` field.
pub(crate) fn parse(input: &str) -> Result<Expr, PluralRuleError> {
    run_parser(input, terminated(ternary, multispace0))
}

/// Parse a full `nplurals=N; plural=EXPR;` header, as found in gettext
/// catalog metadata.
pub(crate) fn parse_header(input: &str) -> Result<(usize, Expr), PluralRuleError> {
    run_parser(input, terminated(header, multispace0))
}

/// Drive a parser over the whole input, converting leftovers and parse
/// failures into a [`PluralRuleError`] with column information.
fn run_parser<'a, T>(
    input: &'a str,
    mut parser: impl Parser<&'a str, T, ErrMode<ContextError>>,
) -> Result<T, PluralRuleError> {
    let mut remaining = input;
    match parser.parse_next(&mut remaining) {
        Ok(parsed) => {
            if remaining.is_empty() {
                Ok(parsed)
            } else {
                Err(PluralRuleError {
                    column: column_of(input, remaining),
                    message: format!(
                        "unexpected character: '{}'",
                        remaining.chars().next().unwrap_or('?')
                    ),
                })
            }
        }
        Err(e) => Err(PluralRuleError {
            column: column_of(input, remaining),
            message: format!("parse error: {e}"),
        }),
    }
}

/// Calculate a 1-based column from original input and remaining input.
fn column_of(original: &str, remaining: &str) -> usize {
    original.len() - remaining.len() + 1
}

/// Parse `nplurals=N; plural=EXPR;` with optional whitespace throughout.
fn header(input: &mut &str) -> ModalResult<(usize, Expr)> {
    let _ = preceded(multispace0, "nplurals").parse_next(input)?;
    let _ = preceded(multispace0, '=').parse_next(input)?;
    let nplurals = preceded(multispace0, integer).parse_next(input)?;
    let _ = preceded(multispace0, ';').parse_next(input)?;
    let _ = preceded(multispace0, "plural").parse_next(input)?;
    let _ = preceded(multispace0, '=').parse_next(input)?;
    let expr = ternary.parse_next(input)?;
    let _ = opt(preceded(multispace0, ';')).parse_next(input)?;
    Ok((nplurals, expr))
}

/// Parse a ternary expression: `cond ? then : otherwise` (right-associative).
fn ternary(input: &mut &str) -> ModalResult<Expr> {
    let cond = or_expr.parse_next(input)?;
    let branches = opt((
        preceded(multispace0, '?'),
        ternary,
        preceded(multispace0, ':'),
        ternary,
    ))
    .parse_next(input)?;
    Ok(match branches {
        Some((_, then, _, otherwise)) => Expr::Ternary {
            cond: Box::new(cond),
            then: Box::new(then),
            otherwise: Box::new(otherwise),
        },
        None => cond,
    })
}

/// Fold a left-associative operator chain into nested binary nodes.
fn fold_binary(first: Expr, rest: Vec<(BinaryOp, Expr)>) -> Expr {
    rest.into_iter().fold(first, |lhs, (op, rhs)| Expr::Binary {
        op,
        lhs: Box::new(lhs),
        rhs: Box::new(rhs),
    })
}

fn or_expr(input: &mut &str) -> ModalResult<Expr> {
    let first = and_expr.parse_next(input)?;
    let rest: Vec<(BinaryOp, Expr)> = repeat(
        0..,
        (
            preceded(multispace0, "||".value(BinaryOp::Or)),
            and_expr,
        ),
    )
    .parse_next(input)?;
    Ok(fold_binary(first, rest))
}

fn and_expr(input: &mut &str) -> ModalResult<Expr> {
    let first = equality.parse_next(input)?;
    let rest: Vec<(BinaryOp, Expr)> = repeat(
        0..,
        (
            preceded(multispace0, "&&".value(BinaryOp::And)),
            equality,
        ),
    )
    .parse_next(input)?;
    Ok(fold_binary(first, rest))
}

fn equality(input: &mut &str) -> ModalResult<Expr> {
    let first = relational.parse_next(input)?;
    let rest: Vec<(BinaryOp, Expr)> = repeat(
        0..,
        (
            preceded(
                multispace0,
                alt(("==".value(BinaryOp::Eq), "!=".value(BinaryOp::Ne))),
            ),
            relational,
        ),
    )
    .parse_next(input)?;
    Ok(fold_binary(first, rest))
}

fn relational(input: &mut &str) -> ModalResult<Expr> {
    let first = additive.parse_next(input)?;
    let rest: Vec<(BinaryOp, Expr)> = repeat(
        0..,
        (
            preceded(
                multispace0,
                alt((
                    "<=".value(BinaryOp::Le),
                    ">=".value(BinaryOp::Ge),
                    "<".value(BinaryOp::Lt),
                    ">".value(BinaryOp::Gt),
                )),
            ),
            additive,
        ),
    )
    .parse_next(input)?;
    Ok(fold_binary(first, rest))
}

fn additive(input: &mut &str) -> ModalResult<Expr> {
    let first = multiplicative.parse_next(input)?;
    let rest: Vec<(BinaryOp, Expr)> = repeat(
        0..,
        (
            preceded(
                multispace0,
                alt(('+'.value(BinaryOp::Add), '-'.value(BinaryOp::Sub))),
            ),
            multiplicative,
        ),
    )
    .parse_next(input)?;
    Ok(fold_binary(first, rest))
}

fn multiplicative(input: &mut &str) -> ModalResult<Expr> {
    let first = unary.parse_next(input)?;
    let rest: Vec<(BinaryOp, Expr)> = repeat(
        0..,
        (
            preceded(
                multispace0,
                alt((
                    '*'.value(BinaryOp::Mul),
                    '/'.value(BinaryOp::Div),
                    '%'.value(BinaryOp::Rem),
                )),
            ),
            unary,
        ),
    )
    .parse_next(input)?;
    Ok(fold_binary(first, rest))
}

fn unary(input: &mut &str) -> ModalResult<Expr> {
    alt((
        preceded(preceded(multispace0, '!'), unary).map(|inner| Expr::Not(Box::new(inner))),
        primary,
    ))
    .parse_next(input)
}

fn primary(input: &mut &str) -> ModalResult<Expr> {
    preceded(
        multispace0,
        alt((
            delimited('(', ternary, preceded(multispace0, ')')),
            'n'.value(Expr::N),
            integer.map(Expr::Literal),
        )),
    )
    .parse_next(input)
}

fn integer<T: std::str::FromStr>(input: &mut &str) -> ModalResult<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    digit1.try_map(str::parse).parse_next(input)
}
