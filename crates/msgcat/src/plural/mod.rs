//! Plural rules: mapping a count to a plural-form index.
//!
//! Every locale distinguishes a fixed number of plural forms, and its
//! rule partitions counts into them. Rules come from three places: a
//! gettext-style arithmetic expression shipped alongside the catalog,
//! CLDR data for a language code, or a caller-supplied function.

mod cldr;
mod expr;

use crate::error::PluralRuleError;
use self::expr::{BinaryOp, Expr};

/// A locale's plural rule: a pure, total function from a count to a
/// plural-form index in `[0, nplurals)`.
///
/// # Example
///
/// ```
/// use msgcat::PluralRule;
///
/// // Croatian: three forms keyed on the last digits.
/// let rule = PluralRule::parse(
///     "n%10==1 && n%100!=11 ? 0 : n%10>=2 && n%10<=4 && (n%100<10 || n%100>=20) ? 1 : 2",
/// )
/// .unwrap();
///
/// assert_eq!(rule.nplurals(), 3);
/// assert_eq!(rule.index(1), 0);
/// assert_eq!(rule.index(3), 1);
/// assert_eq!(rule.index(5), 2);
/// ```
#[derive(Debug, Clone)]
pub struct PluralRule {
    nplurals: usize,
    kind: RuleKind,
}

#[derive(Debug, Clone)]
enum RuleKind {
    /// A parsed gettext-style expression over `n`.
    Expr(Expr),
    /// CLDR cardinal categories for a normalized language code.
    Cldr(&'static str),
    /// A caller-supplied rule function.
    Custom(fn(u64) -> usize),
}

impl Default for PluralRule {
    /// The Germanic two-form default, `n != 1`.
    fn default() -> Self {
        PluralRule {
            nplurals: 2,
            kind: RuleKind::Expr(Expr::Binary {
                op: BinaryOp::Ne,
                lhs: Box::new(Expr::N),
                rhs: Box::new(Expr::Literal(1)),
            }),
        }
    }
}

impl PluralRule {
    /// Parse a bare plural expression, e.g. `(n != 1)`.
    ///
    /// This is the string a catalog ships in its `plural` field. The
    /// number of forms is inferred by sampling the expression over a
    /// range of counts, since the bare expression does not declare it.
    pub fn parse(expression: &str) -> Result<Self, PluralRuleError> {
        let expr = expr::parse(expression)?;
        let nplurals = expr.count_forms();
        Ok(PluralRule {
            nplurals,
            kind: RuleKind::Expr(expr),
        })
    }

    /// Parse a full gettext header, e.g. `nplurals=2; plural=(n != 1);`.
    ///
    /// Unlike [`PluralRule::parse`], the form count is taken from the
    /// declared `nplurals` rather than inferred.
    pub fn parse_forms(header: &str) -> Result<Self, PluralRuleError> {
        let (nplurals, expr) = expr::parse_header(header)?;
        Ok(PluralRule {
            nplurals,
            kind: RuleKind::Expr(expr),
        })
    }

    /// Build a rule from CLDR cardinal data for a language code.
    ///
    /// Unrecognized codes fall back to English. Region subtags are
    /// ignored ("pt-br" resolves as "pt").
    pub fn for_language(lang: &str) -> Self {
        let lang = cldr::normalize_lang(lang);
        PluralRule {
            nplurals: cldr::nplurals(lang),
            kind: RuleKind::Cldr(lang),
        }
    }

    /// Build a rule from an arbitrary pure function.
    ///
    /// The function must return indices below `nplurals`; out-of-range
    /// results are clamped.
    pub fn from_fn(nplurals: usize, rule: fn(u64) -> usize) -> Self {
        PluralRule {
            nplurals,
            kind: RuleKind::Custom(rule),
        }
    }

    /// Number of plural forms this rule distinguishes.
    pub fn nplurals(&self) -> usize {
        self.nplurals
    }

    /// Map a count to a plural-form index in `[0, nplurals)`.
    pub fn index(&self, n: u64) -> usize {
        let raw = match &self.kind {
            RuleKind::Expr(expr) => expr.index(n),
            RuleKind::Cldr(lang) => cldr::index(lang, n),
            RuleKind::Custom(rule) => rule(n),
        };
        raw.min(self.nplurals.saturating_sub(1))
    }
}
