//! Translation of domain predicates into sea-orm conditions.

use sea_orm::{
    Condition,
    sea_query::{Expr, Func, LikeExpr, SimpleExpr},
};

use crate::domain::search::{Clause, Field, Predicate, Value};

const LIKE_ESCAPE: char = '\\';

/// ANDs every clause of `predicate`. `column` resolves a field to the SQL
/// column it is stored in, including columns of joined tables.
///
/// A predicate without clauses yields an empty `Condition::all()`, which
/// filters nothing.
pub fn build_condition<F, C>(predicate: &Predicate<F>, column: C) -> Condition
where
    F: Field,
    C: Fn(F) -> Expr,
{
    predicate
        .clauses()
        .iter()
        .fold(Condition::all(), |condition, clause| {
            condition.add(clause_expr(clause, &column))
        })
}

fn clause_expr<F, C>(clause: &Clause<F>, column: &C) -> SimpleExpr
where
    F: Field,
    C: Fn(F) -> Expr,
{
    let col = column(clause.field());

    match clause {
        Clause::Contains { needle, .. } => Expr::expr(Func::lower(col)).like(
            LikeExpr::new(format!("%{}%", escape_like(needle))).escape(LIKE_ESCAPE),
        ),
        Clause::Equals { value, .. } => col.eq(sql_value(value)),
        Clause::EqualsIgnoreCase { value, .. } => Expr::expr(Func::lower(col)).eq(value.clone()),
        Clause::Between { min, max, .. } => col.between(sql_value(min), sql_value(max)),
        Clause::AtLeast { bound, .. } => col.gte(sql_value(bound)),
        Clause::AtMost { bound, .. } => col.lte(sql_value(bound)),
    }
}

fn sql_value(value: &Value) -> sea_orm::Value {
    match value {
        Value::Text(v) => v.clone().into(),
        Value::Int(v) => (*v).into(),
        Value::Float(v) => (*v).into(),
        Value::Bool(v) => (*v).into(),
    }
}

/// Makes user input match literally inside a LIKE pattern.
fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}
