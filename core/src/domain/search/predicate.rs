use std::fmt::Debug;

/// A searchable column of an entity.
///
/// Implementors are small `Copy` enums, one variant per column a criteria can
/// filter on. A field that lives on a related table reports it through
/// [`Field::traverses_relation`] so store adapters know a join is needed.
pub trait Field: Copy + Eq + Debug + Send + Sync + 'static {
    fn traverses_relation(&self) -> bool {
        false
    }
}

/// Typed comparison operand carried by a clause.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl Value {
    fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(v) => Some(*v as f64),
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value.into())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

/// A single filter condition on one field.
#[derive(Debug, Clone, PartialEq)]
pub enum Clause<F> {
    /// Case-insensitive substring match. `needle` is stored lower-cased.
    Contains { field: F, needle: String },
    /// Exact equality, no case folding.
    Equals { field: F, value: Value },
    /// Whole-value equality after lower-casing both sides. `value` is stored
    /// lower-cased.
    EqualsIgnoreCase { field: F, value: String },
    /// Inclusive on both ends.
    Between { field: F, min: Value, max: Value },
    AtLeast { field: F, bound: Value },
    AtMost { field: F, bound: Value },
}

impl<F: Field> Clause<F> {
    pub fn field(&self) -> F {
        match self {
            Clause::Contains { field, .. }
            | Clause::Equals { field, .. }
            | Clause::EqualsIgnoreCase { field, .. }
            | Clause::Between { field, .. }
            | Clause::AtLeast { field, .. }
            | Clause::AtMost { field, .. } => *field,
        }
    }

    pub fn matches<R: Record<Field = F>>(&self, record: &R) -> bool {
        let actual = record.value(self.field());

        match self {
            Clause::Contains { needle, .. } => match actual {
                FieldValue::Text(text) => text.to_lowercase().contains(needle.as_str()),
                _ => false,
            },
            Clause::Equals { value, .. } => actual.equals(value),
            Clause::EqualsIgnoreCase { value, .. } => match actual {
                FieldValue::Text(text) => text.to_lowercase() == *value,
                _ => false,
            },
            Clause::Between { min, max, .. } => {
                match (actual.as_f64(), min.as_f64(), max.as_f64()) {
                    (Some(v), Some(min), Some(max)) => min <= v && v <= max,
                    _ => false,
                }
            }
            Clause::AtLeast { bound, .. } => match (actual.as_f64(), bound.as_f64()) {
                (Some(v), Some(bound)) => v >= bound,
                _ => false,
            },
            Clause::AtMost { bound, .. } => match (actual.as_f64(), bound.as_f64()) {
                (Some(v), Some(bound)) => v <= bound,
                _ => false,
            },
        }
    }
}

/// Borrowed view of one column of a record, used for in-process evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Int(i64),
    Float(f64),
    Bool(bool),
    /// The column sits behind a relation that is not set.
    Absent,
}

impl FieldValue<'_> {
    fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Int(v) => Some(*v as f64),
            FieldValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    fn equals(&self, value: &Value) -> bool {
        match (self, value) {
            (FieldValue::Text(a), Value::Text(b)) => *a == b.as_str(),
            (FieldValue::Bool(a), Value::Bool(b)) => a == b,
            (FieldValue::Int(a), Value::Int(b)) => a == b,
            (FieldValue::Float(_) | FieldValue::Int(_), Value::Float(_) | Value::Int(_)) => {
                self.as_f64() == value.as_f64()
            }
            _ => false,
        }
    }
}

/// An entity that can expose its searchable columns.
pub trait Record {
    type Field: Field;

    fn value(&self, field: Self::Field) -> FieldValue<'_>;
}

/// Conjunction of clauses. No clause at all matches every row.
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate<F> {
    clauses: Vec<Clause<F>>,
}

impl<F: Field> Predicate<F> {
    pub fn match_all() -> Self {
        Self {
            clauses: Vec::new(),
        }
    }

    /// Keeps the present fragments, in iteration order.
    pub fn all_of<I>(fragments: I) -> Self
    where
        I: IntoIterator<Item = Option<Clause<F>>>,
    {
        fragments
            .into_iter()
            .flatten()
            .fold(Self::match_all(), |predicate, clause| predicate.with(clause))
    }

    pub fn with(mut self, clause: Clause<F>) -> Self {
        self.clauses.push(clause);
        self
    }

    pub fn and(mut self, other: Predicate<F>) -> Self {
        self.clauses.extend(other.clauses);
        self
    }

    pub fn clauses(&self) -> &[Clause<F>] {
        &self.clauses
    }

    pub fn is_match_all(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn requires_join(&self) -> bool {
        self.clauses
            .iter()
            .any(|clause| clause.field().traverses_relation())
    }

    pub fn matches<R: Record<Field = F>>(&self, record: &R) -> bool {
        self.clauses.iter().all(|clause| clause.matches(record))
    }
}

impl<F: Field> Default for Predicate<F> {
    fn default() -> Self {
        Self::match_all()
    }
}
