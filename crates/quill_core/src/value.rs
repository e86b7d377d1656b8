//! Values held in child slots.
//!
//! A [`Value`] is whatever a container item, a wrapper's before/after, or a
//! conditional branch can hold: nothing, a plain scalar, a node, or a nested
//! sequence that containers splice in at render time.

use std::borrow::Cow;

use chrono::{NaiveDateTime, TimeDelta};
use uuid::Uuid;

use crate::layout::Layout;
use crate::node::Node;

/// A plain value formatted by the writer's format strategy.
#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    DateTime(NaiveDateTime),
    Duration(TimeDelta),
    Uuid(Uuid),
}

impl Scalar {
    /// Whether this scalar renders to visible text.
    #[inline]
    pub fn has_render_content(&self) -> bool {
        match self {
            Scalar::Str(s) => !s.is_empty(),
            _ => true,
        }
    }

    /// Convert to a boolean, or `None` when the kind has no boolean meaning.
    ///
    /// | kind | result |
    /// |------|--------|
    /// | `Bool` | the value |
    /// | `Int` | non-zero |
    /// | `Float` | non-zero (NaN is non-zero) |
    /// | `Str` | trimmed, case-insensitive: `""` and `"false"` are false, anything else true |
    /// | `DateTime`, `Duration`, `Uuid` | `None` |
    pub fn to_bool(&self) -> Option<bool> {
        match self {
            Scalar::Bool(b) => Some(*b),
            Scalar::Int(i) => Some(*i != 0),
            Scalar::Float(f) => Some(f.is_nan() || f.abs() > 0.0),
            Scalar::Str(s) => {
                let s = s.trim();
                Some(!(s.is_empty() || s.eq_ignore_ascii_case("false")))
            }
            Scalar::DateTime(_) | Scalar::Duration(_) | Scalar::Uuid(_) => None,
        }
    }
}

/// Anything that can sit in a child slot.
#[derive(Debug, Default)]
pub enum Value {
    /// Absent. Skipped everywhere, contributes no separator.
    #[default]
    Null,

    Scalar(Scalar),

    Node(Box<dyn Node>),

    /// Spliced into the surrounding container's render list.
    Seq(Vec<Value>),
}

impl Value {
    /// Wrap a node.
    pub fn node(node: impl Node) -> Self {
        Value::Node(Box::new(node))
    }

    /// Build a sequence from anything convertible.
    pub fn seq<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Value::Seq(items.into_iter().map(Into::into).collect())
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Whether writing this value would produce any text.
    ///
    /// Null and the empty string never do; other scalars always do; nodes
    /// answer for themselves; a sequence does if any element does.
    pub fn has_render_content(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Scalar(scalar) => scalar.has_render_content(),
            Value::Node(node) => node.has_render_content(),
            Value::Seq(items) => items.iter().any(Value::has_render_content),
        }
    }

    /// Truthiness as seen by a conditional node.
    ///
    /// Nodes decide through [`Node::condition_result`]; scalars go through
    /// [`Scalar::to_bool`], with unconvertible kinds counting as false.
    pub fn condition_result(&self) -> bool {
        match self {
            Value::Null | Value::Seq(_) => false,
            Value::Scalar(scalar) => scalar.to_bool().unwrap_or(false),
            Value::Node(node) => node.condition_result(),
        }
    }

    /// Effective layout; plain values always sit inline.
    pub fn layout(&self) -> Layout {
        match self {
            Value::Node(node) => node.layout(),
            _ => Layout::Inline,
        }
    }

    /// Suggest a layout if this is a node. First writer wins.
    pub fn try_set_layout(&self, layout: Layout) {
        if let Value::Node(node) = self {
            node.try_set_layout(layout);
        }
    }

    pub fn as_node(&self) -> Option<&dyn Node> {
        match self {
            Value::Node(node) => Some(node.as_ref()),
            _ => None,
        }
    }

    /// Downcast a node value to a concrete node type.
    pub fn downcast_ref<T: Node>(&self) -> Option<&T> {
        self.as_node()?.as_any().downcast_ref::<T>()
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Scalar(Scalar::Str(s)) => Some(s),
            _ => None,
        }
    }
}

impl From<Scalar> for Value {
    fn from(scalar: Scalar) -> Self {
        Value::Scalar(scalar)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Scalar(Scalar::Str(s.to_owned()))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Scalar(Scalar::Str(s))
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::Scalar(Scalar::Str(s.clone()))
    }
}

impl From<Cow<'_, str>> for Value {
    fn from(s: Cow<'_, str>) -> Self {
        Value::Scalar(Scalar::Str(s.into_owned()))
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::Scalar(Scalar::Str(c.to_string()))
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(i: $ty) -> Self {
                    Value::Scalar(Scalar::Int(i64::from(i)))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Value::Scalar(Scalar::Float(f64::from(f)))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Scalar(Scalar::Float(f))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Scalar(Scalar::Bool(b))
    }
}

impl From<NaiveDateTime> for Value {
    fn from(dt: NaiveDateTime) -> Self {
        Value::Scalar(Scalar::DateTime(dt))
    }
}

impl From<TimeDelta> for Value {
    fn from(d: TimeDelta) -> Self {
        Value::Scalar(Scalar::Duration(d))
    }
}

impl From<Uuid> for Value {
    fn from(u: Uuid) -> Self {
        Value::Scalar(Scalar::Uuid(u))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Seq(items.into_iter().map(Into::into).collect())
    }
}

impl<N: Node> From<N> for Value {
    fn from(node: N) -> Self {
        Value::Node(Box::new(node))
    }
}

/// Build a `Vec<Value>` from heterogeneous items.
///
/// ```
/// use quill_core::{values, Value};
///
/// let items: Vec<Value> = values!["x", 1, true, None::<&str>];
/// assert_eq!(items.len(), 4);
/// assert!(items[3].is_null());
/// ```
#[macro_export]
macro_rules! values {
    () => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    ($($item:expr),+ $(,)?) => {
        ::std::vec![$($crate::Value::from($item)),+]
    };
}
