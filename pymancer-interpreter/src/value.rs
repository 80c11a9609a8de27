//! Runtime value representation for the PyMancer interpreter.
//!
//! Strings, integers and booleans are plain data. Lists are shared handles:
//! assignment binds another name to the same list, and `append` through any
//! of those names is visible through all of them.

use std::cell::RefCell;
use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

/// A shared, mutable list
pub type ListRef = Rc<RefCell<Vec<Value>>>;

/// Runtime values in the PyMancer interpreter
#[derive(Clone)]
pub enum Value {
    /// UTF-8 string, stored without its quotes
    String(String),
    /// 64-bit signed integer
    Integer(i64),
    /// Boolean value
    Boolean(bool),
    /// Ordered list of values
    List(ListRef),
}

impl Value {
    /// Create a new list that no other value shares
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Rc::new(RefCell::new(items)))
    }

    /// Get the kind name of this value, as used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::String(_) => "String",
            Value::Integer(_) => "Integer",
            Value::Boolean(_) => "Boolean",
            Value::List(_) => "List",
        }
    }

    pub fn as_list(&self) -> Option<&ListRef> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Convert to the text `print` writes
    ///
    /// Strings print unquoted at every depth, so `['a', 1]` prints as `[a, 1]`.
    /// A list that contains itself prints the inner occurrence as `[...]`.
    pub fn to_string_repr(&self) -> String {
        let mut out = String::new();
        // Lists currently open in `out`
        let mut open: HashSet<*const RefCell<Vec<Value>>> = HashSet::new();
        let mut pending = vec![Piece::Value(self.clone())];

        while let Some(piece) = pending.pop() {
            match piece {
                Piece::Separator => out.push_str(", "),
                Piece::Close(list) => {
                    out.push(']');
                    open.remove(&list);
                }
                Piece::Value(Value::String(s)) => out.push_str(&s),
                Piece::Value(Value::Integer(n)) => out.push_str(&n.to_string()),
                Piece::Value(Value::Boolean(true)) => out.push_str("True"),
                Piece::Value(Value::Boolean(false)) => out.push_str("False"),
                Piece::Value(Value::List(items)) => {
                    let list = Rc::as_ptr(&items);
                    if !open.insert(list) {
                        out.push_str("[...]");
                        continue;
                    }
                    out.push('[');
                    pending.push(Piece::Close(list));
                    for (index, item) in items.borrow().iter().enumerate().rev() {
                        pending.push(Piece::Value(item.clone()));
                        if index > 0 {
                            pending.push(Piece::Separator);
                        }
                    }
                }
            }
        }

        out
    }
}

enum Piece {
    Value(Value),
    Separator,
    Close(*const RefCell<Vec<Value>>),
}

/// Structural equality without coercion
///
/// `True` never equals `1`. Lists are equal when they have equal items, and a
/// pair of lists already being compared is assumed equal, so cyclic lists
/// compare without looping.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        let mut assumed: HashSet<(*const RefCell<Vec<Value>>, *const RefCell<Vec<Value>>)> =
            HashSet::new();
        let mut pending = vec![(self.clone(), other.clone())];

        while let Some(pair) = pending.pop() {
            match pair {
                (Value::String(a), Value::String(b)) if a == b => {}
                (Value::Integer(a), Value::Integer(b)) if a == b => {}
                (Value::Boolean(a), Value::Boolean(b)) if a == b => {}
                (Value::List(a), Value::List(b)) => {
                    if Rc::ptr_eq(&a, &b) || !assumed.insert((Rc::as_ptr(&a), Rc::as_ptr(&b))) {
                        continue;
                    }
                    let (a, b) = (a.borrow(), b.borrow());
                    if a.len() != b.len() {
                        return false;
                    }
                    pending.extend(a.iter().cloned().zip(b.iter().cloned()));
                }
                _ => return false,
            }
        }

        true
    }
}

impl Eq for Value {}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "String({s:?})"),
            Value::Integer(n) => write!(f, "Integer({n})"),
            Value::Boolean(b) => write!(f, "Boolean({b})"),
            Value::List(_) => write!(f, "List({})", self.to_string_repr()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_repr())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::list(items)
    }
}
