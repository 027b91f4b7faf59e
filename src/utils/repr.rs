//! Script-style literal rendering of demo values.
//!
//! Containers render their elements with [`PyRepr::repr`], so strings inside a
//! list show up quoted (`['a', 'b']`) while [`PyRepr::to_display`] prints a
//! top-level string bare.

use indexmap::IndexMap;

pub trait PyRepr {
    fn repr(&self) -> String;

    /// Form used when the value is printed on its own.
    fn to_display(&self) -> String {
        self.repr()
    }
}

fn escape_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\n' => result.push_str("\\n"),
            '\t' => result.push_str("\\t"),
            '\r' => result.push_str("\\r"),
            '\\' => result.push_str("\\\\"),
            '\'' => result.push_str("\\'"),
            c => result.push(c),
        }
    }
    result
}

impl PyRepr for str {
    fn repr(&self) -> String {
        format!("'{}'", escape_string(self))
    }

    fn to_display(&self) -> String {
        self.to_string()
    }
}

impl PyRepr for String {
    fn repr(&self) -> String {
        self.as_str().repr()
    }

    fn to_display(&self) -> String {
        self.clone()
    }
}

impl PyRepr for bool {
    fn repr(&self) -> String {
        let literal = if *self { "True" } else { "False" };
        literal.to_string()
    }
}

impl PyRepr for f64 {
    fn repr(&self) -> String {
        if self.is_nan() {
            "nan".to_string()
        } else if self.is_infinite() {
            let literal = if *self > 0.0 { "inf" } else { "-inf" };
            literal.to_string()
        } else {
            // Debug keeps the trailing ".0" on integral values.
            format!("{:?}", self)
        }
    }
}

macro_rules! int_repr {
    ($($t:ty),*) => {
        $(
            impl PyRepr for $t {
                fn repr(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

int_repr!(i32, i64, u32, u64, usize);

impl<T: PyRepr + ?Sized> PyRepr for &T {
    fn repr(&self) -> String {
        (**self).repr()
    }

    fn to_display(&self) -> String {
        (**self).to_display()
    }
}

impl<T: PyRepr> PyRepr for [T] {
    fn repr(&self) -> String {
        let items: Vec<String> = self.iter().map(PyRepr::repr).collect();
        format!("[{}]", items.join(", "))
    }
}

impl<T: PyRepr> PyRepr for Vec<T> {
    fn repr(&self) -> String {
        self.as_slice().repr()
    }
}

impl<A: PyRepr, B: PyRepr> PyRepr for (A, B) {
    fn repr(&self) -> String {
        format!("({}, {})", self.0.repr(), self.1.repr())
    }
}

impl<K: PyRepr, V: PyRepr> PyRepr for IndexMap<K, V> {
    fn repr(&self) -> String {
        let entries: Vec<String> = self
            .iter()
            .map(|(k, v)| format!("{}: {}", k.repr(), v.repr()))
            .collect();
        format!("{{{}}}", entries.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalars() {
        assert_eq!(true.repr(), "True");
        assert_eq!(false.to_display(), "False");
        assert_eq!(0.0f64.repr(), "0.0");
        assert_eq!(999.99f64.repr(), "999.99");
        assert_eq!(42i64.repr(), "42");
    }

    #[test]
    fn test_strings_quoted_only_inside_containers() {
        assert_eq!("localhost".to_display(), "localhost");
        assert_eq!("localhost".repr(), "'localhost'");
        assert_eq!("it's".repr(), "'it\\'s'");
        assert_eq!(String::new().repr(), "''");
    }

    #[test]
    fn test_containers() {
        assert_eq!(vec![2i64, 4, 6].repr(), "[2, 4, 6]");
        assert_eq!(Vec::<i64>::new().repr(), "[]");
        assert_eq!(
            vec![("apple".to_string(), 1i64), ("apple".to_string(), 3)].repr(),
            "[('apple', 1), ('apple', 3)]"
        );

        let mut cubes = IndexMap::new();
        cubes.insert(0i64, 0i64);
        cubes.insert(2, 8);
        cubes.insert(4, 64);
        assert_eq!(cubes.repr(), "{0: 0, 2: 8, 4: 64}");
    }
}
