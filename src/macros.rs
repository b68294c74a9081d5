#[macro_export]
macro_rules! nosj {
    // Handle empty map
    ({}) => {
        $crate::Value::Map($crate::NosjMap::new())
    };

    // Handle non-empty map
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut map = $crate::NosjMap::new();
        $(
            map.insert($key.to_string(), $crate::nosj!($value));
        )*
        $crate::Value::Map(map)
    }};

    // Fallback for integer and string expressions
    ($other:expr) => {
        $crate::Value::from($other)
    };
}

#[cfg(test)]
mod tests {
    use crate::{NosjMap, Value};

    #[test]
    fn test_nosj_macro_primitives() {
        assert_eq!(nosj!(42), Value::Integer(42));
        assert_eq!(nosj!("hello"), Value::Text("hello".to_string()));
    }

    #[test]
    fn test_nosj_macro_maps() {
        assert_eq!(nosj!({}), Value::Map(NosjMap::new()));

        let obj = nosj!({
            "name": "Alice",
            "age": 30
        });

        match obj {
            Value::Map(map) => {
                assert_eq!(map.len(), 2);
                assert_eq!(map.get("name"), Some(&Value::Text("Alice".to_string())));
                assert_eq!(map.get("age"), Some(&Value::Integer(30)));
            }
            _ => panic!("Expected map"),
        }
    }

    #[test]
    fn test_nosj_macro_nested() {
        let obj = nosj!({
            "outer": { "inner": 1 }
        });

        let inner = obj
            .as_map()
            .and_then(|m| m.get("outer"))
            .and_then(Value::as_map)
            .unwrap();
        assert_eq!(inner.get("inner"), Some(&Value::Integer(1)));
    }
}
