use super::*;
use crate::errors::EvalErrorKind;
use crate::EvalResult;

mod conversions {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn to_number() {
        assert_eq!(Value::Null.to_number(), Ok(0.0));
        assert_eq!(Value::Bool(true).to_number(), Ok(1.0));
        assert_eq!(Value::from(" 2.5 ").to_number(), Ok(2.5));
        assert_eq!(
            Value::array(vec![Value::Null, Value::Null]).to_number(),
            Ok(2.0)
        );
    }

    #[test]
    fn unparsable_string_is_not_a_number() {
        let err = Value::from("abc").to_number().err();
        assert_eq!(
            err.map(|e| e.kind),
            Some(EvalErrorKind::NotANumber {
                found: "string \"abc\"".to_string()
            })
        );
    }

    #[test]
    fn to_boolean() {
        assert!(!Value::Null.to_boolean());
        assert!(!Value::Number(0.0).to_boolean());
        assert!(Value::Number(-1.0).to_boolean());
        assert!(!Value::from("").to_boolean());
        assert!(Value::from("x").to_boolean());
        assert!(!Value::array(Vec::new()).to_boolean());
    }

    #[test]
    fn to_text() {
        assert_eq!(Value::Null.to_text(), "null");
        assert_eq!(Value::Bool(false).to_text(), "false");
        assert_eq!(Value::Number(3.0).to_text(), "3");
        assert_eq!(Value::Number(2.5).to_text(), "2.5");
        assert_eq!(Value::Number(-4.0).to_text(), "-4");
        assert_eq!(
            Value::array(vec![Value::Number(1.0), Value::from("a"), Value::Null]).to_text(),
            "[1, a, null]"
        );
    }

    #[test]
    fn self_containing_array_prints_ellipsis() {
        let outer = Value::array(vec![Value::Number(1.0)]);
        if let Value::Array(items) = &outer {
            items.set(items.len(), outer.clone());
        }
        assert_eq!(outer.to_text(), "[1, [...]]");
    }

    #[test]
    fn function_text() {
        let native = Value::native("epoch", 0, |_| Ok(Value::Null));
        assert_eq!(native.to_text(), "<native function epoch>");
        assert_eq!(native.type_name(), "function");
    }
}

mod equality {
    use super::*;

    #[test]
    fn null_equals_only_null() {
        assert!(Value::Null.equals(&Value::Null));
        assert!(!Value::Null.equals(&Value::Number(0.0)));
        assert!(!Value::from("").equals(&Value::Null));
    }

    #[test]
    fn primitives_compare_by_value_without_coercion() {
        assert!(Value::Number(1.0).equals(&Value::Number(1.0)));
        assert!(Value::from("ab").equals(&Value::from("ab")));
        assert!(!Value::Number(1.0).equals(&Value::Bool(true)));
        assert!(!Value::Number(1.0).equals(&Value::from("1")));
    }

    #[test]
    fn heap_values_compare_by_identity() {
        let a = Value::array(vec![Value::Number(1.0)]);
        let b = Value::array(vec![Value::Number(1.0)]);
        assert!(a.equals(&a.clone()));
        assert!(!a.equals(&b));
    }
}

mod index_access {
    use super::*;
    use pretty_assertions::assert_eq;

    fn index(value: &Value, i: f64) -> EvalResult {
        match value.as_indexable() {
            Some(target) => target.index_get(&Value::Number(i)),
            None => Err(EvalError::new("not indexable")),
        }
    }

    #[test]
    fn string_index_returns_one_character_string() {
        let s = Value::from("héllo");
        assert_eq!(index(&s, 1.0), Ok(Value::from("é")));
        assert_eq!(
            index(&s, 5.0).map_err(|e| e.kind),
            Err(EvalErrorKind::IndexOutOfBounds { index: 5, len: 5 })
        );
    }

    #[test]
    fn strings_are_read_only() {
        let s = Value::from("abc");
        let result = s
            .as_indexable()
            .map(|t| t.index_set(&Value::Number(0.0), Value::from("z")));
        assert_eq!(
            result.map(|r| r.map_err(|e| e.kind)),
            Some(Err(EvalErrorKind::ReadOnly {
                type_name: "string"
            }))
        );
    }

    #[test]
    fn array_read_past_end_is_null() {
        let arr = Value::array(vec![Value::Number(1.0)]);
        assert_eq!(index(&arr, 0.0), Ok(Value::Number(1.0)));
        assert_eq!(index(&arr, 10.0), Ok(Value::Null));
        assert!(index(&arr, -1.0).is_err());
    }

    #[test]
    fn array_write_pads_with_null() {
        let arr = Value::array(Vec::new());
        let written = arr
            .as_indexable()
            .map(|t| t.index_set(&Value::Number(2.0), Value::from("x")));
        assert_eq!(written, Some(Ok(())));
        let Value::Array(items) = &arr else {
            panic!("expected array");
        };
        assert_eq!(
            items.to_vec(),
            vec![Value::Null, Value::Null, Value::from("x")]
        );
    }

    #[test]
    fn oversized_write_is_an_error_not_an_allocation() {
        let arr = Value::array(vec![Value::Number(1.0)]);
        let written = arr.as_indexable().map(|t| {
            t.index_set(&Value::Number(1e18), Value::Null)
                .map_err(|e| e.kind)
        });
        assert_eq!(
            written,
            Some(Err(EvalErrorKind::IndexOutOfBounds {
                index: 1_000_000_000_000_000_000,
                len: 1
            }))
        );
        let Value::Array(items) = &arr else {
            panic!("expected array");
        };
        assert_eq!(items.to_vec(), vec![Value::Number(1.0)]);
    }

    #[test]
    fn write_at_the_growth_limit_is_rejected() {
        let arr = ArrayValue::new(Vec::new());
        assert!(!arr.set(ArrayValue::MAX_LEN, Value::Null));
        assert!(arr.is_empty());
        assert!(arr.set(3, Value::Bool(true)));
        assert_eq!(arr.len(), 4);
    }

    #[test]
    fn index_must_be_a_number() {
        let arr = Value::array(vec![Value::Number(1.0)]);
        let result = arr
            .as_indexable()
            .map(|t| t.index_get(&Value::from("0")).map_err(|e| e.kind));
        assert_eq!(
            result,
            Some(Err(EvalErrorKind::InvalidIndexType {
                type_name: "string"
            }))
        );
    }

    #[test]
    fn numbers_are_not_indexable() {
        assert!(Value::Number(1.0).as_indexable().is_none());
        assert!(Value::Null.as_dot_accessible().is_none());
        assert!(Value::from("f").as_callable().is_none());
    }
}

mod dot_access {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn string_length_is_the_only_field() {
        let s = Value::from("abc");
        let target = s.as_dot_accessible();
        assert_eq!(
            target.map(|t| t.field_get("length")),
            Some(Ok(Value::Number(3.0)))
        );
        assert!(target.is_some_and(|t| t.field_get("size").is_err()));
    }

    #[test]
    fn instance_fields_are_open() {
        let instance = Value::Instance(Rc::new(InstanceValue::new("Point")));
        let target = instance.as_dot_accessible();
        assert_eq!(
            target.map(|t| t.field_set("x", Value::Number(1.0))),
            Some(Ok(()))
        );
        assert_eq!(
            target.map(|t| t.field_get("x")),
            Some(Ok(Value::Number(1.0)))
        );
        let missing = target.map(|t| t.field_get("y").map_err(|e| e.notes));
        assert_eq!(
            missing,
            Some(Err(vec!["`Point` defines no field `y`".to_string()]))
        );
    }
}
