//! Employee scenario tests: the full descriptor surface on one template.

use attra_tests::prelude::*;

mod accessors {
    use super::*;

    #[test]
    fn test_default_value_returned_before_any_write() {
        let mut employee = employee_template().spawn();
        assert_eq!(employee.get("name"), Value::String("Unnamed".into()));
    }

    #[test]
    fn test_set_then_get_returns_written_value() {
        let mut employee = employee_template().spawn();
        employee.set("name", Value::from("Bob"));
        assert_eq!(employee.get("name"), Value::String("Bob".into()));
    }

    #[test]
    fn test_validator_rejects_short_name() {
        let mut employee = employee_template().spawn();
        employee.set("name", Value::from("Bo"));
        assert_eq!(employee.get("name"), Value::String("Unnamed".into()));
    }

    #[test]
    fn test_unvalidated_attribute_stores_as_is() {
        let mut employee = employee_template().spawn();
        employee.set("hobby", Value::from("Table tennis"));
        assert_eq!(employee.get("hobby"), Value::String("Table tennis".into()));
    }

    #[test]
    fn test_getter_transform_formats_salary() {
        let mut employee = employee_template().spawn();
        employee.set("salary", Value::Int(1000));
        assert_eq!(employee.get("salary"), Value::String("$1000".into()));
    }

    #[test]
    fn test_setter_transform_normalizes_birthdate() {
        let mut employee = employee_template().spawn();
        employee.set("birthdate", Value::Int(BIRTHDATE_1988));
        assert_eq!(employee.get("birthdate"), Value::Timestamp(BIRTHDATE_1988));
    }
}

mod computed_age {
    use super::*;

    #[test]
    fn test_value_fn_computes_age_from_birthdate() {
        let mut employee = employee_template().spawn();
        employee.set("birthdate", Value::Int(BIRTHDATE_1988));
        assert_eq!(employee.get("age"), Value::Int(22));
    }

    #[test]
    fn test_read_only_age_ignores_writes() {
        let mut employee = employee_template().spawn();
        employee.set("birthdate", Value::Int(BIRTHDATE_1988));
        employee.set("age", Value::Int(43));
        assert_eq!(employee.get("age"), Value::Int(22));
    }

    #[test]
    fn test_age_stable_across_repeated_reads() {
        let mut employee = employee_template().spawn();
        employee.set("birthdate", Value::Int(BIRTHDATE_1988));
        assert_eq!(employee.get("age"), Value::Int(22));
        // A later birthdate change must not recompute: the lazy default ran.
        employee.set("birthdate", Value::Int(EPOCH));
        assert_eq!(employee.get("age"), Value::Int(22));
    }
}

mod bulk_surface {
    use super::*;

    #[test]
    fn test_set_attributes_applies_each_entry() {
        let mut employee = employee_template().spawn();
        employee.set_attributes(attrs! {
            "name" => "Sam",
            "birthdate" => EPOCH,
        });
        assert_eq!(employee.get("name"), Value::String("Sam".into()));
        assert_eq!(employee.get("birthdate"), Value::Timestamp(EPOCH));
    }

    #[test]
    fn test_get_attributes_snapshots_declared_names_in_order() {
        let mut employee = employee_template().spawn();
        employee.set_attributes(attrs! {
            "name" => "Sam",
            "birthdate" => BIRTHDATE_1988,
            "salary" => 1000i64,
            "hobby" => "Table tennis",
        });

        assert_eq!(
            employee.get_attributes(),
            vec![
                ("name".to_string(), Value::String("Sam".into())),
                ("birthdate".to_string(), Value::Timestamp(BIRTHDATE_1988)),
                ("age".to_string(), Value::Int(22)),
                ("salary".to_string(), Value::String("$1000".into())),
                ("hobby".to_string(), Value::String("Table tennis".into())),
            ]
        );
    }
}

mod undeclared_names {
    use super::*;

    #[test]
    fn test_fallback_getter_handles_undeclared_name() {
        let mut employee = employee_template().spawn();
        employee.set("no-existing-attribute", Value::Int(1));
        // The fixture fallback echoes the requested name.
        assert_eq!(
            employee.get("no-existing-attribute"),
            Value::String("no-existing-attribute".into())
        );
    }

    #[test]
    fn test_fallback_hooks_are_not_enumerable() {
        let mut employee = employee_template().spawn();
        let names: Vec<String> = employee
            .get_attributes()
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names, vec!["name", "birthdate", "age", "salary", "hobby"]);
    }
}
