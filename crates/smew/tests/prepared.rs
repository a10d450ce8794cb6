//! Prepared statements, binding, and library metadata

mod common;

use common::setup_test;
use smew::{
    Error, LogicalType, Plan, Value, configuration_option_descriptions, version,
};

fn params_plan(names: &[&str]) -> Plan {
    Plan::Params {
        names: names.iter().map(|s| s.to_string()).collect(),
    }
}

#[test]
fn test_parameter_names_are_one_based() {
    let ctx = setup_test();
    let statement = ctx.connection.prepare(params_plan(&["first", "second"]));
    assert_eq!(statement.parameter_count(), 2);
    assert_eq!(statement.parameter_name(1).unwrap(), "first");
    assert_eq!(statement.parameter_name(2).unwrap(), "second");
    assert_eq!(
        statement.parameter_name(0).err(),
        Some(Error::ParameterOutOfRange(0))
    );
}

#[test]
fn test_bound_values_echo_back_typed() {
    let ctx = setup_test();
    let mut statement = ctx
        .connection
        .prepare(params_plan(&["b", "i", "d", "s", "n"]));
    statement.bind_boolean(1, true).unwrap();
    statement.bind_bigint(2, i64::MAX).unwrap();
    statement.bind_double(3, 0.5).unwrap();
    statement.bind_varchar(4, "🦆🦆🦆🦆🦆🦆").unwrap();
    statement.bind_null(5).unwrap();

    let mut result = statement.run().unwrap();
    assert_eq!(result.column_type(0).unwrap(), &LogicalType::Boolean);
    assert_eq!(result.column_type(1).unwrap(), &LogicalType::BigInt);
    assert_eq!(result.column_type(2).unwrap(), &LogicalType::Double);
    assert_eq!(result.column_type(3).unwrap(), &LogicalType::Varchar);
    // Null binds surface as INTEGER columns.
    assert_eq!(result.column_type(4).unwrap(), &LogicalType::Integer);

    assert_eq!(
        result.fetch_all_rows().unwrap(),
        vec![vec![
            Value::Boolean(true),
            Value::BigInt(i64::MAX),
            Value::Double(0.5),
            Value::Varchar("🦆🦆🦆🦆🦆🦆".into()),
            Value::Null
        ]]
    );
}

#[test]
fn test_structured_values_bind() {
    let ctx = setup_test();
    let mut statement = ctx.connection.prepare(params_plan(&["v"]));
    let value = Value::list(
        LogicalType::Integer,
        vec![Value::Integer(1), Value::Null, Value::Integer(3)],
    )
    .unwrap();
    statement.bind_value(1, value.clone()).unwrap();

    let mut result = statement.run().unwrap();
    assert_eq!(
        result.column_type(0).unwrap(),
        &LogicalType::list(LogicalType::Integer)
    );
    assert_eq!(result.fetch_all_rows().unwrap(), vec![vec![value]]);
}

#[test]
fn test_binds_persist_across_runs() {
    let ctx = setup_test();
    let mut statement = ctx.connection.prepare(params_plan(&["a"]));
    statement.bind_integer(1, 7).unwrap();
    for _ in 0..2 {
        let mut result = statement.run().unwrap();
        assert_eq!(
            result.fetch_all_rows().unwrap(),
            vec![vec![Value::Integer(7)]]
        );
    }
}

#[test]
fn test_unknown_named_parameter() {
    let ctx = setup_test();
    let mut statement = ctx.connection.prepare(params_plan(&["a"]));
    assert_eq!(
        statement.bind_named("b", Value::Null).err(),
        Some(Error::UnknownParameter("b".into()))
    );
}

#[test]
fn test_version_is_v_prefixed() {
    assert!(version().starts_with('v'));
}

#[test]
fn test_configuration_options_exposed() {
    let options = configuration_option_descriptions();
    assert!(!options.is_empty());
    let description = options.get("memory_limit").unwrap();
    assert!(description.contains("memory"));
}
