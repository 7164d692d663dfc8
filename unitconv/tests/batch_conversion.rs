use unitconv::*;

#[test]
fn test_batch_fahrenheit_to_celsius() {
    let engine = Engine::new();
    let batch = engine
        .convert_batch(&[32.0, 50.0, 100.0], "fahrenheit", "celsius")
        .unwrap();

    assert_eq!(batch.results(), vec![0.0, 10.0, 37.777778]);
    assert_eq!(batch.count, 3);
    assert_eq!(batch.category, Category::Temperature);
    assert_eq!(batch.from, "fahrenheit");
    assert_eq!(batch.to, "celsius");
}

#[test]
fn test_batch_from_delimited_string() {
    let engine = Engine::new();
    let batch = engine.convert_batch_str("32, 50 ,100", "F", "C").unwrap();

    let values: Vec<f64> = batch.conversions.iter().map(|c| c.value).collect();
    assert_eq!(values, vec![32.0, 50.0, 100.0]);
    assert_eq!(batch.results(), vec![0.0, 10.0, 37.777778]);
}

#[test]
fn test_batch_preserves_input_order() {
    let engine = Engine::new();
    let batch = engine.convert_batch_str("3,1,2,1", "km", "m").unwrap();
    assert_eq!(batch.results(), vec![3000.0, 1000.0, 2000.0, 1000.0]);
}

#[test]
fn test_batch_single_value() {
    let engine = Engine::new();
    let batch = engine.convert_batch_str("60", "mph", "kph").unwrap();
    assert_eq!(batch.results(), vec![96.56064]);
}

#[test]
fn test_batch_invalid_element_fails_whole_batch() {
    let engine = Engine::new();

    let result = engine.convert_batch_str("32,abc,100", "fahrenheit", "celsius");
    assert_eq!(
        result,
        Err(ConversionError::InvalidNumber {
            position: 1,
            token: "abc".to_string(),
        })
    );
}

#[test]
fn test_batch_trailing_comma_is_invalid() {
    let engine = Engine::new();
    let result = engine.convert_batch_str("1,2,", "m", "ft");
    assert_eq!(
        result,
        Err(ConversionError::InvalidNumber {
            position: 2,
            token: String::new(),
        })
    );
}

#[test]
fn test_batch_empty_input() {
    let engine = Engine::new();

    assert_eq!(
        engine.convert_batch_str("", "m", "ft"),
        Err(ConversionError::EmptyBatch)
    );
    assert_eq!(
        engine.convert_batch(&[], "m", "ft"),
        Err(ConversionError::EmptyBatch)
    );
}

#[test]
fn test_batch_unit_errors() {
    let engine = Engine::new();

    assert_eq!(
        engine.convert_batch_str("1,2", "m", "lightyears"),
        Err(ConversionError::UnknownUnit("lightyears".to_string()))
    );
    assert!(matches!(
        engine.convert_batch_str("1,2", "m", "kelvin"),
        Err(ConversionError::CategoryMismatch {
            from: Category::Distance,
            to: Category::Temperature,
        })
    ));
}
