//! Tests for per-category results and the aggregate over a fetch cycle.

use serde_json::json;
use srl_model::{
    AggregateResult, Category, CategoryResult, CategoryStatus, EndpointRegistry, FetchCycle,
    FetchError, Payload, StudentId,
};

fn cycle(id: u64, sequence: u64) -> FetchCycle {
    FetchCycle::new(StudentId::new(id).unwrap(), sequence)
}

fn server_error() -> FetchError {
    FetchError::Http {
        status: 500,
        message: "Internal Server Error".to_string(),
    }
}

#[test]
fn not_found_is_neither_success_nor_error() {
    let result = CategoryResult::from_outcome(Ok(Payload::NotFound), 1);
    assert!(result.data().is_none());
    assert!(!result.is_success());
    assert!(!result.is_error());
    assert!(!result.is_empty());
    assert!(!result.is_loading());
    assert_eq!(result.status(), CategoryStatus::NotFound);
}

#[test]
fn empty_array_is_empty_success() {
    let result = CategoryResult::from_outcome(Ok(Payload::from_json(json!([]))), 1);
    assert!(result.is_success());
    assert!(result.is_empty());
    assert_eq!(result.status(), CategoryStatus::Empty);
    assert_eq!(result.data(), Some(&json!([])));
}

#[test]
fn non_empty_values_are_success() {
    for value in [json!([{"id": 1}]), json!({"amount": 500}), json!(42), json!("x")] {
        let result = CategoryResult::from_outcome(Ok(Payload::from_json(value.clone())), 1);
        assert!(result.is_success());
        assert!(!result.is_empty());
        assert_eq!(result.data(), Some(&value));
    }
}

#[test]
fn failure_keeps_error_and_attempts() {
    let result = CategoryResult::from_outcome(Err(server_error()), 4);
    assert!(result.is_error());
    assert_eq!(result.error(), Some(&server_error()));
    assert_eq!(
        result,
        CategoryResult::Failed {
            error: server_error(),
            attempts: 4
        }
    );
}

#[test]
fn new_aggregate_is_all_loading() {
    let aggregate = AggregateResult::loading(cycle(123, 1), &EndpointRegistry::standard());
    assert_eq!(aggregate.len(), 12);
    assert!(aggregate.overall_loading());
    assert!(!aggregate.overall_error());
    assert!(!aggregate.overall_success());
    assert_eq!(aggregate.counts().loading, 12);
}

#[test]
fn overall_flags_follow_categories() {
    let current = cycle(123, 1);
    let mut aggregate = AggregateResult::loading(current, &EndpointRegistry::standard());
    let categories: Vec<_> = aggregate.iter().map(|(c, _)| c).collect();

    for category in &categories {
        assert!(aggregate.apply(current, *category, CategoryResult::NotFound));
    }
    assert!(aggregate.overall_success());

    aggregate.apply(
        current,
        Category::Payment,
        CategoryResult::Failed {
            error: server_error(),
            attempts: 4,
        },
    );
    assert!(aggregate.overall_error());
    assert!(!aggregate.overall_success());

    aggregate.apply(current, Category::Books, CategoryResult::Loading);
    assert!(aggregate.overall_loading());
    assert!(aggregate.overall_error());

    aggregate.apply(
        current,
        Category::Payment,
        CategoryResult::Success(json!({"amount": 500})),
    );
    aggregate.apply(current, Category::Books, CategoryResult::Success(json!([])));
    assert!(aggregate.overall_success());

    let counts = aggregate.counts();
    assert_eq!(counts.success, 1);
    assert_eq!(counts.empty, 1);
    assert_eq!(counts.not_found, 10);
    assert_eq!(counts.total(), 12);
    assert_eq!(counts.settled(), 12);
}

#[test]
fn results_from_other_cycles_are_rejected() {
    let current = cycle(123, 2);
    let mut aggregate = AggregateResult::loading(current, &EndpointRegistry::extended());

    let stale_same_student = cycle(123, 1);
    assert!(!aggregate.apply(stale_same_student, Category::Basic, CategoryResult::NotFound));
    let other_student = cycle(456, 2);
    assert!(!aggregate.apply(other_student, Category::Basic, CategoryResult::NotFound));

    assert_eq!(aggregate.get(Category::Basic), Some(&CategoryResult::Loading));
    assert_eq!(aggregate.student(), StudentId::new(123).unwrap());
}

#[test]
fn untracked_category_is_rejected() {
    let current = cycle(1, 1);
    let mut aggregate = AggregateResult::loading(current, &EndpointRegistry::standard());
    assert!(!aggregate.apply(current, Category::UniformPrints, CategoryResult::NotFound));
    assert!(aggregate.get(Category::UniformPrints).is_none());
}
