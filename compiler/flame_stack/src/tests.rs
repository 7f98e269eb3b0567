use super::*;

#[test]
fn test_nested_sum() {
    fn sum_to(n: u64) -> u64 {
        ensure_sufficient_stack(|| if n == 0 { 0 } else { n + sum_to(n - 1) })
    }

    assert_eq!(sum_to(100), 5050);
}

#[test]
fn test_deep_recursion() {
    fn depth(n: u64) -> u64 {
        ensure_sufficient_stack(|| if n == 0 { 0 } else { depth(n - 1) + 1 })
    }

    assert_eq!(depth(100_000), 100_000);
}

#[test]
fn test_passes_through_results() {
    let result: Result<i64, String> = ensure_sufficient_stack(|| Err("stop".to_string()));
    assert_eq!(result, Err("stop".to_string()));
}
