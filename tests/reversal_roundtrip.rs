use quickcheck_macros::quickcheck;
use stock_sentiment_wasm::domain::chart::reverse_to_ascending;

#[quickcheck]
fn reversal_is_an_involution(values: Vec<i64>) -> bool {
    reverse_to_ascending(&reverse_to_ascending(&values)) == values
}

#[quickcheck]
fn reversal_preserves_length_and_elements(values: Vec<i32>) -> bool {
    let reversed = reverse_to_ascending(&values);
    reversed.len() == values.len()
        && values.iter().enumerate().all(|(i, v)| reversed[values.len() - 1 - i] == *v)
}

#[test]
fn reversal_flips_newest_first_to_oldest_first() {
    let delivered = vec!["Mar", "Feb", "Jan"];
    assert_eq!(reverse_to_ascending(&delivered), vec!["Jan", "Feb", "Mar"]);
}
