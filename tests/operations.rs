use trackviz::operations::{self, Operation, DEFAULT_ARRAY};

#[test]
fn test_catalog_order_and_names() {
    let ids: Vec<&str> = Operation::ALL.iter().map(|op| op.id()).collect();
    assert_eq!(
        ids,
        vec![
            "access",
            "insert",
            "delete",
            "search",
            "reverse",
            "bubble_sort",
            "selection_sort",
            "insertion_sort",
        ]
    );
    assert_eq!(Operation::Search.to_string(), "Linear Search");
}

#[test]
fn test_access_and_search_record_only_bookends() {
    for op in [Operation::Access, Operation::Search] {
        let trace = operations::execute(op, &DEFAULT_ARRAY);
        assert_eq!(trace.len(), 2);
        assert_eq!(trace.last().unwrap().data, DEFAULT_ARRAY.to_vec());
    }
}

#[test]
fn test_insert_operation() {
    let trace = operations::execute(Operation::Insert, &DEFAULT_ARRAY);

    assert_eq!(trace.len(), 3);
    assert_eq!(trace.snapshots()[1].action, "Insert 99 at index 2");
    assert_eq!(trace.last().unwrap().data, vec![5, 2, 99, 8, 1, 9, 3]);
}

#[test]
fn test_insert_operation_on_short_array_is_ignored() {
    let trace = operations::execute(Operation::Insert, &[1]);

    assert_eq!(trace.len(), 2);
    assert_eq!(trace.last().unwrap().data, vec![1]);
}

#[test]
fn test_delete_operation() {
    let trace = operations::execute(Operation::Delete, &DEFAULT_ARRAY);

    assert_eq!(trace.len(), 3);
    assert_eq!(trace.snapshots()[1].highlights, vec![1]);
    assert_eq!(trace.last().unwrap().data, vec![5, 8, 1, 9, 3]);
}

#[test]
fn test_reverse_swaps_half_the_length() {
    let trace = operations::execute(Operation::Reverse, &DEFAULT_ARRAY);

    assert_eq!(trace.len(), DEFAULT_ARRAY.len() / 2 + 2);
    assert_eq!(trace.last().unwrap().data, vec![3, 9, 1, 8, 2, 5]);

    let trace = operations::execute(Operation::Reverse, &[1, 2, 3, 4, 5]);
    assert_eq!(trace.len(), 2 + 2);
    assert_eq!(trace.last().unwrap().data, vec![5, 4, 3, 2, 1]);
}

#[test]
fn test_bubble_sort_ends_sorted() {
    let trace = operations::execute(Operation::BubbleSort, &DEFAULT_ARRAY);
    let last = trace.last().unwrap();

    let mut expected = DEFAULT_ARRAY.to_vec();
    expected.sort();
    assert_eq!(last.data, expected);
    assert_eq!(last.action, "✓ Sorting complete!");

    // [5,2,8,1,9,3] has 7 inversions, one swap each
    assert_eq!(trace.len(), 7 + 2);
    assert!(trace.snapshots()[1..trace.len() - 1]
        .iter()
        .all(|s| s.action.starts_with("Swap") && s.highlights.len() == 2));
}

#[test]
fn test_bubble_sort_on_sorted_input_only_bookends() {
    let trace = operations::execute(Operation::BubbleSort, &[1, 2, 2, 3]);
    assert_eq!(trace.len(), 2);
}

#[test]
fn test_selection_sort_swaps_once_per_pass() {
    let trace = operations::execute(Operation::SelectionSort, &DEFAULT_ARRAY);
    let last = trace.last().unwrap();

    assert_eq!(last.data, vec![1, 2, 3, 5, 8, 9]);
    assert_eq!(trace.len(), DEFAULT_ARRAY.len() + 2);
    assert_eq!(trace.snapshots()[1].action, "Swap arr[0] ↔ arr[3]");
    assert!(trace.snapshots()[1..trace.len() - 1]
        .iter()
        .all(|s| s.action.starts_with("Swap")));
}

#[test]
fn test_insertion_sort_records_only_sets() {
    let trace = operations::execute(Operation::InsertionSort, &DEFAULT_ARRAY);
    let last = trace.last().unwrap();

    assert_eq!(last.data, vec![1, 2, 3, 5, 8, 9]);
    // 7 shifts (one per inversion) plus one key placement per pass
    assert_eq!(trace.len(), 7 + (DEFAULT_ARRAY.len() - 1) + 2);
    assert!(trace.snapshots()[1..trace.len() - 1]
        .iter()
        .all(|s| s.action.starts_with("Set") && s.highlights.len() == 1));
    assert_eq!(trace.snapshots()[1].action, "Set arr[1] = 5");
    assert_eq!(trace.snapshots()[1].data, DEFAULT_ARRAY.to_vec());
}

#[test]
fn test_sorts_handle_duplicates_and_negatives() {
    let input = [3, -1, 3, 0, -7];
    for op in [Operation::BubbleSort, Operation::SelectionSort, Operation::InsertionSort] {
        let trace = operations::execute(op, &input);
        assert_eq!(trace.last().unwrap().data, vec![-7, -1, 0, 3, 3], "{}", op);
    }
}
