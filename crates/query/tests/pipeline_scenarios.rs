mod common;

use common::{ascending_table, descending_table, row_set, scan, small_table};
use query::{Column, ConjunctiveQuery, Row, Strategy};

#[test]
fn small_table_matches_first_two_rows() {
    let table = small_table();
    let query = ConjunctiveQuery::default();
    for strategy in Strategy::ALL {
        let result = strategy.execute(&table, &query);
        assert_eq!(result.row_ids(), &[0, 1], "strategy {}", strategy);
    }
}

#[test]
fn ascending_table_matches_forty_rows_per_group() {
    let table = ascending_table();
    let query = ConjunctiveQuery::default();
    let expected = scan(&table, |row| {
        [1000, 2000, 3000].contains(&row.a) && (10..50).contains(&row.b)
    });
    assert_eq!(expected.len(), 120);

    for strategy in Strategy::ALL {
        let rows = strategy.run(&table, &query);
        assert_eq!(rows.len(), 120, "strategy {}", strategy);
        for a in [1000, 2000, 3000] {
            let group: Vec<&Row> = rows.iter().filter(|row| row.a == a).collect();
            assert_eq!(group.len(), 40, "strategy {} group {}", strategy, a);
            assert!(group.iter().all(|row| (10..50).contains(&row.b)));
        }
        assert_eq!(
            strategy.execute(&table, &query).normalized().row_ids(),
            expected.as_slice()
        );
    }
}

#[test]
fn all_strategies_agree_as_sets() {
    let query = ConjunctiveQuery::default();
    for table in [small_table(), ascending_table(), descending_table()] {
        let reference = row_set(&Strategy::TreeIndex.run(&table, &query));
        for strategy in Strategy::ALL {
            assert_eq!(row_set(&strategy.run(&table, &query)), reference);
        }
    }
}

#[test]
fn row_ordered_strategies_return_row_id_order() {
    let query = ConjunctiveQuery::default();
    for table in [ascending_table(), descending_table()] {
        for strategy in [Strategy::TreeIndex, Strategy::ImplicitIndex] {
            assert!(strategy.execute(&table, &query).is_normalized());
        }
    }
}

#[test]
fn composite_strategies_return_b_order() {
    let query = ConjunctiveQuery::default();
    for table in [ascending_table(), descending_table()] {
        for strategy in [Strategy::CompositeTree, Strategy::CompositeHash] {
            let b_values: Vec<i64> = strategy
                .execute(&table, &query)
                .iter()
                .filter_map(|id| table.value(id, Column::B))
                .collect();
            assert_eq!(b_values.len(), 120);
            assert!(b_values.windows(2).all(|pair| pair[0] <= pair[1]));
        }
    }
}

#[test]
fn composite_tree_orders_a_within_b_group() {
    let table = ascending_table();
    let rows = Strategy::CompositeTree.run(&table, &ConjunctiveQuery::default());
    assert_eq!(
        &rows[..4],
        &[
            Row::new(1000, 10),
            Row::new(2000, 10),
            Row::new(3000, 10),
            Row::new(1000, 11),
        ]
    );
}

#[test]
fn descending_input_yields_same_matches_as_ascending() {
    let query = ConjunctiveQuery::default();
    for strategy in Strategy::ALL {
        let ascending = row_set(&strategy.run(&ascending_table(), &query));
        let descending = row_set(&strategy.run(&descending_table(), &query));
        assert_eq!(ascending, descending, "strategy {}", strategy);
    }
}

#[test]
fn descending_input_reverses_tree_output_within_group() {
    let rows = Strategy::TreeIndex.run(&descending_table(), &ConjunctiveQuery::default());
    assert_eq!(rows.first(), Some(&Row::new(1000, 49)));
    assert_eq!(rows.last(), Some(&Row::new(3000, 10)));
}

#[test]
fn larger_value_lists() {
    let table = ascending_table();
    let query = ConjunctiveQuery::new(vec![5000, 42, 1000, 1000], 95..200);
    for strategy in [Strategy::TreeIndex, Strategy::ImplicitIndex] {
        let rows = strategy.run(&table, &query);
        assert_eq!(rows.len(), 10, "strategy {}", strategy);
    }
    // The composite index visits an inner value once per occurrence in the list.
    let rows = Strategy::CompositeHash.run(&table, &query);
    assert_eq!(rows.len(), 15);
    assert_eq!(row_set(&rows).len(), 10);
}
