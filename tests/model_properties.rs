/*!
 * Property tests for the process table model
 * Random append/clear sequences checked against a plain Vec
 */

use process_model::{
    ItemModel, ModelEvent, ModelIndex, Orientation, ProcessModel, ProcessRecord, Role, Value,
};
use proptest::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Debug)]
enum Op {
    Append(ProcessRecord),
    Clear,
}

fn record_strategy() -> impl Strategy<Value = ProcessRecord> {
    (any::<u32>(), any::<u32>(), "[a-z]{0,8}", "[a-z0-9_-]{1,12}")
        .prop_map(|(pid, uid, user, name)| ProcessRecord::new(pid, uid, user, name))
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        8 => record_strategy().prop_map(Op::Append),
        1 => Just(Op::Clear),
    ]
}

fn apply(ops: &[Op]) -> (ProcessModel, Vec<ProcessRecord>) {
    let mut model = ProcessModel::new();
    let mut expected = Vec::new();
    for op in ops {
        match op {
            Op::Append(record) => {
                model.append(record.clone());
                expected.push(record.clone());
            }
            Op::Clear => {
                model.clear();
                expected.clear();
            }
        }
    }
    (model, expected)
}

proptest! {
    #[test]
    fn row_count_tracks_appends_since_clear(ops in prop::collection::vec(op_strategy(), 0..64)) {
        let (model, expected) = apply(&ops);
        prop_assert_eq!(model.row_count(&ModelIndex::ROOT), expected.len());
        prop_assert_eq!(model.column_count(&ModelIndex::ROOT), 4);
    }

    #[test]
    fn cells_match_appended_records(ops in prop::collection::vec(op_strategy(), 0..64)) {
        let (model, expected) = apply(&ops);
        let root = ModelIndex::ROOT;
        for (row, record) in expected.iter().enumerate() {
            let cells: Vec<Value> = (0..4)
                .map(|column| model.data(&model.index(row, column, &root), Role::Display))
                .collect();
            prop_assert_eq!(
                cells,
                vec![
                    Value::from(record.pid),
                    Value::from(record.uid),
                    Value::from(record.user.as_str()),
                    Value::from(record.name.as_str()),
                ]
            );
        }
    }

    #[test]
    fn out_of_range_indices_are_invalid(
        ops in prop::collection::vec(op_strategy(), 0..32),
        row in 0usize..64,
        column in 0usize..8,
    ) {
        let (model, expected) = apply(&ops);
        let root = ModelIndex::ROOT;
        let index = model.index(row, column, &root);
        prop_assert_eq!(index.is_valid(), row < expected.len() && column < 4);
        prop_assert!(model.parent(&index).is_root());
        prop_assert!(!model.index(0, 0, &ModelIndex::new(row, column)).is_valid());
    }

    #[test]
    fn headers_ignore_row_count(ops in prop::collection::vec(op_strategy(), 0..16)) {
        let (model, _) = apply(&ops);
        let titles: Vec<String> = (0..4)
            .map(|section| model.header_data(section, Orientation::Horizontal, Role::Display).to_string())
            .collect();
        prop_assert_eq!(titles, vec!["PID", "UID", "User", "Name"]);
    }
}

#[test]
fn observer_sees_one_insert_per_append() {
    let mut model = ProcessModel::new();
    let inserted = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&inserted);
    model.subscribe(move |event: &ModelEvent| {
        if let ModelEvent::RowsInserted { first, last, .. } = event {
            sink.borrow_mut().push((*first, *last));
        }
    });

    for pid in 0..3 {
        model.append(ProcessRecord::new(pid, 0, "root", "worker"));
    }
    model.clear();
    model.append(ProcessRecord::new(9, 0, "root", "worker"));

    assert_eq!(*inserted.borrow(), vec![(0, 0), (1, 1), (2, 2), (0, 0)]);
}

#[test]
fn selection_consumer_reads_pid_from_column_zero() {
    let mut model = ProcessModel::new();
    model.append(ProcessRecord::new(10, 0, "root", "init"));
    model.append(ProcessRecord::new(20, 1000, "alice", "bash"));

    let selected = model.index(1, 0, &ModelIndex::ROOT);
    assert_eq!(model.data(&selected, Role::Display).as_int(), Some(20));
    assert_eq!(model.process_id(&selected).unwrap(), 20);
}
