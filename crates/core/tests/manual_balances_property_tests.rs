//! Property-based tests for the balance manager.
//!
//! Random sequences of add / edit / remove batches are replayed against the
//! in-memory store, checking the collection invariants after every step.

use futures::executor::block_on;
use proptest::prelude::*;
use std::collections::HashSet;
use std::sync::Arc;
use tallyfolio_core::assets::StaticAssetResolver;
use tallyfolio_core::balances::{
    InMemoryManualBalanceRepository, ManualBalanceService, ManualBalanceServiceTrait,
    ManualBalanceUpdate, NewManualBalance,
};
use tallyfolio_core::tags::InMemoryTagRegistry;
use tallyfolio_core::ManualBalance;

// =============================================================================
// Generators
// =============================================================================

const LABELS: &[&str] = &["a", "b", "c", "d", "e"];
const TAGS: &[&str] = &["public", "PUBLIC", "miner", "Inheritance", "ghost"];
const AMOUNTS: &[&str] = &["1", "2.50", "-3", "0", "gra"];

#[derive(Debug, Clone)]
enum Op {
    Add(Vec<(usize, usize, Vec<usize>)>),
    Edit(Vec<(usize, Option<usize>, Option<Vec<usize>>)>),
    Remove(Vec<usize>),
}

fn arb_tags() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0..TAGS.len(), 0..3)
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        prop::collection::vec((0..LABELS.len(), 0..AMOUNTS.len(), arb_tags()), 1..4)
            .prop_map(Op::Add),
        prop::collection::vec(
            (
                0..LABELS.len(),
                proptest::option::of(0..AMOUNTS.len()),
                proptest::option::of(arb_tags()),
            ),
            1..4
        )
        .prop_map(Op::Edit),
        prop::collection::vec(0..LABELS.len(), 1..4).prop_map(Op::Remove),
    ]
}

fn service() -> ManualBalanceService {
    ManualBalanceService::new(
        Arc::new(InMemoryManualBalanceRepository::default()),
        Arc::new(InMemoryTagRegistry::with_names(["public", "miner", "inheritance"]).unwrap()),
        Arc::new(StaticAssetResolver::default()),
    )
}

fn tag_names(indexes: &[usize]) -> Vec<&'static str> {
    indexes.iter().map(|&i| TAGS[i]).collect()
}

async fn apply(service: &ManualBalanceService, op: &Op) -> bool {
    let result = match op {
        Op::Add(items) => {
            let items = items
                .iter()
                .map(|(label, amount, tags)| {
                    NewManualBalance::new(LABELS[*label], "BTC", AMOUNTS[*amount], "blockchain")
                        .with_tags(tag_names(tags))
                })
                .collect();
            service.add_manual_balances(items).await
        }
        Op::Edit(items) => {
            let items = items
                .iter()
                .map(|(label, amount, tags)| {
                    let mut update = ManualBalanceUpdate::new(LABELS[*label]);
                    if let Some(amount) = amount {
                        update = update.with_amount(AMOUNTS[*amount]);
                    }
                    if let Some(tags) = tags {
                        update = update.with_tags(tag_names(tags));
                    }
                    update
                })
                .collect();
            service.edit_manual_balances(items).await
        }
        Op::Remove(labels) => {
            let labels = labels.iter().map(|&i| LABELS[i].to_string()).collect();
            service.remove_manual_balances(labels).await
        }
    };
    result.is_ok()
}

fn assert_invariants(balances: &[ManualBalance]) {
    let labels: HashSet<&str> = balances.iter().map(|b| b.label.as_str()).collect();
    assert_eq!(labels.len(), balances.len(), "labels must be unique");

    for balance in balances {
        if let Some(tags) = &balance.tags {
            assert!(!tags.is_empty(), "empty tag lists are stored as None");
            let mut sorted = tags.clone();
            sorted.sort();
            sorted.dedup_by(|a, b| a.eq_ignore_ascii_case(b));
            assert_eq!(&sorted, tags, "tags must be sorted and unique");
            assert!(!tags.iter().any(|t| t == "ghost"));
        }
    }
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// At most one record per label after any operation sequence.
    #[test]
    fn prop_labels_stay_unique(ops in prop::collection::vec(arb_op(), 1..12)) {
        let service = service();
        block_on(async {
            for op in &ops {
                apply(&service, op).await;
                assert_invariants(&service.get_manual_balances().unwrap());
            }
        });
    }

    /// A rejected batch leaves the collection exactly as it was.
    #[test]
    fn prop_failed_batches_change_nothing(ops in prop::collection::vec(arb_op(), 1..12)) {
        let service = service();
        block_on(async {
            for op in &ops {
                let before = service.get_manual_balances().unwrap();
                if !apply(&service, op).await {
                    let after = service.get_manual_balances().unwrap();
                    assert_eq!(before, after);
                    for (b, a) in before.iter().zip(&after) {
                        assert_eq!(b.amount.to_string(), a.amount.to_string());
                    }
                }
            }
        });
    }

    /// Every add that succeeds makes its labels fetchable with the given amounts.
    #[test]
    fn prop_successful_add_round_trips(
        items in prop::collection::vec((0..LABELS.len(), 0..4usize), 1..4)
    ) {
        let service = service();
        let op = Op::Add(items.iter().map(|&(l, a)| (l, a, vec![])).collect());
        block_on(async {
            if apply(&service, &op).await {
                let balances = service.get_manual_balances().unwrap();
                prop_assert_eq!(balances.len(), items.len());
                for (balance, (label, amount)) in balances.iter().zip(&items) {
                    prop_assert_eq!(balance.label.as_str(), LABELS[*label]);
                    prop_assert_eq!(balance.amount.to_string(), AMOUNTS[*amount]);
                }
            }
            Ok::<(), TestCaseError>(())
        })?;
    }
}
