use crate::error::{ErrorKind, LedgerError};
use crate::models::{EntryKind, ExpenseCategory, NewExpense};
use crate::settlement::apply_plan;
use crate::tests::{session, test_ledger};

#[test]
fn test_two_member_equal_split() {
    let mut ledger = test_ledger(&["a", "b"]);
    ledger
        .record_expense(NewExpense::new("a", 1200).split_equally(["a", "b"]), "a")
        .unwrap();

    let balances = ledger.balances();
    assert_eq!(balances["a"], 600);
    assert_eq!(balances["b"], -600);

    let plan = ledger.settlement_plan().unwrap();
    assert_eq!(plan.len(), 1);
    assert_eq!(plan.transfers[0].from, "b");
    assert_eq!(plan.transfers[0].to, "a");
    assert_eq!(plan.transfers[0].amount, 600);
}

#[test]
fn test_three_way_split_conserves_every_unit() {
    let mut ledger = test_ledger(&["a", "b", "c"]);
    let entry = ledger
        .record_expense(NewExpense::new("a", 1000).split_equally(["a", "b", "c"]), "a")
        .unwrap();

    let owed: i64 = entry.shares.iter().map(|s| s.amount).sum();
    assert_eq!(owed, 1000);

    let balances = ledger.balances();
    assert_eq!(balances["a"], 666);
    assert_eq!(balances["b"], -333);
    assert_eq!(balances["c"], -333);
    assert_eq!(balances.values().sum::<i64>(), 0);

    let plan = ledger.settlement_plan().unwrap();
    assert_eq!(plan.len(), 2);
    assert!(apply_plan(&balances, &plan).values().all(|v| *v == 0));
}

#[test]
fn test_default_allocation_uses_current_members() {
    let mut ledger = test_ledger(&["a", "b"]);
    ledger.record_expense(NewExpense::new("a", 100), "a").unwrap();
    ledger
        .add_member(crate::models::Member::new("c", "C"))
        .unwrap();
    ledger.record_expense(NewExpense::new("c", 300), "c").unwrap();

    let balances = ledger.balances();
    assert_eq!(balances["a"], 50 - 100);
    assert_eq!(balances["b"], -50 - 100);
    assert_eq!(balances["c"], 200);
}

#[test]
fn test_untouched_members_are_listed_as_zero() {
    let ledger = test_ledger(&["a", "b", "c"]);
    let balances = ledger.balances();
    assert_eq!(balances.len(), 3);
    assert!(balances.values().all(|v| *v == 0));
    assert!(ledger.settlement_plan().unwrap().is_empty());
}

#[test]
fn test_rejections_leave_ledger_untouched() {
    let mut ledger = test_ledger(&["a", "b"]);
    ledger.record_expense(NewExpense::new("a", 100), "a").unwrap();
    let before = ledger.balances();

    let cases = vec![
        (NewExpense::new("a", 0), LedgerError::InvalidAmount(0)),
        (NewExpense::new("a", -5), LedgerError::InvalidAmount(-5)),
        (
            NewExpense::new("a", 10).split_equally(Vec::<String>::new()),
            LedgerError::EmptyAllocation,
        ),
        (
            NewExpense::new("z", 10),
            LedgerError::UnknownMember("z".to_string()),
        ),
        (
            NewExpense::new("a", 10).split_equally(["a", "x"]),
            LedgerError::UnknownMember("x".to_string()),
        ),
    ];
    for (expense, expected) in cases {
        let err = ledger.record_expense(expense, "a").unwrap_err();
        assert_eq!(err, expected);
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    assert_eq!(ledger.entries().len(), 1);
    assert_eq!(ledger.balances(), before);
}

#[test]
fn test_amount_ceiling() {
    let mut ledger = test_ledger(&["a", "b"]);
    let too_big = crate::constants::MAX_ENTRY_AMOUNT + 1;
    assert_eq!(
        ledger
            .record_expense(NewExpense::new("a", too_big), "a")
            .unwrap_err(),
        LedgerError::InvalidAmount(too_big)
    );
}

#[test]
fn test_payment_moves_balances_towards_zero() {
    let mut ledger = test_ledger(&["a", "b"]);
    ledger.record_expense(NewExpense::new("a", 1200), "a").unwrap();

    let payment = ledger.record_payment("b", "a", 400, "b").unwrap();
    assert_eq!(payment.kind, EntryKind::Payment);

    let balances = ledger.balances();
    assert_eq!(balances["a"], 200);
    assert_eq!(balances["b"], -200);
    assert_eq!(ledger.total_expense(), 1200);

    assert_eq!(
        ledger.record_payment("a", "a", 10, "a").unwrap_err(),
        LedgerError::SelfTransfer("a".to_string())
    );
    assert_eq!(ledger.entries().len(), 2);
}

#[test]
fn test_category_totals_skip_payments() {
    let mut ledger = test_ledger(&["a", "b"]);
    ledger
        .record_expense(
            NewExpense::new("a", 300).category(ExpenseCategory::Groceries),
            "a",
        )
        .unwrap();
    ledger
        .record_expense(
            NewExpense::new("b", 200).category(ExpenseCategory::Groceries),
            "b",
        )
        .unwrap();
    ledger
        .record_expense(NewExpense::new("b", 900).category(ExpenseCategory::Rent), "b")
        .unwrap();
    ledger.record_payment("a", "b", 100, "a").unwrap();

    let totals = ledger.category_totals();
    assert_eq!(totals[&ExpenseCategory::Groceries], 500);
    assert_eq!(totals[&ExpenseCategory::Rent], 900);
    assert!(!totals.contains_key(&ExpenseCategory::Miscellaneous));
}

#[test]
fn test_authorize_checks_membership() {
    let ledger = test_ledger(&["a"]);
    assert!(ledger.authorize(&session("a")).is_ok());
    assert_eq!(
        ledger.authorize(&session("z")),
        Err(LedgerError::NotGroupMember("z".to_string()))
    );
}
