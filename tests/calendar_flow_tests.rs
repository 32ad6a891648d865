use milk_ledger::{
    core::LedgerManager,
    domain::{DayField, MonthKey},
    storage::MemoryGateway,
};

fn open_in_may(gateway: MemoryGateway) -> LedgerManager {
    let mut manager =
        LedgerManager::with_displayed_month(Box::new(gateway), MonthKey::new(2024, 5).unwrap())
            .expect("manager opens");
    manager.change_default_rate("50").unwrap();
    manager
}

#[test]
fn month_totals_follow_the_worked_example() {
    let mut manager = open_in_may(MemoryGateway::new());
    manager.edit_day_field(1, DayField::MorningQty, "2").unwrap();
    manager.edit_day_field(1, DayField::EveningQty, "1").unwrap();
    manager.edit_day_field(1, DayField::Rate, "55").unwrap();
    manager.edit_day_field(2, DayField::MorningQty, "3").unwrap();

    let view = manager.month_view();
    assert_eq!(view.label, "May 2024");
    assert_eq!(view.day_count, 31);
    assert!((view.totals.quantity - 6.0).abs() < 0.01);
    assert!((view.totals.amount - 315.0).abs() < 0.01);
}

#[test]
fn clearing_a_rate_uses_the_default_current_at_edit_time() {
    let mut manager = open_in_may(MemoryGateway::new());
    manager.edit_day_field(1, DayField::Rate, "55").unwrap();
    manager.change_default_rate("60").unwrap();
    manager.edit_day_field(1, DayField::Rate, "").unwrap();

    let rate = manager.month_view().rows[0].entry.rate;
    assert_eq!(rate, 60.0);
}

#[test]
fn default_rate_change_is_not_retroactive() {
    let mut manager = open_in_may(MemoryGateway::new());
    manager.edit_day_field(1, DayField::Rate, "55").unwrap();
    manager.edit_day_field(2, DayField::MorningQty, "2").unwrap();
    manager.change_default_rate("70").unwrap();

    let view = manager.month_view();
    // Day 1 holds its explicit rate; day 2 was lazily created at the old
    // default and keeps it; untouched day 3 shows the new default.
    assert_eq!(view.rows[0].entry.rate, 55.0);
    assert_eq!(view.rows[1].entry.rate, 50.0);
    assert_eq!(view.rows[2].entry.rate, 70.0);
    assert!(!view.rows[2].recorded);
}

#[test]
fn rejected_default_rate_keeps_the_previous_value() {
    let mut manager = open_in_may(MemoryGateway::new());
    assert!(manager.change_default_rate("-3").is_err());
    assert!(manager.change_default_rate("cheap").is_err());
    assert_eq!(manager.preferences().default_rate, 50.0);
}

#[test]
fn day_paid_toggle_moves_money_between_paid_and_due() {
    let mut manager = open_in_may(MemoryGateway::new());
    manager.edit_day_field(4, DayField::MorningQty, "2").unwrap();

    assert!(manager.toggle_day_paid(4).unwrap());
    let totals = manager.month_view().totals;
    assert!((totals.paid - 100.0).abs() < 0.01);
    assert!(totals.due.abs() < 0.01);

    assert!(manager.toggle_day_paid(4).unwrap());
    let totals = manager.month_view().totals;
    assert!(totals.paid.abs() < 0.01);
    assert!((totals.due - 100.0).abs() < 0.01);

    // Toggling a day that was never written stays a silent no-op.
    assert!(!manager.toggle_day_paid(20).unwrap());
}

#[test]
fn navigation_changes_label_day_count_and_totals_scope() {
    let mut manager = open_in_may(MemoryGateway::new());
    manager.edit_day_field(1, DayField::MorningQty, "2").unwrap();

    manager.navigate_month(-3);
    let view = manager.month_view();
    assert_eq!(view.label, "February 2024");
    assert_eq!(view.day_count, 29);
    assert_eq!(view.totals.amount, 0.0);

    manager.navigate_month(3);
    let view = manager.month_view();
    assert_eq!(view.label, "May 2024");
    assert!((view.totals.amount - 100.0).abs() < 0.01);
}

#[test]
fn calendar_state_survives_a_reopen() {
    let gateway = MemoryGateway::new();
    let mut manager = open_in_may(gateway.clone());
    manager.edit_day_field(1, DayField::MorningQty, "2").unwrap();
    manager.edit_day_field(1, DayField::Rate, "58").unwrap();
    manager.set_day_paid(1, true).unwrap();
    drop(manager);

    let reopened =
        LedgerManager::with_displayed_month(Box::new(gateway), MonthKey::new(2024, 5).unwrap())
            .unwrap();
    let row = &reopened.month_view().rows[0];
    assert!(row.recorded);
    assert_eq!(row.entry.morning_qty, 2.0);
    assert_eq!(row.entry.rate, 58.0);
    assert!(row.entry.paid);
}
