use chrono::NaiveDate;
use log::info;
use roomledger::config::CONFIG;
use roomledger::models::{ExpenseCategory, Member, NewExpense, Session};
use roomledger::report::render_report;
use roomledger::{CurrencyFormat, InMemoryAuditLogger, InMemoryStorage, LedgerService, Visualization};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::new()
        .parse_filters(&CONFIG.log_level)
        .init();

    let currency = CurrencyFormat::from_config();
    let mut storage = InMemoryStorage::new();
    let mut audit_logger = InMemoryAuditLogger::new();
    let mut service = LedgerService::new(&mut storage, &mut audit_logger);

    let amit = Session::new("amit", "Amit").with_email("amit@example.com");
    let group = service.create_group(
        &amit,
        "Flat 4B".to_string(),
        vec![Member::new("bappi", "Bappi"), Member::new("shuvo", "Shuvo")],
    )?;
    info!("Created group {} ({})", group.name, group.id);

    let month = NaiveDate::from_ymd_opt(2026, 10, 1).ok_or("invalid date")?;
    service.record_expense(
        &amit,
        &group.id,
        NewExpense::new("amit", 50_000)
            .category(ExpenseCategory::Groceries)
            .description("Weekly bazar")
            .on(month),
    )?;
    service.record_expense(
        &amit,
        &group.id,
        NewExpense::new("bappi", 100_000)
            .category(ExpenseCategory::Utilities)
            .description("Electricity and gas")
            .on(month),
    )?;
    service.record_expense(
        &amit,
        &group.id,
        NewExpense::new("shuvo", 150_000)
            .category(ExpenseCategory::Rent)
            .description("Rent share top-up")
            .on(month),
    )?;

    println!("Per Person Breakdown");
    println!("{}", render_report(&service.member_report(&group.id)?, &currency));

    let summary = service.dashboard(&amit, &group.id)?;
    println!(
        "\nTotal room expense {}, I paid {}, {}",
        currency.format(summary.total_group_expense),
        currency.format(summary.my_paid),
        summary.status.label()
    );

    let chart = Visualization::generate_balance_chart(service.ledger(&group.id)?, &currency);
    println!("\nBalance chart: {}", chart);

    println!("\nSettlement plan");
    let plan = service.settle_all(&amit, &group.id)?;
    for transfer in &plan {
        println!(
            "{} pays {} {}",
            transfer.from,
            transfer.to,
            currency.format(transfer.amount)
        );
    }

    println!("\nFinal Report");
    println!("{}", render_report(&service.member_report(&group.id)?, &currency));

    drop(service);
    info!("{} audit entries recorded", audit_logger.get_logs().len());
    Ok(())
}
