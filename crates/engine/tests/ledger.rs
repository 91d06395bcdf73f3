use engine::{Cents, Ledger, LedgerError};
use migration::MigratorTrait;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Statement};

async fn ledger_with_db() -> (Ledger, DatabaseConnection) {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let ledger = Ledger::builder().database(db.clone()).build();
    (ledger, db)
}

async fn count_users(db: &DatabaseConnection, chat_id: i64) -> i64 {
    let backend = db.get_database_backend();
    let row = db
        .query_one(Statement::from_sql_and_values(
            backend,
            "SELECT COUNT(*) AS n FROM users WHERE chat_id = ?",
            vec![chat_id.into()],
        ))
        .await
        .unwrap()
        .unwrap();
    row.try_get("", "n").unwrap()
}

#[tokio::test]
async fn register_user_twice_creates_one_row() {
    let (ledger, db) = ledger_with_db().await;

    ledger.register_user(99).await.unwrap();
    ledger.register_user(99).await.unwrap();

    assert_eq!(count_users(&db, 99).await, 1);
}

#[tokio::test]
async fn report_sums_entries_by_kind() {
    let (ledger, _db) = ledger_with_db().await;
    ledger.register_user(7).await.unwrap();

    ledger
        .add_income(7, Cents::new(10_000), "salary")
        .await
        .unwrap();
    ledger
        .add_expense(7, Cents::new(4_000), "eat")
        .await
        .unwrap();

    let report = ledger.report(7).await.unwrap();
    assert_eq!(report.income_total, Cents::new(10_000));
    assert_eq!(report.expense_total, Cents::new(4_000));
    assert_eq!(report.balance(), Cents::new(6_000));
    assert_eq!(
        report.to_string(),
        "Income: 100.00\nExpenses: 40.00\nBalance: 60.00"
    );
}

#[tokio::test]
async fn clear_data_resets_the_report() {
    let (ledger, _db) = ledger_with_db().await;
    ledger.register_user(7).await.unwrap();

    ledger
        .add_income(7, Cents::new(500), "salary")
        .await
        .unwrap();
    ledger.add_expense(7, Cents::new(300), "taxi").await.unwrap();

    let removed = ledger.clear_data(7).await.unwrap();
    assert_eq!(removed, 2);

    let report = ledger.report(7).await.unwrap();
    assert_eq!(report.income_total, Cents::ZERO);
    assert_eq!(report.expense_total, Cents::ZERO);
    assert_eq!(report.balance(), Cents::ZERO);
}

#[tokio::test]
async fn clear_data_on_empty_ledger_is_a_noop() {
    let (ledger, _db) = ledger_with_db().await;
    ledger.register_user(7).await.unwrap();

    assert_eq!(ledger.clear_data(7).await.unwrap(), 0);
}

#[tokio::test]
async fn operations_require_a_registered_user() {
    let (ledger, _db) = ledger_with_db().await;

    let err = ledger
        .add_income(42, Cents::new(100), "salary")
        .await
        .unwrap_err();
    assert!(matches!(err, LedgerError::UnregisteredUser(42)));

    let err = ledger.report(42).await.unwrap_err();
    assert!(matches!(err, LedgerError::UnregisteredUser(42)));

    let err = ledger.clear_data(42).await.unwrap_err();
    assert!(matches!(err, LedgerError::UnregisteredUser(42)));
}

#[tokio::test]
async fn entries_must_have_a_positive_amount() {
    let (ledger, _db) = ledger_with_db().await;
    ledger.register_user(7).await.unwrap();

    let err = ledger
        .add_expense(7, Cents::new(0), "eat")
        .await
        .unwrap_err();
    assert!(matches!(err, LedgerError::InvalidAmount(_)));

    let err = ledger
        .add_income(7, Cents::new(-100), "salary")
        .await
        .unwrap_err();
    assert!(matches!(err, LedgerError::InvalidAmount(_)));
}

#[tokio::test]
async fn users_do_not_see_each_other() {
    let (ledger, _db) = ledger_with_db().await;
    ledger.register_user(1).await.unwrap();
    ledger.register_user(2).await.unwrap();

    ledger
        .add_income(1, Cents::new(1_000), "salary")
        .await
        .unwrap();
    ledger.add_expense(2, Cents::new(200), "eat").await.unwrap();

    let first = ledger.report(1).await.unwrap();
    assert_eq!(first.income_total, Cents::new(1_000));
    assert_eq!(first.expense_total, Cents::ZERO);

    ledger.clear_data(1).await.unwrap();

    let second = ledger.report(2).await.unwrap();
    assert_eq!(second.expense_total, Cents::new(200));
}
