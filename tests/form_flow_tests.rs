use pointadmin::config::Config;
use pointadmin::core::form::ValidationError;
use pointadmin::core::notify::{RecordingSink, Severity};
use pointadmin::core::session::AdminSession;
use pointadmin::errors::AppError;
use pointadmin::models::direction::Direction;

fn open() -> AdminSession {
    AdminSession::open(&Config::default()).expect("open session")
}

fn fill(s: &mut AdminSession, worker: Option<&str>, direction: Direction, amount: &str, reason: &str) {
    if let Some(id) = worker {
        s.select_worker(id).expect("known worker");
    }
    s.form.set_direction(direction);
    s.form.set_amount_text(amount);
    s.form.set_reason(reason);
}

#[test]
fn grant_example_updates_balance_and_history() {
    let mut s = open();
    let mut sink = RecordingSink::new();
    fill(&mut s, Some("1"), Direction::Credit, "100", "bonus");

    let tx = s.submit(&mut sink).expect("valid submit");

    assert_eq!(
        sink.entries,
        vec![(Severity::Success, "Taro Yamada: 100 points granted".to_string())]
    );
    assert!(s.form.is_empty());
    assert_eq!(tx.admin_name, "Administrator");

    let w = &s.workers().unwrap()[0];
    assert_eq!((w.points, w.total_earned), (100, 100));
    assert_eq!(s.history().unwrap(), vec![tx]);

    let stats = s.stats().unwrap();
    assert_eq!(stats.total_issued, 100);
    assert_eq!(stats.issued_this_month, 100);
    assert_eq!(s.chart().unwrap().last().unwrap().total, 100);
}

#[test]
fn penalty_with_negative_amount_is_invalid() {
    let mut s = open();
    let mut sink = RecordingSink::new();
    fill(&mut s, Some("1"), Direction::Debit, "-5", "penalty");

    let err = s.submit(&mut sink).unwrap_err();

    assert!(matches!(err, AppError::Validation(ValidationError::InvalidAmount)));
    assert_eq!(s.form.amount_text(), "-5");
    assert_eq!(s.form.reason(), "penalty");
    assert_eq!(s.form.direction(), Direction::Debit);
    assert!(s.history().unwrap().is_empty());
}

#[test]
fn no_worker_is_missing_field() {
    let mut s = open();
    let mut sink = RecordingSink::new();
    fill(&mut s, None, Direction::Credit, "50", "x");

    let err = s.submit(&mut sink).unwrap_err();

    assert!(matches!(err, AppError::Validation(ValidationError::MissingField)));
    assert_eq!(sink.count(Severity::Error), 1);
    assert!(s.history().unwrap().is_empty());
}

#[test]
fn repeated_submit_never_duplicates() {
    let mut s = open();
    let mut sink = RecordingSink::new();
    fill(&mut s, Some("1"), Direction::Debit, "40", "late");

    s.submit(&mut sink).expect("first submit");
    for _ in 0..3 {
        assert!(matches!(
            s.submit(&mut sink),
            Err(AppError::Validation(ValidationError::MissingField))
        ));
    }

    assert_eq!(sink.count(Severity::Success), 1);
    assert_eq!(s.history().unwrap().len(), 1);

    let w = &s.workers().unwrap()[0];
    assert_eq!((w.points, w.total_earned), (-40, 0));
    // debits are not issuance
    assert_eq!(s.stats().unwrap().total_issued, 0);
}
