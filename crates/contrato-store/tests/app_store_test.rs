//! Integration tests for the application state store.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use contrato_auth::{AuthError, LoginGate, LoginInput};
use contrato_core::clock::ManualClock;
use contrato_core::error::ContratoError;
use contrato_core::models::contract::{ContractId, ContractStatus, CreateContract, UpdateContract};
use contrato_core::models::history::HistoryAction;
use contrato_core::models::view::{StatusFilter, ViewState};
use contrato_core::stats::ExpiryUrgency;
use contrato_db::MemoryContractRepository;
use contrato_store::{AppStore, StoreConfig, StoreEvent};

fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 12, 26, 12, 0, 0).unwrap()
}

/// Seeded in-memory store on a manual clock. Returns the clock handle too.
fn setup_with(config: StoreConfig) -> (AppStore<MemoryContractRepository, ManualClock>, ManualClock) {
    let clock = ManualClock::new(start());
    let store = AppStore::with_parts(
        MemoryContractRepository::seeded(),
        clock.clone(),
        LoginGate::default(),
        config,
    );
    (store, clock)
}

fn setup() -> (AppStore<MemoryContractRepository, ManualClock>, ManualClock) {
    setup_with(StoreConfig::default())
}

fn record_events(
    store: &mut AppStore<MemoryContractRepository, ManualClock>,
) -> Rc<RefCell<Vec<StoreEvent>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    store.subscribe(move |_, event| sink.borrow_mut().push(event.clone()));
    events
}

fn new_contract(title: &str) -> CreateContract {
    CreateContract {
        title: title.into(),
        provider: "Clínica Parceira".into(),
        contract_number: "300/2024".into(),
        value: 75_000.0,
        start_date: NaiveDate::from_ymd_opt(2024, 12, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2025, 11, 30).unwrap(),
        status: ContractStatus::Pending,
        description: String::new(),
        attachments: Vec::new(),
    }
}

#[test]
fn starts_on_login_screen_with_seed_data() {
    let (store, _) = setup();

    assert!(store.user().is_none());
    assert_eq!(store.current_view(), ViewState::Login);
    assert_eq!(store.contracts().len(), 5);
    assert_eq!(store.search_query(), "");
    assert_eq!(store.filter_status(), StatusFilter::All);
    assert!(store.selected_contract_id().is_none());
}

#[test]
fn login_then_logout() {
    let (mut store, _) = setup();

    store.login("saude@parauapebas.pa.gov.br");
    let user = store.user().unwrap();
    assert_eq!(user.name, "Admin Saúde");
    assert_eq!(user.email, "saude@parauapebas.pa.gov.br");
    assert_eq!(store.current_view(), ViewState::Dashboard);
    assert_eq!(store.active_screen(), ViewState::Dashboard);

    store.logout();
    assert!(store.user().is_none());
    assert_eq!(store.current_view(), ViewState::Login);
}

#[test]
fn sign_in_with_blank_password_changes_nothing() {
    let (mut store, _) = setup();
    let events = record_events(&mut store);

    let err = store
        .sign_in(&LoginInput::new("saude@parauapebas.pa.gov.br", ""))
        .unwrap_err();

    assert_eq!(err, AuthError::MissingCredentials);
    assert!(store.user().is_none());
    assert_eq!(store.current_view(), ViewState::Login);
    assert!(events.borrow().is_empty());

    store
        .sign_in(&LoginInput::new("saude@parauapebas.pa.gov.br", "senha"))
        .unwrap();
    assert!(store.user().is_some());
    assert_eq!(*events.borrow(), vec![StoreEvent::SignedIn]);
}

#[test]
fn signed_out_session_always_shows_login() {
    let (mut store, _) = setup();

    store.set_view(ViewState::Contracts);
    assert_eq!(store.current_view(), ViewState::Contracts);
    assert_eq!(store.active_screen(), ViewState::Login);
}

#[test]
fn add_contract_prepends_and_attributes_to_user() {
    let (mut store, _) = setup();
    store.login("saude@parauapebas.pa.gov.br");

    let created = store.add_contract(new_contract("Serviço de Lavanderia")).unwrap();

    assert_eq!(store.contracts().len(), 6);
    assert_eq!(store.contracts()[0].id, created.id);
    assert_eq!(created.last_update, start());
    assert_eq!(created.history.len(), 1);
    assert_eq!(created.history[0].action, HistoryAction::Creation);
    assert_eq!(created.history[0].user, "Admin Saúde");
    assert!(store.contracts()[1..].iter().all(|c| c.id != created.id));
}

#[test]
fn add_contract_without_user_is_attributed_to_system() {
    let (mut store, _) = setup();

    let created = store.add_contract(new_contract("Sem Sessão")).unwrap();
    assert_eq!(created.history[0].user, "Sistema");
}

#[test]
fn update_contract_changes_one_field_and_appends_edit() {
    let (mut store, clock) = setup();
    store.login("saude@parauapebas.pa.gov.br");
    let id = ContractId::new("1");
    let before = store.get_contract(&id).unwrap().clone();

    clock.advance(Duration::minutes(5));
    let updated = store
        .update_contract(
            &id,
            UpdateContract {
                provider: Some("MedEquip Nova".into()),
                ..Default::default()
            },
        )
        .unwrap();

    assert_eq!(updated.provider, "MedEquip Nova");
    assert!(updated.last_update > before.last_update);
    assert_eq!(updated.last_update, start() + Duration::minutes(5));
    assert_eq!(updated.history.len(), before.history.len() + 1);
    assert_eq!(updated.history.last().unwrap().action, HistoryAction::Edit);

    assert_eq!(updated.title, before.title);
    assert_eq!(updated.contract_number, before.contract_number);
    assert_eq!(updated.value, before.value);
    assert_eq!(updated.start_date, before.start_date);
    assert_eq!(updated.end_date, before.end_date);
    assert_eq!(updated.status, before.status);
    assert_eq!(updated.description, before.description);
    assert_eq!(updated.attachments, before.attachments);
}

#[test]
fn unknown_ids_leave_state_and_subscribers_untouched() {
    let (mut store, _) = setup();
    let events = record_events(&mut store);
    let snapshot = store.contracts().to_vec();
    let missing = ContractId::new("999");

    let err = store
        .update_contract(
            &missing,
            UpdateContract {
                status: Some(ContractStatus::Expired),
                ..Default::default()
            },
        )
        .unwrap_err();
    assert!(err.is_not_found());
    assert!(store.delete_contract(&missing).unwrap_err().is_not_found());

    assert_eq!(store.contracts(), snapshot.as_slice());
    assert!(events.borrow().is_empty());
}

#[test]
fn delete_contract_is_final() {
    let (mut store, _) = setup();
    let id = ContractId::new("4");

    store.delete_contract(&id).unwrap();
    assert_eq!(store.contracts().len(), 4);
    assert!(store.get_contract(&id).is_err());

    assert!(store.delete_contract(&id).is_err());
    assert_eq!(store.contracts().len(), 4);
}

#[test]
fn selection_is_a_weak_reference() {
    let (mut store, _) = setup();
    store.login("saude@parauapebas.pa.gov.br");
    let id = ContractId::new("2");

    store.open_contract(id.clone());
    assert_eq!(store.current_view(), ViewState::ContractDetails);
    assert_eq!(store.selected_contract().unwrap().id, id);

    store.delete_contract(&id).unwrap();
    assert_eq!(store.selected_contract_id(), Some(&id));
    assert!(store.selected_contract().is_none());

    store.set_selected_contract_id(Some(ContractId::new("never-existed")));
    assert!(store.selected_contract().is_none());
    store.set_selected_contract_id(None);
    assert!(store.selected_contract_id().is_none());
}

#[test]
fn visible_contracts_follow_criteria() {
    let (mut store, _) = setup();

    store.set_filter_status(StatusFilter::Only(ContractStatus::Active));
    let ids: Vec<_> = store
        .visible_contracts()
        .iter()
        .map(|c| c.id.to_string())
        .collect();
    assert_eq!(ids, vec!["1", "5"]);

    store.set_search_query("ambulâncias");
    let ids: Vec<_> = store
        .visible_contracts()
        .iter()
        .map(|c| c.id.to_string())
        .collect();
    assert_eq!(ids, vec!["5"]);

    store.set_filter_status(StatusFilter::All);
    store.set_search_query("");
    assert_eq!(store.visible_contracts().len(), store.contracts().len());
}

#[test]
fn new_contracts_show_first_in_filtered_list() {
    let (mut store, _) = setup();
    store.set_filter_status(StatusFilter::Only(ContractStatus::Pending));

    let created = store.add_contract(new_contract("Exames Laboratoriais")).unwrap();
    let visible = store.visible_contracts();
    assert_eq!(visible[0].id, created.id);
    assert_eq!(visible[1].id.as_str(), "3");
}

#[test]
fn attachments_are_edited_through_updates() {
    let (mut store, _) = setup();
    let id = ContractId::new("1");

    let updated = store.add_attachment(&id, "aditivo_01.pdf").unwrap();
    assert_eq!(
        updated.attachments,
        vec!["contrato_assinado.pdf", "anexo_tecnico.pdf", "aditivo_01.pdf"]
    );

    let updated = store.remove_attachment(&id, 0).unwrap();
    assert_eq!(updated.attachments, vec!["anexo_tecnico.pdf", "aditivo_01.pdf"]);
    assert_eq!(updated.history.len(), 4);

    let err = store.remove_attachment(&id, 7).unwrap_err();
    assert!(matches!(err, ContratoError::Validation { .. }));
    assert_eq!(store.get_contract(&id).unwrap().history.len(), 4);
}

#[test]
fn history_is_append_only_and_reversible_for_display() {
    let (store, _) = setup();
    let contract = store.get_contract(&ContractId::new("1")).unwrap();

    let newest_first: Vec<_> = contract.history_newest_first().map(|h| h.action).collect();
    assert_eq!(
        newest_first,
        vec![HistoryAction::AttachmentAdded, HistoryAction::Creation]
    );
    assert_eq!(contract.history[0].action, HistoryAction::Creation);
}

#[test]
fn subscribers_see_new_state_once_per_mutation() {
    let (mut store, _) = setup();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let sub = store.subscribe(move |snapshot, event| {
        sink.borrow_mut().push((event.clone(), snapshot.contracts.len()));
    });

    let created = store.add_contract(new_contract("Nova")).unwrap();
    store.delete_contract(&created.id).unwrap();

    assert_eq!(
        *seen.borrow(),
        vec![
            (StoreEvent::ContractAdded(created.id.clone()), 6),
            (StoreEvent::ContractDeleted(created.id.clone()), 5),
        ]
    );

    assert!(store.unsubscribe(sub));
    assert!(!store.unsubscribe(sub));
    store.set_view(ViewState::Settings);
    assert_eq!(seen.borrow().len(), 2);
}

#[test]
fn strict_validation_rejects_inconsistent_input() {
    let (mut store, _) = setup_with(StoreConfig {
        strict_validation: true,
        ..Default::default()
    });

    let mut inverted = new_contract("Datas Invertidas");
    inverted.end_date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let err = store.add_contract(inverted).unwrap_err();
    assert!(matches!(err, ContratoError::Validation { .. }));
    assert_eq!(store.contracts().len(), 5);

    let id = ContractId::new("3");
    let before = store.get_contract(&id).unwrap().clone();
    let err = store
        .update_contract(
            &id,
            UpdateContract {
                value: Some(-10.0),
                ..Default::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, ContratoError::Validation { .. }));
    assert_eq!(store.get_contract(&id).unwrap(), &before);
}

#[test]
fn lenient_mode_accepts_inconsistent_input() {
    let (mut store, _) = setup();

    let mut inverted = new_contract("Datas Invertidas");
    inverted.end_date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    inverted.value = -1.0;
    assert!(store.add_contract(inverted).is_ok());
}

#[test]
fn dashboard_reports_expiring_contracts() {
    let (store, clock) = setup();

    let summary = store.dashboard();
    assert_eq!(summary.stats.total, 5);
    assert_eq!(summary.stats.active, 2);
    assert_eq!(summary.stats.pending, 1);
    assert_eq!(summary.stats.expired, 1);
    assert_eq!(summary.stats.concluded, 1);
    assert_eq!(summary.stats.total_value, 6_635_000.0);

    let expiring: Vec<_> = summary
        .expiring
        .iter()
        .map(|e| (e.contract.id.as_str(), e.days_remaining, e.urgency))
        .collect();
    assert_eq!(
        expiring,
        vec![
            ("1", 5, ExpiryUrgency::Critical),
            ("5", 6, ExpiryUrgency::Critical),
        ]
    );

    clock.advance(Duration::days(10));
    assert!(store.dashboard().expiring.is_empty());
}

#[test]
fn dashboard_accepts_any_configured_window() {
    let (store, _) = setup_with(StoreConfig {
        expiring_window_days: 200_000_000,
        ..Default::default()
    });

    let summary = store.dashboard();
    let ids: Vec<_> = summary
        .expiring
        .iter()
        .map(|e| e.contract.id.as_str())
        .collect();
    assert_eq!(ids, vec!["1", "3", "5"]);
}

#[test]
fn sign_in_accepts_whitespace_password() {
    let (mut store, _) = setup();

    store
        .sign_in(&LoginInput::new("saude@parauapebas.pa.gov.br", "   "))
        .unwrap();
    assert!(store.user().is_some());
    assert_eq!(store.current_view(), ViewState::Dashboard);
}

#[test]
fn dashboard_serializes_for_the_view_layer() {
    let (store, _) = setup();
    let json = serde_json::to_value(store.dashboard()).unwrap();

    assert_eq!(json["stats"]["total"], 5);
    assert_eq!(json["expiring"][0]["contract"]["id"], "1");
}
