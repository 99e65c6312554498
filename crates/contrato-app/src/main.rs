//! Contrato — application root.
//!
//! Owns the store, signs in, exercises the contract list operations the
//! way the screens do, and prints the resulting dashboard as JSON.

mod config;

use std::error::Error;
use std::process::ExitCode;

use chrono::{Duration, Utc};
use contrato_auth::{LoginGate, LoginInput};
use contrato_core::models::contract::{ContractStatus, CreateContract, UpdateContract};
use contrato_core::models::view::{StatusFilter, ViewState};
use contrato_store::AppStore;
use serde_json::json;
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

fn main() -> ExitCode {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("contrato=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .json()
        .init();

    tracing::info!("Starting contract management session...");

    match run(AppConfig::from_env()) {
        Ok(()) => {
            tracing::info!("Session finished.");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "Session aborted");
            ExitCode::FAILURE
        }
    }
}

fn run(config: AppConfig) -> Result<(), Box<dyn Error>> {
    let mut store = AppStore::new(config.store, LoginGate::new(config.auth));
    store.subscribe(|snapshot, event| {
        tracing::debug!(
            ?event,
            contracts = snapshot.contracts.len(),
            screen = ?snapshot.session.active_screen(),
            "State changed"
        );
    });

    store.sign_in(&LoginInput::new("saude@parauapebas.pa.gov.br", "demo"))?;

    let today = Utc::now().date_naive();
    let created = store.add_contract(CreateContract {
        title: "Serviço de Coleta de Resíduos Hospitalares".into(),
        provider: "EcoSaúde Ambiental".into(),
        contract_number: "301/2025".into(),
        value: 320_000.0,
        start_date: today,
        end_date: today + Duration::days(20),
        status: ContractStatus::Pending,
        description: "Coleta e destinação de resíduos do grupo A.".into(),
        attachments: Vec::new(),
    })?;
    store.add_attachment(&created.id, "proposta_tecnica.pdf")?;
    store.update_contract(
        &created.id,
        UpdateContract {
            status: Some(ContractStatus::Active),
            ..Default::default()
        },
    )?;

    store.set_view(ViewState::Contracts);
    store.set_filter_status(StatusFilter::Only(ContractStatus::Active));
    store.open_contract(created.id.clone());

    let visible: Vec<_> = store
        .visible_contracts()
        .iter()
        .map(|c| c.id.to_string())
        .collect();
    let selected = store.selected_contract().map(|c| {
        c.history_newest_first()
            .map(|h| json!({ "action": h.action.label(), "user": h.user, "date": h.date }))
            .collect::<Vec<_>>()
    });

    let report = json!({
        "user": store.user(),
        "screen": store.active_screen(),
        "visible": visible,
        "selected_history": selected,
        "dashboard": store.dashboard(),
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
