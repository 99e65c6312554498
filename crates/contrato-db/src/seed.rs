//! Sample contracts loaded when the store starts.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use contrato_core::models::contract::{Contract, ContractId, ContractStatus};
use contrato_core::models::history::{ContractHistoryItem, HistoryAction};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("seed dates are valid calendar dates")
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .expect("seed timestamps are valid UTC instants")
}

fn entry(
    id: &str,
    date: DateTime<Utc>,
    action: HistoryAction,
    user: &str,
    details: &str,
) -> ContractHistoryItem {
    ContractHistoryItem {
        id: id.into(),
        date,
        action,
        user: user.into(),
        details: details.into(),
    }
}

/// The fixed sample collection, ids `"1"` to `"5"` in that order.
pub fn seed_contracts() -> Vec<Contract> {
    vec![
        Contract {
            id: ContractId::new("1"),
            title: "Aquisição de Equipamentos Hospitalares".into(),
            provider: "MedEquip Soluções LTDA".into(),
            contract_number: "123/2024".into(),
            value: 1_250_000.00,
            start_date: date(2024, 1, 1),
            end_date: date(2024, 12, 31),
            status: ContractStatus::Active,
            description: "Compra de respiradores e monitores multiparamétricos para a UPA."
                .into(),
            last_update: at(2024, 5, 20, 10, 0),
            attachments: vec!["contrato_assinado.pdf".into(), "anexo_tecnico.pdf".into()],
            history: vec![
                entry(
                    "h1",
                    at(2024, 1, 1, 8, 0),
                    HistoryAction::Creation,
                    "Admin Saúde",
                    "Contrato cadastrado no sistema",
                ),
                entry(
                    "h2",
                    at(2024, 5, 20, 10, 0),
                    HistoryAction::AttachmentAdded,
                    "Admin Saúde",
                    "Anexo técnico incluído",
                ),
            ],
        },
        Contract {
            id: ContractId::new("2"),
            title: "Serviço de Manutenção Preventiva".into(),
            provider: "Health Tech Services".into(),
            contract_number: "058/2023".into(),
            value: 85_000.00,
            start_date: date(2023, 6, 15),
            end_date: date(2023, 12, 14),
            status: ContractStatus::Expired,
            description: "Manutenção de aparelhos de raio-x.".into(),
            last_update: at(2023, 12, 15, 9, 30),
            attachments: vec!["termo_encerramento.pdf".into()],
            history: vec![
                entry(
                    "h1",
                    at(2023, 6, 15, 9, 0),
                    HistoryAction::Creation,
                    "Roberto Silva",
                    "Contrato iniciado",
                ),
                entry(
                    "h2",
                    at(2023, 12, 14, 18, 0),
                    HistoryAction::Expiration,
                    "Sistema",
                    "Contrato venceu automaticamente",
                ),
            ],
        },
        Contract {
            id: ContractId::new("3"),
            title: "Fornecimento de Medicamentos".into(),
            provider: "Distribuidora Farma+".into(),
            contract_number: "215/2024".into(),
            value: 4_500_000.00,
            start_date: date(2024, 3, 10),
            end_date: date(2025, 3, 9),
            status: ContractStatus::Pending,
            description: "Medicamentos da farmácia básica.".into(),
            last_update: at(2024, 6, 1, 14, 20),
            attachments: Vec::new(),
            history: vec![entry(
                "h1",
                at(2024, 3, 10, 10, 0),
                HistoryAction::Creation,
                "Admin Saúde",
                "Processo licitatório finalizado",
            )],
        },
        Contract {
            id: ContractId::new("4"),
            title: "Consultoria em Gestão de Saúde".into(),
            provider: "Innova Consultoria".into(),
            contract_number: "007/2022".into(),
            value: 200_000.00,
            start_date: date(2022, 2, 1),
            end_date: date(2023, 1, 31),
            status: ContractStatus::Concluded,
            description: "Otimização de fluxos de atendimento.".into(),
            last_update: at(2023, 2, 1, 11, 0),
            attachments: Vec::new(),
            history: vec![
                entry(
                    "h1",
                    at(2022, 2, 1, 8, 0),
                    HistoryAction::Creation,
                    "Admin Saúde",
                    "Início da vigência",
                ),
                entry(
                    "h2",
                    at(2023, 2, 1, 11, 0),
                    HistoryAction::Conclusion,
                    "Admin Saúde",
                    "Serviço entregue e finalizado",
                ),
            ],
        },
        Contract {
            id: ContractId::new("5"),
            title: "Locação de Ambulâncias".into(),
            provider: "RapidRescue Transportes".into(),
            contract_number: "089/2024".into(),
            value: 600_000.00,
            start_date: date(2024, 1, 1),
            end_date: date(2025, 1, 1),
            status: ContractStatus::Active,
            description: "Locação de 5 ambulâncias UTI móvel.".into(),
            last_update: at(2024, 2, 15, 8, 0),
            attachments: vec!["edital_licitacao.pdf".into(), "proposta_vencedora.pdf".into()],
            history: vec![
                entry(
                    "h1",
                    at(2024, 1, 1, 8, 0),
                    HistoryAction::Creation,
                    "Admin Saúde",
                    "Início do contrato",
                ),
                entry(
                    "h2",
                    at(2024, 2, 15, 8, 0),
                    HistoryAction::Amendment,
                    "Admin Saúde",
                    "Adicionado aditivo de prazo",
                ),
            ],
        },
    ]
}
