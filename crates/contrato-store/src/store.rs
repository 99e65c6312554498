//! The application state store.

use contrato_auth::{AuthError, LoginGate, LoginInput};
use contrato_core::clock::{Clock, SystemClock};
use contrato_core::error::{ContratoError, ContratoResult};
use contrato_core::models::contract::{Contract, ContractId, CreateContract, UpdateContract};
use contrato_core::models::user::User;
use contrato_core::models::view::{StatusFilter, ViewState};
use contrato_core::repository::{ChangeContext, ContractRepository};
use contrato_core::stats::DashboardSummary;
use contrato_db::MemoryContractRepository;
use tracing::{debug, info};

use crate::config::StoreConfig;
use crate::event::{Listener, StoreEvent, Subscription, SubscriptionId};
use crate::state::{SessionState, Snapshot};

/// Single source of truth for the contract management views.
///
/// Generic over the contract repository and the clock so tests can drive
/// time and swap storage.
pub struct AppStore<R = MemoryContractRepository, C = SystemClock> {
    repo: R,
    clock: C,
    gate: LoginGate,
    config: StoreConfig,
    session: SessionState,
    listeners: Vec<Subscription>,
    next_subscription: u64,
}

impl AppStore<MemoryContractRepository, SystemClock> {
    /// In-memory store on the wall clock, seeded according to `config`.
    pub fn new(config: StoreConfig, gate: LoginGate) -> Self {
        let repo = if config.seed_mock_data {
            MemoryContractRepository::seeded()
        } else {
            MemoryContractRepository::new()
        };
        Self::with_parts(repo, SystemClock, gate, config)
    }
}

impl<R: ContractRepository, C: Clock> AppStore<R, C> {
    pub fn with_parts(repo: R, clock: C, gate: LoginGate, config: StoreConfig) -> Self {
        info!(
            contracts = repo.len(),
            strict_validation = config.strict_validation,
            "Store initialized"
        );
        Self {
            repo,
            clock,
            gate,
            config,
            session: SessionState::default(),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    // -----------------------------------------------------------------------
    // Read accessors
    // -----------------------------------------------------------------------

    pub fn user(&self) -> Option<&User> {
        self.session.user.as_ref()
    }

    pub fn current_view(&self) -> ViewState {
        self.session.current_view
    }

    pub fn active_screen(&self) -> ViewState {
        self.session.active_screen()
    }

    /// Full collection, most recently created first.
    pub fn contracts(&self) -> &[Contract] {
        self.repo.list()
    }

    pub fn search_query(&self) -> &str {
        &self.session.search_query
    }

    pub fn filter_status(&self) -> StatusFilter {
        self.session.filter_status
    }

    pub fn selected_contract_id(&self) -> Option<&ContractId> {
        self.session.selected_contract_id.as_ref()
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            session: &self.session,
            contracts: self.repo.list(),
        }
    }

    pub fn get_contract(&self, id: &ContractId) -> ContratoResult<&Contract> {
        self.repo.get_by_id(id)
    }

    /// The selected contract, if the selection still resolves.
    pub fn selected_contract(&self) -> Option<&Contract> {
        self.snapshot().selected_contract()
    }

    /// Contracts matching the current search text and status filter.
    pub fn visible_contracts(&self) -> Vec<&Contract> {
        self.snapshot().visible_contracts()
    }

    pub fn dashboard(&self) -> DashboardSummary<'_> {
        DashboardSummary::compute(
            self.repo.list(),
            self.clock.now(),
            self.config.expiring_window_days,
        )
    }

    // -----------------------------------------------------------------------
    // Session
    // -----------------------------------------------------------------------

    /// Sign in as `email` without any credential check.
    pub fn login(&mut self, email: &str) {
        let user = self.gate.user_for(email);
        self.start_session(user);
    }

    /// Login form submission. Rejects blank fields without touching state.
    pub fn sign_in(&mut self, input: &LoginInput) -> Result<(), AuthError> {
        let user = self.gate.authenticate(input)?;
        self.start_session(user);
        Ok(())
    }

    fn start_session(&mut self, user: User) {
        info!(user_id = %user.id, email = %user.email, "User signed in");
        self.session.user = Some(user);
        self.session.current_view = ViewState::Dashboard;
        self.notify(StoreEvent::SignedIn);
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.session.user.take() {
            info!(user_id = %user.id, "User signed out");
        }
        self.session.current_view = ViewState::Login;
        self.notify(StoreEvent::SignedOut);
    }

    // -----------------------------------------------------------------------
    // Navigation and filter criteria
    // -----------------------------------------------------------------------

    pub fn set_view(&mut self, view: ViewState) {
        debug!(?view, "View changed");
        self.session.current_view = view;
        self.notify(StoreEvent::ViewChanged(view));
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.session.search_query = query.into();
        debug!(query = %self.session.search_query, "Search query changed");
        self.notify(StoreEvent::SearchChanged);
    }

    pub fn set_filter_status(&mut self, status: StatusFilter) {
        debug!(?status, "Status filter changed");
        self.session.filter_status = status;
        self.notify(StoreEvent::FilterChanged(status));
    }

    /// Does not check that `id` exists.
    pub fn set_selected_contract_id(&mut self, id: Option<ContractId>) {
        debug!(contract_id = ?id, "Selection changed");
        self.session.selected_contract_id = id.clone();
        self.notify(StoreEvent::SelectionChanged(id));
    }

    /// Select `id` and switch to the details view.
    pub fn open_contract(&mut self, id: ContractId) {
        debug!(contract_id = %id, "Opening contract details");
        self.session.selected_contract_id = Some(id.clone());
        self.session.current_view = ViewState::ContractDetails;
        self.notify(StoreEvent::ContractOpened(id));
    }

    // -----------------------------------------------------------------------
    // Contract mutations
    // -----------------------------------------------------------------------

    pub fn add_contract(&mut self, input: CreateContract) -> ContratoResult<Contract> {
        if self.config.strict_validation {
            input.validate()?;
        }
        let ctx = self.change_context();
        let contract = self.repo.create(input, &ctx)?;
        info!(contract_id = %contract.id, actor = %ctx.actor, "Contract created");
        self.notify(StoreEvent::ContractAdded(contract.id.clone()));
        Ok(contract)
    }

    /// Merge `input` into the contract. Unknown ids return `NotFound` and
    /// change nothing.
    pub fn update_contract(
        &mut self,
        id: &ContractId,
        input: UpdateContract,
    ) -> ContratoResult<Contract> {
        if self.config.strict_validation {
            let mut preview = self.repo.get_by_id(id)?.clone();
            input.clone().apply_to(&mut preview);
            preview.validate()?;
        }
        let ctx = self.change_context();
        let contract = self.repo.update(id, input, &ctx)?;
        info!(contract_id = %id, actor = %ctx.actor, "Contract updated");
        self.notify(StoreEvent::ContractUpdated(id.clone()));
        Ok(contract)
    }

    /// Irreversible. Unknown ids return `NotFound` and change nothing.
    pub fn delete_contract(&mut self, id: &ContractId) -> ContratoResult<Contract> {
        let removed = self.repo.delete(id)?;
        info!(contract_id = %id, "Contract deleted");
        self.notify(StoreEvent::ContractDeleted(id.clone()));
        Ok(removed)
    }

    pub fn add_attachment(
        &mut self,
        id: &ContractId,
        filename: impl Into<String>,
    ) -> ContratoResult<Contract> {
        let mut attachments = self.repo.get_by_id(id)?.attachments.clone();
        attachments.push(filename.into());
        self.update_contract(
            id,
            UpdateContract {
                attachments: Some(attachments),
                ..Default::default()
            },
        )
    }

    pub fn remove_attachment(&mut self, id: &ContractId, index: usize) -> ContratoResult<Contract> {
        let mut attachments = self.repo.get_by_id(id)?.attachments.clone();
        if index >= attachments.len() {
            return Err(ContratoError::validation(format!(
                "attachment index {index} out of range for contract {id} ({} attachments)",
                attachments.len()
            )));
        }
        attachments.remove(index);
        self.update_contract(
            id,
            UpdateContract {
                attachments: Some(attachments),
                ..Default::default()
            },
        )
    }

    // -----------------------------------------------------------------------
    // Subscriptions
    // -----------------------------------------------------------------------

    /// Register a listener invoked after every successful state change.
    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&Snapshot<'_>, &StoreEvent) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        let listener: Listener = Box::new(listener);
        self.listeners.push(Subscription { id, listener });
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|s| s.id != id);
        self.listeners.len() != before
    }

    fn change_context(&self) -> ChangeContext {
        let actor = match &self.session.user {
            Some(user) => user.name.clone(),
            None => self.config.system_actor.clone(),
        };
        ChangeContext::new(actor, self.clock.now())
    }

    fn notify(&mut self, event: StoreEvent) {
        let snapshot = Snapshot {
            session: &self.session,
            contracts: self.repo.list(),
        };
        for subscription in &mut self.listeners {
            (subscription.listener)(&snapshot, &event);
        }
    }
}
