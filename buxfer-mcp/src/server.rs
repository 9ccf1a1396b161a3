//! MCP server implementation for the Buxfer adapter.
//!
//! Exposes 3 tools for AI agents to manage Buxfer transactions and accounts.
//!
//! Success, empty-result, and failure outcomes all travel through the single
//! text channel of a tool result, distinguished by a leading marker (✅/📊/📋,
//! ℹ️, ❌). Failures are additionally logged for operator visibility; none
//! propagates to the host as a protocol-level fault.

use async_trait::async_trait;
use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{
        CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    tool, tool_handler, tool_router,
};
use std::sync::Arc;

use buxfer_client::{
    Account, AddTransactionRequest, BuxferClient, ClientError, Result as ClientResult,
    Transaction, TransactionQuery, TransactionsPage,
};

use crate::format;
use crate::schemas::{AddTransactionParams, ListAccountsParams, ListTransactionsParams};

/// Seam between the tool handlers and the upstream API, so tests can
/// substitute a recording mock for the real HTTP client.
#[async_trait]
trait FinanceGateway: Send + Sync {
    async fn accounts(&self) -> ClientResult<Vec<Account>>;

    async fn transactions(&self, query: &TransactionQuery) -> ClientResult<TransactionsPage>;

    async fn add_transaction(&self, req: &AddTransactionRequest) -> ClientResult<Transaction>;
}

struct HttpFinanceGateway {
    client: BuxferClient,
}

#[async_trait]
impl FinanceGateway for HttpFinanceGateway {
    async fn accounts(&self) -> ClientResult<Vec<Account>> {
        self.client.accounts().await
    }

    async fn transactions(&self, query: &TransactionQuery) -> ClientResult<TransactionsPage> {
        self.client.transactions(query).await
    }

    async fn add_transaction(&self, req: &AddTransactionRequest) -> ClientResult<Transaction> {
        self.client.add_transaction(req).await
    }
}

fn text_reply(text: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.into())])
}

/// Render a failure into the single-string error channel, logging it first.
fn error_reply(context: &str, error: &ClientError) -> CallToolResult {
    tracing::warn!("{context} error: {error}");
    text_reply(format!("❌ Error: {error}"))
}

/// MCP server for Buxfer.
///
/// Provides AI agents with access to personal-finance data through the
/// Model Context Protocol.
#[derive(Clone)]
pub struct BuxferMcp {
    /// Gateway to the upstream finance API.
    gateway: Arc<dyn FinanceGateway>,
    /// Tool router generated by macro.
    tool_router: ToolRouter<Self>,
}

impl BuxferMcp {
    /// Create a new MCP server instance backed by the given client.
    #[must_use]
    pub fn new(client: BuxferClient) -> Self {
        Self::with_gateway(Arc::new(HttpFinanceGateway { client }))
    }

    fn with_gateway(gateway: Arc<dyn FinanceGateway>) -> Self {
        Self {
            gateway,
            tool_router: Self::tool_router(),
        }
    }
}

/// Check `add_transaction` arguments in documented order; the first failing
/// check wins and no upstream call is made.
fn validate_add(params: &AddTransactionParams) -> ClientResult<()> {
    if params.description.is_empty() {
        return Err(ClientError::Validation("Description is required".to_string()));
    }
    if params.amount.is_empty() {
        return Err(ClientError::Validation("Amount is required".to_string()));
    }
    if params.account_id.is_empty() && params.account_name.is_empty() {
        return Err(ClientError::Validation(
            "Either account_id or account_name is required".to_string(),
        ));
    }
    Ok(())
}

#[tool_router]
impl BuxferMcp {
    /// Create one transaction upstream.
    #[tool(
        description = "Add a new transaction to Buxfer with description, amount, account, date, \
                       tags, type (expense/income/transfer/loan/etc), and status (cleared/pending)"
    )]
    async fn add_transaction(
        &self,
        Parameters(params): Parameters<AddTransactionParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Adding transaction: {}", params.description);

        if let Err(e) = validate_add(&params) {
            return Ok(error_reply("Add transaction", &e));
        }

        let req = AddTransactionRequest {
            description: params.description,
            amount: params.amount,
            account_id: params.account_id,
            account_name: params.account_name,
            date: params.date,
            tags: params.tags,
            kind: params.transaction_type,
            status: params.status,
        };

        match self.gateway.add_transaction(&req).await {
            Ok(txn) => Ok(text_reply(format::render_added(&txn))),
            Err(e) => Ok(error_reply("Add transaction", &e)),
        }
    }

    /// Fetch and render every account visible to the credential.
    #[tool(
        description = "Get all Buxfer accounts with their current balances, IDs, banks, and last \
                       sync times"
    )]
    async fn list_accounts(
        &self,
        _params: Parameters<ListAccountsParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Fetching accounts list");

        match self.gateway.accounts().await {
            Ok(accounts) if accounts.is_empty() => Ok(text_reply("ℹ️ No accounts found")),
            Ok(accounts) => Ok(text_reply(format::render_accounts(&accounts))),
            Err(e) => Ok(error_reply("List accounts", &e)),
        }
    }

    /// Fetch one page of transactions matching the optional filters.
    #[tool(
        description = "Get transactions from Buxfer with optional filters: account_id, \
                       account_name, tag_name, start_date (YYYY-MM-DD), end_date (YYYY-MM-DD), \
                       month (e.g. 'jan 2024'), status (pending/cleared/reconciled), page number \
                       for pagination"
    )]
    async fn list_transactions(
        &self,
        Parameters(params): Parameters<ListTransactionsParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Fetching transactions");

        let query = TransactionQuery {
            account_id: params.account_id,
            account_name: params.account_name,
            tag_name: params.tag_name,
            start_date: params.start_date,
            end_date: params.end_date,
            month: params.month,
            status: params.status,
            page: params.page,
        };

        match self.gateway.transactions(&query).await {
            Ok(page) if page.transactions.is_empty() => Ok(text_reply(
                "ℹ️ No transactions found matching your criteria",
            )),
            Ok(page) => Ok(text_reply(format::render_transactions(&query, &page))),
            Err(e) => Ok(error_reply("List transactions", &e)),
        }
    }
}

#[tool_handler]
impl ServerHandler for BuxferMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "Buxfer MCP Server - Manage your Buxfer transactions and accounts. \
                 Use list_accounts to see balances, list_transactions to browse and filter \
                 transaction history, and add_transaction to record a new transaction. \
                 A BUXFER_TOKEN credential must be configured for any call to succeed."
                    .into(),
            ),
        }
    }
}

#[cfg(test)]
#[path = "test_mocks.rs"]
#[allow(clippy::unwrap_used, clippy::panic)]
pub(crate) mod test_mocks;

#[cfg(test)]
#[path = "server_tests.rs"]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests;

#[cfg(test)]
#[path = "client_integration_tests.rs"]
#[allow(clippy::unwrap_used, clippy::panic)]
mod client_integration_tests;
