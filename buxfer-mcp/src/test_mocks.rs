use super::*;

use tokio::sync::Mutex;

/// Recording mock for the upstream gateway.
///
/// Each operation returns a settable canned result and records the arguments
/// it was invoked with, so tests can assert both the rendered output and the
/// exact request shape (or the absence of any upstream call).
pub(crate) struct MockFinanceGateway {
    accounts_result: Mutex<ClientResult<Vec<Account>>>,
    transactions_result: Mutex<ClientResult<TransactionsPage>>,
    add_result: Mutex<ClientResult<Transaction>>,
    accounts_calls: Mutex<u32>,
    transaction_queries: Mutex<Vec<TransactionQuery>>,
    add_requests: Mutex<Vec<AddTransactionRequest>>,
}

impl Default for MockFinanceGateway {
    fn default() -> Self {
        Self {
            accounts_result: Mutex::new(Ok(Vec::new())),
            transactions_result: Mutex::new(Ok(TransactionsPage::default())),
            add_result: Mutex::new(Ok(Transaction::default())),
            accounts_calls: Mutex::new(0),
            transaction_queries: Mutex::new(Vec::new()),
            add_requests: Mutex::new(Vec::new()),
        }
    }
}

impl MockFinanceGateway {
    pub async fn set_accounts(&self, accounts: Vec<Account>) {
        *self.accounts_result.lock().await = Ok(accounts);
    }

    pub async fn set_accounts_error(&self, error: ClientError) {
        *self.accounts_result.lock().await = Err(error);
    }

    pub async fn set_transactions(&self, page: TransactionsPage) {
        *self.transactions_result.lock().await = Ok(page);
    }

    pub async fn set_transactions_error(&self, error: ClientError) {
        *self.transactions_result.lock().await = Err(error);
    }

    pub async fn set_add_result(&self, txn: Transaction) {
        *self.add_result.lock().await = Ok(txn);
    }

    pub async fn set_add_error(&self, error: ClientError) {
        *self.add_result.lock().await = Err(error);
    }

    pub async fn accounts_calls(&self) -> u32 {
        *self.accounts_calls.lock().await
    }

    pub async fn transaction_queries(&self) -> Vec<TransactionQuery> {
        self.transaction_queries.lock().await.clone()
    }

    pub async fn add_requests(&self) -> Vec<AddTransactionRequest> {
        self.add_requests.lock().await.clone()
    }
}

#[async_trait]
impl FinanceGateway for MockFinanceGateway {
    async fn accounts(&self) -> ClientResult<Vec<Account>> {
        *self.accounts_calls.lock().await += 1;
        self.accounts_result.lock().await.clone()
    }

    async fn transactions(&self, query: &TransactionQuery) -> ClientResult<TransactionsPage> {
        self.transaction_queries.lock().await.push(query.clone());
        self.transactions_result.lock().await.clone()
    }

    async fn add_transaction(&self, req: &AddTransactionRequest) -> ClientResult<Transaction> {
        self.add_requests.lock().await.push(req.clone());
        self.add_result.lock().await.clone()
    }
}

pub(crate) fn test_account(name: &str, balance: f64) -> Account {
    Account {
        id: Some(42),
        name: Some(name.to_string()),
        bank: Some("First National".to_string()),
        balance: Some(balance),
        last_synced: Some("2024-03-01 08:00".to_string()),
    }
}

pub(crate) fn test_transaction(description: &str) -> Transaction {
    Transaction {
        id: Some(9001),
        description: Some(description.to_string()),
        amount: Some(82.1),
        kind: Some("expense".to_string()),
        status: Some("cleared".to_string()),
        tags: Some("food".to_string()),
        account_name: Some("Checking".to_string()),
        extra_info: None,
        date: Some("2024-03-02".to_string()),
    }
}

/// Extract the single text payload from a tool result.
pub(crate) fn reply_text(result: &CallToolResult) -> &str {
    result
        .content
        .first()
        .and_then(|c| c.raw.as_text())
        .map(|t| t.text.as_str())
        .expect("expected text content in result")
}

pub(super) fn build_server(gateway: Arc<dyn FinanceGateway>) -> BuxferMcp {
    BuxferMcp::with_gateway(gateway)
}
