//! Buxfer API type definitions

use serde::Deserialize;

/// One Buxfer account, as returned inside the `accounts` payload key.
///
/// Every field is optional: the formatter substitutes a documented
/// placeholder for anything the upstream omits, it never fails on a sparse
/// record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Account {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub bank: Option<String>,
    #[serde(default)]
    pub balance: Option<f64>,
    #[serde(default, rename = "lastSynced")]
    pub last_synced: Option<String>,
}

/// One Buxfer transaction.
///
/// `kind` carries the upstream's open-ended `type` vocabulary
/// (expense/income/transfer/loan/...). `date` is echoed verbatim by
/// consumers and never parsed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Transaction {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default, rename = "accountName")]
    pub account_name: Option<String>,
    #[serde(default, rename = "extraInfo")]
    pub extra_info: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

/// One page of transactions plus the upstream-reported total across all
/// pages.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransactionsPage {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default, rename = "numTransactions")]
    pub num_transactions: u32,
}

/// Caller-supplied filter criteria for a transaction listing.
///
/// A field is forwarded upstream only when non-empty; an empty string means
/// "do not filter on this dimension". `page` is the exception: it always has
/// a meaningful default and is always sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionQuery {
    pub account_id: String,
    pub account_name: String,
    pub tag_name: String,
    pub start_date: String,
    pub end_date: String,
    pub month: String,
    pub status: String,
    pub page: String,
}

impl TransactionQuery {
    /// Translate the filter set into upstream query parameters, applying the
    /// sparse-inclusion rule.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_if_present(&mut pairs, "accountId", &self.account_id);
        push_if_present(&mut pairs, "accountName", &self.account_name);
        push_if_present(&mut pairs, "tagName", &self.tag_name);
        push_if_present(&mut pairs, "startDate", &self.start_date);
        push_if_present(&mut pairs, "endDate", &self.end_date);
        push_if_present(&mut pairs, "month", &self.month);
        push_if_present(&mut pairs, "status", &self.status);

        let page = if self.page.is_empty() { "1" } else { &self.page };
        pairs.push(("page", page.to_string()));
        pairs
    }

    /// The 1-based page number for display purposes.
    ///
    /// Falls back to 1 when the caller's page argument is absent or not a
    /// number; this parse is never a fatal error.
    pub fn page_number(&self) -> u32 {
        self.page.trim().parse().unwrap_or(1)
    }
}

/// Fields for creating one transaction upstream.
///
/// `kind` and `status` may be left empty by the caller; the request shaping
/// substitutes the upstream defaults (`expense` / `cleared`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddTransactionRequest {
    pub description: String,
    pub amount: String,
    pub account_id: String,
    pub account_name: String,
    pub date: String,
    pub tags: String,
    pub kind: String,
    pub status: String,
}

impl AddTransactionRequest {
    /// Translate the request into form-body pairs.
    ///
    /// The required fields (description, amount, type, status) are always
    /// included; the optional ones follow the sparse-inclusion rule, since
    /// the upstream treats an explicitly-sent empty field differently from
    /// an absent one.
    pub fn form_pairs(&self) -> Vec<(&'static str, String)> {
        let kind = if self.kind.is_empty() {
            "expense"
        } else {
            &self.kind
        };
        let status = if self.status.is_empty() {
            "cleared"
        } else {
            &self.status
        };

        let mut pairs = vec![
            ("description", self.description.clone()),
            ("amount", self.amount.clone()),
            ("type", kind.to_string()),
            ("status", status.to_string()),
        ];
        push_if_present(&mut pairs, "accountId", &self.account_id);
        push_if_present(&mut pairs, "accountName", &self.account_name);
        push_if_present(&mut pairs, "date", &self.date);
        push_if_present(&mut pairs, "tags", &self.tags);
        pairs
    }
}

fn push_if_present(pairs: &mut Vec<(&'static str, String)>, key: &'static str, value: &str) {
    if !value.is_empty() {
        pairs.push((key, value.to_string()));
    }
}
