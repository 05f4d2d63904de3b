//! In-memory adapters for check tests.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::dns::{DnsLookup, DnsQueryResult, QueryType};
use crate::domain::Domain;
use crate::error_handling::{DnsAbsence, FetchFailure};
use crate::fetch::{FetchResult, HttpFetch};

pub(crate) fn domain() -> Domain {
    Domain::parse("example.com").unwrap()
}

pub(crate) fn records(values: &[&str]) -> DnsQueryResult {
    DnsQueryResult::Records(values.iter().map(|v| v.to_string()).collect())
}

/// Answers from a fixed table; unknown names have no records.
#[derive(Default)]
pub(crate) struct StaticResolver {
    answers: HashMap<(String, QueryType), DnsQueryResult>,
    queried: Mutex<Vec<String>>,
}

impl StaticResolver {
    pub(crate) fn with(mut self, name: &str, query_type: QueryType, answer: DnsQueryResult) -> Self {
        self.answers.insert((name.to_string(), query_type), answer);
        self
    }

    pub(crate) fn txt(self, name: &str, values: &[&str]) -> Self {
        self.with(name, QueryType::Txt, records(values))
    }

    pub(crate) fn queried(&self) -> Vec<String> {
        self.queried.lock().unwrap().clone()
    }
}

impl DnsLookup for StaticResolver {
    async fn lookup(&self, name: &str, query_type: QueryType) -> DnsQueryResult {
        self.queried.lock().unwrap().push(name.to_string());
        self.answers
            .get(&(name.to_string(), query_type))
            .cloned()
            .unwrap_or(DnsQueryResult::Absent(DnsAbsence::NoSuchRecord))
    }
}

/// Answers from a fixed table; unknown URLs fail to connect.
#[derive(Default)]
pub(crate) struct StaticFetcher {
    responses: HashMap<String, FetchResult>,
    fetched: Mutex<Vec<String>>,
}

impl StaticFetcher {
    pub(crate) fn with(mut self, url: &str, result: FetchResult) -> Self {
        self.responses.insert(url.to_string(), result);
        self
    }

    pub(crate) fn fetched(&self) -> Vec<String> {
        self.fetched.lock().unwrap().clone()
    }
}

impl HttpFetch for StaticFetcher {
    async fn fetch(&self, url: &str) -> FetchResult {
        self.fetched.lock().unwrap().push(url.to_string());
        self.responses.get(url).cloned().unwrap_or_else(|| {
            FetchResult::Failed(FetchFailure::Connect("connection refused".to_string()))
        })
    }
}

pub(crate) fn ok() -> FetchResult {
    FetchResult::Success {
        status: 200,
        has_body: true,
    }
}
