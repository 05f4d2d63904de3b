// Shared test helpers: in-memory DNS and HTTP adapters.
//
// These implement the library's public adapter traits so whole runs can be
// exercised without network access.

use std::collections::HashMap;
use std::sync::Mutex;

use mail_posture::dns::{DnsLookup, DnsQueryResult, QueryType};
use mail_posture::error_handling::{DnsAbsence, FetchFailure};
use mail_posture::fetch::{FetchResult, HttpFetch};

/// Resolver answering from a fixed zone; unknown names have no records.
#[derive(Default)]
pub struct FakeZone {
    answers: HashMap<(String, QueryType), DnsQueryResult>,
    queries: Mutex<Vec<(String, QueryType)>>,
}

#[allow(dead_code)] // Not every test file uses every helper
impl FakeZone {
    pub fn answer(mut self, name: &str, query_type: QueryType, answer: DnsQueryResult) -> Self {
        self.answers.insert((name.to_string(), query_type), answer);
        self
    }

    pub fn txt(self, name: &str, values: &[&str]) -> Self {
        let records = values.iter().map(|v| v.to_string()).collect();
        self.answer(name, QueryType::Txt, DnsQueryResult::Records(records))
    }

    pub fn mx(self, name: &str, values: &[&str]) -> Self {
        let records = values.iter().map(|v| v.to_string()).collect();
        self.answer(name, QueryType::Mx, DnsQueryResult::Records(records))
    }

    pub fn queries(&self) -> Vec<(String, QueryType)> {
        self.queries.lock().unwrap().clone()
    }
}

impl DnsLookup for FakeZone {
    async fn lookup(&self, name: &str, query_type: QueryType) -> DnsQueryResult {
        self.queries
            .lock()
            .unwrap()
            .push((name.to_string(), query_type));
        self.answers
            .get(&(name.to_string(), query_type))
            .cloned()
            .unwrap_or(DnsQueryResult::Absent(DnsAbsence::NoSuchRecord))
    }
}

/// Fetcher answering from a fixed table; unknown URLs return 404.
#[derive(Default)]
pub struct FakeWeb {
    pages: HashMap<String, FetchResult>,
    requests: Mutex<Vec<String>>,
}

#[allow(dead_code)] // Not every test file uses every helper
impl FakeWeb {
    pub fn page(mut self, url: &str, result: FetchResult) -> Self {
        self.pages.insert(url.to_string(), result);
        self
    }

    pub fn ok(self, url: &str) -> Self {
        self.page(
            url,
            FetchResult::Success {
                status: 200,
                has_body: true,
            },
        )
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl HttpFetch for FakeWeb {
    async fn fetch(&self, url: &str) -> FetchResult {
        self.requests.lock().unwrap().push(url.to_string());
        self.pages
            .get(url)
            .cloned()
            .unwrap_or(FetchResult::Failed(FetchFailure::Status(404)))
    }
}
