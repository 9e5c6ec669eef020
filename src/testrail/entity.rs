use serde_derive::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Run {
    pub id: u64,
    #[serde(default)]
    pub is_completed: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Plan {
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default)]
    pub entries: Vec<PlanEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlanEntry {
    #[serde(default)]
    pub runs: Vec<Run>,
}

/// A case as instantiated in a test run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Test {
    pub case_id: u64,
    pub status_id: u64,
}

/// `get_tests` answers with a bare array on older TestRail releases and with a
/// paginated envelope since 6.7.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum TestsPage {
    List(Vec<Test>),
    Paginated {
        tests: Vec<Test>,
        #[serde(rename = "_links", default)]
        links: Links,
    },
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Links {
    pub next: Option<String>,
}
