use super::comment::format_comment;
use super::error::ExtractError;
use crate::model::{Status, TestResult};
use crate::time::timestamp::{elapsed_seconds, parse_elapsed, parse_timestamp};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use regex::Regex;
use std::collections::VecDeque;
use std::io::BufRead;
use std::mem;

/// Suite metadata entry holding the case id shared by the suite's tests.
const CASE_ID_METADATA: &str = "TEST_CASE_ID";

lazy_static! {
    static ref CASE_ID_TAG: Regex =
        Regex::new(r"^test_case_id=([Cc]?[0-9]+.*)$").expect("Regex compilation error");
}

/// Elements the extractor cares about. Anything else (keywords, messages,
/// statistics) is walked through as `Other` and never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Node {
    Robot,
    Suite,
    Test,
    Tags,
    Tag,
    Status,
    Metadata,
    /// Metadata entry, `true` when it names the case id.
    Item(bool),
    Other,
}

#[derive(Debug)]
struct SuiteFrame {
    name: String,
    case_id: Option<String>,
    tests: Vec<TestFrame>,
}

#[derive(Debug, Default)]
struct TestFrame {
    name: String,
    tags: Vec<String>,
    status: Option<String>,
    start: Option<String>,
    end: Option<String>,
    elapsed: Option<String>,
    message: String,
}

/// Forward-only iterator over the results of a Robot Framework report.
///
/// Tests are buffered only until their suite closes, so memory follows the
/// chain of open suites and not the size of the report. Records of a suite
/// are yielded when its element ends, inner suites first.
pub struct RobotResults<R: BufRead> {
    reader: Reader<R>,
    buf: Vec<u8>,
    path: Vec<Node>,
    suites: Vec<SuiteFrame>,
    test: Option<TestFrame>,
    text: String,
    ready: VecDeque<TestResult>,
    done: bool,
}

impl<R: BufRead> RobotResults<R> {
    pub fn new(source: R) -> Self {
        let mut reader = Reader::from_reader(source);
        reader.trim_text(true);
        Self {
            reader,
            buf: Vec::new(),
            path: Vec::new(),
            suites: Vec::new(),
            test: None,
            text: String::new(),
            ready: VecDeque::new(),
            done: false,
        }
    }

    fn advance(&mut self) -> Result<(), ExtractError> {
        let mut buf = mem::take(&mut self.buf);
        let outcome = match self.reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => self.open(e),
            Ok(Event::Empty(ref e)) => self.open(e).and_then(|_| self.close()),
            Ok(Event::End(_)) => self.close(),
            Ok(Event::Text(ref e)) => match e.unescape() {
                Ok(text) => {
                    self.append_text(&text);
                    Ok(())
                }
                Err(source) => Err(self.xml_error(source)),
            },
            Ok(Event::CData(ref e)) => {
                self.append_text(&String::from_utf8_lossy(e));
                Ok(())
            }
            Ok(Event::Eof) => {
                self.done = true;
                if self.path.is_empty() {
                    Ok(())
                } else {
                    Err(ExtractError::Truncated)
                }
            }
            Ok(_) => Ok(()),
            Err(source) => Err(self.xml_error(source)),
        };
        buf.clear();
        self.buf = buf;
        outcome
    }

    fn open(&mut self, e: &BytesStart<'_>) -> Result<(), ExtractError> {
        let parent = self.path.last().copied();
        let node = match (e.name().as_ref(), parent) {
            (b"robot", None) => Node::Robot,
            (b"suite", None) | (b"suite", Some(Node::Robot)) | (b"suite", Some(Node::Suite)) => {
                let name = self.attribute(e, "name")?.unwrap_or_default();
                self.suites.push(SuiteFrame {
                    name,
                    case_id: None,
                    tests: Vec::new(),
                });
                Node::Suite
            }
            (b"test", Some(Node::Suite)) => {
                let name = self.attribute(e, "name")?.unwrap_or_default();
                self.test = Some(TestFrame {
                    name,
                    ..TestFrame::default()
                });
                Node::Test
            }
            (b"tags", Some(Node::Test)) => Node::Tags,
            (b"tag", Some(Node::Test)) | (b"tag", Some(Node::Tags)) => {
                self.text.clear();
                Node::Tag
            }
            (b"status", Some(Node::Test)) => {
                let status = self.attribute(e, "status")?;
                let start = match self.attribute(e, "starttime")? {
                    Some(start) => Some(start),
                    None => self.attribute(e, "start")?,
                };
                let end = self.attribute(e, "endtime")?;
                let elapsed = self.attribute(e, "elapsed")?;
                if let Some(test) = self.test.as_mut() {
                    test.status = status;
                    test.start = start;
                    test.end = end;
                    test.elapsed = elapsed;
                }
                self.text.clear();
                Node::Status
            }
            (b"metadata", Some(Node::Suite)) => Node::Metadata,
            (b"item", Some(Node::Metadata)) | (b"meta", Some(Node::Suite)) => {
                let name = self.attribute(e, "name")?;
                self.text.clear();
                Node::Item(name.as_deref() == Some(CASE_ID_METADATA))
            }
            _ => Node::Other,
        };
        self.path.push(node);
        Ok(())
    }

    fn close(&mut self) -> Result<(), ExtractError> {
        match self.path.pop() {
            Some(Node::Tag) => {
                let tag = mem::take(&mut self.text);
                if let Some(test) = self.test.as_mut() {
                    test.tags.push(tag);
                }
            }
            Some(Node::Status) => {
                let message = mem::take(&mut self.text);
                if let Some(test) = self.test.as_mut() {
                    test.message = message;
                }
            }
            Some(Node::Item(true)) => {
                let value = mem::take(&mut self.text);
                if let Some(suite) = self.suites.last_mut() {
                    if suite.case_id.is_none() {
                        suite.case_id = Some(value.trim().to_owned());
                    }
                }
            }
            Some(Node::Test) => {
                if let (Some(test), Some(suite)) = (self.test.take(), self.suites.last_mut()) {
                    suite.tests.push(test);
                }
            }
            Some(Node::Suite) => {
                if let Some(suite) = self.suites.pop() {
                    self.emit(suite)?;
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn append_text(&mut self, text: &str) {
        match self.path.last() {
            Some(Node::Tag) | Some(Node::Status) | Some(Node::Item(true)) => {
                self.text.push_str(text)
            }
            _ => {}
        }
    }

    /// Queues the records of a finished suite. Tag ids win over the suite
    /// metadata id; tests with neither are skipped.
    fn emit(&mut self, suite: SuiteFrame) -> Result<(), ExtractError> {
        let suite_case_id = suite.case_id.filter(|id| !id.is_empty());
        for test in &suite.tests {
            let tag_ids = case_ids_from_tags(&test.tags);
            if !tag_ids.is_empty() {
                for case_id in tag_ids {
                    debug!("Use TestRail ID from tag: ID = {}", case_id);
                    let result = build_result(case_id, &test.name, test)?;
                    self.ready.push_back(result);
                }
            } else if let Some(case_id) = &suite_case_id {
                debug!("Use TestRail ID from metadata: ID = {}", case_id);
                let result = build_result(case_id, &suite.name, test)?;
                self.ready.push_back(result);
            } else {
                trace!("No TestRail ID for test '{}'", test.name);
            }
        }
        Ok(())
    }

    fn attribute(&self, e: &BytesStart<'_>, name: &str) -> Result<Option<String>, ExtractError> {
        let attribute = e
            .try_get_attribute(name)
            .map_err(|source| self.xml_error(source))?;
        match attribute {
            Some(attribute) => attribute
                .unescape_value()
                .map(|value| Some(value.into_owned()))
                .map_err(|source| self.xml_error(source)),
            None => Ok(None),
        }
    }

    fn xml_error(&self, source: quick_xml::Error) -> ExtractError {
        ExtractError::Xml {
            position: self.reader.buffer_position(),
            source,
        }
    }
}

impl<R: BufRead> Iterator for RobotResults<R> {
    type Item = Result<TestResult, ExtractError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(result) = self.ready.pop_front() {
                return Some(Ok(result));
            }
            if self.done {
                return None;
            }
            if let Err(e) = self.advance() {
                self.done = true;
                return Some(Err(e));
            }
        }
    }
}

fn case_ids_from_tags(tags: &[String]) -> Vec<&str> {
    tags.iter()
        .filter_map(|tag| CASE_ID_TAG.captures(tag))
        .filter_map(|caps| caps.get(1))
        .map(|id| id.as_str())
        .collect()
}

fn build_result(case_id: &str, name: &str, test: &TestFrame) -> Result<TestResult, ExtractError> {
    let status = test
        .status
        .as_deref()
        .ok_or_else(|| ExtractError::MissingStatus {
            test: test.name.clone(),
        })?
        .parse::<Status>()
        .map_err(|source| ExtractError::Status {
            test: test.name.clone(),
            source,
        })?;
    let duration = elapsed_time(test).map_err(|source| ExtractError::Time {
        test: test.name.clone(),
        source,
    })?;
    TestResult::builder()
        .case_id(case_id)
        .name(name)
        .status(status)
        .comment(format_comment(&test.message))
        .duration(duration)
        .build()
        .map_err(ExtractError::Build)
}

/// Seconds spent in the test, 0 when the report carries no timing.
fn elapsed_time(test: &TestFrame) -> Result<u64, crate::time::error::Error> {
    if let Some(elapsed) = &test.elapsed {
        return parse_elapsed(elapsed);
    }
    let start = match &test.start {
        Some(start) => parse_timestamp(start)?,
        None => None,
    };
    let end = match &test.end {
        Some(end) => parse_timestamp(end)?,
        None => None,
    };
    Ok(match (start, end) {
        (Some(start), Some(end)) => elapsed_seconds(start, end),
        _ => 0,
    })
}
