// Fixed-pattern matchers for Jira keys carried in feature and scenario tags

use once_cell::sync::Lazy;
use regex::Regex;

static TEST_EXECUTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^jira\.test_execution\('(.+)'\)$").unwrap());

static TEST_PLAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^jira\.test_plan\('(.+)'\)$").unwrap());

static TEST_CASE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)^(allure|jira)\.testcase\(['"](.+)['"]\)$"#).unwrap());

// Some runners strip parentheses and quotes when they re-emit outline tags,
// leaving e.g. `jira.testcaseJIRA-31`.
static TEST_CASE_BARE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(allure|jira)\.testcase(.+)$").unwrap());

/// Extract the test execution key from a tag like
/// `jira.test_execution('JIRA-20')`.
pub fn test_execution_key(tag: &str) -> Option<&str> {
    TEST_EXECUTION
        .captures(tag)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Extract the test plan key from a tag like `jira.test_plan('JIRA-10')`.
pub fn test_plan_key(tag: &str) -> Option<&str> {
    TEST_PLAN
        .captures(tag)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Extract the test case key from `jira.testcase('JIRA-31')`,
/// `allure.testcase("JIRA-31")` or the unquoted form `jira.testcaseJIRA-31`.
pub fn test_case_key(tag: &str) -> Option<&str> {
    if let Some(caps) = TEST_CASE.captures(tag) {
        return caps.get(2).map(|m| m.as_str());
    }
    TEST_CASE_BARE
        .captures(tag)
        .and_then(|caps| caps.get(2))
        .map(|m| m.as_str())
}
