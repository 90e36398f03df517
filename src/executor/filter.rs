//! Test selection
//!
//! Narrows the registry by priority marker, category, and test number.

use anyhow::Result;
use std::collections::BTreeSet;

use crate::models::{Category, Priority, TestCase};

/// Which test cases to run. Empty sets match everything; `skip` always wins.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TestFilter {
    pub priorities: BTreeSet<Priority>,
    pub categories: BTreeSet<Category>,
    pub numbers: BTreeSet<u8>,
    pub skip: BTreeSet<u8>,
}

impl TestFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priorities.insert(priority);
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.categories.insert(category);
        self
    }

    pub fn number(mut self, number: u8) -> Self {
        self.numbers.insert(number);
        self
    }

    pub fn skip(mut self, number: u8) -> Self {
        self.skip.insert(number);
        self
    }

    /// Parse a comma-separated marker list such as `p1,p2`
    pub fn with_priorities(mut self, list: &str) -> Result<Self> {
        for item in split_list(list) {
            let priority = Priority::from_str(item)
                .ok_or_else(|| anyhow::anyhow!("Unknown priority marker: {item} (use p1, p2, p3)"))?;
            self = self.priority(priority);
        }
        Ok(self)
    }

    /// Parse a comma-separated category list such as `products,messages`
    pub fn with_categories(mut self, list: &str) -> Result<Self> {
        for item in split_list(list) {
            let category = Category::from_str(item)
                .ok_or_else(|| anyhow::anyhow!("Unknown category: {item}"))?;
            self = self.category(category);
        }
        Ok(self)
    }

    /// Parse a comma-separated list of test numbers to leave out
    pub fn with_skip_list(mut self, list: &str) -> Result<Self> {
        for item in split_list(list) {
            let number = parse_test_number(item)?;
            self = self.skip(number);
        }
        Ok(self)
    }

    pub fn matches(&self, test_case: TestCase) -> bool {
        (self.priorities.is_empty() || self.priorities.contains(&test_case.priority()))
            && (self.categories.is_empty() || self.categories.contains(&test_case.category()))
            && (self.numbers.is_empty() || self.numbers.contains(&test_case.number()))
            && !self.skip.contains(&test_case.number())
    }

    /// Matching cases in registry order
    pub fn select(&self) -> Vec<TestCase> {
        TestCase::all()
            .into_iter()
            .filter(|tc| self.matches(*tc))
            .collect()
    }
}

/// Parse and range-check a test number
pub fn parse_test_number(item: &str) -> Result<u8> {
    let number: u8 = item
        .trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid test number: {item}"))?;
    TestCase::from_number(number)
        .map(|tc| tc.number())
        .ok_or_else(|| anyhow::anyhow!("Invalid test number: {number} (valid range: 1-{})", TestCase::all().len()))
}

fn split_list(list: &str) -> impl Iterator<Item = &str> {
    list.split(',').map(str::trim).filter(|s| !s.is_empty())
}
