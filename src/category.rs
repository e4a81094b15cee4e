use serde::{Deserialize, Serialize};

use crate::naming::extract_test_name;

/// Unity build categories for test grouping
///
/// Tests are compiled together per category to cut down on translation
/// units, so a test's category decides which combined source file it
/// lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TestCategory {
    /// Tests from the fl/ directory (stdlib-like utilities)
    Fl,
    /// Tests from the fx/ directory or with "fx" in the name (effects framework)
    Fx,
    /// Tests from the noise/ directory
    Noise,
    /// Tests whose name matches a platform-specific keyword
    Platform,
    /// Everything else
    #[default]
    Core,
}

impl TestCategory {
    /// All categories, in the fixed order used for grouped output
    pub const ALL: [TestCategory; 5] = [
        TestCategory::Fl,
        TestCategory::Fx,
        TestCategory::Noise,
        TestCategory::Platform,
        TestCategory::Core,
    ];

    /// Get the category label used in build-system output
    pub fn name(self) -> &'static str {
        match self {
            TestCategory::Fl => "fl_tests",
            TestCategory::Fx => "fx_tests",
            TestCategory::Noise => "noise_tests",
            TestCategory::Platform => "platform_tests",
            TestCategory::Core => "core_tests",
        }
    }
}

/// Test file paths grouped by unity build category.
///
/// Every category field is always present, empty or not, so consumers can
/// rely on the full five-key shape. Serializes to the
/// `{ "fl_tests": [...], ... }` map the build system expects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorizedTests {
    pub fl_tests: Vec<String>,
    pub fx_tests: Vec<String>,
    pub noise_tests: Vec<String>,
    pub platform_tests: Vec<String>,
    pub core_tests: Vec<String>,
}

impl CategorizedTests {
    /// Append a test file path to the given category's group
    pub fn push(&mut self, category: TestCategory, test_file_path: String) {
        match category {
            TestCategory::Fl => self.fl_tests.push(test_file_path),
            TestCategory::Fx => self.fx_tests.push(test_file_path),
            TestCategory::Noise => self.noise_tests.push(test_file_path),
            TestCategory::Platform => self.platform_tests.push(test_file_path),
            TestCategory::Core => self.core_tests.push(test_file_path),
        }
    }

    /// Get the paths grouped under a category, in input order
    pub fn get(&self, category: TestCategory) -> &[String] {
        match category {
            TestCategory::Fl => &self.fl_tests,
            TestCategory::Fx => &self.fx_tests,
            TestCategory::Noise => &self.noise_tests,
            TestCategory::Platform => &self.platform_tests,
            TestCategory::Core => &self.core_tests,
        }
    }

    /// Iterate categories with their groups, in the fixed category order
    pub fn iter(&self) -> impl Iterator<Item = (TestCategory, &[String])> + '_ {
        TestCategory::ALL.iter().map(move |&c| (c, self.get(c)))
    }

    /// Total number of grouped test file paths
    pub fn total(&self) -> usize {
        TestCategory::ALL.iter().map(|&c| self.get(c).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Categorize a single test for unity build grouping.
///
/// Rules are checked in order, first match wins:
/// 1. name starts with `fl_` -> `Fl`
/// 2. name starts with `fx_` or contains `fx` anywhere -> `Fx`
/// 3. path starts with `noise/` -> `Noise`
/// 4. name contains any of `platform_patterns` -> `Platform`
/// 5. otherwise -> `Core`
///
/// The `fx` substring check is intentionally broad: a name like
/// `effects_fxchip` counts as an fx test.
pub fn categorize_test(
    test_name: &str,
    test_file_path: &str,
    platform_patterns: &[String],
) -> TestCategory {
    if test_name.starts_with("fl_") {
        return TestCategory::Fl;
    }
    if test_name.starts_with("fx_") || test_name.contains("fx") {
        return TestCategory::Fx;
    }
    if test_file_path.starts_with("noise/") {
        return TestCategory::Noise;
    }

    for pattern in platform_patterns {
        if test_name.contains(pattern.as_str()) {
            return TestCategory::Platform;
        }
    }

    TestCategory::Core
}

/// Organize test files into categories for unity build mode.
///
/// Walks the input in order, skipping empty entries, and appends each
/// remaining path (not its derived name) to its category's group. Input
/// order is preserved within each group and duplicates are kept.
pub fn organize_tests_by_category(
    test_file_paths: &[String],
    platform_patterns: &[String],
) -> CategorizedTests {
    let mut categories = CategorizedTests::default();

    for test_file_path in test_file_paths {
        if test_file_path.is_empty() {
            continue;
        }

        let test_name = extract_test_name(test_file_path);
        let category = categorize_test(&test_name, test_file_path, platform_patterns);
        categories.push(category, test_file_path.clone());
    }

    categories
}
