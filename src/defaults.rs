/// Built-in patterns for identifying platform-specific tests.
///
/// A test whose derived name contains any of these substrings is grouped
/// into `platform_tests`, unless an earlier category rule already claimed
/// it. Callers can extend this table via `--platform-patterns` or the
/// config file.
pub const DEFAULT_PLATFORM_TEST_PATTERNS: &[&str] = &[
    "spi",
    "isr",
    "esp32",
    "riscv",
    "parallel",
    "quad",
    "single",
    "clockless",
    "dual",
    "stub_led",
];

/// Default line template for the build-system-facing output.
///
/// `TEST_NAME`, `FILE_PATH` and `CATEGORY` are replaced per test. The
/// resulting `TEST:<name>:<path>:<category>` lines are what the build
/// system parses when wiring up unity build targets.
pub const DEFAULT_OUTPUT_TEMPLATE: &str = "TEST:TEST_NAME:FILE_PATH:CATEGORY";
