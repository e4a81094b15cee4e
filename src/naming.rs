/// Derive a test executable name from a test file path.
///
/// The name is the final `/`-separated segment with a trailing `.cpp`
/// stripped. Files under `fl/` and `fx/` get an `fl_`/`fx_` prefix so
/// their names cannot collide with top-level tests of the same basename
/// (e.g. `fl/algorithm.cpp` -> `fl_algorithm`, `noise/test_noise.cpp` ->
/// `test_noise`).
///
/// Paths are expected in POSIX form. No validation happens here: a path
/// without a `/` is its own basename, and a name with no trailing `.cpp`
/// is kept as-is.
pub fn extract_test_name(test_file_path: &str) -> String {
    let base_name = test_file_path
        .rsplit('/')
        .next()
        .unwrap_or(test_file_path);
    let base_name = base_name.strip_suffix(".cpp").unwrap_or(base_name);

    if test_file_path.starts_with("fl/") {
        format!("fl_{}", base_name)
    } else if test_file_path.starts_with("fx/") {
        format!("fx_{}", base_name)
    } else {
        base_name.to_string()
    }
}
