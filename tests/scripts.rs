use std::{
    fs,
    path::{Path, PathBuf},
};

use pretty_assertions::assert_eq;
use reckon::{Options, run};
use walkdir::WalkDir;

/// Every `tests/scripts/*.calc` file is run as a session. Its printed results
/// must match the sibling `.out` file, and its diagnostics the `.err` file,
/// or be empty when there is none.
#[test]
fn scripts_produce_expected_output() {
    let mut count = 0;

    for entry in WalkDir::new("tests/scripts").into_iter()
                                              .filter_map(Result::ok)
                                              .filter(|e| {
                                                  e.path()
                                                   .extension()
                                                   .is_some_and(|ext| ext == "calc")
                                              })
    {
        count += 1;
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        let mut output = Vec::new();
        let mut diagnostics = Vec::new();
        if let Err(e) = run(source.as_bytes(), &mut output, &mut diagnostics, Options::default()) {
            panic!("Script {path:?} failed:\n{source}\nError: {e}");
        }

        assert_eq!(String::from_utf8(output).unwrap(),
                   expected(path, "out"),
                   "stdout of {path:?}");
        assert_eq!(String::from_utf8(diagnostics).unwrap(),
                   expected(path, "err"),
                   "stderr of {path:?}");
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

fn expected(script: &Path, extension: &str) -> String {
    let path: PathBuf = script.with_extension(extension);
    fs::read_to_string(path).unwrap_or_default()
}
