#[cfg(test)]
mod examples {
    use std::fs;
    use std::path::Path;

    use groovyfmt::decoding;
    use groovyfmt::formatting::Formatter;

    /// Golden test for the format command
    ///
    /// This test:
    /// 1. Reads all .json block trees from demos/golden/
    /// 2. Runs the equivalent of the `format` command on each tree
    /// 3. Compares the output with the .groovy file of the same name
    /// 4. Shows clear diffs when differences are found
    ///
    /// The .groovy files hold the canonical formatted form. If this test
    /// fails, either the formatter is wrong (a bug that needs to be fixed!)
    /// or the expectation is stale after a deliberate style change and needs
    /// regenerating.

    /// Simple diff function to show line-by-line differences
    fn show_diff(expected: &str, formatted: &str, file_path: &Path) {
        let expected_lines: Vec<&str> = expected
            .lines()
            .collect();
        let formatted_lines: Vec<&str> = formatted
            .lines()
            .collect();

        let max_lines = expected_lines
            .len()
            .max(formatted_lines.len());

        println!("\nDifferences found in file: {:?}", file_path);
        println!("--- Expected");
        println!("+++ Formatted");

        for i in 0..max_lines {
            let want = expected_lines
                .get(i)
                .unwrap_or(&"");
            let got = formatted_lines
                .get(i)
                .unwrap_or(&"");

            if want != got {
                println!("@@ Line {} @@", i + 1);
                println!("- {}", want);
                println!("+ {}", got);
            }
        }
    }

    #[test]
    fn ensure_identical_output() {
        let dir = Path::new("demos/golden");

        // Ensure the directory exists
        assert!(dir.exists(), "golden directory missing");

        let entries = fs::read_dir(dir).expect("Failed to read golden directory");

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.expect("Failed to read directory entry");
            let path = entry.path();

            if path
                .extension()
                .and_then(|s| s.to_str())
                == Some("json")
            {
                files.push(path);
            }
        }

        assert!(!files.is_empty(), "No .json trees found in golden directory");

        let mut failures = Vec::new();

        for file in &files {
            let content = decoding::load(file)
                .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));
            let tree = decoding::decode(&content)
                .unwrap_or_else(|e| panic!("Failed to decode file {:?}: {:?}", file, e));

            let expected_path = file.with_extension("groovy");
            let expected = decoding::load(&expected_path)
                .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", expected_path, e));

            // Default options: width 80, indent 2
            let formatter = Formatter::new();
            let result = formatter.format(&tree);

            if result != expected {
                show_diff(&expected, &result, file);
                failures.push(file.clone());
            }
        }

        if !failures.is_empty() {
            panic!("All golden trees must format to their expected output");
        }
    }
}
