use tracery::extract::{go::GoExtractor, ImportExtractor};

#[test]
fn single_spec_imports_with_aliases() {
    let extractor = GoExtractor::new().unwrap();
    let src = "package main\n\nimport \"fmt\"\nimport f \"fmt\"\nimport . \"strings\"\nimport _ \"embed\"\n";

    let imports: Vec<_> = extractor.extract(src).map(Result::unwrap).collect();
    assert_eq!(imports, vec!["fmt", "fmt", "strings", "embed"]);
}

#[test]
fn grouped_block_matches_its_opening_entry() {
    let extractor = GoExtractor::new().unwrap();
    let src = "import (\n\t\"fmt\"\n\t\"os\"\n)\n";

    let imports: Vec<_> = extractor.extract(src).map(Result::unwrap).collect();
    assert_eq!(imports, vec!["fmt"]);
}
