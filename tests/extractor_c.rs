use tracery::extract::{c::CExtractor, ImportExtractor};

#[test]
fn quoted_includes_only() {
    let extractor = CExtractor::new().unwrap();
    let src = "#include <stdio.h>\n#include \"util.h\"\n# include \"vec/vec.h\"\n";

    let imports: Vec<_> = extractor.extract(src).map(Result::unwrap).collect();
    assert_eq!(imports, vec!["util.h", "vec/vec.h"]);
}

#[test]
fn include_inside_comment_is_still_matched() {
    // textual scan: accepted false positive
    let extractor = CExtractor::new().unwrap();
    let src = "/* #include \"old.h\" */\n";

    let imports: Vec<_> = extractor.extract(src).map(Result::unwrap).collect();
    assert_eq!(imports, vec!["old.h"]);
}
