use super::error::NormalizeError;

/// Canonicalizes a raw file path or import string into a stable node
/// identity.
///
/// The extension is stripped from the final component, then the last two
/// path components are joined with `/`. Collapsing to two segments trades
/// full-path uniqueness for compact identities; it assumes no two distinct
/// modules share both their immediate directory and file name. A single
/// remaining component is returned unchanged.
///
/// Pure and deterministic: the same input always yields the same identity.
pub fn normalize(raw: &str) -> Result<String, NormalizeError> {
    let components: Vec<&str> = raw
        .split(['/', '\\'])
        .filter(|c| !c.is_empty())
        .collect();

    let (parent, last) = match components.as_slice() {
        [] => return Err(NormalizeError::EmptyPath),
        [only] => (None, *only),
        [.., parent, last] => (Some(*parent), *last),
    };

    let stem = strip_extension(last);

    match parent {
        Some(parent) => Ok(format!("{}/{}", parent, stem)),
        None => Ok(stem.to_string()),
    }
}

// A dot at byte 0 is a hidden-file prefix, not an extension separator.
fn strip_extension(component: &str) -> &str {
    match component.rfind('.') {
        Some(idx) if idx > 0 => &component[..idx],
        _ => component,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_last_two_components() {
        assert_eq!(normalize("src/pkg/main.odin").unwrap(), "pkg/main");
    }

    #[test]
    fn hidden_file_keeps_its_name() {
        assert_eq!(normalize(".env").unwrap(), ".env");
    }

    #[test]
    fn empty_input_is_an_error() {
        assert_eq!(normalize(""), Err(NormalizeError::EmptyPath));
        assert_eq!(normalize("//"), Err(NormalizeError::EmptyPath));
    }
}
