//! Small helpers shared across components.

/// Join class fragments into one class string, skipping empties.
pub fn cx<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    let mut out = String::new();
    for part in parts {
        if part.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(part);
    }
    out
}

/// `"true"` / `"false"` for `data-*` attributes.
pub fn flag(on: bool) -> &'static str {
    if on {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cx_joins_and_skips_empties() {
        assert_eq!(cx(["prism-button", "", "ghost"]), "prism-button ghost");
        assert_eq!(cx([""; 3]), "");
        assert_eq!(cx(["solo"]), "solo");
    }

    #[test]
    fn flag_formats_booleans() {
        assert_eq!(flag(true), "true");
        assert_eq!(flag(false), "false");
    }
}
