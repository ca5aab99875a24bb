/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::borrow::Cow;

fn escaped(c: char) -> Option<&'static str> {
    match c {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#039;"),
        _ => None,
    }
}

/// Escape a string for use in XML or HTML text and attribute values.
pub fn escape_xml(s: &str) -> Cow<'_, str> {
    let Some(first) = s.find(|c| escaped(c).is_some()) else {
        return Cow::Borrowed(s);
    };

    let mut out = String::with_capacity(s.len() + 16);
    out.push_str(&s[..first]);
    for c in s[first..].chars() {
        match escaped(c) {
            Some(v) => out.push_str(v),
            None => out.push(c),
        }
    }
    Cow::Owned(out)
}

pub use self::escape_xml as h;
pub use self::escape_xml as html_escape;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_five() {
        assert_eq!(
            escape_xml(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#039;Jerry&#039;&lt;/a&gt;"
        );
    }

    #[test]
    fn untouched() {
        let s = "plain text, with / and ; kept";
        assert!(matches!(escape_xml(s), Cow::Borrowed(v) if v == s));
        assert_eq!(escape_xml(""), "");
        assert_eq!(h("é<"), "é&lt;");
        assert_eq!(html_escape("&amp;"), "&amp;amp;");
    }
}
