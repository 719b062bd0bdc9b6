use std::sync::LazyLock;

use regex_lite::Regex;

use super::{Category, MalformedLine, MovedObject, NONE_MARKER, ParsedUpdate};

static MOVED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?im)Moved object:[ \t]*(.*)$").expect("valid regex"));
static BLOCKED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)Blocked passages now available:[ \t]*(.*)$").expect("valid regex")
});
static LOCATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?im)Your location changed:[ \t]*(.*)$").expect("valid regex"));

// `<item> ... <destination>` with no brackets in between
static PAIR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<([^<>]*)>[^<>]*<([^<>]*)>").expect("valid regex"));
static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<([^<>]*)>").expect("valid regex"));
static NARRATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#([^#]*)#").expect("valid regex"));

/// Decode update text into its three categories plus narration.
///
/// Missing lines mean "no change". The moved-object and blocked-passage
/// categories collect clauses from every line carrying their label; only the
/// first location-change line counts.
pub fn decode(text: &str) -> ParsedUpdate {
    let narration = narration(text);
    let body = strip_narration(text);
    let mut update = ParsedUpdate {
        narration,
        ..ParsedUpdate::default()
    };

    for content in contents(&MOVED_RE, &body) {
        if is_none(content) {
            continue;
        }
        let before = update.moved.len();
        update.moved.extend(PAIR_RE.captures_iter(content).map(|caps| MovedObject {
            item: caps[1].trim().to_string(),
            destination: caps[2].trim().to_string(),
        }));
        if update.moved.len() == before {
            update.malformed.push(malformed(Category::MovedObject, content));
        }
    }

    for content in contents(&BLOCKED_RE, &body) {
        if is_none(content) {
            continue;
        }
        let names = names(content);
        if names.is_empty() {
            update
                .malformed
                .push(malformed(Category::BlockedPassages, content));
        }
        update.unblocked.extend(names);
    }

    if let Some(content) = contents(&LOCATION_RE, &body).next() {
        if !is_none(content) {
            match names(content).into_iter().next() {
                Some(name) => update.location_change = Some(name),
                None => update
                    .malformed
                    .push(malformed(Category::LocationChange, content)),
            }
        }
    }

    update
}

/// The first narration span, without its markers.
pub fn narration(text: &str) -> Option<String> {
    NARRATION_RE
        .captures(text)
        .map(|caps| caps[1].trim().to_string())
        .filter(|s| !s.is_empty())
}

/// The update text with every narration span removed.
pub fn strip_narration(text: &str) -> String {
    NARRATION_RE.replace_all(text, "").trim_end().to_string()
}

fn contents<'t>(re: &'t Regex, text: &'t str) -> impl Iterator<Item = &'t str> {
    re.captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
}

fn names(content: &str) -> Vec<String> {
    NAME_RE
        .captures_iter(content)
        .map(|caps| caps[1].trim().to_string())
        .filter(|name| !name.is_empty())
        .collect()
}

fn is_none(content: &str) -> bool {
    let content = content.trim_end_matches('.').trim();
    content.is_empty() || content.eq_ignore_ascii_case(NONE_MARKER)
}

fn malformed(category: Category, content: &str) -> MalformedLine {
    MalformedLine {
        category,
        content: content.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_all_none() {
        let update = decode(
            "- Moved object: None\n- Blocked passages now available: None\n- Your location changed: None",
        );
        assert!(update.is_empty());
        assert!(update.malformed.is_empty());
        assert!(update.narration.is_none());
    }

    #[test]
    fn decode_moved_objects() {
        let update = decode(
            "- Moved object: <banana> now is in <Inventory>,  <bottle> now is in <Inventory>,  <axe> now is in <Main Hall>\n\
             - Blocked passages now available: None\n\
             - Your location changed: None",
        );
        assert_eq!(
            update.moved,
            vec![
                MovedObject {
                    item: "banana".to_string(),
                    destination: "Inventory".to_string()
                },
                MovedObject {
                    item: "bottle".to_string(),
                    destination: "Inventory".to_string()
                },
                MovedObject {
                    item: "axe".to_string(),
                    destination: "Main Hall".to_string()
                },
            ]
        );
    }

    #[test]
    fn decode_passages_and_location() {
        let update = decode(
            "- Moved object: None\n\
             - Blocked passages now available: <Small room>, <Attic>\n\
             - Your location changed:  <Small room>",
        );
        assert_eq!(update.unblocked, vec!["Small room", "Attic"]);
        assert_eq!(update.location_change.as_deref(), Some("Small room"));
    }

    #[test]
    fn location_change_uses_first_name_only() {
        let update = decode("- Your location changed: <Garden>, <Cabin>\n- Your location changed: <Attic>");
        assert_eq!(update.location_change.as_deref(), Some("Garden"));
    }

    #[test]
    fn missing_sections_mean_no_change() {
        let update = decode("- Your location changed: <Garden>");
        assert!(update.moved.is_empty());
        assert!(update.unblocked.is_empty());
        assert_eq!(update.location_change.as_deref(), Some("Garden"));
    }

    #[test]
    fn repeated_lines_aggregate() {
        let update = decode(
            "- Moved object: <book> now is in <John>\n\
             - Moved object: <pencil> now is in <Inventory>",
        );
        assert_eq!(update.moved.len(), 2);
        assert_eq!(update.moved[1].item, "pencil");
    }

    #[test]
    fn tolerates_whitespace_and_case() {
        let update = decode(
            "  -   moved OBJECT:    <  Apple >   now is in   < Inventory >  \r\n\
             your location changed:none.\r\n",
        );
        assert_eq!(update.moved[0].item, "Apple");
        assert_eq!(update.moved[0].destination, "Inventory");
        assert!(update.location_change.is_none());
        assert!(update.malformed.is_empty());
    }

    #[test]
    fn malformed_lines_are_reported() {
        let update = decode(
            "- Moved object: the apple went somewhere\n\
             - Blocked passages now available: the kitchen\n\
             - Your location changed: Kitchen",
        );
        assert!(update.is_empty());
        let categories: Vec<Category> = update.malformed.iter().map(|m| m.category).collect();
        assert_eq!(
            categories,
            vec![
                Category::MovedObject,
                Category::BlockedPassages,
                Category::LocationChange
            ]
        );
    }

    #[test]
    fn narration_is_extracted_and_ignored_by_the_decoder() {
        let text = "- Moved object: None\n\
                    - Blocked passages now available: None\n\
                    - Your location changed: None\n\
                    #You look around. Your location changed: <Moon>#";
        let update = decode(text);
        assert!(update.is_empty());
        assert_eq!(
            update.narration.as_deref(),
            Some("You look around. Your location changed: <Moon>")
        );
        assert!(!strip_narration(text).contains('#'));
    }

    #[test]
    fn empty_text_decodes_to_nothing() {
        let update = decode("");
        assert_eq!(update, ParsedUpdate::default());
    }
}
