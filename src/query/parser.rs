//! Query string parsing

/// Checks that a query line uses only letters, whitespace, and dashes
pub fn is_searchable(line: &str) -> bool {
    line.chars()
        .all(|c| c.is_ascii_alphabetic() || c.is_whitespace() || c == '-')
}

/// Parses a lowercased query line into OR-groups of AND-words
///
/// Returns `None` when an operator is misplaced, e.g. a leading/trailing
/// `or`/`and` or two operators in a row. The check works by comparing the
/// number of operator words against the number of segments they separate.
pub fn parse_query(line: &str) -> Option<Vec<Vec<String>>> {
    let and_groups: Vec<&str> = line.split(" or ").collect();

    let or_count = line.split_whitespace().filter(|w| *w == "or").count();
    if or_count + 1 != and_groups.len() {
        return None;
    }

    let mut groups = Vec::with_capacity(and_groups.len());
    for group_text in and_groups {
        let mut group = Vec::new();
        let mut and_count = 0;
        for word in group_text.split_whitespace() {
            if word == "and" {
                and_count += 1;
            } else {
                group.push(word.to_string());
            }
        }
        if and_count + 1 != group_text.split(" and ").count() {
            return None;
        }
        groups.push(group);
    }

    Some(groups)
}
