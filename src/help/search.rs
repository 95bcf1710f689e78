// src/help/search.rs

use super::models::HelpTopic;

/// Filters the help catalogue by search terms and a category toggle.
///
/// Terms are whitespace separated; a topic matches when any term is a
/// case-insensitive substring of its keywords (terms union rather than
/// intersect, as the help page search behaves). The category "all"
/// disables the category filter; otherwise the topic's category must
/// contain the requested one. No terms means every topic in the
/// category.
pub fn search_topics(topics: Vec<HelpTopic>, search: &str, category: &str) -> Vec<HelpTopic> {
    let category = category.trim().to_lowercase();
    let terms: Vec<String> = search
        .split_whitespace()
        .map(|term| term.to_lowercase())
        .collect();

    topics
        .into_iter()
        .filter(|topic| category_matches(topic, &category) && terms_match(topic, &terms))
        .collect()
}

fn category_matches(topic: &HelpTopic, category: &str) -> bool {
    category.is_empty() || category == "all" || topic.category.to_lowercase().contains(category)
}

fn terms_match(topic: &HelpTopic, terms: &[String]) -> bool {
    if terms.is_empty() {
        return true;
    }
    let keywords = topic.keywords.to_lowercase();
    terms.iter().any(|term| keywords.contains(term))
}
