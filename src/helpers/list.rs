//! List helpers: category filtering, latest selection and per-label counts

use indexmap::IndexMap;
use std::cmp::Ordering;

use super::date::parse_date;
use crate::config::LabelConfig;
use crate::content::{ContentIndex, ContentItem, Dated};

/// Items matching a filter label.
///
/// The "all" sentinel returns every item in order; other labels are mapped
/// to their storage category and matched exactly.
pub fn filter_by_category<'a>(
    items: &'a [ContentItem],
    label: &str,
    labels: &LabelConfig,
) -> Vec<&'a ContentItem> {
    if label == labels.all {
        return items.iter().collect();
    }
    let category = labels.storage_key(label);
    items.iter().filter(|item| item.category == category).collect()
}

/// The `limit` most recent entries by their `date` field, newest first.
///
/// Unparseable dates sort after every parseable one.
pub fn latest<T: Dated + Clone>(items: &[T], limit: usize) -> Vec<T> {
    let mut dated: Vec<_> = items
        .iter()
        .map(|item| (parse_date(item.date()), item))
        .collect();

    dated.sort_by(|(a, _), (b, _)| match (a, b) {
        (Some(a), Some(b)) => b.cmp(a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    dated
        .into_iter()
        .take(limit)
        .map(|(_, item)| item.clone())
        .collect()
}

/// Item count per display label, in category order
pub fn category_stats(
    index: &ContentIndex,
    categories: &[String],
    labels: &LabelConfig,
) -> IndexMap<String, usize> {
    categories
        .iter()
        .map(|category| {
            (
                labels.display_label(category).to_string(),
                index.category(category).len(),
            )
        })
        .collect()
}

/// Filter labels offered by the listing view: the sentinel, then one per category
pub fn filter_labels(categories: &[String], labels: &LabelConfig) -> Vec<String> {
    std::iter::once(labels.all.clone())
        .chain(
            categories
                .iter()
                .map(|c| labels.display_label(c).to_string()),
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str, category: &str, date: &str) -> ContentItem {
        ContentItem {
            title: title.to_string(),
            author: "匿名".to_string(),
            year: "未知".to_string(),
            date: date.to_string(),
            excerpt: String::new(),
            tags: Vec::new(),
            category: category.to_string(),
            file: format!("experiences/{}/{}.md", category, title),
        }
    }

    fn sample() -> Vec<ContentItem> {
        vec![
            item("a1", "A", "2024-01-01"),
            item("n1", "announcements", "2025-01-01"),
            item("b1", "B", "2024-02-01"),
            item("a2", "A", "2024-03-01"),
            item("n2", "announcements", "2025-02-01"),
        ]
    }

    #[test]
    fn test_filter_notice_label() {
        let items = sample();
        let labels = LabelConfig::default();
        let titles: Vec<_> = filter_by_category(&items, "通知", &labels)
            .iter()
            .map(|i| i.title.as_str())
            .collect();
        assert_eq!(titles, vec!["n1", "n2"]);
    }

    #[test]
    fn test_filter_all_keeps_order() {
        let items = sample();
        let labels = LabelConfig::default();
        let all = filter_by_category(&items, "全部", &labels);
        assert_eq!(all.len(), items.len());
        assert!(all.iter().zip(items.iter()).all(|(a, b)| *a == b));
    }

    #[test]
    fn test_filter_plain_category_and_empty() {
        let items = sample();
        let labels = LabelConfig::default();
        assert_eq!(filter_by_category(&items, "A", &labels).len(), 2);
        assert!(filter_by_category(&items, "留学", &labels).is_empty());
        // The storage key itself also matches
        assert_eq!(filter_by_category(&items, "announcements", &labels).len(), 2);
    }

    #[test]
    fn test_latest_three_of_five() {
        let items = vec![
            item("e", "announcements", "2025-03-05"),
            item("a", "announcements", "2025-01-10"),
            item("d", "announcements", "2025-11-01"),
            item("b", "announcements", "2024-12-31"),
            item("c", "announcements", "2025-06-18"),
        ];
        let titles: Vec<_> = latest(&items, 3).into_iter().map(|i| i.title).collect();
        assert_eq!(titles, vec!["d", "c", "e"]);
        // Input is left untouched
        assert_eq!(items[0].title, "e");
    }

    #[test]
    fn test_latest_unparseable_dates_last() {
        let items = vec![
            item("bad", "announcements", "未知"),
            item("old", "announcements", "2020-01-01"),
            item("new", "announcements", "2025-01-01"),
        ];
        let titles: Vec<_> = latest(&items, 3).into_iter().map(|i| i.title).collect();
        assert_eq!(titles, vec!["new", "old", "bad"]);
        assert_eq!(latest(&items, 0).len(), 0);
        assert_eq!(latest(&items, 10).len(), 3);
    }

    #[test]
    fn test_category_stats_and_labels() {
        let mut index = ContentIndex::new();
        let items = sample();
        index.push_category("A", items.iter().filter(|i| i.category == "A").cloned().collect());
        index.push_category(
            "announcements",
            items
                .iter()
                .filter(|i| i.category == "announcements")
                .cloned()
                .collect(),
        );

        let categories = vec!["A".to_string(), "B".to_string(), "announcements".to_string()];
        let labels = LabelConfig::default();
        let stats = category_stats(&index, &categories, &labels);
        assert_eq!(stats.get("A"), Some(&2));
        assert_eq!(stats.get("B"), Some(&0));
        assert_eq!(stats.get("通知"), Some(&2));

        assert_eq!(
            filter_labels(&categories, &labels),
            vec!["全部", "A", "B", "通知"]
        );
    }
}
