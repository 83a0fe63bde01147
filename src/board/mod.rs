use crate::issues::Issue;

/// The repository filter applied to the aggregated list. Starts at `All`;
/// changes only by explicit selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Repository(String),
}

/// The issue board: the aggregated list plus the active filter. The caller
/// creates one per run from the aggregation result and discards it when the
/// run ends. The aggregated list is never mutated; filtering derives a view.
#[derive(Debug)]
pub struct Board {
    issues: Vec<Issue>,
    filter: Filter,
}

impl Board {
    pub fn new(issues: Vec<Issue>) -> Self {
        Self {
            issues,
            filter: Filter::All,
        }
    }

    /// The full aggregated list, regardless of filter.
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    /// The issues the current filter admits, in the aggregated (newest-first)
    /// order. A filter that matches nothing yields an empty list, not an
    /// error; the renderer shows the empty state for it.
    pub fn visible(&self) -> Vec<&Issue> {
        match &self.filter {
            Filter::All => self.issues.iter().collect(),
            Filter::Repository(name) => self
                .issues
                .iter()
                .filter(|issue| issue.repository_name == *name)
                .collect(),
        }
    }

    /// Distinct repository names across the aggregated list, in first-seen
    /// order.
    pub fn repository_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for issue in &self.issues {
            if !names.contains(&issue.repository_name.as_str()) {
                names.push(&issue.repository_name);
            }
        }
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issues::Author;

    fn issue(id: u64, repository: &str, created_at: &str) -> Issue {
        Issue {
            id,
            title: format!("Issue {}", id),
            url: format!("https://github.com/acme/{}/issues/{}", repository, id),
            repository_name: repository.to_string(),
            number: id,
            state: "open".to_string(),
            created_at: created_at.parse().unwrap(),
            updated_at: created_at.parse().unwrap(),
            comments: 0,
            labels: vec![],
            author: Author {
                login: "ann".to_string(),
                avatar_url: String::new(),
                profile_url: String::new(),
            },
        }
    }

    fn sample_board() -> Board {
        // Aggregated order: newest first
        Board::new(vec![
            issue(3, "beta", "2024-01-04T00:00:00Z"),
            issue(2, "alpha", "2024-01-03T00:00:00Z"),
            issue(1, "beta", "2024-01-02T00:00:00Z"),
        ])
    }

    #[test]
    fn test_initial_filter_is_all() {
        let board = sample_board();
        assert_eq!(*board.filter(), Filter::All);
    }

    #[test]
    fn test_all_filter_is_identity() {
        let board = sample_board();
        let visible = board.visible();
        assert_eq!(visible.len(), board.issues().len());
        for (shown, source) in visible.iter().zip(board.issues()) {
            assert_eq!(shown.id, source.id);
        }
    }

    #[test]
    fn test_repository_filter_preserves_order() {
        let mut board = sample_board();
        board.set_filter(Filter::Repository("beta".to_string()));
        let visible = board.visible();
        let ids: Vec<u64> = visible.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![3, 1]);
        assert!(visible.iter().all(|i| i.repository_name == "beta"));
    }

    #[test]
    fn test_unmatched_filter_yields_empty() {
        let mut board = sample_board();
        board.set_filter(Filter::Repository("gamma".to_string()));
        assert!(board.visible().is_empty());
    }

    #[test]
    fn test_filter_reset() {
        let mut board = sample_board();
        board.set_filter(Filter::Repository("alpha".to_string()));
        assert_eq!(board.visible().len(), 1);
        board.set_filter(Filter::All);
        assert_eq!(board.visible().len(), 3);
    }

    #[test]
    fn test_repository_names_first_seen_order() {
        let board = sample_board();
        assert_eq!(board.repository_names(), vec!["beta", "alpha"]);
    }

    #[test]
    fn test_repository_names_empty_board() {
        let board = Board::new(vec![]);
        assert!(board.repository_names().is_empty());
    }
}
