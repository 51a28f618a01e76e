use crate::service::format::truncate_chars;

/// Longest page description Discord is sent.
pub const MAX_DESCRIPTION_LENGTH: usize = 1900;

/// Splits `lines` into page bodies of at most `per_page` lines joined by newlines.
///
/// Always yields at least one page; an empty input yields a single empty page.
pub fn paginate(lines: &[String], per_page: usize) -> Vec<String> {
    let per_page = per_page.max(1);
    let pages: Vec<String> = lines
        .chunks(per_page)
        .map(|chunk| chunk.join("\n").trim().to_string())
        .collect();

    if pages.is_empty() {
        vec![String::new()]
    } else {
        pages
    }
}

/// One rendered page of a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub title: String,
    pub description: String,
    /// `Страница [i/N]`, only present when there is more than one page.
    pub footer: Option<String>,
}

/// Every page of a list, ready to be shown one at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSet {
    pages: Vec<Page>,
}

impl PageSet {
    /// Renders a titled list with a header shown above the lines of every page.
    ///
    /// # Arguments
    /// - `title` - Embed title shared by all pages
    /// - `header` - Text placed above the lines, separated by a blank line
    /// - `lines` - List entries, already decorated
    /// - `per_page` - Number of entries per page
    ///
    /// # Returns
    /// - `PageSet` - At least one page
    pub fn render(title: &str, header: &str, lines: &[String], per_page: usize) -> Self {
        let bodies = paginate(lines, per_page);
        let count = bodies.len();

        let pages = bodies
            .into_iter()
            .enumerate()
            .map(|(index, body)| Page {
                title: title.to_string(),
                description: truncate_chars(
                    format!("{header}\n\n{body}").trim(),
                    MAX_DESCRIPTION_LENGTH,
                ),
                footer: (count > 1).then(|| format!("Страница [{}/{}]", index + 1, count)),
            })
            .collect();

        Self { pages }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Whether the list needs navigation controls.
    pub fn is_paged(&self) -> bool {
        self.pages.len() > 1
    }

    pub fn get(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    pub fn first(&self) -> Option<&Page> {
        self.pages.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("player{i}")).collect()
    }

    /// Tests splitting 37 entries into pages of 15.
    ///
    /// Expected: 3 pages holding 15, 15 and 7 lines
    #[test]
    fn splits_into_full_pages_and_remainder() {
        let pages = paginate(&lines(37), 15);

        let sizes: Vec<usize> = pages.iter().map(|p| p.lines().count()).collect();
        assert_eq!(sizes, vec![15, 15, 7]);
        assert!(pages[2].ends_with("player36"));
    }

    #[test]
    fn page_count_is_ceiling_with_floor_of_one() {
        for (count, expected) in [(0, 1), (1, 1), (15, 1), (16, 2), (30, 2), (31, 3)] {
            assert_eq!(paginate(&lines(count), 15).len(), expected, "{count} lines");
        }
    }

    #[test]
    fn empty_list_renders_one_page_without_footer() {
        let set = PageSet::render("Зарегистрировано: 0", "", &[], 15);

        assert_eq!(set.page_count(), 1);
        assert!(!set.is_paged());
        let page = set.first().unwrap();
        assert_eq!(page.description, "");
        assert_eq!(page.footer, None);
    }

    #[test]
    fn header_is_separated_by_blank_line() {
        let set = PageSet::render("t", "🏆 `Рекорд:` 3", &lines(2), 15);

        assert_eq!(
            set.first().unwrap().description,
            "🏆 `Рекорд:` 3\n\nplayer0\nplayer1"
        );
    }

    #[test]
    fn footer_numbers_pages_when_paged() {
        let set = PageSet::render("t", "", &lines(20), 15);

        assert_eq!(set.get(0).unwrap().footer.as_deref(), Some("Страница [1/2]"));
        assert_eq!(set.get(1).unwrap().footer.as_deref(), Some("Страница [2/2]"));
        assert_eq!(set.get(1).unwrap().description, "player15\nplayer16\nplayer17\nplayer18\nplayer19");
    }

    #[test]
    fn description_is_truncated() {
        let long: Vec<String> = (0..5).map(|_| "x".repeat(500)).collect();

        let set = PageSet::render("t", "", &long, 15);

        assert_eq!(
            set.first().unwrap().description.chars().count(),
            MAX_DESCRIPTION_LENGTH
        );
    }
}
