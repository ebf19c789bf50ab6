use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::modules::catalog::domain::{Chapter, Manga};
use crate::modules::reader::domain::value_objects::{ReadingMode, Zoom};
use crate::shared::errors::{AppError, AppResult};

/// Seconds without activity after which fullscreen controls disappear
pub const CONTROLS_IDLE_TIMEOUT_SECS: i64 = 3;

/// What a navigation request amounted to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PageTurn {
    /// Moved within the chapter. `progress` is set when the move counts as
    /// reading progress; going back does not.
    #[serde(rename_all = "camelCase")]
    Page { page: usize, progress: Option<u8> },
    /// Crossed into an adjacent chapter
    #[serde(rename_all = "camelCase")]
    Chapter { chapter_id: String },
    /// First page of the first chapter or last page of the last one
    Boundary,
}

/// One open chapter in the reader
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReaderSession {
    pub id: Uuid,
    pub manga_id: String,
    pub manga_title: String,
    pub chapter_id: String,
    pub chapter_number: u32,
    pub chapter_title: String,
    pub page_count: usize,
    /// Zero-based
    pub current_page: usize,
    pub mode: ReadingMode,
    pub zoom: Zoom,
    pub fullscreen: bool,
    pub controls_visible: bool,
    pub previous_chapter_id: Option<String>,
    pub next_chapter_id: Option<String>,
    #[serde(skip)]
    images: Vec<String>,
    #[serde(skip)]
    last_activity: DateTime<Utc>,
}

impl ReaderSession {
    pub fn open(manga: &Manga, chapter: &Chapter, now: DateTime<Utc>) -> Self {
        let mut session = Self {
            id: Uuid::new_v4(),
            manga_id: manga.id.clone(),
            manga_title: manga.title.clone(),
            chapter_id: String::new(),
            chapter_number: 0,
            chapter_title: String::new(),
            page_count: 0,
            current_page: 0,
            mode: ReadingMode::default(),
            zoom: Zoom::default(),
            fullscreen: false,
            controls_visible: true,
            previous_chapter_id: None,
            next_chapter_id: None,
            images: Vec::new(),
            last_activity: now,
        };
        session.load_chapter(manga, chapter, now);
        session
    }

    /// Switch to another chapter of the same title. Layout settings carry
    /// over; the page goes back to the start.
    pub fn load_chapter(&mut self, manga: &Manga, chapter: &Chapter, now: DateTime<Utc>) {
        self.chapter_id = chapter.id.clone();
        self.chapter_number = chapter.number;
        self.chapter_title = chapter.title.clone();
        self.page_count = chapter.pages;
        self.images = chapter.images.clone();
        self.current_page = 0;
        self.previous_chapter_id = manga.previous_chapter(&chapter.id).map(|c| c.id.clone());
        self.next_chapter_id = manga.next_chapter(&chapter.id).map(|c| c.id.clone());
        self.last_activity = now;
    }

    /// Percent read when standing on `page`
    pub fn progress_at(&self, page: usize) -> u8 {
        if self.page_count == 0 {
            return 0;
        }
        let percent = (page as f64 / self.page_count as f64 * 100.0).round();
        percent.clamp(0.0, 100.0) as u8
    }

    pub fn is_last_page(&self) -> bool {
        self.current_page + 1 >= self.page_count
    }

    pub fn next_page(&mut self) -> PageTurn {
        if self.current_page + 1 < self.page_count {
            self.current_page += 1;
            return PageTurn::Page {
                page: self.current_page,
                progress: Some(self.progress_at(self.current_page)),
            };
        }
        match &self.next_chapter_id {
            Some(chapter_id) => PageTurn::Chapter {
                chapter_id: chapter_id.clone(),
            },
            None => PageTurn::Boundary,
        }
    }

    pub fn previous_page(&mut self) -> PageTurn {
        if self.current_page > 0 {
            self.current_page -= 1;
            return PageTurn::Page {
                page: self.current_page,
                progress: None,
            };
        }
        match &self.previous_chapter_id {
            Some(chapter_id) => PageTurn::Chapter {
                chapter_id: chapter_id.clone(),
            },
            None => PageTurn::Boundary,
        }
    }

    pub fn go_to_page(&mut self, page: usize) -> AppResult<PageTurn> {
        if page >= self.page_count {
            return Err(AppError::InvalidInput(format!(
                "الصفحة {} غير موجودة (عدد الصفحات {})",
                page + 1,
                self.page_count
            )));
        }
        self.current_page = page;
        Ok(PageTurn::Page {
            page,
            progress: Some(self.progress_at(page)),
        })
    }

    pub fn zoom_in(&mut self) -> Zoom {
        self.zoom = self.zoom.zoom_in();
        self.zoom
    }

    pub fn zoom_out(&mut self) -> Zoom {
        self.zoom = self.zoom.zoom_out();
        self.zoom
    }

    pub fn reset_zoom(&mut self) -> Zoom {
        self.zoom = Zoom::default();
        self.zoom
    }

    pub fn set_mode(&mut self, mode: ReadingMode) {
        self.mode = mode;
    }

    /// Page indices on screen for the current mode
    pub fn visible_pages(&self) -> Vec<usize> {
        if self.page_count == 0 {
            return Vec::new();
        }
        match self.mode {
            ReadingMode::Single => vec![self.current_page],
            ReadingMode::Double if !self.is_last_page() => {
                vec![self.current_page, self.current_page + 1]
            }
            ReadingMode::Double => vec![self.current_page],
            ReadingMode::Scroll => (0..self.page_count).collect(),
        }
    }

    pub fn page_image(&self, page: usize) -> Option<&str> {
        self.images.get(page).map(String::as_str)
    }

    pub fn toggle_fullscreen(&mut self, now: DateTime<Utc>) -> bool {
        self.fullscreen = !self.fullscreen;
        self.controls_visible = true;
        self.last_activity = now;
        self.fullscreen
    }

    pub fn exit_fullscreen(&mut self) {
        self.fullscreen = false;
        self.controls_visible = true;
    }

    /// Pointer movement or any other activity
    pub fn show_controls(&mut self, now: DateTime<Utc>) {
        self.last_activity = now;
        if self.fullscreen {
            self.controls_visible = true;
        }
    }

    /// Hide the controls once fullscreen has been idle long enough.
    /// Returns whether they are hidden afterwards.
    pub fn hide_controls_if_idle(&mut self, now: DateTime<Utc>) -> bool {
        let idle = now - self.last_activity;
        if self.fullscreen && idle >= Duration::seconds(CONTROLS_IDLE_TIMEOUT_SECS) {
            self.controls_visible = false;
        }
        !self.controls_visible
    }

    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.last_activity = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::catalog::infrastructure::fixtures::seed_mangas;

    fn session_on(manga_index: usize, chapter_index: usize) -> (Manga, ReaderSession) {
        let manga = seed_mangas().remove(manga_index);
        let chapter = manga.chapters[chapter_index].clone();
        let session = ReaderSession::open(&manga, &chapter, Utc::now());
        (manga, session)
    }

    #[test]
    fn test_open_starts_at_first_page_with_neighbours() {
        let (_, session) = session_on(0, 0);
        assert_eq!(session.current_page, 0);
        assert_eq!(session.page_count, 24);
        assert_eq!(session.previous_chapter_id, None);
        assert_eq!(session.next_chapter_id.as_deref(), Some("ch2"));
        assert!(session.controls_visible);
    }

    #[test]
    fn test_next_page_reports_rounded_progress() {
        let (_, mut session) = session_on(0, 0);
        assert_eq!(
            session.next_page(),
            PageTurn::Page {
                page: 1,
                progress: Some(4)
            }
        );
        // 12 / 24 pages
        assert_eq!(
            session.go_to_page(12).unwrap(),
            PageTurn::Page {
                page: 12,
                progress: Some(50)
            }
        );
    }

    #[test]
    fn test_last_page_moves_to_next_chapter_then_boundary() {
        let (manga, mut session) = session_on(0, 0);
        session.go_to_page(23).unwrap();
        assert_eq!(
            session.next_page(),
            PageTurn::Chapter {
                chapter_id: "ch2".to_string()
            }
        );
        assert_eq!(session.current_page, 23);

        let ch2 = manga.chapter("ch2").unwrap().clone();
        session.load_chapter(&manga, &ch2, Utc::now());
        session.go_to_page(27).unwrap();
        assert_eq!(session.next_page(), PageTurn::Boundary);
    }

    #[test]
    fn test_previous_page_never_records_progress() {
        let (_, mut session) = session_on(0, 1);
        session.go_to_page(3).unwrap();
        assert_eq!(
            session.previous_page(),
            PageTurn::Page {
                page: 2,
                progress: None
            }
        );

        session.go_to_page(0).unwrap();
        assert_eq!(
            session.previous_page(),
            PageTurn::Chapter {
                chapter_id: "ch1".to_string()
            }
        );
    }

    #[test]
    fn test_single_chapter_title_has_boundaries_both_ways() {
        let (_, mut session) = session_on(1, 0);
        assert_eq!(session.previous_page(), PageTurn::Boundary);
        session.go_to_page(19).unwrap();
        assert_eq!(session.next_page(), PageTurn::Boundary);
    }

    #[test]
    fn test_go_to_page_out_of_range() {
        let (_, mut session) = session_on(0, 0);
        assert!(matches!(
            session.go_to_page(24),
            Err(AppError::InvalidInput(_))
        ));
        assert_eq!(session.current_page, 0);
    }

    #[test]
    fn test_visible_pages_per_mode() {
        let (_, mut session) = session_on(1, 0);
        assert_eq!(session.visible_pages(), vec![0]);

        session.set_mode(ReadingMode::Double);
        assert_eq!(session.visible_pages(), vec![0, 1]);
        session.go_to_page(19).unwrap();
        assert_eq!(session.visible_pages(), vec![19]);

        session.set_mode(ReadingMode::Scroll);
        assert_eq!(session.visible_pages().len(), 20);
    }

    #[test]
    fn test_double_mode_still_advances_one_page() {
        let (_, mut session) = session_on(1, 0);
        session.set_mode(ReadingMode::Double);
        session.next_page();
        assert_eq!(session.current_page, 1);
    }

    #[test]
    fn test_controls_auto_hide_only_in_fullscreen() {
        let (_, mut session) = session_on(0, 0);
        let start = Utc::now();
        let later = start + Duration::seconds(5);

        session.touch(start);
        assert!(!session.hide_controls_if_idle(later));

        assert!(session.toggle_fullscreen(start));
        assert!(!session.hide_controls_if_idle(start + Duration::seconds(2)));
        assert!(session.hide_controls_if_idle(later));

        session.show_controls(later);
        assert!(session.controls_visible);

        session.exit_fullscreen();
        assert!(!session.fullscreen);
        assert!(session.controls_visible);
    }

    #[test]
    fn test_chapter_switch_keeps_layout() {
        let (manga, mut session) = session_on(0, 0);
        session.set_mode(ReadingMode::Scroll);
        session.zoom_in();
        session.go_to_page(10).unwrap();

        let ch2 = manga.chapter("ch2").unwrap().clone();
        session.load_chapter(&manga, &ch2, Utc::now());

        assert_eq!(session.current_page, 0);
        assert_eq!(session.page_count, 28);
        assert_eq!(session.mode, ReadingMode::Scroll);
        assert_eq!(session.zoom.percent(), 125);
        assert_eq!(session.previous_chapter_id.as_deref(), Some("ch1"));
    }
}
