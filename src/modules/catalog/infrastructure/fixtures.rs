//! Seed catalogue served by the in-memory repository.

use chrono::NaiveDate;

use crate::modules::catalog::domain::{Chapter, Manga, MangaStatus};

const PAGE_IMAGE_BASE: &str = "https://picsum.photos/800/1200";
const COVER_IMAGE_BASE: &str = "https://picsum.photos/300/400";

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// `pages` image URLs whose random seeds start at `first_seed`
fn page_images(pages: usize, first_seed: usize) -> Vec<String> {
    (0..pages)
        .map(|i| format!("{}?random={}", PAGE_IMAGE_BASE, first_seed + i))
        .collect()
}

fn cover(seed: u32) -> String {
    format!("{}?random={}", COVER_IMAGE_BASE, seed)
}

fn labels(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

pub fn seed_mangas() -> Vec<Manga> {
    vec![
        Manga {
            id: "1".to_string(),
            title: "أسطورة الساموراي المفقود".to_string(),
            english_title: Some("Lost Samurai Legend".to_string()),
            description: "قصة ملحمية عن ساموراي شاب يسعى لاستعادة شرف عائلته المفقود في عالم مليء بالسحر والخطر".to_string(),
            cover_image: cover(1),
            genres: labels(&["أكشن", "مغامرة", "فانتازيا"]),
            status: MangaStatus::Ongoing,
            rating: 4.8,
            total_chapters: 45,
            views: 125_000,
            author: "هيروشي تاناكا".to_string(),
            last_updated: date(2025, 1, 15),
            chapters: vec![
                Chapter::new("ch1", 1, "البداية", date(2024, 1, 1), page_images(24, 1)),
                Chapter::new("ch2", 2, "القوة المخفية", date(2024, 1, 8), page_images(28, 25)),
            ],
        },
        Manga {
            id: "2".to_string(),
            title: "أكاديمية الأبطال الخارقين".to_string(),
            english_title: Some("Heroes Academy".to_string()),
            description: "في عالم حيث يمتلك 80% من السكان قوى خارقة، يحلم فتى بلا قوى ليصبح البطل الأعظم".to_string(),
            cover_image: cover(2),
            genres: labels(&["أكشن", "مدرسي", "خارق"]),
            status: MangaStatus::Completed,
            rating: 4.9,
            total_chapters: 322,
            views: 2_500_000,
            author: "كوهي هوريكوشي".to_string(),
            last_updated: date(2024, 12, 20),
            chapters: vec![Chapter::new(
                "ch1-2",
                1,
                "ولادة بطل",
                date(2023, 1, 1),
                page_images(20, 50),
            )],
        },
        Manga {
            id: "3".to_string(),
            title: "مملكة الظلال".to_string(),
            english_title: Some("Shadow Kingdom".to_string()),
            description: "أمير منفي يعود لاستعادة مملكته من قوى الظلام التي استولت عليها".to_string(),
            cover_image: cover(3),
            genres: labels(&["فانتازيا", "دراما", "رومانسي"]),
            status: MangaStatus::Ongoing,
            rating: 4.6,
            total_chapters: 67,
            views: 890_000,
            author: "يوكي شيمادا".to_string(),
            last_updated: date(2025, 1, 10),
            chapters: Vec::new(),
        },
    ]
}
