/// Genres offered by the library genre filter, in menu order
pub const GENRES: [&str; 12] = [
    "أكشن",
    "مغامرة",
    "فانتازيا",
    "رومانسي",
    "كوميدي",
    "دراما",
    "خارق",
    "مدرسي",
    "رياضي",
    "رعب",
    "غموض",
    "علمي خيالي",
];

pub fn is_known_genre(label: &str) -> bool {
    GENRES.contains(&label.trim())
}

pub fn all_genres() -> Vec<String> {
    GENRES.iter().map(|genre| genre.to_string()).collect()
}
